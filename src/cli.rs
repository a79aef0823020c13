use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "imgclamp")]
#[command(about = "Shrinks oversized images in a directory and reports the changes to CI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Maximum allowed width in pixels
    pub width_limit: u32,

    /// Maximum allowed height in pixels
    pub height_limit: u32,

    /// Directory to scan for images (trailing slash tolerated)
    pub target_dir: PathBuf,

    /// Percentage applied to both dimensions of an oversized image, e.g. 50%
    pub scale_percent: String,
}
