// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod magick;

// Re-export commonly used types
pub use crate::config::ResizeConfig;
pub use crate::core::{ChangeRecord, Dimensions, Error, ImageCandidate, Report, Result};

pub use crate::io::output::{csv, human_readable, ActionOutputWriter};
pub use crate::io::walker::find_image_files;

pub use crate::magick::{ImageToolkit, MagickToolkit};
