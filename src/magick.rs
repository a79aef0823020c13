//! External image-tool boundary.
//!
//! Measuring and mutating image files is delegated to ImageMagick. The
//! [`ImageToolkit`] trait keeps the decision pipeline testable without
//! invoking a real image-processing binary.

use crate::core::Dimensions;
use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Capability interface over the external image tool.
pub trait ImageToolkit {
    /// Return the pixel width and height of an image file.
    fn measure(&self, path: &Path) -> Result<Dimensions>;

    /// Scale an image in place by the given percentage token, e.g. `50%`.
    ///
    /// The tool owns rounding behavior; callers re-measure afterwards
    /// rather than computing the new size arithmetically.
    fn scale(&self, path: &Path, percent: &str) -> Result<()>;
}

/// ImageMagick-backed toolkit invoking `identify` and `mogrify`.
///
/// Binaries are located lazily on first use so runs that fail during
/// validation or scanning never require ImageMagick to be installed.
#[derive(Debug, Default)]
pub struct MagickToolkit {
    identify_bin: OnceCell<PathBuf>,
    mogrify_bin: OnceCell<PathBuf>,
}

impl MagickToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    fn identify_bin(&self) -> Result<&Path> {
        self.identify_bin
            .get_or_try_init(|| {
                which::which("identify").context("identify not found, is ImageMagick installed?")
            })
            .map(|bin| bin.as_path())
    }

    fn mogrify_bin(&self) -> Result<&Path> {
        self.mogrify_bin
            .get_or_try_init(|| {
                which::which("mogrify").context("mogrify not found, is ImageMagick installed?")
            })
            .map(|bin| bin.as_path())
    }
}

impl ImageToolkit for MagickToolkit {
    fn measure(&self, path: &Path) -> Result<Dimensions> {
        let output = Command::new(self.identify_bin()?)
            .args(["-ping", "-format", "%w %h"])
            .arg(path)
            .output()
            .with_context(|| format!("Failed to run identify on {}", path.display()))?;

        if !output.status.success() {
            anyhow::bail!(
                "identify failed for {}: {}",
                path.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let dimensions = parse_dimensions(stdout.trim())
            .with_context(|| format!("Unexpected identify output for {}", path.display()))?;
        log::debug!("{} measures {}", path.display(), dimensions);
        Ok(dimensions)
    }

    fn scale(&self, path: &Path, percent: &str) -> Result<()> {
        log::debug!("mogrify -resize {} {}", percent, path.display());
        let output = Command::new(self.mogrify_bin()?)
            .args(["-resize", percent])
            .arg(path)
            .output()
            .with_context(|| format!("Failed to run mogrify on {}", path.display()))?;

        if !output.status.success() {
            anyhow::bail!(
                "mogrify failed for {}: {}",
                path.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(())
    }
}

/// Parse identify's `%w %h` output into dimensions.
fn parse_dimensions(s: &str) -> Result<Dimensions> {
    let mut parts = s.split_whitespace();
    let width = parts.next().and_then(|w| w.parse().ok());
    let height = parts.next().and_then(|h| h.parse().ok());
    match (width, height) {
        (Some(width), Some(height)) => Ok(Dimensions::new(width, height)),
        _ => anyhow::bail!("expected \"<width> <height>\", got {s:?}"),
    }
}
