use crate::cli::Cli;
use crate::core::{Dimensions, Error, Result};
use std::path::PathBuf;

/// Immutable run configuration built once from the CLI arguments.
#[derive(Clone, Debug)]
pub struct ResizeConfig {
    /// Maximum allowed width in pixels
    pub width_limit: u32,
    /// Maximum allowed height in pixels
    pub height_limit: u32,
    /// Directory to scan, stored exactly as the user spelled it
    pub target_dir: PathBuf,
    /// Percentage token handed through to the resize tool, e.g. `50%`
    pub scale: String,
}

impl ResizeConfig {
    /// Build and validate a configuration from parsed arguments.
    ///
    /// Fails with [`Error::DirectoryNotFound`] when the target directory
    /// does not exist on disk.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let config = Self {
            width_limit: cli.width_limit,
            height_limit: cli.height_limit,
            target_dir: cli.target_dir,
            scale: cli.scale_percent,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.target_dir.is_dir() {
            return Err(Error::DirectoryNotFound {
                path: self.target_dir.clone(),
            });
        }
        Ok(())
    }

    /// An image is oversized when either dimension exceeds its limit.
    pub fn exceeds_limits(&self, dimensions: Dimensions) -> bool {
        dimensions.width > self.width_limit || dimensions.height > self.height_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_with_limits(width_limit: u32, height_limit: u32) -> ResizeConfig {
        ResizeConfig {
            width_limit,
            height_limit,
            target_dir: PathBuf::from("."),
            scale: "50%".to_string(),
        }
    }

    #[test]
    fn image_at_the_limits_is_not_oversized() {
        let config = config_with_limits(100, 100);
        assert!(!config.exceeds_limits(Dimensions::new(100, 100)));
        assert!(!config.exceeds_limits(Dimensions::new(50, 50)));
    }

    #[test]
    fn width_over_the_limit_is_oversized() {
        let config = config_with_limits(100, 100);
        assert!(config.exceeds_limits(Dimensions::new(101, 50)));
    }

    #[test]
    fn height_over_the_limit_is_oversized() {
        let config = config_with_limits(100, 100);
        assert!(config.exceeds_limits(Dimensions::new(50, 101)));
    }

    #[test]
    fn from_cli_accepts_an_existing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let cli = Cli {
            width_limit: 31,
            height_limit: 31,
            target_dir: temp_dir.path().to_path_buf(),
            scale_percent: "50%".to_string(),
        };

        let config = ResizeConfig::from_cli(cli).unwrap();
        assert_eq!(config.width_limit, 31);
        assert_eq!(config.scale, "50%");
    }

    #[test]
    fn from_cli_rejects_a_missing_directory() {
        let cli = Cli {
            width_limit: 31,
            height_limit: 31,
            target_dir: PathBuf::from("./notexist/"),
            scale_percent: "50%".to_string(),
        };

        let err = ResizeConfig::from_cli(cli).unwrap_err();
        assert_eq!(err.to_string(), "Error: ./notexist/ does not exist");
    }
}
