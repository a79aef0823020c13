//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for imgclamp operations.
///
/// The `Display` strings of the user-facing variants are part of the CLI
/// contract and are printed verbatim to stdout before the process exits.
#[derive(Debug, Error)]
pub enum Error {
    /// Fewer than the four required arguments were supplied
    #[error("Please provide all variables")]
    MissingArguments,

    /// Target directory does not exist on disk
    #[error("Error: {} does not exist", .path.display())]
    DirectoryNotFound { path: PathBuf },

    /// No files with an image extension were found in the target directory
    #[error("No images found in {}", .directory.display())]
    NoImagesFound { directory: PathBuf },

    /// Directory enumeration failed
    #[error("Failed to read directory entry: {0}")]
    Walk(#[from] walkdir::Error),

    /// Wrapped external-tool errors
    #[error(transparent)]
    External(#[from] anyhow::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error carries one of the fixed user-facing diagnostics.
    ///
    /// Usage errors are printed as-is; everything else gets an `Error: `
    /// prefix when reported.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Error::MissingArguments
                | Error::DirectoryNotFound { .. }
                | Error::NoImagesFound { .. }
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
