pub mod errors;

pub use errors::{Error, Result};

use std::fmt;
use std::path::PathBuf;

/// Pixel width and height of an image file.
///
/// `Display` renders the `<width> x <height>` token used verbatim in both
/// report serializations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

/// A discovered image file together with its probed dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageCandidate {
    pub path: PathBuf,
    pub dimensions: Dimensions,
}

/// Before/after sizes recorded for one resized image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeRecord {
    pub path: PathBuf,
    pub old_size: Dimensions,
    pub new_size: Dimensions,
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - old size: {}, new size: {}",
            self.path.display(),
            self.old_size,
            self.new_size
        )
    }
}

/// Append-only collection of change records for a single run.
///
/// Records keep the order in which their images were enumerated; an empty
/// report is a valid terminal state.
#[derive(Debug, Default)]
pub struct Report {
    records: Vec<ChangeRecord>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ChangeRecord) {
        self.records.push(record);
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }
}
