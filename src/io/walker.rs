use crate::core::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions treated as images, matched case-insensitively
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

pub struct ImageWalker {
    root: PathBuf,
}

impl ImageWalker {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Enumerate image files under the root.
    ///
    /// Entries are sorted by file name so a given filesystem state always
    /// yields the same order; the change report inherits this order.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(&self.root).sort_by_file_name();

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file() && is_image(entry.path()) {
                files.push(entry.path().to_path_buf());
            }
        }

        Ok(files)
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy();
            IMAGE_EXTENSIONS
                .iter()
                .any(|image_ext| ext.eq_ignore_ascii_case(image_ext))
        })
        .unwrap_or(false)
}

pub fn find_image_files(root: &Path) -> Result<Vec<PathBuf>> {
    ImageWalker::new(root.to_path_buf()).walk()
}
