//! The enumerate → classify → act → report pipeline.

use crate::config::ResizeConfig;
use crate::core::{ChangeRecord, Error, ImageCandidate, Report, Result};
use crate::io::output::ActionOutputWriter;
use crate::io::walker;
use crate::magick::ImageToolkit;
use std::io::Write;
use std::path::PathBuf;

/// Run the full resize pass: scan the directory, shrink every oversized
/// image, and emit the change report to `out`.
///
/// Images are processed strictly in enumeration order, one at a time; the
/// first external-tool failure aborts the run without emitting a partial
/// report.
pub fn run(
    config: &ResizeConfig,
    toolkit: &dyn ImageToolkit,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "Width Limit: {}", config.width_limit)?;
    writeln!(out, "Height Limit: {}", config.height_limit)?;
    writeln!(out, "Given directory: {}", config.target_dir.display())?;

    let images = scan_directory(config, out)?;
    let report = process_images(config, toolkit, &images, out)?;

    ActionOutputWriter::new(out).write_report(&report)?;
    Ok(())
}

fn scan_directory(config: &ResizeConfig, out: &mut impl Write) -> Result<Vec<PathBuf>> {
    let images = walker::find_image_files(&config.target_dir)?;
    writeln!(out, "Image count in directory: {}", images.len())?;

    if images.is_empty() {
        return Err(Error::NoImagesFound {
            directory: config.target_dir.clone(),
        });
    }
    Ok(images)
}

fn process_images(
    config: &ResizeConfig,
    toolkit: &dyn ImageToolkit,
    images: &[PathBuf],
    out: &mut impl Write,
) -> Result<Report> {
    let mut report = Report::new();
    for path in images {
        let candidate = ImageCandidate {
            path: path.clone(),
            dimensions: toolkit.measure(path)?,
        };
        if let Some(record) = process_candidate(config, toolkit, &candidate, out)? {
            report.push(record);
        }
    }
    Ok(report)
}

/// Classify one candidate and resize it when oversized.
///
/// Returns the change record for a resized image, `None` for a compliant
/// one. The new size comes from re-measuring the file, since the external
/// tool owns rounding behavior.
fn process_candidate(
    config: &ResizeConfig,
    toolkit: &dyn ImageToolkit,
    candidate: &ImageCandidate,
    out: &mut impl Write,
) -> Result<Option<ChangeRecord>> {
    if !config.exceeds_limits(candidate.dimensions) {
        writeln!(
            out,
            "{} is not Oversized, no mogrify needed",
            candidate.path.display()
        )?;
        return Ok(None);
    }

    writeln!(out, "{} is Oversized", candidate.path.display())?;
    toolkit.scale(&candidate.path, &config.scale)?;
    writeln!(out, "mogrify complete")?;

    let new_size = toolkit.measure(&candidate.path)?;
    log::debug!(
        "{} resized from {} to {}",
        candidate.path.display(),
        candidate.dimensions,
        new_size
    );

    Ok(Some(ChangeRecord {
        path: candidate.path.clone(),
        old_size: candidate.dimensions,
        new_size,
    }))
}
