use crate::core::Report;
use std::io::Write;

/// Marker joining records in the human-readable payload
const LINE_BREAK: &str = "<br />";
/// Percent-encoded newline joining CSV rows, kept literal so the payload
/// survives the line-oriented output channel
const CSV_ROW_SEPARATOR: &str = "%0A";
const CSV_HEADER: &str = "Image path, Old size, New size";

/// Render the report as a single `<br />`-separated line.
///
/// Every record is prefixed with the marker, so the payload starts with
/// one; the consuming CI step renders the markers as line breaks.
pub fn human_readable(report: &Report) -> String {
    report
        .records()
        .iter()
        .map(|record| format!("{LINE_BREAK}{record}"))
        .collect()
}

/// Render the report as a CSV payload with `%0A` row separators.
pub fn csv(report: &Report) -> String {
    let mut payload = String::from(CSV_HEADER);
    for record in report.records() {
        payload.push_str(CSV_ROW_SEPARATOR);
        payload.push_str(&format!(
            "{}, {}, {}",
            record.path.display(),
            record.old_size,
            record.new_size
        ));
    }
    payload
}

/// Writes the change report in the legacy GitHub Actions output protocol.
pub struct ActionOutputWriter<W: Write> {
    writer: W,
}

impl<W: Write> ActionOutputWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Emit the `::set-output` lines for a non-empty report, or the
    /// `No Images Changed` message for an empty one.
    pub fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        if report.is_empty() {
            writeln!(self.writer, "No Images Changed")?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "::set-output name=images_changed::{}",
            human_readable(report)
        )?;
        writeln!(
            self.writer,
            "::set-output name=csv_images_changed::{}",
            csv(report)
        )?;
        Ok(())
    }
}
