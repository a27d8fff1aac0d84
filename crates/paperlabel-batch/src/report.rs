//! CSV report writing

use std::path::Path;

use anyhow::{Context, Result};
use paperlabel_classify::Outcome;
use paperlabel_extract::Metadata;
use serde::Serialize;

/// One report row; the unit of observable output. Rows are append-only
/// and ordered by document enumeration.
#[derive(Debug)]
pub struct ResultRow {
    pub pdf_file: String,
    pub metadata: Metadata,
    pub outcome: Outcome,
}

/// Flat CSV view of a row. Sentinel strings are rendered here and
/// nowhere earlier; absent metadata fields become empty cells.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    pdf_file: &'a str,
    title: &'a str,
    #[serde(rename = "abstract")]
    abstract_text: &'a str,
    label: &'a str,
}

/// Write the accumulated rows as a single CSV table.
///
/// One final write at the end of the run; there is no incremental
/// flushing while documents are still being processed.
pub fn write_csv(path: &Path, rows: &[ResultRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Cannot create report at {}", path.display()))?;
    for row in rows {
        writer
            .serialize(CsvRow {
                pdf_file: &row.pdf_file,
                title: row.metadata.title.as_deref().unwrap_or(""),
                abstract_text: row.metadata.abstract_text.as_deref().unwrap_or(""),
                label: row.outcome.label(),
            })
            .context("Failed to serialize report row")?;
    }
    writer.flush().context("Failed to flush report")?;
    Ok(())
}
