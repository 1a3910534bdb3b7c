use anyhow::{anyhow, Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::NaiveDateTime;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use super::processor::{ScoredDataset, ScoredLead};
use super::record::RawValue;
use super::table::Dataset;

/// Cell texts read as missing values, matching what spreadsheet and dataframe
/// tools write for empty cells.
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn parse_cell(cell: &str) -> RawValue {
    if NA_VALUES.contains(&cell) {
        RawValue::Missing
    } else {
        RawValue::Text(cell.to_string())
    }
}

/// Load a lead table from a CSV file with a header row.
pub fn read_csv(path: &Path) -> Result<Dataset> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open lead file at {}", path.display()))?;
    read_csv_from(file).with_context(|| format!("Failed to load leads from {}", path.display()))
}

/// Load a lead table from any CSV source.
///
/// Rows with fewer fields than the header read their trailing fields as missing.
/// Duplicate headers and rows with extra fields are errors.
pub fn read_csv_from<R: Read>(reader: R) -> Result<Dataset> {
    // Row widths are handled by Dataset so the error names the row
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = reader
        .headers()
        .context("Failed to read CSV header")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read CSV row {}", i + 1))?;
        rows.push(record.iter().map(parse_cell).collect());
    }

    Ok(Dataset::from_rows(columns, rows)?)
}

/// Write the given leads as CSV using the scored column order. Returns the writer.
pub fn write_csv<W: Write>(out: W, scored: &ScoredDataset, leads: &[&ScoredLead]) -> Result<W> {
    let mut writer = csv::Writer::from_writer(out);

    writer
        .write_record(&scored.columns)
        .context("Failed to write CSV header")?;

    for lead in leads {
        writer
            .write_record(scored.columns.iter().map(|c| lead.value(c).to_string()))
            .context("Failed to write CSV row")?;
    }

    writer.flush().context("Failed to flush CSV output")?;
    writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush CSV output: {}", e.error()))
}

/// Export leads to a CSV file atomically.
///
/// Creates the parent directory if needed. The file is never left half-written.
pub fn export_csv(path: &Path, scored: &ScoredDataset, leads: &[&ScoredLead]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    let file = write_csv(file, scored, leads)?;

    file.commit()
        .with_context(|| format!("Failed to save export to {}", path.display()))?;

    Ok(())
}

/// Timestamped export file name, e.g. "scored_leads_20240131_0905.csv".
pub fn default_export_name(now: NaiveDateTime) -> String {
    format!("scored_leads_{}.csv", now.format("%Y%m%d_%H%M"))
}
