use std::path::Path;

use mvh_core::{ErrorInfo, MvhError};

use crate::schema::{ComparisonRecord, EXPECTED_COLUMNS};

/// Outcome of loading a comparison dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSummary {
    /// Rows that parsed cleanly, in file order.
    pub records: Vec<ComparisonRecord>,
    /// Column names observed in the header row.
    pub columns: Vec<String>,
    /// Rows dropped because they failed to parse.
    pub skipped_rows: usize,
}

/// Reads the comparison dataset at `path`.
///
/// Rows that fail to parse (wrong field count, unparseable values) are
/// dropped and counted rather than aborting the load. An unreadable file or a
/// header missing one of [`EXPECTED_COLUMNS`] is an error; a header with zero
/// data rows is not.
pub fn load_records(path: &Path) -> Result<LoadSummary, MvhError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|err| {
            MvhError::Data(
                ErrorInfo::new("mvh_data.open", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
    let columns: Vec<String> = reader
        .headers()
        .map_err(|err| MvhError::Data(ErrorInfo::new("mvh_data.header", err.to_string())))?
        .iter()
        .map(String::from)
        .collect();
    for expected in EXPECTED_COLUMNS {
        if !columns.iter().any(|column| column == expected) {
            return Err(MvhError::Data(
                ErrorInfo::new("mvh_data.columns", format!("column {expected} missing"))
                    .with_context("path", path.display().to_string())
                    .with_hint(format!("expected columns: {}", EXPECTED_COLUMNS.join(","))),
            ));
        }
    }
    let mut records = Vec::new();
    let mut skipped_rows = 0usize;
    for row in reader.deserialize::<ComparisonRecord>() {
        match row {
            Ok(record) => records.push(record),
            Err(_) => skipped_rows += 1,
        }
    }
    Ok(LoadSummary {
        records,
        columns,
        skipped_rows,
    })
}
