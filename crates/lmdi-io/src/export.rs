//! Result-table CSV export.
//!
//! Column order and the fixed two-decimal formatting are part of the output
//! contract: consumers diff these files byte for byte.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use lmdi_core::result::{DecompositionResult, SeriesResult};
use tracing::info;

use crate::error::DatasetError;

/// Write the result table to any writer.
pub fn write_results<W: Write>(writer: W, results: &SeriesResult) -> Result<(), DatasetError> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);

    csv_writer.write_record(DecompositionResult::COLUMNS)?;
    for row in results.rows() {
        let mut record = Vec::with_capacity(DecompositionResult::COLUMNS.len());
        record.push(row.period.clone());
        record.extend(row.values().iter().map(|v| format!("{v:.2}")));
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write the result table to a file at `path`.
pub fn export_csv(path: &Path, results: &SeriesResult) -> Result<(), DatasetError> {
    let file = File::create(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    write_results(file, results)?;
    info!(path = %path.display(), rows = results.rows().count(), "results exported");
    Ok(())
}
