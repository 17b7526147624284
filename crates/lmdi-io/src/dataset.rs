//! CSV dataset ingest and validation.
//!
//! Turns a raw consumption CSV into ordered [`RawRecord`]s: strict schema for
//! the required columns (year, every configured fuel, output, value added),
//! blank cells read as zero, rows sorted chronologically. Missing years
//! inside a requested range are a warning, not an error; the decomposition
//! proceeds over the periods that exist.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use lmdi_core::constants::{GDP_COLUMN, OUTPUT_COLUMN, VALUE_ADDED_COLUMN, YEAR_COLUMN};
use lmdi_core::fuel::FuelTable;
use lmdi_core::snapshot::{PeriodSnapshot, RawRecord};
use tracing::{info, warn};

use crate::error::DatasetError;

/// Load records from a CSV file, optionally restricted to a year range.
pub fn load_records(
    path: &Path,
    table: &FuelTable,
    range: Option<(i32, i32)>,
) -> Result<Vec<RawRecord>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    info!(path = %path.display(), "loading dataset");
    read_records(file, table, range)
}

/// Load records from any reader. See [`load_records`].
pub fn read_records<R: Read>(
    reader: R,
    table: &FuelTable,
    range: Option<(i32, i32)>,
) -> Result<Vec<RawRecord>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let header_map = build_header_map(&headers);

    ensure_required_columns(table, &header_map)?;

    let year_idx = header_map[YEAR_COLUMN];
    let output_idx = header_map[OUTPUT_COLUMN];
    let value_added_idx = header_map[VALUE_ADDED_COLUMN];
    let gdp_idx = header_map.get(GDP_COLUMN).copied();
    let fuel_indices: Vec<usize> = table.columns().map(|c| header_map[c]).collect();

    let mut records = Vec::new();
    for (idx, row) in csv_reader.records().enumerate() {
        // Header is line 1; data lines are 1-based after it.
        let line = idx + 2;
        let row = row?;

        let year = parse_year(&row, year_idx, line)?;
        if let Some((start, end)) = range {
            if year < start || year > end {
                continue;
            }
        }

        let consumption = fuel_indices
            .iter()
            .map(|&i| parse_cell(&row, i, &headers, line))
            .collect::<Result<Vec<f64>, _>>()?;

        records.push(RawRecord {
            year,
            consumption,
            output: parse_cell(&row, output_idx, &headers, line)?,
            value_added: parse_cell(&row, value_added_idx, &headers, line)?,
            gdp: match gdp_idx {
                Some(i) => non_blank(&row, i).map(|_| parse_cell(&row, i, &headers, line)).transpose()?,
                None => None,
            },
        });
    }

    if records.is_empty() {
        return Err(DatasetError::Empty);
    }

    records.sort_by_key(|r| r.year);
    warn_missing_years(&records, range);

    Ok(records)
}

/// Convert loaded records to snapshots, in the same (chronological) order.
pub fn build_snapshots(records: &[RawRecord], table: &FuelTable) -> Vec<PeriodSnapshot> {
    records
        .iter()
        .map(|r| PeriodSnapshot::from_record(r, table))
        .collect()
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        // Spreadsheet exports sometimes prefix the first header with a BOM;
        // strip it or the schema check reports a phantom missing column.
        .map(|(idx, name)| (name.trim().trim_start_matches('\u{feff}').to_string(), idx))
        .collect()
}

fn ensure_required_columns(
    table: &FuelTable,
    header_map: &HashMap<String, usize>,
) -> Result<(), DatasetError> {
    let mut missing: Vec<String> = Vec::new();
    for required in std::iter::once(YEAR_COLUMN)
        .chain(table.columns())
        .chain([OUTPUT_COLUMN, VALUE_ADDED_COLUMN])
    {
        if !header_map.contains_key(required) {
            missing.push(required.to_string());
        }
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(DatasetError::MissingColumns(missing))
    }
}

fn parse_year(row: &StringRecord, idx: usize, line: usize) -> Result<i32, DatasetError> {
    let raw = row.get(idx).unwrap_or("").trim();
    raw.parse::<i32>().map_err(|_| DatasetError::InvalidNumber {
        column: YEAR_COLUMN.to_string(),
        line,
        value: raw.to_string(),
    })
}

/// Parse a numeric cell; blank means zero, garbage is an error.
fn parse_cell(
    row: &StringRecord,
    idx: usize,
    headers: &StringRecord,
    line: usize,
) -> Result<f64, DatasetError> {
    let raw = row.get(idx).unwrap_or("").trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse::<f64>().map_err(|_| DatasetError::InvalidNumber {
        column: headers.get(idx).unwrap_or("?").to_string(),
        line,
        value: raw.to_string(),
    })
}

fn non_blank<'a>(row: &'a StringRecord, idx: usize) -> Option<&'a str> {
    row.get(idx).map(str::trim).filter(|s| !s.is_empty())
}

fn warn_missing_years(records: &[RawRecord], range: Option<(i32, i32)>) {
    let Some((start, end)) = range else { return };
    let present: Vec<i32> = records.iter().map(|r| r.year).collect();
    let missing: Vec<i32> = (start..=end).filter(|y| !present.contains(y)).collect();
    if !missing.is_empty() {
        warn!(?missing, "years absent within requested range; results will be incomplete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lmdi_core::fuel::FuelSpec;

    fn two_fuel_table() -> FuelTable {
        FuelTable::new(vec![
            FuelSpec {
                name: "Coal".to_string(),
                column: "Coal (kt)".to_string(),
                ncv: 10.0,
                emission_coeff: 100.0,
                unit_multiplier: 1.0,
            },
            FuelSpec {
                name: "Gas".to_string(),
                column: "Gas (mln m3)".to_string(),
                ncv: 0.04,
                emission_coeff: 56.0,
                unit_multiplier: 1.0,
            },
        ])
        .unwrap()
    }

    fn csv_with(header: &str, rows: &[&str]) -> String {
        let mut out = String::from(header);
        out.push('\n');
        for row in rows {
            out.push_str(row);
            out.push('\n');
        }
        out
    }

    const HEADER: &str = "Year,Coal (kt),Gas (mln m3),Production Output (thousand tonne),GVA_manufacturing USD,GDP_country (USD)";

    #[test]
    fn loads_and_sorts_rows() {
        let data = csv_with(
            HEADER,
            &["2014,480,950,1010,51000,1010000", "2012,500,1000,1000,50000,1000000"],
        );
        let records = read_records(data.as_bytes(), &two_fuel_table(), None).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].year, 2012);
        assert_eq!(records[1].year, 2014);
        assert_eq!(records[0].consumption, vec![500.0, 1000.0]);
        assert_eq!(records[0].gdp, Some(1_000_000.0));
    }

    #[test]
    fn missing_columns_all_reported() {
        let data = csv_with("Year,Coal (kt)", &["2012,500"]);
        let err = read_records(data.as_bytes(), &two_fuel_table(), None).unwrap_err();
        match err {
            DatasetError::MissingColumns(cols) => {
                assert_eq!(
                    cols,
                    vec![
                        "Gas (mln m3)".to_string(),
                        OUTPUT_COLUMN.to_string(),
                        VALUE_ADDED_COLUMN.to_string(),
                    ]
                );
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn blank_cells_read_as_zero() {
        let data = csv_with(HEADER, &["2012,,1000,1000,50000,"]);
        let records = read_records(data.as_bytes(), &two_fuel_table(), None).unwrap();
        assert_eq!(records[0].consumption, vec![0.0, 1000.0]);
        assert_eq!(records[0].gdp, None);
    }

    #[test]
    fn garbage_cell_is_an_error() {
        let data = csv_with(HEADER, &["2012,abc,1000,1000,50000,1"]);
        let err = read_records(data.as_bytes(), &two_fuel_table(), None).unwrap_err();
        match err {
            DatasetError::InvalidNumber { column, line, value } => {
                assert_eq!(column, "Coal (kt)");
                assert_eq!(line, 2);
                assert_eq!(value, "abc");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn year_range_filter() {
        let data = csv_with(
            HEADER,
            &[
                "2011,1,1,1,1,1",
                "2012,2,2,2,2,2",
                "2013,3,3,3,3,3",
                "2014,4,4,4,4,4",
            ],
        );
        let records =
            read_records(data.as_bytes(), &two_fuel_table(), Some((2012, 2013))).unwrap();
        let years: Vec<i32> = records.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2012, 2013]);
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let data = csv_with(HEADER, &[]);
        let err = read_records(data.as_bytes(), &two_fuel_table(), None).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));

        // Also when the filter removes everything.
        let data = csv_with(HEADER, &["2012,1,1,1,1,1"]);
        let err = read_records(data.as_bytes(), &two_fuel_table(), Some((1990, 1991))).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn bom_on_first_header_is_stripped() {
        let data = format!("\u{feff}{}", csv_with(HEADER, &["2012,1,1,1,1,1"]));
        let records = read_records(data.as_bytes(), &two_fuel_table(), None).unwrap();
        assert_eq!(records[0].year, 2012);
    }

    #[test]
    fn gdp_column_optional() {
        let data = csv_with(
            "Year,Coal (kt),Gas (mln m3),Production Output (thousand tonne),GVA_manufacturing USD",
            &["2012,1,1,1,1"],
        );
        let records = read_records(data.as_bytes(), &two_fuel_table(), None).unwrap();
        assert_eq!(records[0].gdp, None);
    }

    #[test]
    fn snapshots_follow_record_order() {
        let table = two_fuel_table();
        let data = csv_with(HEADER, &["2013,1,1,1,1,1", "2012,500,0,1000,50000,1"]);
        let records = read_records(data.as_bytes(), &table, None).unwrap();
        let snapshots = build_snapshots(&records, &table);
        assert_eq!(snapshots[0].year, 2012);
        // 500 * 1 * 10 GJ, * 100 kg/GJ / 1000
        assert_eq!(snapshots[0].energy_gj[0], 5000.0);
        assert_eq!(snapshots[0].emissions_t[0], 500.0);
    }
}
