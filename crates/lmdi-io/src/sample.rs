//! Deterministic synthetic sample dataset.
//!
//! Produces a plausible manufacturing consumption series for the default
//! fuel table: stationary noise around per-fuel base levels, cumulative
//! drift for output and the economic aggregates, everything clamped
//! non-negative. Seeded, so the same seed always yields the same file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use lmdi_core::constants::{GDP_COLUMN, OUTPUT_COLUMN, VALUE_ADDED_COLUMN, YEAR_COLUMN};
use lmdi_core::fuel::FuelTable;
use lmdi_core::snapshot::RawRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::error::DatasetError;

/// Per-fuel (base level, noise sd) in the raw column units of the default
/// manufacturing table, in table order.
const FUEL_LEVELS: [(f64, f64); 7] = [
    (500.0, 50.0),   // Coal, thousand tonnes
    (1000.0, 100.0), // Gas, mln m3
    (200.0, 20.0),   // Residual oil, thousand tonnes
    (150.0, 15.0),   // Diesel, thousand tonnes
    (100.0, 10.0),   // Gasoline, thousand tonnes
    (5000.0, 500.0), // Electricity, mln kWh
    (300.0, 30.0),   // Heat, thousand Gcal
];

/// Generate one raw record per year in `start..=end`.
pub fn generate_records(start_year: i32, end_year: i32, seed: u64) -> Vec<RawRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::new();

    let mut output = 1000.0;
    let mut value_added = 50_000.0;
    let mut gdp = 1_000_000.0;

    for year in start_year..=end_year {
        let consumption: Vec<f64> = FUEL_LEVELS
            .iter()
            .map(|&(base, sd)| round1(normal(&mut rng, base, sd).max(0.0)))
            .collect();

        output += normal(&mut rng, 20.0, 50.0);
        value_added += normal(&mut rng, 1000.0, 2000.0);
        gdp += normal(&mut rng, 20_000.0, 50_000.0);

        records.push(RawRecord {
            year,
            consumption,
            output: round1(output.max(0.0)),
            value_added: value_added.max(0.0).round(),
            gdp: Some(gdp.max(0.0).round()),
        });
    }

    records
}

/// Write a sample dataset CSV readable by the loader, using `table` for the
/// fuel column headers.
pub fn write_sample_csv(
    path: &Path,
    table: &FuelTable,
    start_year: i32,
    end_year: i32,
    seed: u64,
) -> Result<(), DatasetError> {
    let file = File::create(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    write_sample(file, table, start_year, end_year, seed)?;
    info!(path = %path.display(), start_year, end_year, seed, "sample dataset written");
    Ok(())
}

fn write_sample<W: Write>(
    writer: W,
    table: &FuelTable,
    start_year: i32,
    end_year: i32,
    seed: u64,
) -> Result<(), DatasetError> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);

    let mut header: Vec<&str> = vec![YEAR_COLUMN];
    header.extend(table.columns());
    header.extend([OUTPUT_COLUMN, VALUE_ADDED_COLUMN, GDP_COLUMN]);
    csv_writer.write_record(&header)?;

    for record in generate_records(start_year, end_year, seed) {
        let mut row = vec![record.year.to_string()];
        row.extend(record.consumption.iter().map(|v| format!("{v:.1}")));
        row.push(format!("{:.1}", record.output));
        row.push(format!("{:.0}", record.value_added));
        row.push(format!("{:.0}", record.gdp.unwrap_or(0.0)));
        csv_writer.write_record(&row)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Gaussian-ish draw via the sum of twelve uniforms; plenty for sample data.
fn normal(rng: &mut StdRng, mean: f64, sd: f64) -> f64 {
    let sum: f64 = (0..12).map(|_| rng.r#gen::<f64>()).sum();
    mean + sd * (sum - 6.0)
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_record_per_year() {
        let records = generate_records(2012, 2023, 42);
        assert_eq!(records.len(), 12);
        assert_eq!(records.first().unwrap().year, 2012);
        assert_eq!(records.last().unwrap().year, 2023);
    }

    #[test]
    fn same_seed_same_data() {
        assert_eq!(generate_records(2012, 2020, 7), generate_records(2012, 2020, 7));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(generate_records(2012, 2020, 1), generate_records(2012, 2020, 2));
    }

    #[test]
    fn values_non_negative() {
        for record in generate_records(2012, 2023, 99) {
            assert!(record.consumption.iter().all(|&v| v >= 0.0));
            assert!(record.output >= 0.0);
            assert!(record.value_added >= 0.0);
            assert!(record.gdp.unwrap() >= 0.0);
        }
    }

    #[test]
    fn consumption_matches_default_table_width() {
        let table = FuelTable::default_manufacturing();
        let records = generate_records(2012, 2015, 0);
        assert!(records.iter().all(|r| r.consumption.len() == table.len()));
    }

    #[test]
    fn written_csv_round_trips_through_loader() {
        let table = FuelTable::default_manufacturing();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.csv");
        write_sample_csv(&path, &table, 2012, 2016, 42).unwrap();

        let records = crate::dataset::load_records(&path, &table, None).unwrap();
        assert_eq!(records.len(), 5);
        assert!(records.iter().all(|r| r.gdp.is_some()));
    }
}
