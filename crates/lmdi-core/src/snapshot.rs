//! Period snapshots: one observation period aggregated for decomposition.
//!
//! A [`RawRecord`] is one row of the input dataset in physical units; a
//! [`PeriodSnapshot`] is the same period converted to a common energy unit
//! (GJ) and to emissions (tonnes CO2), plus the economic aggregates the
//! decomposer reads. Both are immutable once built.

use serde::{Deserialize, Serialize};

use crate::fuel::FuelTable;

/// One row of the raw input dataset.
///
/// `consumption` is aligned with the fuel-table order used to load it.
/// Missing cells are represented as `0.0`, not as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub year: i32,
    /// Physical consumption per fuel, in each fuel's raw column unit.
    pub consumption: Vec<f64>,
    /// Physical production output.
    pub output: f64,
    /// Value added of the sector.
    pub value_added: f64,
    /// Economy-wide aggregate. Carried through but unused by the engine.
    pub gdp: Option<f64>,
}

/// One period's derived quantities, ordered by year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSnapshot {
    pub year: i32,
    /// Energy per fuel in GJ, in fuel-table order.
    pub energy_gj: Vec<f64>,
    /// Emissions per fuel in tonnes CO2, in fuel-table order.
    pub emissions_t: Vec<f64>,
    pub total_energy_gj: f64,
    pub total_emissions_t: f64,
    pub output: f64,
    pub value_added: f64,
    pub gdp: Option<f64>,
}

impl PeriodSnapshot {
    /// Convert one raw record into a snapshot using the given fuel table.
    ///
    /// The record's consumption vector must be aligned with `table` (the
    /// loader guarantees this); shorter vectors are padded with zeros.
    pub fn from_record(record: &RawRecord, table: &FuelTable) -> Self {
        let mut energy_gj = Vec::with_capacity(table.len());
        let mut emissions_t = Vec::with_capacity(table.len());

        for (i, fuel) in table.iter().enumerate() {
            let consumption = record.consumption.get(i).copied().unwrap_or(0.0);
            let (gj, t) = fuel.convert(consumption);
            energy_gj.push(gj);
            emissions_t.push(t);
        }

        let total_energy_gj = energy_gj.iter().sum();
        let total_emissions_t = emissions_t.iter().sum();

        Self {
            year: record.year,
            energy_gj,
            emissions_t,
            total_energy_gj,
            total_emissions_t,
            output: record.output,
            value_added: record.value_added,
            gdp: record.gdp,
        }
    }

    pub fn fuel_count(&self) -> usize {
        self.energy_gj.len()
    }
}
