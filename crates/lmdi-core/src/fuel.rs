//! Fuel configuration: calorific values, emission coefficients, unit scales.
//!
//! A [`FuelTable`] is an immutable, ordered configuration value loaded once
//! per run and passed into the snapshot builder. Iteration order is the
//! table order, which keeps per-fuel accumulation deterministic.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::KG_PER_TONNE;
use crate::error::FuelConfigError;

/// One fuel category of the input dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelSpec {
    /// Short fuel name used in logs and reports.
    pub name: String,
    /// Header of this fuel's consumption column in the raw dataset.
    pub column: String,
    /// Net calorific value in GJ per physical unit (tonne, m3, kWh, Gcal).
    pub ncv: f64,
    /// Emission coefficient in kg CO2 per GJ.
    ///
    /// Must be zero for secondary carriers (e.g. delivered heat) whose
    /// primary-fuel emissions are already counted, to avoid double counting.
    pub emission_coeff: f64,
    /// Multiplier from the raw column unit to the NCV's physical unit
    /// (1e3 for thousand-tonne and thousand-Gcal columns, 1e6 for
    /// mln-m3 and mln-kWh columns).
    pub unit_multiplier: f64,
}

impl FuelSpec {
    /// Convert a raw physical consumption figure to `(energy_gj, emissions_t)`.
    ///
    /// `energy = consumption * unit_multiplier * ncv`;
    /// `emissions = energy * emission_coeff / 1000` (kg CO2 -> tonnes).
    pub fn convert(&self, consumption: f64) -> (f64, f64) {
        let energy_gj = consumption * self.unit_multiplier * self.ncv;
        let emissions_t = energy_gj * self.emission_coeff / KG_PER_TONNE;
        (energy_gj, emissions_t)
    }
}

/// Ordered, immutable set of fuel specs for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FuelTable {
    fuels: Vec<FuelSpec>,
}

impl FuelTable {
    /// Build a table, rejecting empty input, duplicate names, and negative
    /// physical parameters.
    pub fn new(fuels: Vec<FuelSpec>) -> Result<Self, FuelConfigError> {
        if fuels.is_empty() {
            return Err(FuelConfigError::EmptyTable);
        }
        for (i, fuel) in fuels.iter().enumerate() {
            if fuels[..i].iter().any(|f| f.name == fuel.name) {
                return Err(FuelConfigError::DuplicateFuel(fuel.name.clone()));
            }
            for (field, value) in [
                ("ncv", fuel.ncv),
                ("emission_coeff", fuel.emission_coeff),
                ("unit_multiplier", fuel.unit_multiplier),
            ] {
                if value < 0.0 {
                    return Err(FuelConfigError::NegativeValue {
                        fuel: fuel.name.clone(),
                        field,
                        value,
                    });
                }
            }
        }
        Ok(Self { fuels })
    }

    /// The built-in manufacturing-sector table: seven fuels with IPCC-style
    /// coefficients. Heat carries a zero coefficient because its emissions
    /// are already counted in the primary fuels that produced it.
    pub fn default_manufacturing() -> Self {
        let spec = |name: &str, column: &str, ncv: f64, emission_coeff: f64, unit_multiplier: f64| {
            FuelSpec {
                name: name.to_string(),
                column: column.to_string(),
                ncv,
                emission_coeff,
                unit_multiplier,
            }
        };
        Self {
            fuels: vec![
                spec(
                    "Coal",
                    "Coal_manufacturing_consumption (thousand tonnes)",
                    11.9, // GJ/tonne (lignite)
                    101.0,
                    1e3,
                ),
                spec(
                    "Gas",
                    "Gas_manufacturing_consumption (mln m3)",
                    0.0373, // GJ/m3
                    56.1,
                    1e6,
                ),
                spec(
                    "Residual_Oil",
                    "Residual_Oil_manufacturing_consumption (thousand tonnes)",
                    41.0,
                    77.4,
                    1e3,
                ),
                spec(
                    "Diesel",
                    "Diesel_manufacturing_consumption (thousand tonnes)",
                    43.0,
                    74.1,
                    1e3,
                ),
                spec(
                    "Gasoline",
                    "Gasoline_manufacturing_consumption (thousand tonnes)",
                    44.0,
                    69.3,
                    1e3,
                ),
                spec(
                    "Electricity",
                    "Electricity_manufacturing_Consumption (mln kWh)",
                    0.0036, // GJ/kWh
                    24.0,   // hydropower operational emissions
                    1e6,
                ),
                spec(
                    "Heat",
                    "Heat_manufacturing_consumption (thousand gigacalories)",
                    4.184, // GJ/Gcal
                    0.0,   // secondary carrier, counted at the primary fuels
                    1e3,
                ),
            ],
        }
    }

    /// Load a table from a JSON array of [`FuelSpec`] objects.
    pub fn from_json_file(path: &Path) -> Result<Self, FuelConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| FuelConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let fuels: Vec<FuelSpec> =
            serde_json::from_str(&text).map_err(|source| FuelConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        Self::new(fuels)
    }

    pub fn fuels(&self) -> &[FuelSpec] {
        &self.fuels
    }

    pub fn len(&self) -> usize {
        self.fuels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fuels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FuelSpec> {
        self.fuels.iter()
    }

    /// Dataset column headers in table order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fuels.iter().map(|f| f.column.as_str())
    }
}
