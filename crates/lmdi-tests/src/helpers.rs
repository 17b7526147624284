//! Shared builders for integration tests.

use lmdi_core::fuel::{FuelSpec, FuelTable};
use lmdi_core::snapshot::PeriodSnapshot;

/// A snapshot with explicit per-fuel quantities; totals derived.
pub fn snapshot(
    year: i32,
    energy_gj: Vec<f64>,
    emissions_t: Vec<f64>,
    output: f64,
    value_added: f64,
) -> PeriodSnapshot {
    let total_energy_gj = energy_gj.iter().sum();
    let total_emissions_t = emissions_t.iter().sum();
    PeriodSnapshot {
        year,
        energy_gj,
        emissions_t,
        total_energy_gj,
        total_emissions_t,
        output,
        value_added,
        gdp: None,
    }
}

/// A minimal one-fuel table with unit multiplier 1 for direct arithmetic.
pub fn unit_fuel_table() -> FuelTable {
    FuelTable::new(vec![FuelSpec {
        name: "Coal".to_string(),
        column: "Coal (GJ units)".to_string(),
        ncv: 1.0,
        emission_coeff: 100.0,
        unit_multiplier: 1.0,
    }])
    .unwrap()
}

/// A geometric-growth series: every quantity scales by `rate` per year.
pub fn growing_series(start_year: i32, years: usize, rate: f64) -> Vec<PeriodSnapshot> {
    (0..years)
        .map(|i| {
            let scale = rate.powi(i as i32);
            snapshot(
                start_year + i as i32,
                vec![4000.0 * scale, 2500.0 * scale],
                vec![400.0 * scale, 140.0 * scale],
                1200.0 * scale,
                600.0 * scale,
            )
        })
        .collect()
}
