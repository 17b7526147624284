//! Decomposition result types and the fixed output-table contract.

use serde::{Deserialize, Serialize};

/// The decomposition of one ordered period pair into five additive effects.
///
/// `residual = total_change - sum_of_effects`. Under exact arithmetic with no
/// skipped fuels the residual is zero; a small non-zero residual signals fuels
/// that were skipped because they vanish in one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecompositionResult {
    /// Period label, e.g. `"2012-2013"`.
    pub period: String,
    /// Observed change in total emissions (comparison minus base), tonnes CO2.
    pub total_change: f64,
    /// Output-growth (activity) effect.
    pub activity: f64,
    /// Economic-structure (value-added share) effect.
    pub structure: f64,
    /// Energy-intensity effect.
    pub intensity: f64,
    /// Fuel-mix effect.
    pub mix: f64,
    /// Emission-factor effect.
    pub emission_factor: f64,
    pub sum_of_effects: f64,
    pub residual: f64,
}

impl DecompositionResult {
    /// Column headers of the exported result table, in contract order.
    pub const COLUMNS: [&'static str; 9] = [
        "Period",
        "Total_Change",
        "Activity",
        "Structure",
        "Intensity",
        "Mix",
        "Emission_Factor",
        "Sum_of_Effects",
        "Residual",
    ];

    /// The numeric fields in column order (everything after `Period`).
    pub fn values(&self) -> [f64; 8] {
        [
            self.total_change,
            self.activity,
            self.structure,
            self.intensity,
            self.mix,
            self.emission_factor,
            self.sum_of_effects,
            self.residual,
        ]
    }
}

/// All results for one series run: consecutive-pair decompositions in period
/// order, plus at most one overall-span decomposition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResult {
    pub periods: Vec<DecompositionResult>,
    pub overall: Option<DecompositionResult>,
}

impl SeriesResult {
    /// Consecutive-pair rows followed by the overall row, as exported.
    pub fn rows(&self) -> impl Iterator<Item = &DecompositionResult> {
        self.periods.iter().chain(self.overall.iter())
    }
}
