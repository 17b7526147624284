//! Shared constants. Energy in gigajoules, emissions in tonnes CO2.

/// Tolerance below which two values are treated as equal and a quantity is
/// treated as zero. All epsilon-guarded branches in the decomposition use
/// this single value so the skip rule and the log-ratio floors agree.
pub const EPSILON: f64 = 1e-9;

/// Emission coefficients are expressed in kg CO2 per GJ while emissions are
/// reported in tonnes; this factor reconciles the two scales.
pub const KG_PER_TONNE: f64 = 1000.0;

/// Header of the period-identifier column in input datasets.
pub const YEAR_COLUMN: &str = "Year";

/// Header of the physical production output column.
pub const OUTPUT_COLUMN: &str = "Production Output (thousand tonne)";

/// Header of the value-added column.
pub const VALUE_ADDED_COLUMN: &str = "GVA_manufacturing USD";

/// Header of the optional economy-wide aggregate column. Loaded and carried
/// on records but never read by the decomposition engine.
pub const GDP_COLUMN: &str = "GDP_country (USD)";

/// Default analysis window for the bundled sample data.
pub const DEFAULT_START_YEAR: i32 = 2012;
pub const DEFAULT_END_YEAR: i32 = 2023;
