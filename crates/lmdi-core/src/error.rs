//! Error types for the LMDI decomposition pipeline.
use thiserror::Error;

/// Errors in the static fuel configuration table.
#[derive(Error, Debug)]
pub enum FuelConfigError {
    #[error("fuel table is empty")]
    EmptyTable,
    #[error("duplicate fuel name: {0}")]
    DuplicateFuel(String),
    #[error("negative {field} for fuel {fuel}: {value}")]
    NegativeValue {
        fuel: String,
        field: &'static str,
        value: f64,
    },
    #[error("failed to read fuel config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse fuel config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by the decomposition engine itself.
///
/// Numerical degeneracy (zero totals, equal values) is never an error; it is
/// resolved by the epsilon rules. These variants cover structural problems
/// with the requested computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecompositionError {
    /// An explicitly requested span endpoint has no snapshot. This is a
    /// user-specified request, not a data-completeness gap, so it is a hard
    /// error and the call produces no partial result.
    #[error("no snapshot for requested period {year}")]
    MissingPeriod { year: i32 },

    /// Fewer than two snapshots: no period pair can be formed.
    #[error("need at least two periods, got {count}")]
    TooFewPeriods { count: usize },

    /// Two snapshots built against different fuel tables.
    #[error("fuel count mismatch: base has {base}, comparison has {comparison}")]
    FuelMismatch { base: usize, comparison: usize },
}
