//! # lmdi-decomp — Additive LMDI-I decomposition engine.
//!
//! Attributes the change in a fuel-summed emissions total between two periods
//! to five factors: activity (output growth), economic structure (value-added
//! share), energy intensity, fuel mix, and emission-factor change.
//!
//! - **Log-mean weighting**: per-fuel weights `L(c0, c1)` make the log-ratio
//!   decomposition exact, so the five effects sum to the observed change.
//! - **Degenerate inputs**: equal values, zero quantities, and zero totals
//!   resolve to defined values via a single epsilon tolerance; they are never
//!   errors.
//! - **Pure**: no I/O, no shared state; every result is reproducible from its
//!   two input snapshots alone.

pub mod logmean;
pub mod period;
pub mod series;

pub use logmean::log_mean;
pub use period::PeriodDecomposer;
pub use series::SeriesDecomposer;
