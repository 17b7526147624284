//! Series orchestration: consecutive pairs plus an optional overall span.

use lmdi_core::error::DecompositionError;
use lmdi_core::result::SeriesResult;
use lmdi_core::snapshot::PeriodSnapshot;
use tracing::{debug, warn};

use crate::period::PeriodDecomposer;

/// Runs the pairwise decomposer across an ordered snapshot series.
///
/// Produces one result per consecutive period pair, in series order, and
/// (independently) at most one overall-span result when an explicit
/// `(start, end)` pair is requested. Stateless across calls.
#[derive(Debug, Clone, Default)]
pub struct SeriesDecomposer {
    decomposer: PeriodDecomposer,
}

impl SeriesDecomposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_epsilon(epsilon: f64) -> Self {
        Self {
            decomposer: PeriodDecomposer::with_epsilon(epsilon),
        }
    }

    /// Decompose every consecutive pair of `snapshots` (assumed sorted by
    /// year), plus the explicit `span` if one is given.
    ///
    /// A span endpoint with no matching snapshot is a hard error and the call
    /// produces no partial result; this is a user-specified request, unlike a
    /// gap inside the series, which is merely a shorter series.
    pub fn decompose_series(
        &self,
        snapshots: &[PeriodSnapshot],
        span: Option<(i32, i32)>,
    ) -> Result<SeriesResult, DecompositionError> {
        if snapshots.len() < 2 {
            return Err(DecompositionError::TooFewPeriods {
                count: snapshots.len(),
            });
        }

        // Validate the span before any work so a bad request yields nothing.
        let endpoints = match span {
            Some((start, end)) if start != end => {
                Some((self.find(snapshots, start)?, self.find(snapshots, end)?))
            }
            Some((start, _)) => {
                warn!(year = start, "span start equals end; skipping overall decomposition");
                None
            }
            None => None,
        };

        let mut periods = Vec::with_capacity(snapshots.len() - 1);
        for pair in snapshots.windows(2) {
            periods.push(self.decomposer.decompose(&pair[0], &pair[1])?);
        }
        debug!(pairs = periods.len(), "decomposed consecutive series");

        let overall = match endpoints {
            Some((start, end)) => Some(self.decomposer.decompose(start, end)?),
            None => None,
        };

        Ok(SeriesResult { periods, overall })
    }

    fn find<'a>(
        &self,
        snapshots: &'a [PeriodSnapshot],
        year: i32,
    ) -> Result<&'a PeriodSnapshot, DecompositionError> {
        snapshots
            .iter()
            .find(|s| s.year == year)
            .ok_or(DecompositionError::MissingPeriod { year })
    }
}
