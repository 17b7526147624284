//! Pairwise decomposition: two snapshots in, five effects out.

use lmdi_core::constants::EPSILON;
use lmdi_core::error::DecompositionError;
use lmdi_core::result::DecompositionResult;
use lmdi_core::snapshot::PeriodSnapshot;
use tracing::debug;

use crate::logmean::log_mean_eps;

/// Decomposes one ordered snapshot pair into the five LMDI-I effects.
///
/// Stateless apart from the epsilon tolerance; every call is reproducible
/// from its two inputs alone.
#[derive(Debug, Clone)]
pub struct PeriodDecomposer {
    epsilon: f64,
}

impl Default for PeriodDecomposer {
    fn default() -> Self {
        Self { epsilon: EPSILON }
    }
}

impl PeriodDecomposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_epsilon(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Ratio of a quantity across the two periods, safe against zero and
    /// near-zero arguments: both sides are floored at epsilon before the log.
    fn guarded_log_ratio(&self, base: f64, comparison: f64) -> f64 {
        (comparison.max(self.epsilon) / base.max(self.epsilon)).ln()
    }

    /// Decompose the emissions change from `base` to `comparison`.
    ///
    /// The guarantee of the additive LMDI-I method: with no skipped fuels the
    /// per-fuel log ratios telescope exactly into `ln(c1/c0)`, and
    /// `L(c0, c1) * ln(c1/c0) = c1 - c0`, so the residual is zero up to float
    /// round-off. Fuels that vanish in one period are skipped and can leave a
    /// bounded residual; that residual is reported, not hidden.
    pub fn decompose(
        &self,
        base: &PeriodSnapshot,
        comparison: &PeriodSnapshot,
    ) -> Result<DecompositionResult, DecompositionError> {
        if base.fuel_count() != comparison.fuel_count() {
            return Err(DecompositionError::FuelMismatch {
                base: base.fuel_count(),
                comparison: comparison.fuel_count(),
            });
        }

        let eps = self.epsilon;

        // Period-level log ratios, shared by every fuel.
        let d_ln_output = self.guarded_log_ratio(base.output, comparison.output);

        let value_share = |snap: &PeriodSnapshot| {
            if snap.output != 0.0 {
                snap.value_added / snap.output
            } else {
                0.0
            }
        };
        let d_ln_value_share =
            self.guarded_log_ratio(value_share(base), value_share(comparison));

        let energy_intensity = |snap: &PeriodSnapshot| {
            if snap.value_added != 0.0 {
                snap.total_energy_gj / snap.value_added
            } else {
                0.0
            }
        };
        let d_ln_intensity =
            self.guarded_log_ratio(energy_intensity(base), energy_intensity(comparison));

        let mut activity = 0.0;
        let mut structure = 0.0;
        let mut intensity = 0.0;
        let mut mix = 0.0;
        let mut emission_factor = 0.0;

        // Skip rule as a filter: a fuel with ~zero emissions in both periods
        // contributes to no effect and must not perturb the identity.
        let contributing = (0..base.fuel_count()).filter(|&i| {
            let c0 = base.emissions_t[i];
            let c1 = comparison.emissions_t[i];
            let weight = log_mean_eps(c0, c1, eps);
            !(weight.abs() < eps && c0.abs() < eps && c1.abs() < eps)
        });

        for i in contributing {
            let c0 = base.emissions_t[i];
            let c1 = comparison.emissions_t[i];
            let weight = log_mean_eps(c0, c1, eps);

            activity += weight * d_ln_output;
            structure += weight * d_ln_value_share;
            intensity += weight * d_ln_intensity;

            let share = |energy: f64, total: f64| if total > eps { energy / total } else { 0.0 };
            let s0 = share(base.energy_gj[i], base.total_energy_gj);
            let s1 = share(comparison.energy_gj[i], comparison.total_energy_gj);
            mix += weight * self.guarded_log_ratio(s0, s1);

            let ef = |emissions: f64, energy: f64| if energy > eps { emissions / energy } else { 0.0 };
            let ef0 = ef(c0, base.energy_gj[i]);
            let ef1 = ef(c1, comparison.energy_gj[i]);
            // Near-equal emission factors are forced to a zero ratio exactly,
            // so float noise in c/e never leaks into the effect.
            let d_ln_ef = if (ef0 - ef1).abs() < eps {
                0.0
            } else {
                self.guarded_log_ratio(ef0, ef1)
            };
            emission_factor += weight * d_ln_ef;
        }

        let total_change = comparison.total_emissions_t - base.total_emissions_t;
        let sum_of_effects = activity + structure + intensity + mix + emission_factor;
        let residual = total_change - sum_of_effects;

        let period = format!("{}-{}", base.year, comparison.year);
        debug!(
            %period,
            total_change,
            sum_of_effects,
            residual,
            "decomposed period pair"
        );

        Ok(DecompositionResult {
            period,
            total_change,
            activity,
            structure,
            intensity,
            mix,
            emission_factor,
            sum_of_effects,
            residual,
        })
    }
}
