/// Thermal field analysis for dense machine halls.
///
/// Maps a temperature distribution and its computational load to continuum
/// metrics: curvature, entropy, homeostasis, gradient magnitude, and
/// temperature-load alignment. All computations are pure functions over 1-D
/// fields; drivers that want a record of analyzed states own a
/// `StateHistory` and append explicitly.

use crate::constants::EPSILON;
use crate::errors::{ensure_finite, ensure_same_length, ThermalFieldError};
use crate::math_utils::{gradient, mean, std_dev};
use crate::metrics::{ImprovementReport, OptimizationSummary, ThermalMetrics};
use crate::thermal_state::ThermalState;

/// Analyzer configured with a reference temperature.
///
/// The baseline is the denominator of the curvature metric and the center of
/// the temperature-deviation distribution behind the entropy metric.
#[derive(Debug, Clone)]
pub struct ThermalFieldAnalyzer {
    pub baseline_temp: f64,
}

impl Default for ThermalFieldAnalyzer {
    fn default() -> Self {
        Self::new(crate::constants::BASELINE_TEMP_K)
    }
}

impl ThermalFieldAnalyzer {
    /// Create an analyzer with the given reference temperature in Kelvin.
    pub fn new(baseline_temp: f64) -> Self {
        Self { baseline_temp }
    }

    /// Thermal curvature of a field against the analyzer's baseline.
    ///
    /// See [`thermal_curvature_with_baseline`](Self::thermal_curvature_with_baseline).
    pub fn thermal_curvature(&self, field: &[f64]) -> f64 {
        self.thermal_curvature_with_baseline(field, self.baseline_temp)
    }

    /// Thermal curvature: κ = tan⁻¹(mean|∇T| / T₀)
    ///
    /// A bounded proxy for how sharply the field bends in space. The arctan
    /// maps the unbounded mean gradient into [0, π/2).
    ///
    /// Contract: `baseline` must be > 0. The caller owns this; a zero or
    /// negative baseline makes the result discontinuous and meaningless, and
    /// no guard is applied here.
    pub fn thermal_curvature_with_baseline(&self, field: &[f64], baseline: f64) -> f64 {
        let avg_grad = mean(&gradient(field).iter().map(|g| g.abs()).collect::<Vec<f64>>());
        (avg_grad / baseline).atan()
    }

    /// Shannon entropy of the temperature-load coupling distribution.
    ///
    /// S = -Σ pᵢ ln pᵢ over the coupling distribution: the normalized
    /// temperature deviation |T - T₀| multiplied elementwise with the
    /// normalized load, renormalized to sum to 1. Entries below `EPSILON` are
    /// dropped rather than fed to the log. Every normalization adds `EPSILON`
    /// to its denominator, so a fully uniform input yields 0 rather than NaN.
    ///
    /// Assumes the two fields are position-aligned and equal in length;
    /// `analyze_state` enforces that before calling here.
    pub fn thermal_entropy(&self, t_field: &[f64], load_field: &[f64]) -> f64 {
        let t_dev: Vec<f64> = t_field
            .iter()
            .map(|t| (t - self.baseline_temp).abs())
            .collect();
        let t_sum: f64 = t_dev.iter().sum();
        let p_t: Vec<f64> = t_dev.iter().map(|v| v / (t_sum + EPSILON)).collect();

        let load_sum: f64 = load_field.iter().sum();
        let p_load: Vec<f64> = load_field.iter().map(|v| v / (load_sum + EPSILON)).collect();

        let coupling: Vec<f64> = p_t.iter().zip(p_load.iter()).map(|(a, b)| a * b).collect();
        let coupling_sum: f64 = coupling.iter().sum();

        let mut entropy = 0.0;
        for c in coupling {
            let p = c / (coupling_sum + EPSILON);
            if p > EPSILON {
                entropy -= p * p.ln();
            }
        }
        entropy
    }

    /// Fractional entropy drop from an optimization pass.
    ///
    /// ΔS = (S_before - S_after) / S_before, computed over the same load
    /// field. Returns exactly 0.0 when S_before is below `EPSILON` (nothing
    /// to reduce). Positive means the optimization removed disorder.
    ///
    /// The result is NOT bounded to [-1, 1]: whenever S_after exceeds
    /// 2·S_before the value falls below -1. Callers that need a bounded
    /// score must apply their own clamp.
    pub fn entropy_reduction(&self, t_before: &[f64], t_after: &[f64], load: &[f64]) -> f64 {
        let s_before = self.thermal_entropy(t_before, load);
        let s_after = self.thermal_entropy(t_after, load);

        if s_before < EPSILON {
            return 0.0;
        }
        (s_before - s_after) / s_before
    }

    /// How well the actual field holds to the target field, in [0, 1].
    ///
    /// H = 1 - mean|T_actual - T_target| / std(T_target), clamped. A constant
    /// target has no variability to scale by, so the score collapses to
    /// exact-match-or-nothing: 1.0 when the mean deviation is below
    /// `EPSILON`, else 0.0.
    pub fn homeostasis_score(&self, t_actual: &[f64], t_target: &[f64]) -> f64 {
        let deviation: Vec<f64> = t_actual
            .iter()
            .zip(t_target.iter())
            .map(|(a, t)| (a - t).abs())
            .collect();
        let mean_dev = mean(&deviation);
        let std_target = std_dev(t_target);

        if std_target < EPSILON {
            return if mean_dev < EPSILON { 1.0 } else { 0.0 };
        }
        (1.0 - mean_dev / std_target).clamp(0.0, 1.0)
    }

    /// Mean absolute spatial derivative of the field.
    pub fn gradient_magnitude(&self, field: &[f64]) -> f64 {
        mean(&gradient(field).iter().map(|g| g.abs()).collect::<Vec<f64>>())
    }

    /// Normalized covariance between temperature and load, nominally [-1, 1].
    ///
    /// Both fields are z-scored (population std, with `EPSILON` added to the
    /// denominator) and the elementwise products averaged. This is a biased
    /// covariance-of-normalized-signals estimator, not a textbook Pearson
    /// correlation: there is no Bessel correction, so it deviates slightly
    /// from Pearson r on short fields. Positive means cooling tracks load;
    /// negative means cooling is pointed at the wrong zones.
    pub fn alignment_coefficient(&self, t_field: &[f64], load_field: &[f64]) -> f64 {
        let t_mean = mean(t_field);
        let t_std = std_dev(t_field);
        let load_mean = mean(load_field);
        let load_std = std_dev(load_field);

        let products: Vec<f64> = t_field
            .iter()
            .zip(load_field.iter())
            .map(|(t, l)| ((t - t_mean) / (t_std + EPSILON)) * ((l - load_mean) / (load_std + EPSILON)))
            .collect();
        mean(&products)
    }

    /// Complete analysis of one snapshot.
    ///
    /// Curvature is computed against the state's own baseline; entropy against
    /// the analyzer's. When `target_temp` is `None` the homeostasis target is
    /// a constant field at the state's baseline.
    ///
    /// # Arguments
    /// * `state` - Snapshot to analyze
    /// * `target_temp` - Target temperature field, position-aligned with the state
    ///
    /// # Returns
    /// The five-metric bundle, or a `ValidationError`/`InvalidFieldError` if
    /// the input fields are misaligned, empty, or contain non-finite values.
    pub fn analyze_state(
        &self,
        state: &ThermalState,
        target_temp: Option<&[f64]>,
    ) -> Result<ThermalMetrics, ThermalFieldError> {
        let temps = state.temperature_field();
        let load = state.computational_load();

        // Constructor-validated states re-check cheaply; deserialized ones
        // get their first real check here.
        ensure_same_length("computational_load", temps.len(), load.len())?;
        ensure_finite("temperature_field", temps)?;
        ensure_finite("computational_load", load)?;
        if let Some(target) = target_temp {
            ensure_same_length("target_temp", temps.len(), target.len())?;
            ensure_finite("target_temp", target)?;
        }

        let default_target;
        let target = match target_temp {
            Some(t) => t,
            None => {
                default_target = vec![state.baseline_temp(); temps.len()];
                default_target.as_slice()
            }
        };

        Ok(ThermalMetrics {
            curvature: self.thermal_curvature_with_baseline(temps, state.baseline_temp()),
            entropy: self.thermal_entropy(temps, load),
            homeostasis_score: self.homeostasis_score(temps, target),
            gradient_magnitude: self.gradient_magnitude(temps),
            alignment_coefficient: self.alignment_coefficient(temps, load),
        })
    }

    /// Before/after comparison across an optimization run.
    ///
    /// Analyzes both states, measures the entropy reduction over the before
    /// state's load, and reports the per-metric deltas with a
    /// positive-is-better sign convention.
    pub fn optimization_summary(
        &self,
        before: &ThermalState,
        after: &ThermalState,
        target_temp: Option<&[f64]>,
    ) -> Result<OptimizationSummary, ThermalFieldError> {
        let metrics_before = self.analyze_state(before, target_temp)?;
        let metrics_after = self.analyze_state(after, target_temp)?;

        let entropy_reduction = self.entropy_reduction(
            before.temperature_field(),
            after.temperature_field(),
            before.computational_load(),
        );

        Ok(OptimizationSummary {
            before: metrics_before,
            after: metrics_after,
            improvements: ImprovementReport {
                entropy_reduction,
                curvature_reduction: metrics_before.curvature - metrics_after.curvature,
                homeostasis_improvement: metrics_after.homeostasis_score
                    - metrics_before.homeostasis_score,
                gradient_reduction: metrics_before.gradient_magnitude
                    - metrics_after.gradient_magnitude,
                alignment_improvement: metrics_after.alignment_coefficient
                    - metrics_before.alignment_coefficient,
            },
        })
    }
}
