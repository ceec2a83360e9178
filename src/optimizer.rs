/// Cooling optimization as a reaction-diffusion step.
///
/// Traditional cooling maps load to a constant temperature setpoint; the
/// optimizer instead advances the whole field one explicit Euler step of
///
///   ∂T/∂t = α∇²T - β(T - T_load)
///
/// where the diffusion term smooths hot spots and the reaction term pulls
/// each zone toward a load-derived target.

use crate::constants::{
    BASELINE_TEMP_K, DEFAULT_ALPHA, DEFAULT_BETA, EPSILON, TEMP_LOAD_COEFFICIENT_K,
};
use crate::errors::{ensure_finite, ensure_same_length, ThermalFieldError};
use crate::math_utils::laplacian;

/// One-step cooling optimizer with fixed coefficients.
///
/// Contract: `alpha` and `beta` are both > 0. Stability of the explicit
/// Euler step is the caller's responsibility; large `dt * alpha` or
/// `dt * beta` products will oscillate or diverge, and no adaptive step
/// control is applied here.
#[derive(Debug, Clone)]
pub struct CoolingOptimizer {
    /// Thermal diffusivity / airflow responsiveness (dimensionless).
    pub alpha: f64,
    /// Load coupling strength (dimensionless).
    pub beta: f64,
}

impl Default for CoolingOptimizer {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA, DEFAULT_BETA)
    }
}

impl CoolingOptimizer {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// Load-derived target temperature field.
    ///
    /// Each zone's target sits between the baseline and baseline + 5 K,
    /// proportional to its load normalized by the field's peak load. High-load
    /// zones are allowed to run warm rather than being over-cooled.
    fn load_target_field(&self, load: &[f64]) -> Vec<f64> {
        let max_load = load.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        load.iter()
            .map(|l| BASELINE_TEMP_K + TEMP_LOAD_COEFFICIENT_K * (l / (max_load + EPSILON)))
            .collect()
    }

    /// Advance the temperature field one explicit Euler step.
    ///
    /// # Arguments
    /// * `t_current` - Current temperature field (Kelvin), 1-D
    /// * `load` - Computational load field, position-aligned with `t_current`
    /// * `dt` - Time step
    ///
    /// # Returns
    /// The updated field, same length as `t_current`, or a
    /// `ValidationError`/`InvalidFieldError` if the inputs are misaligned,
    /// empty, or contain non-finite values.
    ///
    /// Pure function: repeated calls compose the time-stepping loop, which is
    /// owned entirely by the caller.
    pub fn optimize_temperature(
        &self,
        t_current: &[f64],
        load: &[f64],
        dt: f64,
    ) -> Result<Vec<f64>, ThermalFieldError> {
        ensure_same_length("computational_load", t_current.len(), load.len())?;
        ensure_finite("temperature_field", t_current)?;
        ensure_finite("computational_load", load)?;

        let t_load = self.load_target_field(load);
        let lap = laplacian(t_current);

        let updated = t_current
            .iter()
            .zip(lap.iter())
            .zip(t_load.iter())
            .map(|((t, l), target)| {
                let dt_dt = self.alpha * l - self.beta * (t - target);
                t + dt * dt_dt
            })
            .collect();

        Ok(updated)
    }
}
