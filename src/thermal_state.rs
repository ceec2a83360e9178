/// One discrete-time snapshot of the machine-hall thermal field.
///
/// A `ThermalState` pairs a temperature field with the computational load
/// distribution that produced it. Both fields are position-aligned: index i of
/// each refers to the same physical zone, and the ordering is what the
/// finite-difference operators differentiate over.

use crate::constants::BASELINE_TEMP_K;
use crate::errors::{ensure_same_length, ThermalFieldError};
use serde::{Deserialize, Serialize};

fn default_baseline() -> f64 {
    BASELINE_TEMP_K
}

/// Immutable snapshot of temperature and load over the zone layout.
///
/// Construction validates that the two fields are the same non-zero length;
/// states that arrive through deserialization are re-checked at the analyzer
/// and optimizer entry points instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalState {
    /// Opaque label for this snapshot; never interpreted by the engine.
    timestamp: String,
    /// Zone temperatures in Kelvin, one per spatial position.
    temperature_field: Vec<f64>,
    /// Nonnegative load intensity, position-aligned with the temperatures.
    computational_load: Vec<f64>,
    /// Reference temperature in Kelvin.
    #[serde(default = "default_baseline")]
    baseline_temp: f64,
}

impl ThermalState {
    /// Create a snapshot with the default baseline of 298.15 K (25 °C).
    pub fn new(
        timestamp: impl Into<String>,
        temperature_field: Vec<f64>,
        computational_load: Vec<f64>,
    ) -> Result<Self, ThermalFieldError> {
        Self::new_with_baseline(
            timestamp,
            temperature_field,
            computational_load,
            BASELINE_TEMP_K,
        )
    }

    /// Create a snapshot with an explicit reference temperature.
    ///
    /// Fails with a `ValidationError` when the two fields differ in length or
    /// either is empty.
    pub fn new_with_baseline(
        timestamp: impl Into<String>,
        temperature_field: Vec<f64>,
        computational_load: Vec<f64>,
        baseline_temp: f64,
    ) -> Result<Self, ThermalFieldError> {
        ensure_same_length(
            "computational_load",
            temperature_field.len(),
            computational_load.len(),
        )?;

        Ok(Self {
            timestamp: timestamp.into(),
            temperature_field,
            computational_load,
            baseline_temp,
        })
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn temperature_field(&self) -> &[f64] {
        &self.temperature_field
    }

    pub fn computational_load(&self) -> &[f64] {
        &self.computational_load
    }

    pub fn baseline_temp(&self) -> f64 {
        self.baseline_temp
    }

    /// Number of spatial positions in the snapshot.
    pub fn len(&self) -> usize {
        self.temperature_field.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperature_field.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;

    #[test]
    fn test_state_creation() {
        let state = ThermalState::new(
            "2025-12-08T09:00:00",
            vec![300.0, 305.0, 310.0],
            vec![0.2, 0.5, 0.8],
        )
        .unwrap();

        assert_eq!(state.timestamp(), "2025-12-08T09:00:00");
        assert_eq!(state.len(), 3);
        assert_eq!(state.baseline_temp(), 298.15);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = ThermalState::new("t0", vec![300.0, 305.0], vec![0.2]).unwrap_err();
        assert_eq!(
            err,
            ThermalFieldError::Validation(ValidationError::LengthMismatch {
                field: "computational_load",
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_empty_fields_rejected() {
        let err = ThermalState::new("t0", vec![], vec![]).unwrap_err();
        assert_eq!(
            err,
            ThermalFieldError::Validation(ValidationError::EmptyField {
                field: "computational_load",
            })
        );
    }

    #[test]
    fn test_serde_round_trip_with_default_baseline() {
        let json = r#"{
            "timestamp": "t1",
            "temperature_field": [300.0, 301.0],
            "computational_load": [0.1, 0.9]
        }"#;
        let state: ThermalState = serde_json::from_str(json).unwrap();
        assert_eq!(state.baseline_temp(), 298.15);

        let round_tripped: ThermalState =
            serde_json::from_str(&serde_json::to_string(&state).unwrap()).unwrap();
        assert_eq!(round_tripped, state);
    }
}
