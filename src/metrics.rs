/// Derived metric bundles produced by the analyzer.
///
/// These are plain value types: computed once, never mutated, handed to
/// reporters and renderers downstream.

use serde::{Deserialize, Serialize};

/// The five derived scalars for one thermal state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermalMetrics {
    /// Bounded gradient proxy, in [0, π/2).
    pub curvature: f64,
    /// Shannon entropy of the temperature-load coupling distribution, ≥ 0.
    pub entropy: f64,
    /// Closeness to the target field, clamped to [0, 1].
    pub homeostasis_score: f64,
    /// Mean absolute spatial derivative, ≥ 0.
    pub gradient_magnitude: f64,
    /// Normalized covariance of temperature and load, nominally in [-1, 1].
    pub alignment_coefficient: f64,
}

/// Per-metric deltas between a before and after state.
///
/// Sign conventions follow "positive = improved": curvature and gradient are
/// reported as before-minus-after (they should fall), homeostasis and
/// alignment as after-minus-before (they should rise).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImprovementReport {
    /// Fractional entropy drop, (S_before - S_after) / S_before.
    /// Unbounded below when S_after exceeds 2·S_before.
    pub entropy_reduction: f64,
    pub curvature_reduction: f64,
    pub homeostasis_improvement: f64,
    pub gradient_reduction: f64,
    pub alignment_improvement: f64,
}

/// Before/after comparison across one or more optimizer steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSummary {
    pub before: ThermalMetrics,
    pub after: ThermalMetrics,
    pub improvements: ImprovementReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_serialize_with_named_fields() {
        let metrics = ThermalMetrics {
            curvature: 0.01,
            entropy: 1.5,
            homeostasis_score: 0.9,
            gradient_magnitude: 2.0,
            alignment_coefficient: 0.7,
        };

        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["curvature"], 0.01);
        assert_eq!(json["homeostasis_score"], 0.9);

        let back: ThermalMetrics = serde_json::from_value(json).unwrap();
        assert_eq!(back, metrics);
    }

    #[test]
    fn test_summary_structure() {
        let metrics = ThermalMetrics {
            curvature: 0.02,
            entropy: 1.0,
            homeostasis_score: 0.5,
            gradient_magnitude: 3.0,
            alignment_coefficient: 0.1,
        };
        let summary = OptimizationSummary {
            before: metrics,
            after: metrics,
            improvements: ImprovementReport {
                entropy_reduction: 0.0,
                curvature_reduction: 0.0,
                homeostasis_improvement: 0.0,
                gradient_reduction: 0.0,
                alignment_improvement: 0.0,
            },
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["improvements"]["entropy_reduction"].is_number());
        assert!(json["before"]["curvature"].is_number());
    }
}
