/// Explicit time-stepping driver for the cooling optimizer.
///
/// The analyzer and optimizer are pure; this is the loop that composes them:
/// optimize → restamp → analyze → record, for a fixed number of steps. It owns
/// the state history and the per-step metrics log, so nothing grows anywhere
/// the caller can't see.

use crate::analyzer::ThermalFieldAnalyzer;
use crate::errors::ThermalFieldError;
use crate::history::StateHistory;
use crate::metrics::{OptimizationSummary, ThermalMetrics};
use crate::optimizer::CoolingOptimizer;
use crate::thermal_state::ThermalState;

pub struct SimProps {
    pub name: &'static str,
    /// Thermal diffusivity / airflow responsiveness (> 0).
    pub alpha: f64,
    /// Load coupling strength (> 0).
    pub beta: f64,
    /// Explicit Euler step size. Stability for large `dt * alpha` or
    /// `dt * beta` is the caller's responsibility.
    pub dt: f64,
    /// Number of optimizer steps to run.
    pub steps: usize,
    /// Target temperature field; `None` targets the state's baseline everywhere.
    pub target_temp: Option<Vec<f64>>,
    pub debug: bool,
}

pub struct CoolingSimulation {
    pub name: String,
    pub dt: f64,
    pub steps: usize,
    pub target_temp: Option<Vec<f64>>,
    pub debug: bool,
    pub analyzer: ThermalFieldAnalyzer,
    pub optimizer: CoolingOptimizer,
    /// One entry per analyzed state: the initial state plus one per step.
    pub history: StateHistory,
    /// Metrics for each entry of `history`, in the same order.
    pub metrics_log: Vec<ThermalMetrics>,
    step: usize,
}

impl CoolingSimulation {
    pub fn new(props: SimProps) -> CoolingSimulation {
        CoolingSimulation {
            name: props.name.to_string(),
            dt: props.dt,
            steps: props.steps,
            target_temp: props.target_temp,
            debug: props.debug,
            analyzer: ThermalFieldAnalyzer::default(),
            optimizer: CoolingOptimizer::new(props.alpha, props.beta),
            history: StateHistory::new(),
            metrics_log: Vec::new(),
            step: 0,
        }
    }

    /// Index of the last completed step (0 before/without any step).
    pub fn current_step(&self) -> usize {
        self.step
    }

    /// Run the full optimization loop from `initial`.
    ///
    /// Records `steps + 1` states (the initial one included) and returns the
    /// summary comparing the initial and final states. A failed step leaves
    /// the history at the last successfully analyzed state.
    pub fn run(
        &mut self,
        initial: &ThermalState,
    ) -> Result<OptimizationSummary, ThermalFieldError> {
        // The entropy metric centers on the analyzer's baseline; keep it in
        // lockstep with the field being driven.
        self.analyzer.baseline_temp = initial.baseline_temp();
        self.history.clear();
        self.metrics_log.clear();
        self.step = 0;

        let initial_metrics = self.analyzer.analyze_state(initial, self.target_temp.as_deref())?;
        self.history.record(initial);
        self.metrics_log.push(initial_metrics);

        if self.debug {
            println!(
                "🌡️  {}: initial gradient {:.4} K/zone, curvature {:.6} rad",
                self.name, initial_metrics.gradient_magnitude, initial_metrics.curvature
            );
        }

        let load = initial.computational_load().to_vec();
        let baseline = initial.baseline_temp();
        let mut temps = initial.temperature_field().to_vec();
        let mut final_state = initial.clone();

        for step in 1..=self.steps {
            temps = self.optimizer.optimize_temperature(&temps, &load, self.dt)?;

            let state = ThermalState::new_with_baseline(
                format!("{}-step-{}", self.name, step),
                temps.clone(),
                load.clone(),
                baseline,
            )?;
            let metrics = self.analyzer.analyze_state(&state, self.target_temp.as_deref())?;

            if self.debug {
                println!(
                    "step {} of {}: gradient {:.4}, homeostasis {:.4}, alignment {:.4}",
                    step,
                    self.steps,
                    metrics.gradient_magnitude,
                    metrics.homeostasis_score,
                    metrics.alignment_coefficient
                );
            }

            self.history.record(&state);
            self.metrics_log.push(metrics);
            self.step = step;
            final_state = state;
        }

        self.analyzer
            .optimization_summary(initial, &final_state, self.target_temp.as_deref())
    }
}
