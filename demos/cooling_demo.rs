/// Walkthrough of the thermal field engine on a 10-zone hall:
/// analyze the starting state, apply one optimizer step, and report the
/// before/after comparison.
///
/// Run with: cargo run --example cooling_demo

use colored::Colorize;
use thermo_field_rust::analyzer::ThermalFieldAnalyzer;
use thermo_field_rust::history::StateHistory;
use thermo_field_rust::metadata::module_metadata;
use thermo_field_rust::optimizer::CoolingOptimizer;
use thermo_field_rust::thermal_state::ThermalState;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "Thermal Field Module — Demo".bold());
    println!("{}", "=".repeat(50));

    let meta = module_metadata();
    println!("{} v{}: {}", meta.name, meta.version, meta.description);

    // Sample thermal state (1-D zone layout)
    let t_before = vec![300.0, 305.0, 310.0, 308.0, 302.0, 299.0, 298.0, 297.0, 296.0, 295.0];
    let load = vec![0.2, 0.8, 0.9, 0.7, 0.3, 0.1, 0.05, 0.1, 0.2, 0.15];

    let before_state = ThermalState::new("2025-12-08T09:00:00", t_before.clone(), load.clone())?;

    let analyzer = ThermalFieldAnalyzer::default();
    let mut history = StateHistory::new();

    let metrics_before = analyzer.analyze_state(&before_state, None)?;
    history.record(&before_state);

    println!("\n{}", "Before Optimization:".red().bold());
    println!("  Curvature: {:.4}", metrics_before.curvature);
    println!("  Entropy: {:.4}", metrics_before.entropy);
    println!("  Homeostasis: {:.4}", metrics_before.homeostasis_score);
    println!("  Alignment: {:.4}", metrics_before.alignment_coefficient);

    // One optimization step
    let optimizer = CoolingOptimizer::new(0.1, 0.5);
    let t_after = optimizer.optimize_temperature(&t_before, &load, 1.0)?;

    let after_state = ThermalState::new("2025-12-08T09:01:00", t_after, load)?;
    history.record(&after_state);

    let summary = analyzer.optimization_summary(&before_state, &after_state, None)?;

    println!("\n{}", "After Optimization:".green().bold());
    println!("  Curvature: {:.4}", summary.after.curvature);
    println!("  Entropy: {:.4}", summary.after.entropy);
    println!("  Homeostasis: {:.4}", summary.after.homeostasis_score);
    println!("  Alignment: {:.4}", summary.after.alignment_coefficient);

    println!("\n{}", "Improvements:".bold());
    println!(
        "  Entropy Reduction: {:.2}%",
        summary.improvements.entropy_reduction * 100.0
    );
    println!(
        "  Curvature Reduction: {:.4}",
        summary.improvements.curvature_reduction
    );
    println!(
        "  Homeostasis Gain: {:.4}",
        summary.improvements.homeostasis_improvement
    );
    println!(
        "  Alignment Gain: {:.4}",
        summary.improvements.alignment_improvement
    );

    println!("\nSummary as JSON for downstream reporters:");
    println!("{}", serde_json::to_string_pretty(&summary)?);

    println!("\n{} states recorded", history.len());
    println!("{}", "=".repeat(50));

    Ok(())
}
