/// Static self-description of the engine for reporters and registries.
///
/// Every recognized field is enumerated here as a typed struct; there is no
/// free-form key/value bag to silently grow or misspell.

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ComponentInfo {
    pub name: &'static str,
    pub purpose: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModuleMetadata {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub components: Vec<ComponentInfo>,
    pub metrics: Vec<&'static str>,
    pub field_equations: Vec<&'static str>,
}

pub static MODULE_METADATA: Lazy<ModuleMetadata> = Lazy::new(|| ModuleMetadata {
    name: "Thermal Field Module",
    version: "1.0",
    description: "Data center cooling optimization as field dynamics",
    components: vec![
        ComponentInfo {
            name: "ThermalFieldAnalyzer",
            purpose: "Analyze temperature fields as curvature and entropy",
        },
        ComponentInfo {
            name: "CoolingOptimizer",
            purpose: "Optimize cooling as adaptive field morphism",
        },
    ],
    metrics: vec![
        "thermal_curvature",
        "thermal_entropy",
        "homeostasis_score",
        "gradient_magnitude",
        "alignment_coefficient",
    ],
    field_equations: vec![
        "κ(x,t) = tan⁻¹(|∇T|/T₀)",
        "S_thermal = -Σ p_i ln p_i",
        "∂T/∂t = α∇²T - β(T - T_load)",
    ],
});

/// Accessor for the module metadata table.
pub fn module_metadata() -> &'static ModuleMetadata {
    &MODULE_METADATA
}
