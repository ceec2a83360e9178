// Numerical floor used by every normalization and log in the crate.
// Added to denominators and used as the log(0) cutoff, never raised as an error.
pub const EPSILON: f64 = 1e-10;

pub const TO_KELVIN: f64 = 273.15;

// Reference room temperature for a well-conditioned machine hall (25 °C).
pub const BASELINE_TEMP_K: f64 = 298.15;

// Headroom between an idle zone and a fully loaded one (K).
// Dense halls run 5-10K warmer under peak load; running high-load zones
// warm instead of over-cooling them is where the efficiency gain lives.
pub const TEMP_LOAD_COEFFICIENT_K: f64 = 5.0;

// Default optimizer coefficients (dimensionless)
pub const DEFAULT_ALPHA: f64 = 0.1; // airflow responsiveness / diffusivity
pub const DEFAULT_BETA: f64 = 0.5; // load-coupling strength
pub const DEFAULT_DT: f64 = 1.0; // explicit Euler step size
