/// Procedural generation of input fields for demos and tests.
///
/// Real deployments feed the engine sensor data; everything here synthesizes
/// plausible stand-ins. Perlin noise gives spatially-correlated load patterns
/// (neighboring racks tend to run similar jobs), and seeded jitter produces
/// reproducible perturbations of a base temperature field.

use noise::{NoiseFn, Perlin};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sample a 1-D load field from Perlin noise, mapped into [0, 1].
///
/// # Arguments
/// * `len` - Number of zones
/// * `seed` - Noise seed; equal seeds give equal fields
/// * `scale` - Spatial frequency; smaller values give smoother fields
pub fn perlin_load_field(len: usize, seed: u32, scale: f64) -> Vec<f64> {
    let perlin = Perlin::new(seed);
    (0..len)
        .map(|i| {
            let sample = perlin.get([i as f64 * scale, 0.5]);
            ((sample + 1.0) / 2.0).clamp(0.0, 1.0)
        })
        .collect()
}

/// Add seeded uniform jitter in [-amplitude, amplitude] to a base field.
pub fn perturbed_field(base: &[f64], amplitude: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    base.iter()
        .map(|v| v + amplitude * (rng.random::<f64>() * 2.0 - 1.0))
        .collect()
}
