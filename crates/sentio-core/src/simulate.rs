use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sentio_classifier::MeterReading;

use crate::config::SimulateConfig;

/// Produces meter readings scattered uniformly around a baseline.
pub struct MeterSimulator {
    rng: StdRng,
    baseline: [f64; 3],
    jitter: [f64; 3],
}

impl MeterSimulator {
    pub fn new(config: &SimulateConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            baseline: config.baseline,
            jitter: config.jitter,
        }
    }

    pub fn next_reading(&mut self) -> MeterReading {
        let mut values = self.baseline;
        for (value, spread) in values.iter_mut().zip(self.jitter) {
            *value = jittered(&mut self.rng, *value, spread);
        }
        MeterReading::new(values[0], values[1], values[2])
    }
}

fn jittered(rng: &mut impl Rng, base: f64, spread: f64) -> f64 {
    if !(2.0 * spread).is_finite() || spread <= 0.0 {
        return base;
    }
    base + rng.gen_range(-spread..=spread)
}
