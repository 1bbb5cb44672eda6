//! RNG module - spawn value sampling
//!
//! Spawn values are drawn from a per-tier discrete distribution using
//! cumulative-weight sampling over a uniform `[0, 1)` source. The source is a
//! trait so tests can script exact draws; the default is a small seeded LCG,
//! which keeps whole sessions reproducible from one `u32`.

use crate::types::DifficultyConfig;

/// Uniform random source over `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
    seed: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state, seed }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl RandomSource for SimpleRng {
    fn next_unit(&mut self) -> f64 {
        // Top 24 bits: the low bits of an LCG are weak.
        (self.next_u32() >> 8) as f64 / (1u32 << 24) as f64
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Scripted source that replays a fixed list of draws, cycling when exhausted.
///
/// ```
/// use falling_2048_core::{FixedSequence, RandomSource};
///
/// let mut rng = FixedSequence::new(vec![0.1, 0.9]);
/// assert_eq!(rng.next_unit(), 0.1);
/// assert_eq!(rng.next_unit(), 0.9);
/// assert_eq!(rng.next_unit(), 0.1);
/// ```
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedSequence {
    /// # Panics
    ///
    /// If `values` is empty or any value lies outside `[0, 1)`.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "fixed sequence needs at least one draw");
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "draws must lie in [0, 1)"
        );
        Self { values, cursor: 0 }
    }

    /// Source that always yields `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws consumed so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for FixedSequence {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Draw a spawn value for a tier.
///
/// Returns the first value whose cumulative weight exceeds the draw, falling
/// back to the heaviest value when rounding leaves the draw uncovered.
pub fn sample_spawn_value<R: RandomSource + ?Sized>(config: &DifficultyConfig, rng: &mut R) -> u32 {
    let draw = rng.next_unit();
    let mut cumulative = 0.0;
    for &(value, weight) in config.spawn_weights {
        cumulative += weight;
        if draw < cumulative {
            return value;
        }
    }
    config.heaviest_value()
}
