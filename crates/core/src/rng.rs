//! RNG module - the randomness collaborator.
//!
//! The core never reaches for a global random source; everything random
//! (mission targets, spawn previews, spawn jitter) flows through the
//! [`UniformSource`] trait so tests and replays can substitute their own.
//!
//! [`SimpleRng`] is the default implementation: a small LCG that makes a
//! whole board run reproducible from a single seed.

use clusterfall_types::{PieceColor, Shape};

/// Uniform integer randomness, as the core consumes it.
pub trait UniformSource {
    /// Uniform value in `[0, max_exclusive)`. `max_exclusive` must be > 0.
    fn uniform(&mut self, max_exclusive: u32) -> u32;

    /// Uniform value in `[min, max_exclusive)`.
    fn uniform_between(&mut self, min: u32, max_exclusive: u32) -> u32 {
        min + self.uniform(max_exclusive - min)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Get the current state (for restarting a run with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl UniformSource for SimpleRng {
    fn uniform(&mut self, max_exclusive: u32) -> u32 {
        // High bits of an LCG are the well-mixed ones.
        ((self.next_u32() >> 8) as u64 * max_exclusive as u64 >> 24) as u32
    }
}

/// Draw a shape uniformly from the closed shape set.
pub fn sample_shape(rng: &mut dyn UniformSource) -> Shape {
    Shape::ALL[rng.uniform(Shape::COUNT as u32) as usize]
}

/// Draw a color uniformly from the closed color set.
pub fn sample_color(rng: &mut dyn UniformSource) -> PieceColor {
    PieceColor::ALL[rng.uniform(PieceColor::COUNT as u32) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_is_deterministic() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn rng_different_seeds_diverge() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(54321);
        assert_ne!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn uniform_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.uniform(4) < 4);
            let v = rng.uniform_between(2, 5);
            assert!((2..5).contains(&v));
        }
    }

    #[test]
    fn every_shape_and_color_is_reachable() {
        let mut rng = SimpleRng::new(99);
        let mut shapes = [false; Shape::COUNT];
        let mut colors = [false; PieceColor::COUNT];
        for _ in 0..1000 {
            shapes[sample_shape(&mut rng).index()] = true;
            colors[sample_color(&mut rng).index()] = true;
        }
        assert!(shapes.iter().all(|&seen| seen));
        assert!(colors.iter().all(|&seen| seen));
    }
}
