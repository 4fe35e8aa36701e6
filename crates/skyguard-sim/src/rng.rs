//! Random-source seam.
//!
//! Systems draw randomness through [`RandomSource`] so tests can replay a
//! fixed sequence. Every `rand` generator is a random source.

use rand::{Rng, RngCore};

/// Uniform randomness consumed by the spawn scheduler.
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        ((self.unit() * len as f64) as usize).min(len - 1)
    }
}

impl<R: RngCore> RandomSource for R {
    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}
