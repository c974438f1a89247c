//! Shake Jitter Source
//!
//! Wraps the random source used by shake-mode animations so callers can
//! inject a seeded generator in tests and a real entropy source in
//! production. The perturbation is a small symmetric offset applied per
//! axis; cumulative drift over long caption tracks is unbounded on purpose
//! (the wander is part of the effect).

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::core::Point2D;

/// Perturbation magnitude in pixels, per axis
const JITTER_MAGNITUDE: f64 = 2.5;

/// Injectable jitter source for shake-mode position chains
pub struct Jitter {
    rng: Box<dyn RngCore + Send>,
}

impl Jitter {
    /// Wraps an arbitrary random source
    pub fn new(rng: impl RngCore + Send + 'static) -> Self {
        Self { rng: Box::new(rng) }
    }

    /// Production source backed by OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic source for tests
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Computes the next shake anchor from the current one
    pub fn next_position(&mut self, current: Point2D) -> Point2D {
        Point2D {
            x: current.x + self.offset(),
            y: current.y + self.offset(),
        }
    }

    fn offset(&mut self) -> f64 {
        self.rng.gen_range(-JITTER_MAGNITUDE..=JITTER_MAGNITUDE)
    }
}

impl Default for Jitter {
    fn default() -> Self {
        Self::from_entropy()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_jitter_is_deterministic() {
        let mut a = Jitter::seeded(42);
        let mut b = Jitter::seeded(42);
        let start = Point2D::new(670.0, 0.0);
        assert_eq!(a.next_position(start), b.next_position(start));
    }

    #[test]
    fn test_offsets_stay_within_magnitude() {
        let mut jitter = Jitter::seeded(7);
        let mut position = Point2D::new(670.0, 0.0);
        for _ in 0..100 {
            let next = jitter.next_position(position);
            assert!((next.x - position.x).abs() <= JITTER_MAGNITUDE);
            assert!((next.y - position.y).abs() <= JITTER_MAGNITUDE);
            position = next;
        }
    }
}
