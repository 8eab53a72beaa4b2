//! Random-walk price source.
//!
//! Produces two independent walks starting from the same price. Every step
//! each venue moves up with probability `up_probability`, otherwise down, by
//! a uniform amount in `[0, 2)`. Stored prices are rounded to cents.
//!
//! The engine never depends on this module; it only consumes the resulting
//! [`PriceSeries`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::arb::series::PriceSeries;
use crate::error::SimulationError;

/// Largest move of a single step
const MAX_STEP: f64 = 2.0;

/// Parameters of a random walk
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RandomWalk {
    /// Starting price of both venues
    pub initial_price: f64,
    /// Probability that a step moves the price up
    pub up_probability: f64,
    /// Number of ticks to generate
    pub steps: usize,
    /// Seed for a reproducible walk; a fresh OS seed is used when `None`
    pub seed: Option<u64>,
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self {
            initial_price: 100.0,
            up_probability: 0.5,
            steps: 100,
            seed: None,
        }
    }
}

impl RandomWalk {
    /// Sets the number of ticks.
    #[must_use]
    pub const fn with_steps(self, steps: usize) -> Self {
        Self { steps, ..self }
    }

    /// Makes the walk reproducible.
    #[must_use]
    pub const fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Generates both series.
    ///
    /// # Errors
    ///
    /// Returns `InvalidProbability` if `up_probability` is outside `[0, 1]`
    pub fn generate(&self) -> Result<PriceSeries, SimulationError> {
        if !(0.0..=1.0).contains(&self.up_probability) {
            return Err(SimulationError::InvalidProbability(self.up_probability));
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut price_a = self.initial_price;
        let mut price_b = self.initial_price;
        let mut a = Vec::with_capacity(self.steps);
        let mut b = Vec::with_capacity(self.steps);

        for _ in 0..self.steps {
            price_a += self.step(&mut rng);
            price_b += self.step(&mut rng);
            a.push(round_cents(price_a));
            b.push(round_cents(price_b));
        }

        PriceSeries::new(a, b)
    }

    /// One signed price move
    fn step<R: Rng>(&self, rng: &mut R) -> f64 {
        let sign = if rng.random_bool(self.up_probability) {
            1.0
        } else {
            -1.0
        };
        sign * rng.random_range(0.0..MAX_STEP)
    }
}

/// Rounds a price to two decimals
fn round_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_walk_is_reproducible() {
        let walk = RandomWalk::default().with_steps(200).with_seed(11);
        assert_eq!(walk.generate().unwrap(), walk.generate().unwrap());

        let other = walk.with_seed(12).generate().unwrap();
        assert_ne!(walk.generate().unwrap(), other);
    }

    #[test]
    fn test_steps_are_bounded() {
        let series = RandomWalk::default().with_steps(500).with_seed(3).generate().unwrap();
        assert_eq!(series.len(), 500);

        for prices in [series.a(), series.b()] {
            let mut previous = 100.0;
            for &price in prices {
                // rounding can add at most a cent to each side
                assert!((price - previous).abs() <= MAX_STEP + 0.02);
                assert_eq!(price, round_cents(price));
                previous = price;
            }
        }
    }

    #[test]
    fn test_one_sided_walks() {
        let up = RandomWalk {
            up_probability: 1.0,
            ..RandomWalk::default()
        }
        .with_seed(5)
        .generate()
        .unwrap();
        assert!(up.a().windows(2).all(|w| w[1] >= w[0]));
        assert!(up.b().windows(2).all(|w| w[1] >= w[0]));

        let down = RandomWalk {
            up_probability: 0.0,
            ..RandomWalk::default()
        }
        .with_seed(5)
        .generate()
        .unwrap();
        assert!(down.a().windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn test_invalid_probability() {
        let walk = RandomWalk {
            up_probability: 1.5,
            ..RandomWalk::default()
        };
        assert_eq!(
            walk.generate().err().unwrap(),
            SimulationError::InvalidProbability(1.5)
        );
    }

    #[test]
    fn test_no_steps() {
        let series = RandomWalk::default().with_steps(0).generate().unwrap();
        assert!(series.is_empty());
    }
}
