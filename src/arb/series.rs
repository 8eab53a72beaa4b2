use serde::Serialize;

use super::types::PriceTick;
use crate::error::SimulationError;

/// Two index-aligned price sequences, one per venue.
///
/// Both sequences always have the same length. Ticks are matched purely by
/// position; there is no timestamp reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceSeries {
    /// Prices on venue A
    a: Vec<f64>,
    /// Prices on venue B
    b: Vec<f64>,
}

impl PriceSeries {
    /// Pairs up two price sequences.
    ///
    /// # Errors
    ///
    /// Returns `SeriesLengthMismatch` if the sequences differ in length. The
    /// longer one is never truncated.
    pub fn new(a: Vec<f64>, b: Vec<f64>) -> Result<Self, SimulationError> {
        if a.len() != b.len() {
            return Err(SimulationError::SeriesLengthMismatch {
                a: a.len(),
                b: b.len(),
            });
        }
        Ok(Self { a, b })
    }

    /// Number of ticks
    #[must_use]
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// Whether the series holds no ticks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Prices on venue A, in original order
    #[must_use]
    pub fn a(&self) -> &[f64] {
        &self.a
    }

    /// Prices on venue B, in original order
    #[must_use]
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// The tick at `index`, if any
    #[must_use]
    pub fn tick(&self, index: usize) -> Option<PriceTick> {
        Some(PriceTick::new(index, *self.a.get(index)?, *self.b.get(index)?))
    }

    /// All ticks in index order
    pub fn ticks(&self) -> impl ExactSizeIterator<Item = PriceTick> + '_ {
        self.a
            .iter()
            .zip(&self.b)
            .enumerate()
            .map(|(index, (&price_a, &price_b))| PriceTick::new(index, price_a, price_b))
    }
}
