// src/core/state.rs

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A classical bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Bit {
    #[default]
    Zero,
    One,
}

impl Bit {
    /// The opposite value.
    pub fn flipped(self) -> Bit {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }

    /// Numeric value, 0 or 1.
    pub fn value(self) -> u8 {
        match self {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Face shown by the superposition coin once measured. Heads reads as |0⟩.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinFace {
    Heads,
    Tails,
}

impl fmt::Display for CoinFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinFace::Heads => f.write_str("heads"),
            CoinFace::Tails => f.write_str("tails"),
        }
    }
}

/// Spin of one entangled particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Spin {
    #[default]
    Up,
    Down,
}

impl Spin {
    /// The opposite spin.
    pub fn flipped(self) -> Spin {
        match self {
            Spin::Up => Spin::Down,
            Spin::Down => Spin::Up,
        }
    }
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spin::Up => f.write_str("up"),
            Spin::Down => f.write_str("down"),
        }
    }
}

/// Basis-state label produced by the toy circuit evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BasisLabel {
    #[default]
    Zero,
    One,
    Plus,
}

impl fmt::Display for BasisLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasisLabel::Zero => f.write_str("|0⟩"),
            BasisLabel::One => f.write_str("|1⟩"),
            BasisLabel::Plus => f.write_str("|+⟩"),
        }
    }
}

/// A value that a fair two-way collapse can produce.
pub trait Outcome: Copy {
    /// Maps a fair coin toss onto this outcome type. `first` has probability 0.5.
    fn from_toss(first: bool) -> Self;
}

impl Outcome for Bit {
    fn from_toss(first: bool) -> Self {
        if first { Bit::Zero } else { Bit::One }
    }
}

impl Outcome for CoinFace {
    fn from_toss(first: bool) -> Self {
        if first { CoinFace::Heads } else { CoinFace::Tails }
    }
}

/// Demo-sense superposition: no value until measured, then a fixed value
/// until an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement<T> {
    Superposed,
    Collapsed(T),
}

impl<T> Default for Measurement<T> {
    fn default() -> Self {
        Measurement::Superposed
    }
}

impl<T: Outcome> Measurement<T> {
    /// Collapses to a uniformly random outcome if still superposed.
    ///
    /// Once collapsed the stored value is returned unchanged and `rng` is not
    /// consulted, so repeated measurements agree.
    pub fn collapse<R: Rng>(&mut self, rng: &mut R) -> T {
        match *self {
            Measurement::Collapsed(value) => value,
            Measurement::Superposed => {
                let value = T::from_toss(rng.random_bool(0.5));
                *self = Measurement::Collapsed(value);
                value
            }
        }
    }

    /// Returns to superposition, discarding any collapsed value.
    pub fn reset(&mut self) {
        *self = Measurement::Superposed;
    }

    /// The collapsed value, if any.
    pub fn value(&self) -> Option<T> {
        match *self {
            Measurement::Collapsed(value) => Some(value),
            Measurement::Superposed => None,
        }
    }

    pub fn is_superposed(&self) -> bool {
        matches!(self, Measurement::Superposed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_collapse_is_sticky_until_reset() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut m: Measurement<Bit> = Measurement::default();
        assert!(m.is_superposed());

        let first = m.collapse(&mut rng);
        for _ in 0..20 {
            assert_eq!(m.collapse(&mut rng), first);
        }
        assert_eq!(m.value(), Some(first));

        m.reset();
        assert!(m.is_superposed());
        assert_eq!(m.value(), None);
    }

    #[test]
    fn test_basis_label_display() {
        assert_eq!(BasisLabel::Zero.to_string(), "|0⟩");
        assert_eq!(BasisLabel::One.to_string(), "|1⟩");
        assert_eq!(BasisLabel::Plus.to_string(), "|+⟩");
    }
}
