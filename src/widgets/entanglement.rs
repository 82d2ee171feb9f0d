// src/widgets/entanglement.rs

use crate::core::Spin;
use tracing::debug;

/// Two particles whose spins always move together.
///
/// Touching either particle flips both, so the pair shows correlated
/// (same-direction) outcomes rather than the anti-correlated statistics of a
/// physical singlet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntangledPair {
    first: Spin,
    second: Spin,
}

impl EntangledPair {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips both spins in lockstep.
    pub fn interact(&mut self) -> (Spin, Spin) {
        self.first = self.first.flipped();
        self.second = self.second.flipped();
        debug!(first = %self.first, second = %self.second, "Entangled pair flipped");
        self.spins()
    }

    /// Both particles back to spin up.
    pub fn reset(&mut self) {
        self.first = Spin::Up;
        self.second = Spin::Up;
    }

    pub fn spins(&self) -> (Spin, Spin) {
        (self.first, self.second)
    }
}
