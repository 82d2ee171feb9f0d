// src/widgets/coin.rs

use crate::core::{CoinFace, Measurement};
use rand::Rng;
use tracing::debug;

/// The spinning "quantum coin" of the superposition section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinSimulator {
    state: Measurement<CoinFace>,
}

/// Display state of the coin card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinSnapshot {
    pub state: Measurement<CoinFace>,
    /// True while the coin animation should be spinning.
    pub spinning: bool,
    /// Probability labels for |0⟩ (heads) and |1⟩ (tails).
    pub probabilities: (String, String),
    /// Empty while superposed.
    pub result_text: String,
}

impl CoinSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measures the coin. Only the first measurement after a reset draws.
    pub fn measure<R: Rng>(&mut self, rng: &mut R) -> CoinFace {
        let was_superposed = self.state.is_superposed();
        let face = self.state.collapse(rng);
        if was_superposed {
            debug!(face = %face, "Coin collapsed");
        }
        face
    }

    /// Restarts the spin with the 50/50 display.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn state(&self) -> Measurement<CoinFace> {
        self.state
    }

    /// The pair of probability labels shown under the coin.
    pub fn probabilities(&self) -> (&'static str, &'static str) {
        match self.state {
            Measurement::Superposed => ("50% |0⟩", "50% |1⟩"),
            Measurement::Collapsed(CoinFace::Heads) => ("100% |0⟩", "0% |1⟩"),
            Measurement::Collapsed(CoinFace::Tails) => ("0% |0⟩", "100% |1⟩"),
        }
    }

    pub fn snapshot(&self) -> CoinSnapshot {
        let (heads, tails) = self.probabilities();
        let result_text = match self.state {
            Measurement::Superposed => String::new(),
            Measurement::Collapsed(face) => {
                format!("Measured: {}!", face.to_string().to_uppercase())
            }
        };
        CoinSnapshot {
            state: self.state,
            spinning: self.state.is_superposed(),
            probabilities: (heads.to_string(), tails.to_string()),
            result_text,
        }
    }
}
