// src/widgets/bit_qubit.rs

use crate::core::{Bit, Measurement};
use rand::Rng;
use tracing::debug;

/// Side-by-side classical bit and measurable qubit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BitQubitDemo {
    bit: Bit,
    qubit: Measurement<Bit>,
}

/// What the bit/qubit card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitQubitSnapshot {
    pub bit: Bit,
    pub qubit: Measurement<Bit>,
    /// "|0⟩ + |1⟩" while superposed, "|v⟩" after measurement.
    pub qubit_label: String,
}

impl BitQubitDemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the classical bit. Always succeeds.
    pub fn flip_bit(&mut self) -> Bit {
        self.bit = self.bit.flipped();
        debug!(bit = %self.bit, "Bit flipped");
        self.bit
    }

    /// Measures the qubit, collapsing it on the first call only.
    pub fn measure_qubit<R: Rng>(&mut self, rng: &mut R) -> Bit {
        let was_superposed = self.qubit.is_superposed();
        let value = self.qubit.collapse(rng);
        if was_superposed {
            debug!(value = %value, "Qubit collapsed");
        }
        value
    }

    /// Puts the qubit back into superposition.
    pub fn reset_qubit(&mut self) {
        self.qubit.reset();
    }

    pub fn bit(&self) -> Bit {
        self.bit
    }

    pub fn qubit(&self) -> Measurement<Bit> {
        self.qubit
    }

    pub fn snapshot(&self) -> BitQubitSnapshot {
        let qubit_label = match self.qubit {
            Measurement::Superposed => "|0⟩ + |1⟩".to_string(),
            Measurement::Collapsed(value) => format!("|{}⟩", value),
        };
        BitQubitSnapshot {
            bit: self.bit,
            qubit: self.qubit,
            qubit_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_flip_bit_toggles() {
        let mut demo = BitQubitDemo::new();
        assert_eq!(demo.bit(), Bit::Zero);
        assert_eq!(demo.flip_bit(), Bit::One);
        assert_eq!(demo.flip_bit(), Bit::Zero);
    }

    #[test]
    fn test_qubit_label_follows_measurement() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut demo = BitQubitDemo::new();
        assert_eq!(demo.snapshot().qubit_label, "|0⟩ + |1⟩");

        let value = demo.measure_qubit(&mut rng);
        assert_eq!(demo.snapshot().qubit_label, format!("|{}⟩", value.value()));

        demo.reset_qubit();
        assert_eq!(demo.snapshot().qubit_label, "|0⟩ + |1⟩");
    }
}
