// src/widgets/mod.rs

//! The small interactive demos shown inside the tour sections.
//!
//! Each widget is a plain state machine with action methods and a read-only
//! snapshot for rendering. None of them touch a rendering surface; randomness
//! is always injected by the caller.

pub mod bit_qubit;
pub mod coin;
pub mod entanglement;
pub mod matching;

pub use bit_qubit::{BitQubitDemo, BitQubitSnapshot};
pub use coin::{CoinSimulator, CoinSnapshot};
pub use entanglement::EntangledPair;
pub use matching::{AppDomain, MatchOutcome, MatchTarget, MatchingGame, MatchingSnapshot};
