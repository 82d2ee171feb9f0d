// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod section;
pub mod state;

// Re-export public types for convenient access via `qtour::core::TypeName`
pub use error::TourError;
pub use section::Section;
pub use state::{BasisLabel, Bit, CoinFace, Measurement, Outcome, Spin};
