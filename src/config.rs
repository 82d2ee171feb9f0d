// src/config.rs

//! Static configuration for a tour: random seed, circuit width and an
//! optional replacement question bank.

use crate::circuits::DEFAULT_SLOTS_PER_LANE;
use crate::core::TourError;
use crate::quiz::{Question, QuestionBank};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourConfig {
    /// Seed for qubit and coin collapses. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Slots on each lane of the gate circuit.
    pub slots_per_lane: usize,
    /// Replaces the built-in question bank when present.
    pub questions: Option<Vec<Question>>,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            seed: None,
            slots_per_lane: DEFAULT_SLOTS_PER_LANE,
            questions: None,
        }
    }
}

impl TourConfig {
    /// A default config with a fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, TourError> {
        let config: TourConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TourError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|err| TourError::InvalidConfig {
            message: format!("cannot read {}: {}", path.display(), err),
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), TourError> {
        if self.slots_per_lane == 0 {
            return Err(TourError::InvalidConfig {
                message: "slots_per_lane must be at least 1".to_string(),
            });
        }
        self.question_bank().map(|_| ())
    }

    /// The question bank this config selects.
    pub fn question_bank(&self) -> Result<QuestionBank, TourError> {
        match &self.questions {
            Some(questions) => QuestionBank::new(questions.clone()),
            None => Ok(QuestionBank::builtin()),
        }
    }
}
