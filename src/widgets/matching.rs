// src/widgets/matching.rs

use crate::core::TourError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Application domain tag shared by a draggable source item and its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppDomain {
    Cryptography,
    Optimization,
    DrugDiscovery,
    MachineLearning,
}

impl AppDomain {
    pub const ALL: [AppDomain; 4] = [
        AppDomain::Cryptography,
        AppDomain::Optimization,
        AppDomain::DrugDiscovery,
        AppDomain::MachineLearning,
    ];

    /// Tag carried by both halves of a pair (`data-app` / `data-target`).
    pub fn tag(self) -> &'static str {
        match self {
            AppDomain::Cryptography => "cryptography",
            AppDomain::Optimization => "optimization",
            AppDomain::DrugDiscovery => "drug-discovery",
            AppDomain::MachineLearning => "machine-learning",
        }
    }

    /// Label of the draggable source item.
    pub fn title(self) -> &'static str {
        match self {
            AppDomain::Cryptography => "Cryptography",
            AppDomain::Optimization => "Optimization",
            AppDomain::DrugDiscovery => "Drug Discovery",
            AppDomain::MachineLearning => "Machine Learning",
        }
    }

    /// Algorithm shown on the drop target.
    pub fn algorithm(self) -> &'static str {
        match self {
            AppDomain::Cryptography => "Shor's Algorithm",
            AppDomain::Optimization => "Quantum Annealing",
            AppDomain::DrugDiscovery => "VQE Algorithm",
            AppDomain::MachineLearning => "QML Algorithms",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for AppDomain {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppDomain::ALL
            .iter()
            .copied()
            .find(|domain| domain.tag() == s)
            .ok_or_else(|| TourError::Unrecognized { kind: "application domain", value: s.to_string() })
    }
}

impl fmt::Display for AppDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Result of dropping a source item onto a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Tags differ or the target was already matched. Nothing changed.
    Rejected,
    /// The pair was matched. `completed` is true on the single match that
    /// finished the game instance.
    Matched { score: usize, completed: bool },
}

/// Display state of one drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTarget {
    pub domain: AppDomain,
    pub matched: bool,
    /// Algorithm name, or "<source> → <algorithm>" once matched.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingSnapshot {
    /// Source items still available for dragging, in display order.
    pub visible_sources: Vec<AppDomain>,
    pub targets: Vec<MatchTarget>,
    pub score: usize,
    /// "n/4"
    pub score_text: String,
}

/// Drag-the-application-onto-its-algorithm game.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchingGame {
    matched: [bool; 4],
    score: usize,
    completion_announced: bool,
}

impl MatchingGame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of pairs.
    pub fn total(&self) -> usize {
        AppDomain::ALL.len()
    }

    /// Tries to match `source` onto `target`.
    pub fn attempt_match(&mut self, source: AppDomain, target: AppDomain) -> MatchOutcome {
        if source != target || self.matched[target.index()] {
            debug!(source = %source, target = %target, "Match rejected");
            return MatchOutcome::Rejected;
        }

        self.matched[target.index()] = true;
        self.score += 1;

        let completed = self.score == self.total() && !self.completion_announced;
        if completed {
            self.completion_announced = true;
            info!(score = self.score, "All applications matched");
        }
        MatchOutcome::Matched { score: self.score, completed }
    }

    /// Clears all matches and starts a fresh game instance.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_matched(&self, target: AppDomain) -> bool {
        self.matched[target.index()]
    }

    /// A source is hidden once its target has been matched.
    pub fn is_source_visible(&self, source: AppDomain) -> bool {
        !self.matched[source.index()]
    }

    pub fn snapshot(&self) -> MatchingSnapshot {
        let visible_sources = AppDomain::ALL
            .iter()
            .copied()
            .filter(|&d| self.is_source_visible(d))
            .collect();
        let targets = AppDomain::ALL
            .iter()
            .map(|&domain| {
                let matched = self.is_matched(domain);
                let label = if matched {
                    format!("{} → {}", domain.title(), domain.algorithm())
                } else {
                    domain.algorithm().to_string()
                };
                MatchTarget { domain, matched, label }
            })
            .collect();
        MatchingSnapshot {
            visible_sources,
            targets,
            score: self.score,
            score_text: format!("{}/{}", self.score, self.total()),
        }
    }
}
