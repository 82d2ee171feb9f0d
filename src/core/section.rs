// src/core/section.rs

use super::error::TourError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One page of the tour. The declaration order is the tour order and drives
/// the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Home,
    Introduction,
    Superposition,
    Entanglement,
    Gates,
    Applications,
    Quiz,
}

impl Section {
    /// Every section, in tour order.
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::Introduction,
        Section::Superposition,
        Section::Entanglement,
        Section::Gates,
        Section::Applications,
        Section::Quiz,
    ];

    /// The id used in links and progress items (`data-section`).
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Introduction => "introduction",
            Section::Superposition => "superposition",
            Section::Entanglement => "entanglement",
            Section::Gates => "gates",
            Section::Applications => "applications",
            Section::Quiz => "quiz",
        }
    }

    /// Position within [`Section::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The section after this one, if any.
    pub fn next(self) -> Option<Section> {
        Section::ALL.get(self.index() + 1).copied()
    }
}

impl FromStr for Section {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.id() == s)
            .ok_or_else(|| TourError::UnknownSection { id: s.to_string() })
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_through_from_str() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        assert_eq!(
            "lobby".parse::<Section>(),
            Err(TourError::UnknownSection { id: "lobby".to_string() })
        );
        // ids are case sensitive, as in the page markup
        assert!("Home".parse::<Section>().is_err());
    }

    #[test]
    fn test_order_and_next() {
        assert_eq!(Section::Home.index(), 0);
        assert_eq!(Section::Quiz.index(), Section::ALL.len() - 1);
        assert_eq!(Section::Gates.next(), Some(Section::Applications));
        assert_eq!(Section::Quiz.next(), None);
    }
}
