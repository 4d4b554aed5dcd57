//! Content panels and the breed carousel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::content::{Breed, BREEDS};
use crate::error::CatInfoError;

/// Identifies one of the three mutually exclusive content panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TabId {
    #[default]
    #[serde(rename = "characteristics")]
    Characteristics,
    #[serde(rename = "breeds")]
    Breeds,
    #[serde(rename = "funFacts")]
    FunFacts,
}

impl TabId {
    /// All panels in display order
    pub const ALL: [TabId; 3] = [TabId::Characteristics, TabId::Breeds, TabId::FunFacts];

    /// Canonical id used in routes
    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::Characteristics => "characteristics",
            TabId::Breeds => "breeds",
            TabId::FunFacts => "funFacts",
        }
    }

    /// Tab trigger label
    pub fn label(&self) -> &'static str {
        match self {
            TabId::Characteristics => "Characteristics",
            TabId::Breeds => "Popular Breeds",
            TabId::FunFacts => "Fun Facts",
        }
    }

    /// Card heading inside the panel
    pub fn title(&self) -> &'static str {
        match self {
            TabId::Characteristics => "Characteristics of Cats",
            TabId::Breeds => "Popular Cat Breeds",
            TabId::FunFacts => "Fun Cat Facts",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TabId::Characteristics => "What makes cats unique?",
            TabId::Breeds => "Some well-known cat breeds around the world",
            TabId::FunFacts => "Interesting tidbits about our feline friends",
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TabId {
    type Err = CatInfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TabId::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| CatInfoError::UnknownTab(s.to_string()))
    }
}

/// Cursor over the fixed breed list. Wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BreedCarousel {
    index: usize,
}

impl BreedCarousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static Breed {
        &BREEDS[self.index]
    }

    pub fn next(&mut self) -> &'static Breed {
        self.index = (self.index + 1) % BREEDS.len();
        self.current()
    }

    pub fn previous(&mut self) -> &'static Breed {
        self.index = (self.index + BREEDS.len() - 1) % BREEDS.len();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_ids_round_trip_through_str() {
        for tab in TabId::ALL {
            assert_eq!(tab.to_string().parse::<TabId>().unwrap(), tab);
        }
    }

    #[test]
    fn unknown_tab_rejected() {
        assert_eq!(
            "dogs".parse::<TabId>(),
            Err(CatInfoError::UnknownTab("dogs".into()))
        );
        // ids are case sensitive
        assert!("funfacts".parse::<TabId>().is_err());
    }

    #[test]
    fn default_tab_is_characteristics() {
        assert_eq!(TabId::default(), TabId::Characteristics);
    }

    #[test]
    fn serde_uses_route_ids() {
        let json = serde_json::to_string(&TabId::FunFacts).unwrap();
        assert_eq!(json, "\"funFacts\"");
    }

    #[test]
    fn carousel_wraps_forward() {
        let mut carousel = BreedCarousel::new();
        for _ in 0..5 {
            carousel.next();
        }
        assert_eq!(carousel.current().name, "Sphynx");
        assert_eq!(carousel.next().name, "Siamese");
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn carousel_wraps_backward() {
        let mut carousel = BreedCarousel::new();
        assert_eq!(carousel.previous().name, "Sphynx");
        assert_eq!(carousel.index(), 5);
        assert_eq!(carousel.previous().name, "British Shorthair");
    }
}
