//! The `decks.json` format consumed by the game:
//!
//! ```json
//! { "easy": { "cards": [["cat", "sun", ...], ...] }, "medium": {...}, "hard": {...} }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::deck_engine::{
    error::DeckError,
    models::{Difficulty, DifficultyResult, MappedDeck, ValidationReport},
    validator::validate,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredDeck {
    pub cards: MappedDeck,
}

/// Precomputed decks keyed by difficulty name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecksFile {
    pub decks: BTreeMap<Difficulty, StoredDeck>,
}

impl DecksFile {
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a DifficultyResult>) -> Self {
        let decks = results
            .into_iter()
            .map(|r| (r.difficulty, StoredDeck { cards: r.cards.clone() }))
            .collect();
        DecksFile { decks }
    }

    pub fn get(&self, difficulty: Difficulty) -> Option<&StoredDeck> {
        self.decks.get(&difficulty)
    }

    /// Parse a decks file; every difficulty level must be present.
    pub fn from_json_str(json: &str) -> Result<Self, DeckError> {
        let file = Self::from_json_str_partial(json)?;
        if let Some(&missing) = file.missing_levels().first() {
            return Err(DeckError::MissingDeck(missing));
        }
        Ok(file)
    }

    /// Parse a decks file that may hold only some of the difficulty levels.
    pub fn from_json_str_partial(json: &str) -> Result<Self, DeckError> {
        let file: DecksFile = serde_json::from_str(json)?;
        debug!("loaded decks: {:?}", file.decks.keys().collect::<Vec<_>>());
        Ok(file)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let path = path.as_ref();
        debug!("decks file: {path:?}");
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn from_path_partial(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let path = path.as_ref();
        debug!("decks file: {path:?}");
        Self::from_json_str_partial(&fs::read_to_string(path)?)
    }

    /// Difficulty levels with no stored deck, in table order.
    pub fn missing_levels(&self) -> Vec<Difficulty> {
        Difficulty::ALL.into_iter().filter(|d| !self.decks.contains_key(d)).collect()
    }

    pub fn to_json_pretty(&self) -> Result<String, DeckError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), DeckError> {
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }

    /// Pairwise check of every stored deck.
    pub fn validate(&self) -> Vec<(Difficulty, ValidationReport<String>)> {
        self.decks
            .iter()
            .map(|(&difficulty, deck)| (difficulty, validate(&deck.cards)))
            .collect()
    }
}
