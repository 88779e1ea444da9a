//! Loading `symbols.json` and checking decks against it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::deck_engine::{
    error::DeckError,
    models::{SymbolCatalog, SymbolEntry},
};

impl SymbolCatalog {
    /// Parse `{ "items": [ { "id", "name", "src_webp", "width", "height" } ] }`.
    pub fn from_json_str(json: &str) -> Result<Self, DeckError> {
        let catalog: SymbolCatalog = serde_json::from_str(json)?;
        debug!("loaded {} symbols", catalog.len());
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let path = path.as_ref();
        debug!("symbols file: {path:?}");
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Catalog of bare ids, mostly for tests and demos.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ids.into_iter().map(|id| SymbolEntry::with_id(id)).collect::<Vec<_>>().into()
    }
}

/// Ids used by `cards` that `catalog` does not contain, in first-seen order.
pub fn missing_symbols(cards: &[Vec<String>], catalog: &SymbolCatalog) -> Vec<String> {
    let known: HashSet<&str> = catalog.items.iter().map(|s| s.id.as_str()).collect();
    let mut reported = HashSet::new();
    let mut missing = Vec::new();
    for id in cards.iter().flatten() {
        if !known.contains(id.as_str()) && reported.insert(id.as_str()) {
            missing.push(id.clone());
        }
    }

    if !missing.is_empty() {
        warn!("missing symbols: {missing:?}");
    }
    missing
}
