use std::collections::{BTreeMap, BTreeSet};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::deck_engine::{
    error::DeckError,
    models::{AbstractCard, MappedDeck, SymbolEntry, SymbolIndex},
};

/// Distinct abstract symbols used by `deck`, in ascending order.
pub fn distinct_symbols(deck: &[AbstractCard]) -> BTreeSet<SymbolIndex> {
    deck.iter().flatten().copied().collect()
}

/// Rewrite abstract indices onto catalog ids, one distinct id per index.
///
/// The catalog is permuted with `rng`; the first `needed` entries are then
/// assigned to the distinct indices in ascending order.
pub fn map_to_symbols<R: Rng>(
    deck: &[AbstractCard],
    catalog: &[SymbolEntry],
    rng: &mut R,
) -> Result<MappedDeck, DeckError> {
    let used = distinct_symbols(deck);
    let needed = used.len();
    if catalog.len() < needed {
        return Err(DeckError::InsufficientSymbols { needed, available: catalog.len() });
    }

    let mut pool: Vec<&SymbolEntry> = catalog.iter().collect();
    pool.shuffle(rng);

    let mapping: BTreeMap<SymbolIndex, &str> = used
        .into_iter()
        .zip(pool)
        .map(|(index, entry)| (index, entry.id.as_str()))
        .collect();

    Ok(deck
        .iter()
        .map(|card| card.iter().map(|s| mapping[s].to_string()).collect())
        .collect())
}
