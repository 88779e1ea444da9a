use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::deck_engine::models::{AbstractCard, AbstractDeck};

/// Wall-clock milliseconds, used when the caller supplies no seed.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Permute the symbols inside every card; card membership never changes.
///
/// One seeded generator runs over the cards in order, so the same `seed` and
/// the same deck always give the same output.
pub fn shuffle_cards(deck: &[AbstractCard], seed: u64) -> AbstractDeck {
    let mut rng = StdRng::seed_from_u64(seed);
    deck.iter()
        .map(|card| {
            let mut shuffled = card.clone();
            // Fisher-Yates shuffle
            for i in (1..shuffled.len()).rev() {
                let j = rng.gen_range(0..=i);
                shuffled.swap(i, j);
            }
            shuffled
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck_engine::plane::build;

    fn sorted(card: &[usize]) -> Vec<usize> {
        let mut c = card.to_vec();
        c.sort_unstable();
        c
    }

    #[test]
    fn preserves_card_membership() {
        let deck = build(5).unwrap();
        let shuffled = shuffle_cards(&deck, 42);
        assert_eq!(shuffled.len(), deck.len());
        for (before, after) in deck.iter().zip(&shuffled) {
            assert_eq!(sorted(before), sorted(after));
        }
    }

    #[test]
    fn same_seed_is_deterministic() {
        let deck = build(7).unwrap();
        assert_eq!(shuffle_cards(&deck, 99), shuffle_cards(&deck, 99));
    }

    #[test]
    fn reorders_some_cards() {
        let deck = build(7).unwrap();
        let shuffled = shuffle_cards(&deck, 12345);
        let moved = deck.iter().zip(&shuffled).filter(|(a, b)| a != b).count();
        assert!(moved > deck.len() / 2, "only {moved} of {} cards reordered", deck.len());
    }

    #[test]
    fn different_seeds_differ() {
        let deck = build(7).unwrap();
        assert_ne!(shuffle_cards(&deck, 1), shuffle_cards(&deck, 2));
    }
}
