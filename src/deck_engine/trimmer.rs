use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::deck_engine::{error::ConfigurationError, models::AbstractDeck};

/// Reduce `deck` to `target` cards: the seed card plus `target - 1` cards
/// sampled from the rest.
///
/// A deck already at or below `target` is returned unchanged. A target smaller
/// than the card size is rejected even then.
pub fn trim<R: Rng>(
    deck: AbstractDeck,
    target: usize,
    rng: &mut R,
) -> Result<AbstractDeck, ConfigurationError> {
    let symbols_per_card = deck.first().map_or(0, Vec::len);
    if target < symbols_per_card {
        return Err(ConfigurationError::TargetBelowCardSize { target, symbols_per_card });
    }
    if deck.len() <= target {
        return Ok(deck);
    }

    let original = deck.len();
    let mut cards = deck.into_iter();
    let mut trimmed = Vec::with_capacity(target);
    trimmed.extend(cards.next());

    let mut rest: Vec<_> = cards.collect();
    rest.shuffle(rng);
    rest.truncate(target.saturating_sub(1));
    trimmed.extend(rest);

    debug!("trimmed deck from {original} to {} cards", trimmed.len());
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck_engine::{plane::build, validator::validate};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn no_op_when_deck_fits() {
        let mut rng = StdRng::seed_from_u64(1);
        let deck = build(3).unwrap();
        assert_eq!(trim(deck.clone(), 13, &mut rng).unwrap(), deck);
        assert_eq!(trim(deck.clone(), 15, &mut rng).unwrap(), deck);
    }

    #[test]
    fn keeps_seed_card_and_hits_target() {
        let deck = build(7).unwrap();
        for seed in [1, 42, 999] {
            let mut rng = StdRng::seed_from_u64(seed);
            let trimmed = trim(deck.clone(), 55, &mut rng).unwrap();
            assert_eq!(trimmed.len(), 55);
            assert_eq!(trimmed[0], deck[0]);
            assert!(trimmed[1..].iter().all(|c| deck[1..].contains(c)));
            assert!(validate(&trimmed).valid);
        }
    }

    #[test]
    fn trims_down_to_card_size() {
        let mut rng = StdRng::seed_from_u64(5);
        let trimmed = trim(build(5).unwrap(), 6, &mut rng).unwrap();
        assert_eq!(trimmed.len(), 6);
        assert!(validate(&trimmed).valid);
    }

    #[test]
    fn rejects_target_below_card_size() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = trim(build(5).unwrap(), 5, &mut rng).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::TargetBelowCardSize { target: 5, symbols_per_card: 6 }
        );
    }

    #[test]
    fn zero_target_with_empty_cards_yields_seed_card_only() {
        let mut rng = StdRng::seed_from_u64(2);
        let trimmed = trim(vec![vec![], vec![]], 0, &mut rng).unwrap();
        assert_eq!(trimmed, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn same_rng_state_selects_same_cards() {
        let deck = build(7).unwrap();
        let a = trim(deck.clone(), 20, &mut StdRng::seed_from_u64(77)).unwrap();
        let b = trim(deck, 20, &mut StdRng::seed_from_u64(77)).unwrap();
        assert_eq!(a, b);
    }
}
