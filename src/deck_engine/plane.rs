//! Projective plane construction.
//!
//! Symbols are the points and cards are the lines of the projective plane of
//! prime order `n`. The deck is laid out in three blocks:
//!
//! | Block | Cards | First symbol |
//! |-------|-------|--------------|
//! | seed  | 1     | `[0, 1, .., n]` |
//! | line  | `n`   | `0`, then `n` fresh symbols |
//! | grid  | `n²`  | `i` in `1..=n`, then one symbol from each line card |
//!
//! Grid card `(i, j)` takes position `1 + (j + i·k) mod n` of line card `k`.
//! Distinct slopes `i` meet each other exactly once only when `n` is prime.

use log::debug;

use crate::deck_engine::{
    error::DeckError,
    models::{AbstractCard, AbstractDeck, SymbolIndex},
    primes::is_prime,
};

/// Cards in the full plane of order `n`.
pub fn plane_size(order: usize) -> usize {
    order * order + order + 1
}

/// Build the `n² + n + 1` cards of the projective plane of order `n`.
///
/// Fails with [`DeckError::InvalidDomain`] before any work when `n` is not prime.
pub fn build(order: usize) -> Result<AbstractDeck, DeckError> {
    if !is_prime(order) {
        return Err(DeckError::InvalidDomain { order });
    }

    let n = order;
    let mut cards: AbstractDeck = Vec::with_capacity(plane_size(n));
    let mut next_symbol: SymbolIndex = 0;
    let mut fresh = || {
        let s = next_symbol;
        next_symbol += 1;
        s
    };

    // Seed card
    let seed_card: AbstractCard = (0..=n).map(|_| fresh()).collect();
    cards.push(seed_card);

    // Line block
    for _ in 1..=n {
        let mut card = Vec::with_capacity(n + 1);
        card.push(0);
        card.extend((0..n).map(|_| fresh()));
        cards.push(card);
    }

    // Grid block
    for i in 1..=n {
        for j in 0..n {
            let mut card = Vec::with_capacity(n + 1);
            card.push(cards[0][i]);
            for k in 0..n {
                let line = 1 + k;
                let pos = 1 + (j + i * k) % n;
                card.push(cards[line][pos]);
            }
            cards.push(card);
        }
    }

    debug!("built plane of order {n}: {} cards, {} symbols each", cards.len(), n + 1);
    Ok(cards)
}
