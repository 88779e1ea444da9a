//! # dobble_deck_gen
//!
//! Offline generator for "spot the match" card decks, where every two cards
//! share exactly one symbol.
//!
//! ## How it works
//!
//! 1. The cards of the projective plane of prime order `n` are built over
//!    abstract symbol indices: `n² + n + 1` cards of `n + 1` symbols each.
//! 2. Every pair of cards is checked for exactly one common symbol.
//! 3. The deck is trimmed toward the card count configured for the difficulty,
//!    always keeping the first (seed) card, and checked again.
//! 4. Symbols inside each card are shuffled with a seeded generator.
//! 5. Abstract indices are mapped one-to-one onto ids from a symbol catalog.
//!
//! | Difficulty | `n` | Symbols per card | Target cards |
//! |------------|-----|------------------|--------------|
//! | easy       | 3   | 4                | 15 (plane has 13) |
//! | medium     | 5   | 6                | 33 (plane has 31) |
//! | hard       | 7   | 8                | 55 (plane has 57) |
//!
//! ## Quick start
//!
//! ```rust
//! use dobble_deck_gen::{generate_deck, DeckRequest, Difficulty, SymbolCatalog};
//!
//! let catalog = SymbolCatalog::from_ids((0..60).map(|i| format!("symbol-{i}")));
//!
//! // Same seed, same deck: the seed also drives trimming and symbol assignment.
//! let request = DeckRequest::reproducible(Difficulty::Hard, 42);
//! let deck = generate_deck(&request, &catalog)?
//!     .into_deck()
//!     .expect("plane of order 7 is valid");
//!
//! assert_eq!(deck.total_cards, 55);
//! assert_eq!(deck.symbols_per_card, 8);
//! assert!(deck.validation.valid);
//! # Ok::<(), dobble_deck_gen::DeckError>(())
//! ```

pub mod deck_engine;
pub mod decks_file;

// Convenience re-exports so callers can use `dobble_deck_gen::generate_deck`
// directly without reaching into `deck_engine::`.
pub use deck_engine::{
    generate, generate_all, generate_deck, generate_named, missing_symbols, ConfigurationError,
    DeckError, DeckOutcome, DeckRequest, Difficulty, DifficultyResult, MappedDeck, Randomness,
    SymbolCatalog, SymbolEntry, ValidationReport,
};
pub use decks_file::DecksFile;
