//! Core deck engine: projective plane construction, validation, and mapping.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: abstract decks, catalog, difficulty table, request/result structs |
//! | `error`     | Fatal error taxonomy |
//! | `primes`    | Primality gate for the plane order |
//! | `plane`     | Builds the `n² + n + 1` cards of the projective plane of order `n` |
//! | `validator` | Pairwise one-common-symbol check |
//! | `trimmer`   | Reduces a deck toward a target card count |
//! | `shuffle`   | Seeded Fisher-Yates shuffle inside each card |
//! | `mapper`    | Rewrites abstract indices onto catalog symbol ids |
//! | `catalog`   | `symbols.json` loading and coverage checks |
//! | `generator` | Per-difficulty pipeline `generate_deck()` and batch `generate_all()` |

pub mod catalog;
pub mod error;
pub mod generator;
pub mod mapper;
pub mod models;
pub mod plane;
pub mod primes;
pub mod shuffle;
pub mod trimmer;
pub mod validator;

// Re-export the public API surface so callers can use
// `deck_engine::generate_deck` without reaching into sub-modules.
pub use catalog::missing_symbols;
pub use error::{ConfigurationError, DeckError};
pub use generator::{generate, generate_all, generate_deck, generate_named};
pub use models::{
    AbstractCard, AbstractDeck, DeckOutcome, DeckRequest, Difficulty, DifficultyConfig,
    DifficultyResult, MappedDeck, PairViolation, Randomness, SymbolCatalog, SymbolEntry,
    SymbolIndex, ValidationReport,
};
