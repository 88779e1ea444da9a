use thiserror::Error;

use crate::deck_engine::models::Difficulty;

/// Invalid generation parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("trim target {target} is smaller than the {symbols_per_card} symbols on each card")]
    TargetBelowCardSize { target: usize, symbols_per_card: usize },

    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),
}

/// Fatal errors of a generation or I/O call.
///
/// A deck that fails pairwise validation is not an error: see
/// [`DeckOutcome::Rejected`](crate::deck_engine::models::DeckOutcome).
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("order must be a prime number, got {order}")]
    InvalidDomain { order: usize },

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("deck needs {needed} symbols, catalog only has {available}")]
    InsufficientSymbols { needed: usize, available: usize },

    #[error("decks file has no deck for difficulty '{0}'")]
    MissingDeck(Difficulty),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
