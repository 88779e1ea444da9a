use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::deck_engine::error::ConfigurationError;

// ---------------------------------------------------------------------------
// Abstract deck primitives
// ---------------------------------------------------------------------------

/// Placeholder symbol produced by the plane builder, later mapped to a catalog id.
pub type SymbolIndex = usize;

/// One card of `n + 1` abstract symbols. Order carries no meaning until shuffled.
pub type AbstractCard = Vec<SymbolIndex>;

/// Card 0 is always the seed card `[0, 1, .., n]`.
pub type AbstractDeck = Vec<AbstractCard>;

/// Cards rewritten onto catalog symbol ids.
pub type MappedDeck = Vec<Vec<String>>;

// ---------------------------------------------------------------------------
// Symbol catalog
// ---------------------------------------------------------------------------

/// One drawable symbol as listed in `symbols.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Image reference, e.g. `symbols/book.webp`.
    #[serde(rename = "src_webp", default)]
    pub image: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

impl SymbolEntry {
    /// Entry with only an id; the generator never looks at the other fields.
    pub fn with_id(id: impl Into<String>) -> Self {
        let id = id.into();
        SymbolEntry {
            name: id.clone(),
            image: format!("symbols/{id}.webp"),
            id,
            width: 0,
            height: 0,
        }
    }
}

/// Externally owned, read-only list of symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolCatalog {
    pub items: Vec<SymbolEntry>,
}

impl SymbolCatalog {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|s| s.id == id)
    }
}

impl From<Vec<SymbolEntry>> for SymbolCatalog {
    fn from(items: Vec<SymbolEntry>) -> Self {
        SymbolCatalog { items }
    }
}

// ---------------------------------------------------------------------------
// Difficulty table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Prime order and nominal card count for one difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    pub order: usize,
    pub target: usize,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Fixed configuration table.
    ///
    /// Easy and medium targets exceed the plane size (13 and 31 cards), so
    /// only hard ever trims. Kept as configured until the table is revised.
    pub fn config(self) -> DifficultyConfig {
        match self {
            Difficulty::Easy   => DifficultyConfig { order: 3, target: 15 },
            Difficulty::Medium => DifficultyConfig { order: 5, target: 33 },
            Difficulty::Hard   => DifficultyConfig { order: 7, target: 55 },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy   => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard   => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy"   => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard"   => Ok(Difficulty::Hard),
            _ => Err(ConfigurationError::UnknownDifficulty(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Where the random draws of one generation call come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Randomness {
    /// Only the intra-card shuffle is seeded; trimming and symbol assignment
    /// draw from entropy.
    #[default]
    Mixed,
    /// The request seed drives every random step, so the whole deck is
    /// reproducible.
    Threaded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckRequest {
    pub difficulty: Difficulty,
    /// Seed for the intra-card shuffle. `None` falls back to wall-clock time.
    pub rng_seed: Option<u64>,
    pub randomness: Randomness,
}

impl DeckRequest {
    /// Request with time-based seeding and mixed randomness.
    pub fn new(difficulty: Difficulty) -> Self {
        DeckRequest { difficulty, rng_seed: None, randomness: Randomness::Mixed }
    }

    /// Fully reproducible request: `seed` drives every random step.
    pub fn reproducible(difficulty: Difficulty, seed: u64) -> Self {
        DeckRequest { difficulty, rng_seed: Some(seed), randomness: Randomness::Threaded }
    }
}

/// A pair of cards that does not share exactly one symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairViolation<T = SymbolIndex> {
    pub i: usize,
    pub j: usize,
    pub card1: Vec<T>,
    pub card2: Vec<T>,
    pub common: Vec<T>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport<T = SymbolIndex> {
    pub valid: bool,
    pub violations: Vec<PairViolation<T>>,
    pub total_pairs: usize,
}

/// Final deck for one difficulty, ready for the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyResult {
    pub difficulty: Difficulty,
    pub n: usize,
    pub symbols_per_card: usize,
    pub total_cards: usize,
    pub cards: MappedDeck,
    /// Report of the last validation pass (the trimmed deck when trimming ran).
    pub validation: ValidationReport,
}

/// Outcome of one generation call that did not hit a fatal error.
#[derive(Debug, Clone)]
pub enum DeckOutcome {
    Ready(DifficultyResult),
    /// The constructed deck failed pairwise validation.
    Rejected(ValidationReport),
}

impl DeckOutcome {
    pub fn into_deck(self) -> Option<DifficultyResult> {
        match self {
            DeckOutcome::Ready(result) => Some(result),
            DeckOutcome::Rejected(_) => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, DeckOutcome::Ready(_))
    }
}
