//! Walkthrough of the deck generator.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Abstract plane** — the 13 cards of the plane of order 3, before any
//!    symbol mapping, with their validation verdict.
//! 2. **All difficulties** — one reproducible deck per level from a small
//!    built-in catalog, showing card counts and the first cards.
//! 3. **Decks file** — the JSON the game loads, keyed by difficulty.
//!
//! ## Key concepts demonstrated
//!
//! - `DeckRequest::reproducible(difficulty, seed)` makes the whole deck
//!   deterministic; `DeckRequest::new` only seeds from the clock.
//! - Easy and medium come out smaller than their configured targets because
//!   the planes of order 3 and 5 only have 13 and 31 cards.
//! - Every two cards share exactly one symbol, before and after mapping.

use dobble_deck_gen::deck_engine::{plane, validator};
use dobble_deck_gen::{generate_deck, DeckRequest, DecksFile, Difficulty, SymbolCatalog};

const SYMBOLS: [&str; 60] = [
    "anchor", "apple", "bird", "bomb", "bottle", "cactus", "candle", "car", "carrot", "cat",
    "cheese", "clock", "clown", "clover", "cobweb", "dog", "dolphin", "dragon", "drop", "exclamation",
    "eye", "fire", "flower", "ghost", "glasses", "hammer", "heart", "igloo", "key", "knight",
    "ladybird", "leaf", "light-bulb", "lightning", "lips", "lock", "maple", "moon", "padlock", "pencil",
    "question", "scissors", "skull", "snowflake", "snowman", "spider", "splat", "sun", "target", "tortoise",
    "treble-clef", "tree", "turtle", "web", "yin-yang", "zebra", "book", "crown", "fish", "horse",
];

fn main() -> Result<(), dobble_deck_gen::DeckError> {
    // ── Abstract plane ───────────────────────────────────────────────────────
    println!();
    println!("══ Plane of order 3 ══");
    println!();
    let cards = plane::build(3)?;
    for (i, card) in cards.iter().enumerate() {
        println!("  {:>2}. {:?}", i, card);
    }
    let report = validator::validate(&cards);
    println!();
    println!("  Validation: {} ({} pairs)", if report.valid { "PASSED" } else { "FAILED" }, report.total_pairs);

    // ── All difficulties ─────────────────────────────────────────────────────
    let catalog = SymbolCatalog::from_ids(SYMBOLS);
    println!();
    println!("══ All difficulties ({} symbols available) ══", catalog.len());

    let mut results = Vec::new();
    for (difficulty, seed) in [(Difficulty::Easy, 101u64), (Difficulty::Medium, 202), (Difficulty::Hard, 303)] {
        let config = difficulty.config();
        let Some(result) = generate_deck(&DeckRequest::reproducible(difficulty, seed), &catalog)?.into_deck() else {
            println!("  {difficulty}: deck rejected");
            continue;
        };
        println!();
        println!(
            "  {}  n = {}  target = {}  cards = {}  symbols/card = {}",
            difficulty, result.n, config.target, result.total_cards, result.symbols_per_card
        );
        for (i, card) in result.cards.iter().take(3).enumerate() {
            println!("     {}. [{}]", i + 1, card.join(", "));
        }
        results.push(result);
    }

    // ── Decks file ───────────────────────────────────────────────────────────
    println!();
    println!("══ decks.json (easy only) ══");
    println!();
    let easy = DecksFile::from_results(results.iter().filter(|r| r.difficulty == Difficulty::Easy));
    println!("{}", easy.to_json_pretty()?);
    Ok(())
}
