//! Command-line front end for the deck generator.
//!
//! Generate all three difficulty levels from a symbol catalog:
//!
//! ```text
//! $ dobble-decks generate --symbols symbols.json --out decks.json --seed 42 --reproducible
//! Available symbols: 120
//! easy: 13 cards, 4 symbols per card
//! medium: 31 cards, 6 symbols per card
//! hard: 55 cards, 8 symbols per card
//! ```
//!
//! Check an existing decks file, optionally against the catalog it draws from:
//!
//! ```text
//! $ dobble-decks check --decks decks.json --symbols symbols.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{debug, error, warn};

use dobble_deck_gen::{
    generate_deck, missing_symbols, DeckError, DeckOutcome, DeckRequest, DecksFile, Difficulty,
    Randomness, SymbolCatalog,
};

/// Build and check Dobble-style decks.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Enable debug messages
    #[arg(short, long, global = true, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate decks and write them as a decks file
    Generate {
        /// Symbol catalog (`symbols.json`)
        #[arg(short, long)]
        symbols: PathBuf,

        /// Output decks file; printed to stdout when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Difficulty levels to generate (all when omitted)
        #[arg(short = 'f', long = "difficulty", value_parser = parse_difficulty)]
        difficulties: Vec<Difficulty>,

        /// Seed for the symbol shuffle inside each card (wall clock when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Let the seed drive trimming and symbol assignment too
        #[arg(short, long, default_value_t = false)]
        reproducible: bool,
    },

    /// Validate the decks present in a decks file
    Check {
        /// Decks file to check
        #[arg(long)]
        decks: PathBuf,

        /// Catalog the decks must draw from
        #[arg(short, long)]
        symbols: Option<PathBuf>,
    },
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    s.parse().map_err(|e: dobble_deck_gen::ConfigurationError| e.to_string())
}

fn run_generate(
    symbols: PathBuf,
    out: Option<PathBuf>,
    difficulties: Vec<Difficulty>,
    seed: Option<u64>,
    reproducible: bool,
) -> Result<bool, DeckError> {
    let catalog = SymbolCatalog::from_path(&symbols)?;
    println!("Available symbols: {}", catalog.len());

    let randomness = if reproducible { Randomness::Threaded } else { Randomness::Mixed };
    let levels = if difficulties.is_empty() { Difficulty::ALL.to_vec() } else { difficulties };

    let mut results = Vec::with_capacity(levels.len());
    let mut all_ready = true;
    for difficulty in levels {
        let request = DeckRequest { difficulty, rng_seed: seed, randomness };
        match generate_deck(&request, &catalog)? {
            DeckOutcome::Ready(result) => {
                println!(
                    "{}: {} cards, {} symbols per card",
                    difficulty, result.total_cards, result.symbols_per_card
                );
                for (i, card) in result.cards.iter().take(3).enumerate() {
                    debug!("  {}. [{}]", i + 1, card.join(", "));
                }
                results.push(result);
            }
            DeckOutcome::Rejected(report) => {
                error!("{difficulty}: {} violating pairs, deck skipped", report.violations.len());
                all_ready = false;
            }
        }
    }

    let file = DecksFile::from_results(&results);
    let missing = file.missing_levels();
    if !missing.is_empty() {
        warn!("decks file has no deck for {missing:?}; the game expects all levels");
    }
    match out {
        Some(path) => {
            file.write_to(&path)?;
            println!("Wrote {}", path.display());
        }
        None => println!("{}", file.to_json_pretty()?),
    }
    Ok(all_ready)
}

fn run_check(decks: PathBuf, symbols: Option<PathBuf>) -> Result<bool, DeckError> {
    let file = DecksFile::from_path_partial(&decks)?;
    for difficulty in file.missing_levels() {
        println!("{difficulty}: MISSING");
    }
    let catalog = symbols.map(|p| SymbolCatalog::from_path(p)).transpose()?;

    let mut ok = true;
    for (difficulty, report) in file.validate() {
        if report.valid {
            println!("{difficulty}: PASSED ({} pairs)", report.total_pairs);
        } else {
            ok = false;
            println!(
                "{difficulty}: FAILED ({} of {} pairs)",
                report.violations.len(),
                report.total_pairs
            );
            for v in report.violations.iter().take(3) {
                println!("  cards {} and {}: {} common symbols instead of 1", v.i, v.j, v.count);
            }
        }

        if let (Some(catalog), Some(deck)) = (&catalog, file.get(difficulty)) {
            let missing = missing_symbols(&deck.cards, catalog);
            if !missing.is_empty() {
                ok = false;
                println!("{difficulty}: {} symbols missing from catalog", missing.len());
            }
        }
    }
    Ok(ok)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.debug { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::Builder::from_default_env().filter_level(level).init();

    let outcome = match args.command {
        Command::Generate { symbols, out, difficulties, seed, reproducible } => {
            run_generate(symbols, out, difficulties, seed, reproducible)
        }
        Command::Check { decks, symbols } => run_check(decks, symbols),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
