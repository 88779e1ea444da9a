use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::deck_engine::{
    error::DeckError,
    mapper::map_to_symbols,
    models::{
        AbstractDeck, DeckOutcome, DeckRequest, Difficulty, DifficultyConfig, DifficultyResult,
        Randomness, SymbolCatalog, ValidationReport,
    },
    plane,
    shuffle::{clock_seed, shuffle_cards},
    trimmer::trim,
    validator::validate,
};

/// Offset that separates the sampling stream from the shuffle stream when one
/// seed drives both.
const SAMPLER_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Log the first few violating pairs of a failed validation.
fn report_violations(difficulty: Difficulty, report: &ValidationReport) {
    warn!(
        "{difficulty} deck failed validation: {} of {} pairs violate the one-match rule",
        report.violations.len(),
        report.total_pairs
    );
    for v in report.violations.iter().take(3) {
        warn!("  cards {} and {}: {} common symbols instead of 1", v.i, v.j, v.count);
    }
}

/// Build, check, trim, shuffle and map a deck for one difficulty level.
///
/// Fatal problems (non-prime order, bad trim target, small catalog) are
/// returned as errors. A deck that fails pairwise validation comes back as
/// [`DeckOutcome::Rejected`] carrying the report.
pub fn generate_deck(
    request: &DeckRequest,
    catalog: &SymbolCatalog,
) -> Result<DeckOutcome, DeckError> {
    let config = request.difficulty.config();
    info!(
        "generating {} deck: n = {}, target = {} cards",
        request.difficulty, config.order, config.target
    );
    let cards = plane::build(config.order)?;
    finish_deck(request, config, cards, catalog)
}

/// Everything after construction: validation, trimming, shuffling and mapping.
pub(crate) fn finish_deck(
    request: &DeckRequest,
    config: DifficultyConfig,
    cards: AbstractDeck,
    catalog: &SymbolCatalog,
) -> Result<DeckOutcome, DeckError> {
    let difficulty = request.difficulty;
    let mut validation = validate(&cards);
    if !validation.valid {
        report_violations(difficulty, &validation);
        return Ok(DeckOutcome::Rejected(validation));
    }
    debug!("{difficulty}: {} cards passed {} pair checks", cards.len(), validation.total_pairs);

    let seed = request.rng_seed.unwrap_or_else(clock_seed);
    let mut sampler = match request.randomness {
        Randomness::Mixed    => StdRng::from_entropy(),
        Randomness::Threaded => StdRng::seed_from_u64(seed.wrapping_add(SAMPLER_STREAM)),
    };

    let raw_len = cards.len();
    let cards = trim(cards, config.target, &mut sampler)?;
    if cards.len() < raw_len {
        info!("{difficulty}: trimmed from {raw_len} to {} cards", cards.len());
        validation = validate(&cards);
        if !validation.valid {
            report_violations(difficulty, &validation);
            return Ok(DeckOutcome::Rejected(validation));
        }
    }

    let shuffled = shuffle_cards(&cards, seed);
    let mapped = map_to_symbols(&shuffled, &catalog.items, &mut sampler)?;
    debug!("{difficulty}: symbols shuffled and mapped (seed {seed})");

    Ok(DeckOutcome::Ready(DifficultyResult {
        difficulty,
        n: config.order,
        symbols_per_card: config.order + 1,
        total_cards: mapped.len(),
        cards: mapped,
        validation,
    }))
}

/// Generate one difficulty with time-based seeding.
///
/// `Ok(None)` means the constructed deck failed validation; the violations
/// have been logged.
pub fn generate(
    difficulty: Difficulty,
    catalog: &SymbolCatalog,
) -> Result<Option<DifficultyResult>, DeckError> {
    generate_deck(&DeckRequest::new(difficulty), catalog).map(DeckOutcome::into_deck)
}

/// Like [`generate`], with the difficulty given by name.
pub fn generate_named(
    name: &str,
    catalog: &SymbolCatalog,
) -> Result<Option<DifficultyResult>, DeckError> {
    generate(name.parse()?, catalog)
}

/// Generate every difficulty in table order.
///
/// Fatal errors stop the batch; rejected decks are skipped so the remaining
/// levels still come out.
pub fn generate_all(
    catalog: &SymbolCatalog,
    rng_seed: Option<u64>,
    randomness: Randomness,
) -> Result<Vec<DifficultyResult>, DeckError> {
    collect_ready(|difficulty| {
        generate_deck(&DeckRequest { difficulty, rng_seed, randomness }, catalog)
    })
}

/// Run `outcome_for` over every difficulty, keeping the ready decks.
pub(crate) fn collect_ready<F>(mut outcome_for: F) -> Result<Vec<DifficultyResult>, DeckError>
where
    F: FnMut(Difficulty) -> Result<DeckOutcome, DeckError>,
{
    let mut results = Vec::with_capacity(Difficulty::ALL.len());
    for difficulty in Difficulty::ALL {
        match outcome_for(difficulty)? {
            DeckOutcome::Ready(result) => results.push(result),
            DeckOutcome::Rejected(_) => warn!("skipping {difficulty} deck"),
        }
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck_engine::error::ConfigurationError;

    fn catalog(size: usize) -> SymbolCatalog {
        SymbolCatalog::from_ids((0..size).map(|i| format!("s{i}")))
    }

    #[test]
    fn broken_deck_is_rejected_softly() {
        let request = DeckRequest::reproducible(Difficulty::Easy, 1);
        let config = DifficultyConfig { order: 2, target: 7 };
        let cards = vec![vec![0, 1, 2], vec![0, 1, 3], vec![4, 5, 6]];
        match finish_deck(&request, config, cards, &catalog(10)).unwrap() {
            DeckOutcome::Rejected(report) => {
                assert!(!report.valid);
                assert_eq!(report.total_pairs, 3);
                assert_eq!(report.violations.len(), 3);
            }
            DeckOutcome::Ready(_) => panic!("invalid deck must not be mapped"),
        }
    }

    #[test]
    fn rejected_deck_becomes_none() {
        let request = DeckRequest::reproducible(Difficulty::Easy, 1);
        let config = DifficultyConfig { order: 2, target: 7 };
        let cards = vec![vec![0, 1, 2], vec![3, 4, 5]];
        let deck = finish_deck(&request, config, cards, &catalog(10)).map(DeckOutcome::into_deck);
        assert!(matches!(deck, Ok(None)));
    }

    #[test]
    fn batch_skips_rejected_level_and_keeps_going() {
        let symbols = catalog(60);
        let results = collect_ready(|difficulty| {
            let request = DeckRequest::reproducible(difficulty, 4);
            if difficulty == Difficulty::Medium {
                // Two disjoint cards: never a valid deck
                let cards = vec![vec![0, 1, 2, 3, 4, 5], vec![6, 7, 8, 9, 10, 11]];
                finish_deck(&request, difficulty.config(), cards, &symbols)
            } else {
                generate_deck(&request, &symbols)
            }
        })
        .unwrap();

        let levels: Vec<Difficulty> = results.iter().map(|r| r.difficulty).collect();
        assert_eq!(levels, vec![Difficulty::Easy, Difficulty::Hard]);
        assert_eq!(results[0].total_cards, 13);
        assert_eq!(results[1].total_cards, 55);
    }

    #[test]
    fn batch_stops_at_first_fatal_level() {
        let mut visited = Vec::new();
        let err = collect_ready(|difficulty| {
            visited.push(difficulty);
            match difficulty {
                Difficulty::Medium => Err(DeckError::InvalidDomain { order: 4 }),
                _ => generate_deck(&DeckRequest::reproducible(difficulty, 4), &catalog(60)),
            }
        })
        .unwrap_err();
        assert!(matches!(err, DeckError::InvalidDomain { order: 4 }));
        assert_eq!(visited, vec![Difficulty::Easy, Difficulty::Medium]);
    }

    #[test]
    fn bad_trim_target_is_fatal() {
        let request = DeckRequest::reproducible(Difficulty::Hard, 1);
        let config = DifficultyConfig { order: 7, target: 4 };
        let cards = plane::build(7).unwrap();
        let err = finish_deck(&request, config, cards, &catalog(60)).unwrap_err();
        assert!(matches!(
            err,
            DeckError::Configuration(ConfigurationError::TargetBelowCardSize {
                target: 4,
                symbols_per_card: 8
            })
        ));
    }

    #[test]
    fn validation_report_tracks_trimmed_deck() {
        let result = generate_deck(&DeckRequest::reproducible(Difficulty::Hard, 3), &catalog(57))
            .unwrap()
            .into_deck()
            .unwrap();
        assert_eq!(result.validation.total_pairs, 55 * 54 / 2);
        assert!(result.validation.valid);
    }

    #[test]
    fn unknown_name_is_a_configuration_error() {
        let err = generate_named("extreme", &catalog(60)).unwrap_err();
        assert!(matches!(
            err,
            DeckError::Configuration(ConfigurationError::UnknownDifficulty(ref name)) if name == "extreme"
        ));
    }
}
