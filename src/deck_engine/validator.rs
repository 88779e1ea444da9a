use std::collections::HashSet;
use std::hash::Hash;

use crate::deck_engine::models::{PairViolation, ValidationReport};

/// Number of unordered card pairs, `C(cards, 2)`.
pub fn pair_count(cards: usize) -> usize {
    cards * cards.saturating_sub(1) / 2
}

/// Check that every two cards share exactly one symbol.
///
/// Works on abstract indices as well as on mapped symbol ids. Pure: the deck
/// is only read.
pub fn validate<T>(cards: &[Vec<T>]) -> ValidationReport<T>
where
    T: Eq + Hash + Clone,
{
    let mut violations = Vec::new();

    for i in 0..cards.len() {
        let first: HashSet<&T> = cards[i].iter().collect();
        for j in (i + 1)..cards.len() {
            let common: Vec<T> = cards[j]
                .iter()
                .filter(|s| first.contains(s))
                .cloned()
                .collect();

            if common.len() != 1 {
                violations.push(PairViolation {
                    i,
                    j,
                    card1: cards[i].clone(),
                    card2: cards[j].clone(),
                    count: common.len(),
                    common,
                });
            }
        }
    }

    ValidationReport {
        valid: violations.is_empty(),
        violations,
        total_pairs: pair_count(cards.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_fano_plane() {
        let fano = vec![
            vec![0, 1, 2],
            vec![0, 3, 4],
            vec![0, 5, 6],
            vec![1, 3, 5],
            vec![1, 4, 6],
            vec![2, 3, 6],
            vec![2, 4, 5],
        ];
        let report = validate(&fano);
        assert!(report.valid);
        assert!(report.violations.is_empty());
        assert_eq!(report.total_pairs, 21);
    }

    #[test]
    fn reports_disjoint_and_overlapping_pairs() {
        let cards = vec![vec![0, 1, 2], vec![3, 4, 5], vec![0, 1, 6]];
        let report = validate(&cards);
        assert!(!report.valid);
        assert_eq!(report.total_pairs, 3);
        assert_eq!(report.violations.len(), 3);

        let disjoint = &report.violations[0];
        assert_eq!((disjoint.i, disjoint.j), (0, 1));
        assert_eq!(disjoint.count, 0);
        assert!(disjoint.common.is_empty());

        let double = &report.violations[1];
        assert_eq!((double.i, double.j), (0, 2));
        assert_eq!(double.count, 2);
        assert_eq!(double.common, vec![0, 1]);
        assert_eq!(double.card1, vec![0, 1, 2]);
        assert_eq!(double.card2, vec![0, 1, 6]);
    }

    #[test]
    fn works_on_string_ids() {
        let s = |v: &[&str]| v.iter().map(|x| x.to_string()).collect::<Vec<_>>();
        let cards = vec![s(&["cat", "sun"]), s(&["cat", "key"]), s(&["sun", "key"])];
        assert!(validate(&cards).valid);
    }

    #[test]
    fn small_decks_have_no_pairs() {
        let empty: Vec<Vec<usize>> = Vec::new();
        assert_eq!(validate(&empty).total_pairs, 0);
        assert!(validate(&empty).valid);
        assert_eq!(validate(&[vec![1, 2, 3]]).total_pairs, 0);
    }
}
