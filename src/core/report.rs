//! # Comparison Report
//!
//! The presenter side of the core: pure functions from the current
//! record set to a structured report (summary statistics + ranked rows)
//! and to the option list of the delete control. No UI types here — the
//! TUI layer turns a [`Report`] into widgets.

use crate::core::record::Record;

/// Marker for the top three ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn for_rank(rank: usize) -> Option<Medal> {
        match rank {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }
}

/// One line of the ranked table.
#[derive(Debug)]
pub struct RankedRow<'a> {
    /// 1-based position after sorting by score.
    pub rank: usize,
    pub medal: Option<Medal>,
    pub record: &'a Record,
}

/// Headline statistics shown above the table.
#[derive(Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    /// Mean rent, rounded to the nearest currency unit.
    pub avg_rent: u32,
    pub top_name: String,
    pub top_score: f64,
}

#[derive(Debug)]
pub enum Report<'a> {
    /// Nothing recorded yet.
    Empty,
    Ranked {
        summary: Summary,
        rows: Vec<RankedRow<'a>>,
    },
}

/// Rank the records by score descending and compute the summary block.
///
/// The sort is stable, so records with equal scores keep their insertion
/// order — there is no further tie-break rule.
pub fn build_report(records: &[Record]) -> Report<'_> {
    if records.is_empty() {
        return Report::Empty;
    }

    let mut ranked: Vec<&Record> = records.iter().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    let rent_sum: u64 = records.iter().map(|r| u64::from(r.rent)).sum();
    let avg_rent = (rent_sum as f64 / records.len() as f64).round() as u32;

    let top = ranked[0];
    let summary = Summary {
        count: records.len(),
        avg_rent,
        top_name: top.name.clone(),
        top_score: top.score,
    };

    let rows = ranked
        .into_iter()
        .enumerate()
        .map(|(i, record)| RankedRow {
            rank: i + 1,
            medal: Medal::for_rank(i + 1),
            record,
        })
        .collect();

    Report::Ranked { summary, rows }
}

/// `"{id}: {name}"` labels for the delete control, in insertion order.
pub fn delete_choices(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| format!("{}: {}", r.id, r.name))
        .collect()
}

/// Extract the id from a selection label produced by [`delete_choices`].
/// Returns `None` for malformed labels.
pub fn parse_choice(label: &str) -> Option<u32> {
    label.split(':').next()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::RecordDraft;
    use crate::core::store::Store;
    use crate::test_support::test_draft;

    fn store_with(drafts: Vec<RecordDraft>) -> Store {
        let mut store = Store::new();
        for draft in drafts {
            store.add(draft).expect("valid draft");
        }
        store
    }

    #[test]
    fn test_empty_store_gives_empty_report() {
        assert!(matches!(build_report(&[]), Report::Empty));
    }

    #[test]
    fn test_rows_sorted_by_score_descending() {
        // A scores 6.0, B scores 8.0 → rendered order [B, A].
        let store = store_with(vec![
            RecordDraft { sunlight: 8, noise: 2, floor: 2, ..test_draft("A") },
            RecordDraft { sunlight: 10, noise: 1, floor: 5, ..test_draft("B") },
        ]);

        match build_report(store.records()) {
            Report::Ranked { rows, .. } => {
                let names: Vec<&str> = rows.iter().map(|r| r.record.name.as_str()).collect();
                assert_eq!(names, ["B", "A"]);
                assert_eq!(rows[0].rank, 1);
                assert_eq!(rows[1].rank, 2);
            }
            Report::Empty => panic!("expected ranked report"),
        }
    }

    #[test]
    fn test_equal_scores_keep_insertion_order() {
        let same = |name: &str| RecordDraft { sunlight: 5, noise: 5, floor: 5, ..test_draft(name) };
        let store = store_with(vec![same("first"), same("second"), same("third")]);

        match build_report(store.records()) {
            Report::Ranked { rows, .. } => {
                let names: Vec<&str> = rows.iter().map(|r| r.record.name.as_str()).collect();
                assert_eq!(names, ["first", "second", "third"]);
            }
            Report::Empty => panic!("expected ranked report"),
        }
    }

    #[test]
    fn test_top_three_get_medals() {
        let store = store_with(
            (1..=5).map(|floor| RecordDraft { floor, ..test_draft("unit") }).collect(),
        );

        match build_report(store.records()) {
            Report::Ranked { rows, .. } => {
                assert_eq!(rows[0].medal, Some(Medal::Gold));
                assert_eq!(rows[1].medal, Some(Medal::Silver));
                assert_eq!(rows[2].medal, Some(Medal::Bronze));
                assert_eq!(rows[3].medal, None);
                assert_eq!(rows[4].medal, None);
            }
            Report::Empty => panic!("expected ranked report"),
        }
    }

    #[test]
    fn test_summary_statistics() {
        let store = store_with(vec![
            RecordDraft { rent: 80_000, sunlight: 8, noise: 2, floor: 2, ..test_draft("A") },
            RecordDraft { rent: 85_001, sunlight: 10, noise: 1, floor: 5, ..test_draft("B") },
        ]);

        match build_report(store.records()) {
            Report::Ranked { summary, .. } => {
                assert_eq!(summary.count, 2);
                // (80000 + 85001) / 2 = 82500.5 → rounds to 82501
                assert_eq!(summary.avg_rent, 82_501);
                assert_eq!(summary.top_name, "B");
                assert_eq!(summary.top_score, 8.0);
            }
            Report::Empty => panic!("expected ranked report"),
        }
    }

    #[test]
    fn test_delete_choices_in_insertion_order() {
        let store = store_with(vec![test_draft("Corpo 301"), test_draft("Maison 102")]);
        assert_eq!(
            delete_choices(store.records()),
            vec!["1: Corpo 301".to_string(), "2: Maison 102".to_string()]
        );
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("3: Maison 102"), Some(3));
        assert_eq!(parse_choice("12: name: with: colons"), Some(12));
        assert_eq!(parse_choice("garbage"), None);
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice(": no id"), None);
    }
}
