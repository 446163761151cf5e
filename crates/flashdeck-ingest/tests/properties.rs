//! Property tests for deck invariants produced by ingestion.

use std::collections::HashSet;

use proptest::prelude::*;

use flashdeck_ingest::{IngestError, IngestOptions, parse_text, parse_text_with_options};
use flashdeck_model::EntryId;

fn term() -> impl Strategy<Value = String> {
    // Small alphabet with case and padding variants so duplicates are common.
    "[ ]{0,1}[abAB]{0,2}[ ]{0,1}"
}

fn to_csv(rows: &[(String, String)]) -> String {
    let mut text = String::from("term1,term2\n");
    for (a, b) in rows {
        text.push_str(a);
        text.push(',');
        text.push_str(b);
        text.push('\n');
    }
    text
}

proptest! {
    #[test]
    fn deck_ids_are_unique_and_bounded(rows in prop::collection::vec((term(), term()), 0..40)) {
        let text = to_csv(&rows);
        match parse_text(&text) {
            Ok(deck) => {
                let ids: HashSet<&EntryId> = deck.ids().collect();
                prop_assert_eq!(ids.len(), deck.len());
                prop_assert!(!deck.is_empty());
                prop_assert!(deck.len() <= 5000);

                let expected: HashSet<EntryId> = rows
                    .iter()
                    .filter(|(a, b)| !a.trim().is_empty() && !b.trim().is_empty())
                    .map(|(a, b)| EntryId::from_terms(a, b))
                    .collect();
                prop_assert_eq!(deck.len(), expected.len());
            }
            Err(IngestError::EmptyInput | IngestError::NoValidEntries) => {
                prop_assert!(rows
                    .iter()
                    .all(|(a, b)| a.trim().is_empty() || b.trim().is_empty()));
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn id_is_case_and_whitespace_insensitive(
        a in "[a-zA-Zà-ÿ]{1,8}",
        b in "[a-zA-Zà-ÿ]{1,8}",
        pad_a in "[ \t]{0,3}",
        pad_b in "[ \t]{0,3}",
    ) {
        let upper = EntryId::from_terms(
            &format!("{pad_a}{}{pad_b}", a.to_uppercase()),
            &format!("{pad_b}{}{pad_a}", b.to_uppercase()),
        );
        prop_assert_eq!(
            EntryId::from_terms(&a, &b),
            EntryId::from_terms(a.trim(), b.trim())
        );
        prop_assert_eq!(EntryId::from_terms(&a.to_lowercase(), &b.to_lowercase()), upper);
    }

    #[test]
    fn limit_is_enforced_on_distinct_entries(count in 1usize..30, max in 1usize..30) {
        let rows: Vec<(String, String)> = (0..count)
            .map(|idx| (format!("w{idx}"), format!("t{idx}")))
            .collect();
        let options = IngestOptions::default().with_max_entries(max);
        let result = parse_text_with_options(&to_csv(&rows), &options);
        if count <= max {
            prop_assert_eq!(result.expect("within limit").deck.len(), count);
        } else {
            let is_too_many = matches!(result, Err(IngestError::TooManyEntries { .. }));
            prop_assert!(is_too_many);
        }
    }
}
