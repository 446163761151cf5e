//! Tests for flashdeck-model types.

use flashdeck_model::{CardDirection, Deck, EntryId, ModelError, StudyMode, WordEntry};

fn sample_deck() -> Deck {
    Deck::try_from_entries(vec![
        WordEntry::new("house", "casa"),
        WordEntry::new("cat", "gato"),
        WordEntry::new("dog", "perro"),
    ])
    .expect("unique entries")
}

#[test]
fn new_entry_is_trimmed_and_unlearned() {
    let entry = WordEntry::new("  House ", " Casa");
    assert_eq!(entry.term1(), "House");
    assert_eq!(entry.term2(), "Casa");
    assert_eq!(entry.id(), &EntryId::from_terms("house", "casa"));
    assert!(!entry.is_learned());
}

#[test]
fn deck_rejects_duplicate_ids() {
    let result = Deck::try_from_entries(vec![
        WordEntry::new("house", "casa"),
        WordEntry::new("HOUSE", "casa "),
    ]);
    assert_eq!(
        result,
        Err(ModelError::DuplicateEntry("house-casa".to_string()))
    );
}

#[test]
fn deck_toggle_learned_flips_only_matching_entry() {
    let mut deck = sample_deck();
    let cat = EntryId::from_terms("cat", "gato");

    assert!(deck.toggle_learned(&cat));
    assert_eq!(deck.learned_count(), 1);
    assert!(deck.get(&cat).expect("cat").is_learned());
    assert_eq!(deck.unlearned().count(), 2);

    assert!(deck.toggle_learned(&cat));
    assert_eq!(deck.learned_count(), 0);
}

#[test]
fn deck_toggle_learned_unknown_id_is_noop() {
    let mut deck = sample_deck();
    let before = deck.clone();
    assert!(!deck.toggle_learned(&EntryId::from("missing-id")));
    assert_eq!(deck, before);
}

#[test]
fn deck_deserialize_rejects_duplicates() {
    let json = r#"[
        {"id":"a-b","term1":"a","term2":"b","learned":false},
        {"id":"a-b","term1":"A","term2":"B","learned":true}
    ]"#;
    let result: Result<Deck, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn study_mode_parses_and_displays() {
    assert_eq!("l1-to-l2".parse::<StudyMode>(), Ok(StudyMode::L1ToL2));
    assert_eq!("L2-TO-L1".parse::<StudyMode>(), Ok(StudyMode::L2ToL1));
    assert_eq!(" mixed ".parse::<StudyMode>(), Ok(StudyMode::Mixed));
    assert!(matches!(
        "sideways".parse::<StudyMode>(),
        Err(ModelError::UnknownStudyMode(_))
    ));
    assert_eq!(StudyMode::L2ToL1.to_string(), "l2-to-l1");
}

#[test]
fn study_mode_serializes_with_mode_names() {
    let json = serde_json::to_string(&StudyMode::ALL).expect("serialize modes");
    assert_eq!(json, r#"["l1-to-l2","l2-to-l1","mixed"]"#);
}

#[test]
fn fixed_modes_ignore_id() {
    let id = EntryId::from_terms("house", "casa");
    assert_eq!(StudyMode::L1ToL2.direction_for(&id), CardDirection::Forward);
    assert_eq!(StudyMode::L2ToL1.direction_for(&id), CardDirection::Reverse);
}

#[test]
fn mixed_mode_direction_follows_char_code_parity() {
    // "a-b" = 97 + 45 + 98 = 240 (even)
    let even = EntryId::from_terms("a", "b");
    // "a-c" = 97 + 45 + 99 = 241 (odd)
    let odd = EntryId::from_terms("a", "c");

    assert_eq!(StudyMode::Mixed.direction_for(&even), CardDirection::Forward);
    assert_eq!(StudyMode::Mixed.direction_for(&odd), CardDirection::Reverse);
    // Stable across repeated calls.
    assert_eq!(
        StudyMode::Mixed.direction_for(&odd),
        StudyMode::Mixed.direction_for(&odd)
    );
}

#[test]
fn direction_orients_terms() {
    assert_eq!(CardDirection::Forward.orient("cat", "gato"), ("cat", "gato"));
    assert_eq!(CardDirection::Reverse.orient("cat", "gato"), ("gato", "cat"));
}

#[test]
fn entry_search_matches_either_term_case_insensitively() {
    let entry = WordEntry::new("House", "Casa");
    assert!(entry.matches_search("hou"));
    assert!(entry.matches_search("CAS"));
    assert!(entry.matches_search("   "));
    assert!(!entry.matches_search("gato"));
}

#[test]
fn builder_keeps_first_of_each_id() {
    let mut builder = flashdeck_model::DeckBuilder::new();
    assert!(builder.insert(WordEntry::new("house", "casa")));
    assert!(builder.insert(WordEntry::new("cat", "gato")));
    assert!(!builder.insert(WordEntry::new(" House", "CASA")));
    assert_eq!(builder.len(), 2);

    let deck = builder.build();
    let terms: Vec<&str> = deck.iter().map(WordEntry::term1).collect();
    assert_eq!(terms, vec!["house", "cat"]);
}
