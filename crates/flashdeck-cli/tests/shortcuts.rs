use rand::SeedableRng;
use rand::rngs::StdRng;

use flashdeck_cli::shortcuts::{HELP, Shortcut, shortcut_for};
use flashdeck_core::{Action, Store};
use flashdeck_model::{Deck, EntryId, StudyMode, WordEntry};

fn studying_store() -> Store {
    let deck = Deck::try_from_entries(vec![
        WordEntry::new("hello", "hola"),
        WordEntry::new("cat", "gato"),
    ])
    .expect("unique entries");
    let mut store = Store::with_rng(StdRng::seed_from_u64(3));
    store.dispatch(Action::LoadDeck(deck));
    store.dispatch(Action::StartSession {
        mode: StudyMode::L1ToL2,
        shuffle: false,
    });
    store
}

fn dispatch(action: Action) -> Option<Shortcut> {
    Some(Shortcut::Dispatch(action))
}

#[test]
fn navigation_keys() {
    let store = studying_store();
    let state = store.state();
    for key in ["l", "L", "right", "", "\n", "\u{1b}[C"] {
        assert_eq!(shortcut_for(key, state), dispatch(Action::NextCard), "{key:?}");
    }
    for key in ["h", "left", "\u{1b}[D"] {
        assert_eq!(shortcut_for(key, state), dispatch(Action::PrevCard), "{key:?}");
    }
}

#[test]
fn flip_keys_include_a_bare_space() {
    let store = studying_store();
    for key in ["f", " ", "space", "F\r\n"] {
        assert_eq!(
            shortcut_for(key, store.state()),
            dispatch(Action::FlipCard),
            "{key:?}"
        );
    }
}

#[test]
fn session_keys() {
    let store = studying_store();
    let state = store.state();
    assert_eq!(shortcut_for("s", state), dispatch(Action::ShuffleDeck));
    assert_eq!(shortcut_for("q", state), dispatch(Action::EndSession));
    assert_eq!(shortcut_for("esc", state), dispatch(Action::EndSession));
    assert_eq!(shortcut_for("\u{1b}", state), dispatch(Action::EndSession));
    assert_eq!(shortcut_for("d", state), dispatch(Action::ToggleDarkMode));
    assert_eq!(shortcut_for("?", state), Some(Shortcut::Help));
}

#[test]
fn mark_targets_the_current_card() {
    let mut store = studying_store();
    assert_eq!(
        shortcut_for("m", store.state()),
        dispatch(Action::ToggleLearned(EntryId::from_terms("hello", "hola")))
    );
    store.dispatch(Action::NextCard);
    assert_eq!(
        shortcut_for("m", store.state()),
        dispatch(Action::ToggleLearned(EntryId::from_terms("cat", "gato")))
    );
}

#[test]
fn unknown_keys_are_ignored() {
    let store = studying_store();
    assert_eq!(shortcut_for("x", store.state()), None);
    assert_eq!(shortcut_for("next", store.state()), None);
}

#[test]
fn no_shortcuts_without_a_session() {
    let mut store = studying_store();
    store.dispatch(Action::EndSession);
    for key in ["l", "h", "f", "s", "q", "m", "d", "?"] {
        assert_eq!(shortcut_for(key, store.state()), None, "{key:?}");
    }
}

#[test]
fn help_lists_every_binding() {
    let keys: Vec<&str> = HELP.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys.len(), 8);
    assert!(keys.contains(&"?"));
    assert!(keys.iter().any(|key| key.contains("esc")));
}
