//! Keyboard shortcuts for a running study session.
//!
//! Input arrives one line at a time. Shortcuts only apply while a session is
//! active; with no session every key is ignored.

use flashdeck_core::{Action, AppState};

/// What a key asks the study loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shortcut {
    Dispatch(Action),
    Help,
}

/// Key bindings shown by `?`.
pub const HELP: &[(&str, &str)] = &[
    ("h / left", "previous card"),
    ("l / right / enter", "next card"),
    ("f / space", "flip card"),
    ("s", "shuffle queue"),
    ("m", "mark current card learned / unlearned"),
    ("d", "toggle dark mode"),
    ("q / esc", "end session"),
    ("?", "show this help"),
];

/// Resolve one line of input against the current state.
pub fn shortcut_for(input: &str, state: &AppState) -> Option<Shortcut> {
    let session = state.session()?;
    let raw = input.trim_end_matches(['\r', '\n']);
    if raw == " " {
        return Some(Shortcut::Dispatch(Action::FlipCard));
    }
    let key = raw.trim().to_lowercase();
    let action = match key.as_str() {
        "" | "l" | "right" | "\u{1b}[c" => Action::NextCard,
        "h" | "left" | "\u{1b}[d" => Action::PrevCard,
        "f" | "space" => Action::FlipCard,
        "s" => Action::ShuffleDeck,
        "q" | "esc" | "\u{1b}" => Action::EndSession,
        "m" => Action::ToggleLearned(session.current_id()?.clone()),
        "d" => Action::ToggleDarkMode,
        "?" => return Some(Shortcut::Help),
        _ => return None,
    };
    Some(Shortcut::Dispatch(action))
}
