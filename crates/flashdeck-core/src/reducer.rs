//! The transition function.
//!
//! `apply` is total: every action either produces the new state or, when its
//! precondition does not hold, returns the input state untouched.

use rand::Rng;
use tracing::debug;

use flashdeck_model::StudyMode;

use crate::action::Action;
use crate::state::{AppState, StudySession};

/// Uniform in-place shuffle (Fisher–Yates).
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Apply `action` to `state`, producing the next state.
pub fn apply<R: Rng + ?Sized>(state: AppState, action: Action, rng: &mut R) -> AppState {
    match action {
        Action::LoadDeck(deck) => AppState {
            deck,
            session: None,
            ..state
        },
        Action::StartSession { mode, shuffle } => start_session(state, mode, shuffle, rng),
        Action::EndSession => {
            if state.session.is_some() {
                debug!("study session ended");
            }
            AppState {
                session: None,
                ..state
            }
        }
        Action::NextCard => with_session(state, StudySession::advance),
        Action::PrevCard => with_session(state, StudySession::retreat),
        Action::FlipCard => with_session(state, |session| {
            session.show_answer = !session.show_answer;
        }),
        Action::ShuffleDeck => with_session(state, |session| {
            fisher_yates(&mut session.queue, rng);
            session.current_index = 0;
            session.show_answer = false;
        }),
        Action::ToggleLearned(id) => {
            let mut state = state;
            state.deck.toggle_learned(&id);
            state
        }
        Action::SetSearch(search_term) => AppState {
            search_term,
            ..state
        },
        Action::ToggleUnlearnedFilter => AppState {
            show_only_unlearned: !state.show_only_unlearned,
            ..state
        },
        Action::ToggleDeckModal => AppState {
            show_deck_modal: !state.show_deck_modal,
            ..state
        },
        Action::ToggleDarkMode => AppState {
            dark_mode: !state.dark_mode,
            ..state
        },
    }
}

fn with_session(mut state: AppState, update: impl FnOnce(&mut StudySession)) -> AppState {
    if let Some(session) = state.session.as_mut() {
        update(session);
    }
    state
}

fn start_session<R: Rng + ?Sized>(
    state: AppState,
    mode: StudyMode,
    shuffle: bool,
    rng: &mut R,
) -> AppState {
    let mut queue = state.eligible_ids();
    if queue.is_empty() {
        debug!(
            only_unlearned = state.show_only_unlearned,
            "no eligible entries; session not started"
        );
        return state;
    }
    if shuffle {
        fisher_yates(&mut queue, rng);
    }
    debug!(%mode, shuffle, cards = queue.len(), "study session started");
    AppState {
        session: Some(StudySession {
            queue,
            current_index: 0,
            mode,
            show_answer: false,
        }),
        show_deck_modal: false,
        ..state
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn fisher_yates_reaches_every_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();
        for _ in 0..600 {
            let mut items = [0, 1, 2];
            fisher_yates(&mut items, &mut rng);
            seen.insert(items);
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn fisher_yates_handles_tiny_slices() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: [u8; 0] = [];
        fisher_yates(&mut empty, &mut rng);
        let mut single = [42];
        fisher_yates(&mut single, &mut rng);
        assert_eq!(single, [42]);
    }

    #[test]
    fn fisher_yates_is_reproducible_with_same_seed() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b = a.clone();
        fisher_yates(&mut a, &mut StdRng::seed_from_u64(99));
        fisher_yates(&mut b, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
