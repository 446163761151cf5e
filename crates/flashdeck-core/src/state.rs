//! Application-level state

use serde::Serialize;

use flashdeck_model::{Deck, EntryId, StudyMode};

/// Single source of truth for a flashdeck process.
///
/// Fields are private: the only way to change them is
/// [`apply`](crate::apply).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppState {
    pub(crate) deck: Deck,
    pub(crate) session: Option<StudySession>,
    pub(crate) search_term: String,
    pub(crate) show_only_unlearned: bool,
    pub(crate) show_deck_modal: bool,
    pub(crate) dark_mode: bool,
}

impl AppState {
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn session(&self) -> Option<&StudySession> {
        self.session.as_ref()
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn show_only_unlearned(&self) -> bool {
        self.show_only_unlearned
    }

    pub fn show_deck_modal(&self) -> bool {
        self.show_deck_modal
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Ids a new session would study, in deck order.
    pub fn eligible_ids(&self) -> Vec<EntryId> {
        self.deck
            .iter()
            .filter(|entry| !self.show_only_unlearned || !entry.is_learned())
            .map(|entry| entry.id().clone())
            .collect()
    }
}

/// One active study run over an ordering of (part of) the deck.
///
/// `queue` is never empty and `current_index` always points into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudySession {
    pub(crate) queue: Vec<EntryId>,
    pub(crate) current_index: usize,
    pub(crate) mode: StudyMode,
    pub(crate) show_answer: bool,
}

impl StudySession {
    pub fn queue(&self) -> &[EntryId] {
        &self.queue
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn mode(&self) -> StudyMode {
        self.mode
    }

    pub fn show_answer(&self) -> bool {
        self.show_answer
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn current_id(&self) -> Option<&EntryId> {
        self.queue.get(self.current_index)
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.queue.len()
    }

    fn last_index(&self) -> usize {
        self.queue.len().saturating_sub(1)
    }

    pub(crate) fn advance(&mut self) {
        self.current_index = (self.current_index + 1).min(self.last_index());
        self.show_answer = false;
    }

    pub(crate) fn retreat(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
        self.show_answer = false;
    }
}
