//! Read-only projections of [`AppState`] for presentation layers.

use serde::Serialize;

use flashdeck_model::{CardDirection, WordEntry};

use crate::state::{AppState, StudySession};

/// The card currently shown by a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView<'a> {
    pub entry: &'a WordEntry,
    pub direction: CardDirection,
    pub show_answer: bool,
    pub progress: Progress,
}

impl<'a> CardView<'a> {
    pub fn prompt(&self) -> &'a str {
        self.direction
            .orient(self.entry.term1(), self.entry.term2())
            .0
    }

    pub fn answer(&self) -> &'a str {
        self.direction
            .orient(self.entry.term1(), self.entry.term2())
            .1
    }

    pub fn is_learned(&self) -> bool {
        self.entry.is_learned()
    }
}

/// 1-based position within the session queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
}

impl Progress {
    pub fn percent(self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.position as f64 / self.total as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeckStats {
    pub total: usize,
    pub learned: usize,
    /// Entries a new session would include under the current filter.
    pub eligible: usize,
}

impl StudySession {
    pub fn progress(&self) -> Progress {
        Progress {
            position: self.current_index + 1,
            total: self.queue.len(),
        }
    }
}

impl AppState {
    pub fn current_card(&self) -> Option<CardView<'_>> {
        let session = self.session.as_ref()?;
        let id = session.current_id()?;
        let entry = self.deck.get(id)?;
        Some(CardView {
            entry,
            direction: session.mode.direction_for(id),
            show_answer: session.show_answer,
            progress: session.progress(),
        })
    }

    pub fn stats(&self) -> DeckStats {
        let learned = self.deck.learned_count();
        let total = self.deck.len();
        DeckStats {
            total,
            learned,
            eligible: if self.show_only_unlearned {
                total - learned
            } else {
                total
            },
        }
    }

    /// Deck overview listing: search term first, then the unlearned filter.
    pub fn visible_entries(&self) -> Vec<&WordEntry> {
        self.deck
            .iter()
            .filter(|entry| entry.matches_search(&self.search_term))
            .filter(|entry| !self.show_only_unlearned || !entry.is_learned())
            .collect()
    }
}
