use flashdeck_model::{Deck, EntryId, StudyMode};

/// Every input the state machine recognizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the deck and drop any running session.
    LoadDeck(Deck),
    /// Build a queue from the eligible entries and start studying.
    StartSession { mode: StudyMode, shuffle: bool },
    EndSession,
    NextCard,
    PrevCard,
    FlipCard,
    /// Reorder the running session's queue and return to its first card.
    ShuffleDeck,
    ToggleLearned(EntryId),
    SetSearch(String),
    ToggleUnlearnedFilter,
    ToggleDeckModal,
    ToggleDarkMode,
}

impl Action {
    /// Stable name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LoadDeck(_) => "LOAD_DECK",
            Self::StartSession { .. } => "START_SESSION",
            Self::EndSession => "END_SESSION",
            Self::NextCard => "NEXT_CARD",
            Self::PrevCard => "PREV_CARD",
            Self::FlipCard => "FLIP_CARD",
            Self::ShuffleDeck => "SHUFFLE_DECK",
            Self::ToggleLearned(_) => "TOGGLE_LEARNED",
            Self::SetSearch(_) => "SET_SEARCH",
            Self::ToggleUnlearnedFilter => "TOGGLE_UNLEARNED_FILTER",
            Self::ToggleDeckModal => "TOGGLE_DECK_MODAL",
            Self::ToggleDarkMode => "TOGGLE_DARK_MODE",
        }
    }
}
