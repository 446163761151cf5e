//! Non-fatal diagnostics collected while building a deck.

use serde::Serialize;

use flashdeck_model::{Deck, EntryId};

/// Why a data row did not become a deck entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// One of the first two columns was empty or absent.
    MissingTerm,
    /// The normalized pair was already imported from an earlier row.
    Duplicate { id: EntryId },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// 1-based data row number (the header is not counted).
    pub row: usize,
    pub reason: SkipReason,
}

/// A successfully parsed deck plus the rows that were skipped on the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub deck: Deck,
    /// Header names of the term1/term2 columns.
    pub columns: [String; 2],
    pub skipped: Vec<SkippedRow>,
}

impl IngestReport {
    pub fn missing_count(&self) -> usize {
        self.skipped
            .iter()
            .filter(|row| row.reason == SkipReason::MissingTerm)
            .count()
    }

    pub fn duplicate_count(&self) -> usize {
        self.skipped
            .iter()
            .filter(|row| matches!(row.reason, SkipReason::Duplicate { .. }))
            .count()
    }
}
