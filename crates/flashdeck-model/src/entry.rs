use serde::{Deserialize, Serialize};

use crate::EntryId;

/// One vocabulary pair with its learned flag.
///
/// The terms and id are fixed at construction; `learned` is the only field
/// that changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    id: EntryId,
    term1: String,
    term2: String,
    learned: bool,
}

impl WordEntry {
    pub fn new(term1: impl Into<String>, term2: impl Into<String>) -> Self {
        let term1 = term1.into().trim().to_string();
        let term2 = term2.into().trim().to_string();
        Self {
            id: EntryId::from_terms(&term1, &term2),
            term1,
            term2,
            learned: false,
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn term1(&self) -> &str {
        &self.term1
    }

    pub fn term2(&self) -> &str {
        &self.term2
    }

    pub fn is_learned(&self) -> bool {
        self.learned
    }

    pub fn toggle_learned(&mut self) {
        self.learned = !self.learned;
    }

    /// Case-insensitive substring match against either term.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.term1.to_lowercase().contains(&needle) || self.term2.to_lowercase().contains(&needle)
    }
}
