//! Ordered, id-unique collection of word entries.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{EntryId, ModelError, Result, WordEntry};

/// The full imported collection of entries.
///
/// A deck is created wholesale and never gains or loses entries afterwards;
/// only the learned flags of its entries change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<WordEntry>", into = "Vec<WordEntry>")]
pub struct Deck {
    entries: Vec<WordEntry>,
}

impl Deck {
    /// Build a deck, rejecting entries whose ids collide.
    pub fn try_from_entries(entries: Vec<WordEntry>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id()) {
                return Err(ModelError::DuplicateEntry(entry.id().to_string()));
            }
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordEntry> {
        self.entries.iter()
    }

    pub fn get(&self, id: &EntryId) -> Option<&WordEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &EntryId> {
        self.entries.iter().map(WordEntry::id)
    }

    pub fn learned_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_learned()).count()
    }

    pub fn unlearned(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter().filter(|entry| !entry.is_learned())
    }

    /// Flip the learned flag of the entry with `id`.
    ///
    /// Returns `false` when no entry matches.
    pub fn toggle_learned(&mut self, id: &EntryId) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id() == id) {
            Some(entry) => {
                entry.toggle_learned();
                true
            }
            None => false,
        }
    }
}

/// Incremental deck construction that drops entries with an already-seen id.
#[derive(Debug, Default)]
pub struct DeckBuilder {
    entries: Vec<WordEntry>,
    seen: HashSet<EntryId>,
}

impl DeckBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` unless its id is already present.
    ///
    /// Returns `false` (and discards the entry) on a duplicate.
    pub fn insert(&mut self, entry: WordEntry) -> bool {
        if !self.seen.insert(entry.id().clone()) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(self) -> Deck {
        Deck {
            entries: self.entries,
        }
    }
}

impl TryFrom<Vec<WordEntry>> for Deck {
    type Error = ModelError;

    fn try_from(entries: Vec<WordEntry>) -> Result<Self> {
        Self::try_from_entries(entries)
    }
}

impl From<Deck> for Vec<WordEntry> {
    fn from(deck: Deck) -> Self {
        deck.entries
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a WordEntry;
    type IntoIter = std::slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
