use std::fmt;

/// Identity of a word entry, derived from its normalized term pair.
///
/// Two entries whose terms differ only by case or surrounding whitespace
/// share an id, which is what ingestion deduplicates on.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn from_terms(term1: &str, term2: &str) -> Self {
        Self(format!("{}-{}", normalize_term(term1), normalize_term(term2)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Sum of the id's UTF-16 code units.
    ///
    /// Mixed-mode direction is chosen from the parity of this value, so it must
    /// stay stable for a given id.
    pub fn char_code_sum(&self) -> u64 {
        self.0.encode_utf16().map(u64::from).sum()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}
