use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{EntryId, ModelError};

/// Prompt/answer direction policy for a study session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudyMode {
    /// Show term1, answer with term2.
    #[default]
    #[serde(rename = "l1-to-l2")]
    L1ToL2,
    /// Show term2, answer with term1.
    #[serde(rename = "l2-to-l1")]
    L2ToL1,
    /// Direction chosen per card from its id.
    #[serde(rename = "mixed")]
    Mixed,
}

/// Which term of an entry is the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardDirection {
    /// term1 is the prompt, term2 the answer.
    Forward,
    /// term2 is the prompt, term1 the answer.
    Reverse,
}

impl StudyMode {
    pub const ALL: [StudyMode; 3] = [Self::L1ToL2, Self::L2ToL1, Self::Mixed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::L1ToL2 => "l1-to-l2",
            Self::L2ToL1 => "l2-to-l1",
            Self::Mixed => "mixed",
        }
    }

    /// Short label for headers (`L1 → L2`, `L2 → L1`, `Mixed`).
    pub fn label(self) -> &'static str {
        match self {
            Self::L1ToL2 => "L1 → L2",
            Self::L2ToL1 => "L2 → L1",
            Self::Mixed => "Mixed",
        }
    }

    /// Direction for the card with `id`.
    ///
    /// Mixed mode is a pure function of the id: an even character-code sum
    /// gives `Forward`, odd gives `Reverse`.
    pub fn direction_for(self, id: &EntryId) -> CardDirection {
        match self {
            Self::L1ToL2 => CardDirection::Forward,
            Self::L2ToL1 => CardDirection::Reverse,
            Self::Mixed => {
                if id.char_code_sum() % 2 == 0 {
                    CardDirection::Forward
                } else {
                    CardDirection::Reverse
                }
            }
        }
    }
}

impl fmt::Display for StudyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudyMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownStudyMode(s.to_string()))
    }
}

impl CardDirection {
    /// Split `(term1, term2)` into `(prompt, answer)`.
    pub fn orient<'a>(self, term1: &'a str, term2: &'a str) -> (&'a str, &'a str) {
        match self {
            Self::Forward => (term1, term2),
            Self::Reverse => (term2, term1),
        }
    }
}
