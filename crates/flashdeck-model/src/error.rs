use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("duplicate entry in deck: {0}")]
    DuplicateEntry(String),
    #[error("unknown study mode: {0} (expected l1-to-l2, l2-to-l1, or mixed)")]
    UnknownStudyMode(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
