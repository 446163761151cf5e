#![deny(unsafe_code)]

pub mod deck;
pub mod entry;
pub mod error;
pub mod ids;
pub mod mode;

pub use deck::{Deck, DeckBuilder};
pub use entry::WordEntry;
pub use error::{ModelError, Result};
pub use ids::EntryId;
pub use mode::{CardDirection, StudyMode};
