//! Session state machine for flashdeck.
//!
//! All state lives in a single [`AppState`]. It changes only through
//! [`apply`], usually driven by a [`Store`] that owns the state and the RNG
//! used for shuffling. Presentation layers read the state and dispatch
//! [`Action`]s back; they never mutate it directly.

#![deny(unsafe_code)]

pub mod action;
pub mod reducer;
pub mod state;
pub mod store;
pub mod view;

pub use action::Action;
pub use reducer::{apply, fisher_yates};
pub use state::{AppState, StudySession};
pub use store::Store;
pub use view::{CardView, DeckStats, Progress};
