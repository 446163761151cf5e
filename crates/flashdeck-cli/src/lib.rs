//! CLI library components for flashdeck.

#![allow(missing_docs)]

pub mod logging;
pub mod render;
pub mod session;
pub mod settings;
pub mod shortcuts;
