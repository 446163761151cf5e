//! Explicit state container.
//!
//! A `Store` owns the one [`AppState`] of a process together with the RNG that
//! shuffles queues. Presentation code holds a `&mut Store` to dispatch and a
//! `&AppState` to render.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::action::Action;
use crate::reducer::apply;
use crate::state::AppState;

#[derive(Debug)]
pub struct Store<R = StdRng> {
    state: AppState,
    rng: R,
}

impl Store<StdRng> {
    /// Create an empty store seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl Default for Store<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Store<R> {
    pub fn with_rng(rng: R) -> Self {
        Self::with_state(AppState::default(), rng)
    }

    pub fn with_state(state: AppState, rng: R) -> Self {
        Self { state, rng }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply `action` and return the resulting state.
    pub fn dispatch(&mut self, action: Action) -> &AppState {
        trace!(action = action.kind(), "dispatch");
        let current = std::mem::take(&mut self.state);
        self.state = apply(current, action, &mut self.rng);
        &self.state
    }

    pub fn into_state(self) -> AppState {
        self.state
    }
}
