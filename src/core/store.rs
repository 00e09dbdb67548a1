//! # Store
//!
//! The single owner of `AppState`. Consumers read snapshots, subscribe to
//! changes, and mutate only by dispatching `Action`s.
//!
//! ```text
//!   dispatch(action)
//!        │
//!        ▼
//!   watch::Sender::send_if_modified ── update(state, action) ──▶ Effect
//!        │                                                        │
//!        ▼ (only if state changed)                                ▼
//!   subscribers wake                                 PersistTheme → Preferences
//! ```
//!
//! The `watch` channel holds the state behind its own lock, so each
//! transition is applied whole before any reader can observe it.
//!
//! A `Store` is cheap to clone; clones share the same state.

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::watch;

use crate::core::action::{Action, Effect, update};
use crate::core::preferences::Preferences;
use crate::core::state::AppState;

#[derive(Clone)]
pub struct Store {
    state: Arc<watch::Sender<AppState>>,
    preferences: Arc<Preferences>,
}

impl Store {
    /// Create the store. A persisted theme wins over `default_dark`.
    pub fn new(preferences: Preferences, default_dark: bool) -> Self {
        let is_dark = match preferences.load_theme() {
            Some(saved) => {
                info!("Restored {} theme from preferences", theme_label(saved));
                saved
            }
            None => default_dark,
        };
        let (state, _) = watch::channel(AppState::new(is_dark));
        Self {
            state: Arc::new(state),
            preferences: Arc::new(preferences),
        }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    pub fn is_dark(&self) -> bool {
        self.state.borrow().theme.is_dark
    }

    /// Apply one action. Subscribers are woken only if the state changed.
    pub fn dispatch(&self, action: Action) -> Effect {
        let mut effect = Effect::None;
        self.state.send_if_modified(|state| {
            let before = state.clone();
            effect = update(state, action);
            *state != before
        });

        if let Effect::PersistTheme(is_dark) = effect
            && let Err(e) = self.preferences.save_theme(is_dark)
        {
            warn!("Failed to persist {} theme: {}", theme_label(is_dark), e);
        }
        effect
    }

    pub fn set_theme(&self, is_dark: bool) {
        self.dispatch(Action::SetTheme(is_dark));
    }

    pub fn toggle_theme(&self) {
        let is_dark = !self.is_dark();
        info!("Switching to {} theme", theme_label(is_dark));
        self.set_theme(is_dark);
    }

    /// Receiver that wakes on every state change. The current value counts
    /// as already seen.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.subscribe()
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }
}

fn theme_label(is_dark: bool) -> &'static str {
    if is_dark { "dark" } else { "light" }
}
