//! # Actions
//!
//! Everything that can happen to the store becomes an `Action`.
//! User presses `t`? That's `Action::SetTheme(!is_dark)`.
//! Dashboard fetch resolves? That's `Action::CompleteDashboardFetch(payload)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state in place, and returns an `Effect` describing any I/O the caller
//! should perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::{AppState, FetchStatus};
use crate::core::types::{DashboardPayload, User};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetTheme(bool),

    BeginDashboardFetch,
    CompleteDashboardFetch(DashboardPayload),
    FailDashboardFetch(String),
    /// An in-flight dashboard fetch was aborted before it resolved.
    CancelDashboardFetch,

    BeginUserFetch,
    CompleteUserFetch(User),
    FailUserFetch(String),
    CancelUserFetch,

    Quit,
}

/// I/O requested by a transition. Executed by the caller, never by `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Write the theme preference (`true` = dark).
    PersistTheme(bool),
    Quit,
}

pub fn update(state: &mut AppState, action: Action) -> Effect {
    debug!("update: {}", action_name(&action));
    match action {
        Action::SetTheme(is_dark) => {
            state.theme.is_dark = is_dark;
            return Effect::PersistTheme(is_dark);
        }

        Action::BeginDashboardFetch => {
            state.dashboard.status = FetchStatus::Loading;
        }
        Action::CompleteDashboardFetch(payload) => {
            let dashboard = &mut state.dashboard;
            dashboard.sales_data = payload.sales_data;
            dashboard.product_data = payload.product_data;
            dashboard.region_data = payload.region_data;
            dashboard.kpis = payload.kpis;
            dashboard.status = FetchStatus::Ready;
        }
        Action::FailDashboardFetch(message) => {
            state.dashboard.status = FetchStatus::Failed(message);
        }
        Action::CancelDashboardFetch => {
            if state.dashboard.loading() {
                state.dashboard.status = FetchStatus::Idle;
            }
        }

        Action::BeginUserFetch => {
            state.user.status = FetchStatus::Loading;
        }
        Action::CompleteUserFetch(user) => {
            state.user.user = Some(user);
            state.user.status = FetchStatus::Ready;
        }
        Action::FailUserFetch(message) => {
            state.user.status = FetchStatus::Failed(message);
        }
        Action::CancelUserFetch => {
            if state.user.loading() {
                state.user.status = FetchStatus::Idle;
            }
        }

        Action::Quit => return Effect::Quit,
    }
    Effect::None
}

/// Short label for logging; payload-carrying actions would otherwise dump
/// every data point.
fn action_name(action: &Action) -> &'static str {
    match action {
        Action::SetTheme(_) => "SetTheme",
        Action::BeginDashboardFetch => "BeginDashboardFetch",
        Action::CompleteDashboardFetch(_) => "CompleteDashboardFetch",
        Action::FailDashboardFetch(_) => "FailDashboardFetch",
        Action::CancelDashboardFetch => "CancelDashboardFetch",
        Action::BeginUserFetch => "BeginUserFetch",
        Action::CompleteUserFetch(_) => "CompleteUserFetch",
        Action::FailUserFetch(_) => "FailUserFetch",
        Action::CancelUserFetch => "CancelUserFetch",
        Action::Quit => "Quit",
    }
}
