//! # Application State
//!
//! Core business state for Salesboard. Domain data only, no TUI types.
//! Presentation state lives in the `tui` module.
//!
//! ```text
//! AppState
//! ├── theme: ThemeState           // light/dark, persisted
//! ├── dashboard: DashboardState   // sales, products, regions, KPIs
//! │   └── status: FetchStatus
//! └── user: UserState             // signed-in user
//!     └── status: FetchStatus
//! ```
//!
//! Each slice tracks its fetch lifecycle with one `FetchStatus`:
//!
//! ```text
//! Idle ──begin──▶ Loading ──complete──▶ Ready
//!                    │  └────fail─────▶ Failed(message)
//!                    └──cancel──▶ Idle
//! ```
//!
//! `loading` and `error` are read off the status, so a slice can never be
//! loading and failed at the same time.
//!
//! State changes only happen through `update(state, action)` in action.rs.

use serde::Serialize;

use crate::core::types::{Kpis, ProductPoint, RegionPoint, SalesPoint, User};

/// Lifecycle of one slice's most recent fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "camelCase")]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeState {
    pub is_dark: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub sales_data: Vec<SalesPoint>,
    pub product_data: Vec<ProductPoint>,
    pub region_data: Vec<RegionPoint>,
    pub kpis: Kpis,
    pub status: FetchStatus,
}

impl DashboardState {
    pub fn loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    pub user: Option<User>,
    pub status: FetchStatus,
}

impl UserState {
    pub fn loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error()
    }
}

/// All three slices. Owned by the `Store`; everyone else sees clones.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    pub theme: ThemeState,
    pub dashboard: DashboardState,
    pub user: UserState,
}

impl AppState {
    /// Fresh state with the given theme and both data slices empty.
    pub fn new(is_dark: bool) -> Self {
        Self {
            theme: ThemeState { is_dark },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_new_defaults() {
        let state = AppState::new(true);
        assert!(state.theme.is_dark);
        assert!(state.dashboard.sales_data.is_empty());
        assert_eq!(state.dashboard.kpis, Kpis::default());
        assert_eq!(state.dashboard.status, FetchStatus::Idle);
        assert!(state.user.user.is_none());
        assert!(!state.user.loading());
        assert!(state.user.error().is_none());
    }

    #[test]
    fn test_fetch_status_accessors() {
        assert!(FetchStatus::Loading.is_loading());
        assert!(FetchStatus::Loading.error().is_none());
        assert!(!FetchStatus::Ready.is_loading());

        let failed = FetchStatus::Failed("boom".to_string());
        assert!(!failed.is_loading());
        assert_eq!(failed.error(), Some("boom"));
    }
}
