//! # Core Application Logic
//!
//! This module contains Salesboard's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (slices)       │
//!                    │  • Action (transitions) │
//!                    │  • update() (reducer)   │
//!                    │  • Store (owner + subs) │
//!                    │  • fetch / hook         │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Headless  │      │ DataSource │
//!     │  Adapter   │      │   (JSON)   │      │  (source)  │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `AppState` and its three slices
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`store`]: `Store`, the owner of `AppState`
//! - [`fetch`]: Fetch operations that drive a data source into the store
//! - [`hook`]: `DashboardHook`, the consumer-facing façade
//! - [`preferences`]: Persisted key-value preferences (theme)
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod fetch;
pub mod hook;
pub mod preferences;
pub mod state;
pub mod store;
pub mod types;
