//! # Data Sources
//!
//! Where dashboard and user data come from. The store never talks to a
//! source directly; `core::fetch` drives a source and records the outcome.

pub mod fixtures;
pub mod mock;
pub mod provider;

pub use mock::MockSource;
pub use provider::{DataSource, FetchError};
