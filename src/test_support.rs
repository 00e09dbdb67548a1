//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::preferences::Preferences;
use crate::core::store::Store;
use crate::core::types::{DashboardPayload, User};
use crate::source::{DataSource, FetchError, MockSource};

/// A source whose every fetch fails with the same error.
pub struct FailingSource {
    error: FetchError,
}

impl FailingSource {
    pub fn new(error: FetchError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl DataSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_dashboard(&self) -> Result<DashboardPayload, FetchError> {
        Err(self.error.clone())
    }

    async fn fetch_user(&self) -> Result<User, FetchError> {
        Err(self.error.clone())
    }
}

/// Wraps a `MockSource` and counts how often each fetch is issued.
#[derive(Default)]
pub struct CountingSource {
    inner: MockSource,
    pub dashboard_calls: AtomicUsize,
    pub user_calls: AtomicUsize,
}

impl CountingSource {
    pub fn dashboard_calls(&self) -> usize {
        self.dashboard_calls.load(Ordering::SeqCst)
    }

    pub fn user_calls(&self) -> usize {
        self.user_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataSource for CountingSource {
    fn name(&self) -> &str {
        "counting"
    }

    async fn fetch_dashboard(&self) -> Result<DashboardPayload, FetchError> {
        self.dashboard_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_dashboard().await
    }

    async fn fetch_user(&self) -> Result<User, FetchError> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_user().await
    }
}

/// A light-themed store with in-memory preferences.
pub fn test_store() -> Store {
    Store::new(Preferences::in_memory(), false)
}

pub fn counting_source() -> Arc<CountingSource> {
    Arc::new(CountingSource::default())
}
