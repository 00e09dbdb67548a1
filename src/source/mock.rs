//! # Mock Source
//!
//! Stands in for a remote API: waits a fixed delay, then returns the
//! sample data from `fixtures`. It never fails.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use super::fixtures;
use super::provider::{DataSource, FetchError};
use crate::core::types::{DashboardPayload, User};

pub const DEFAULT_DASHBOARD_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_USER_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone)]
pub struct MockSource {
    dashboard_delay: Duration,
    user_delay: Duration,
}

impl MockSource {
    pub fn new(dashboard_delay: Duration, user_delay: Duration) -> Self {
        Self {
            dashboard_delay,
            user_delay,
        }
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new(DEFAULT_DASHBOARD_DELAY, DEFAULT_USER_DELAY)
    }
}

#[async_trait]
impl DataSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_dashboard(&self) -> Result<DashboardPayload, FetchError> {
        debug!("mock: dashboard fetch, waiting {:?}", self.dashboard_delay);
        tokio::time::sleep(self.dashboard_delay).await;
        Ok(fixtures::dashboard_payload())
    }

    async fn fetch_user(&self) -> Result<User, FetchError> {
        debug!("mock: user fetch, waiting {:?}", self.user_delay);
        tokio::time::sleep(self.user_delay).await;
        Ok(fixtures::user())
    }
}
