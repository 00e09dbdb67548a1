//! # Fetch Operations
//!
//! Drive a `DataSource` and record the outcome in the store. Each operation
//! dispatches `Begin*` first and then exactly one of `Complete*` / `Fail*`.
//!
//! ```text
//! fetch_dashboard_data(store, source)
//!   ├─ dispatch BeginDashboardFetch
//!   ├─ source.fetch_dashboard().await      ← the only suspension point
//!   └─ Ok  → dispatch CompleteDashboardFetch(payload)
//!      Err → dispatch FailDashboardFetch(error text)
//! ```
//!
//! Nothing here retries. A failure stays in the slice until the next fetch.

use log::{info, warn};

use crate::core::action::Action;
use crate::core::store::Store;
use crate::core::types::{DashboardPayload, User};
use crate::source::{DataSource, FetchError};

pub const DEFAULT_DASHBOARD_ERROR: &str = "Failed to fetch data";
pub const DEFAULT_USER_ERROR: &str = "Failed to fetch user data";

pub async fn fetch_dashboard_data(
    store: &Store,
    source: &dyn DataSource,
) -> Result<DashboardPayload, FetchError> {
    store.dispatch(Action::BeginDashboardFetch);
    let result = source.fetch_dashboard().await;
    match &result {
        Ok(payload) => {
            info!(
                "Dashboard data loaded from {} ({} months, {} products, {} regions)",
                source.name(),
                payload.sales_data.len(),
                payload.product_data.len(),
                payload.region_data.len()
            );
            store.dispatch(Action::CompleteDashboardFetch(payload.clone()));
        }
        Err(e) => {
            warn!("Dashboard fetch from {} failed: {}", source.name(), e);
            store.dispatch(Action::FailDashboardFetch(error_message(
                e,
                DEFAULT_DASHBOARD_ERROR,
            )));
        }
    }
    result
}

pub async fn fetch_user_data(store: &Store, source: &dyn DataSource) -> Result<User, FetchError> {
    store.dispatch(Action::BeginUserFetch);
    let result = source.fetch_user().await;
    match &result {
        Ok(user) => {
            info!("User {} loaded from {}", user.id, source.name());
            store.dispatch(Action::CompleteUserFetch(user.clone()));
        }
        Err(e) => {
            warn!("User fetch from {} failed: {}", source.name(), e);
            store.dispatch(Action::FailUserFetch(error_message(e, DEFAULT_USER_ERROR)));
        }
    }
    result
}

fn error_message(error: &FetchError, fallback: &str) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
