//! # Dashboard Hook
//!
//! The façade a dashboard consumer mounts. On first activation it issues the
//! dashboard and user fetches, then exposes both slices as one flat,
//! read-only `DashboardView`.
//!
//! ```text
//!   activate() ──(first time only)──▶ spawn fetch_dashboard_data
//!                                    spawn fetch_user_data
//!   view()     ──▶ project(store.snapshot())
//!   deactivate() ──▶ abort in-flight fetches, Cancel*, re-arm
//! ```
//!
//! Activation is idempotent until `deactivate()`. Dropping the hook aborts
//! whatever is still in flight and puts loading slices back to idle.

use std::sync::Arc;

use log::{debug, info, warn};
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::core::action::Action;
use crate::core::fetch::{fetch_dashboard_data, fetch_user_data};
use crate::core::state::AppState;
use crate::core::store::Store;
use crate::core::types::{Kpis, ProductPoint, RegionPoint, SalesPoint, User};
use crate::source::DataSource;

/// Everything a dashboard page reads. The user slice's flags are renamed so
/// they don't collide with the dashboard's.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub sales_data: Vec<SalesPoint>,
    pub product_data: Vec<ProductPoint>,
    pub region_data: Vec<RegionPoint>,
    pub kpis: Kpis,
    pub loading: bool,
    pub error: Option<String>,
    pub user: Option<User>,
    pub user_loading: bool,
    pub user_error: Option<String>,
}

impl DashboardView {
    /// The first error to show, dashboard before user.
    pub fn first_error(&self) -> Option<&str> {
        self.error.as_deref().or(self.user_error.as_deref())
    }
}

/// Flatten both data slices into a view. Pure; re-run on every change.
pub fn project(state: &AppState) -> DashboardView {
    let dashboard = &state.dashboard;
    let user = &state.user;
    DashboardView {
        sales_data: dashboard.sales_data.clone(),
        product_data: dashboard.product_data.clone(),
        region_data: dashboard.region_data.clone(),
        kpis: dashboard.kpis.clone(),
        loading: dashboard.loading(),
        error: dashboard.error().map(str::to_string),
        user: user.user.clone(),
        user_loading: user.loading(),
        user_error: user.error().map(str::to_string),
    }
}

pub struct DashboardHook {
    store: Store,
    source: Arc<dyn DataSource>,
    active: bool,
    in_flight: Vec<JoinHandle<()>>,
}

impl DashboardHook {
    pub fn new(store: Store, source: Arc<dyn DataSource>) -> Self {
        Self {
            store,
            source,
            active: false,
            in_flight: Vec::new(),
        }
    }

    /// Issue both fetches on first use. Must be called from within a Tokio
    /// runtime.
    pub fn activate(&mut self) -> DashboardView {
        if self.active {
            debug!("Dashboard hook already active, not refetching");
        } else {
            info!("Activating dashboard hook (source: {})", self.source.name());
            self.active = true;
            self.spawn_fetches();
        }
        self.view()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn view(&self) -> DashboardView {
        project(&self.store.snapshot())
    }

    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.store.subscribe()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Re-issue both fetches, abandoning any still in flight.
    pub fn refresh(&mut self) {
        info!("Refreshing dashboard data");
        for handle in self.in_flight.drain(..) {
            handle.abort();
        }
        self.active = true;
        self.spawn_fetches();
    }

    /// Wait for the fetches issued so far to finish.
    ///
    /// Cancel-safe: the handles stay owned by the hook until every one has
    /// completed, so a `deactivate()` after an interrupted `settle()` still
    /// reaches them.
    pub async fn settle(&mut self) {
        // A handle already polled to completion by an interrupted settle
        // must not be polled again.
        self.in_flight.retain(|handle| !handle.is_finished());
        let results = futures::future::join_all(self.in_flight.iter_mut()).await;
        for result in results {
            if let Err(e) = result
                && !e.is_cancelled()
            {
                warn!("Fetch task ended abnormally: {}", e);
            }
        }
        self.in_flight.clear();
    }

    /// Tear down: stop in-flight fetches, put any slice they left loading
    /// back to idle, and allow the next `activate()` to fetch again.
    pub async fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        info!("Deactivating dashboard hook");
        self.abort_in_flight();
        self.settle().await;
        self.store.dispatch(Action::CancelDashboardFetch);
        self.store.dispatch(Action::CancelUserFetch);
        self.active = false;
    }

    fn spawn_fetches(&mut self) {
        let (store, source) = (self.store.clone(), self.source.clone());
        let dashboard = tokio::spawn(async move {
            // The outcome is already recorded in the store.
            let _ = fetch_dashboard_data(&store, source.as_ref()).await;
        });

        let (store, source) = (self.store.clone(), self.source.clone());
        let user = tokio::spawn(async move {
            let _ = fetch_user_data(&store, source.as_ref()).await;
        });

        self.in_flight.push(dashboard);
        self.in_flight.push(user);
    }

    fn abort_in_flight(&mut self) {
        for handle in &self.in_flight {
            handle.abort();
        }
    }
}

impl Drop for DashboardHook {
    fn drop(&mut self) {
        self.abort_in_flight();
        if self.active {
            self.store.dispatch(Action::CancelDashboardFetch);
            self.store.dispatch(Action::CancelUserFetch);
        }
    }
}
