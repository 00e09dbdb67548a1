use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use salesboard::core::action::Action;
use salesboard::core::fetch::{fetch_dashboard_data, fetch_user_data};
use salesboard::core::hook::DashboardHook;
use salesboard::core::preferences::Preferences;
use salesboard::core::state::FetchStatus;
use salesboard::core::store::Store;
use salesboard::core::types::{DashboardPayload, SalesPoint, User};
use salesboard::source::{DataSource, FetchError, MockSource};

// ============================================================================
// Helper Sources
// ============================================================================

/// Counts fetches while delegating to the default `MockSource`.
#[derive(Default)]
struct CountingSource {
    inner: MockSource,
    dashboard: AtomicUsize,
    user: AtomicUsize,
}

#[async_trait]
impl DataSource for CountingSource {
    fn name(&self) -> &str {
        "counting"
    }

    async fn fetch_dashboard(&self) -> Result<DashboardPayload, FetchError> {
        self.dashboard.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_dashboard().await
    }

    async fn fetch_user(&self) -> Result<User, FetchError> {
        self.user.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_user().await
    }
}

/// A remote that is down.
struct DownSource;

#[async_trait]
impl DataSource for DownSource {
    fn name(&self) -> &str {
        "down"
    }

    async fn fetch_dashboard(&self) -> Result<DashboardPayload, FetchError> {
        tokio::time::sleep(Duration::from_millis(50)).await;
        Err(FetchError::Transport("connection refused".to_string()))
    }

    async fn fetch_user(&self) -> Result<User, FetchError> {
        Err(FetchError::Parse("expected value at line 1".to_string()))
    }
}

fn memory_store() -> Store {
    Store::new(Preferences::in_memory(), false)
}

// ============================================================================
// Fetch Operations
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_fetch_dashboard_data_resolves_fixed_payload() {
    let store = memory_store();
    let source = MockSource::default();

    let payload = fetch_dashboard_data(&store, &source).await.unwrap();

    assert_eq!(payload.kpis.total_revenue, 773000);
    assert_eq!(payload.kpis.total_orders, 2275);
    assert_eq!(payload.sales_data.len(), 12);
    assert_eq!(
        payload.sales_data[0],
        SalesPoint {
            month: "Jan".to_string(),
            revenue: 45000,
            orders: 120,
            customers: 89,
        }
    );
    assert_eq!(payload.product_data.len(), 5);
    assert_eq!(payload.region_data.len(), 5);

    let state = store.snapshot();
    assert_eq!(state.dashboard.status, FetchStatus::Ready);
    assert_eq!(state.dashboard.kpis, payload.kpis);
}

#[tokio::test(start_paused = true)]
async fn test_fetch_user_data_resolves_fixed_user() {
    let store = memory_store();

    let user = fetch_user_data(&store, &MockSource::default()).await.unwrap();

    assert_eq!(user.id, "1");
    assert_eq!(user.name, "Sarah Johnson");
    assert_eq!(user.role, "Sales Manager");
    assert_eq!(store.snapshot().user.user, Some(user));
}

#[tokio::test(start_paused = true)]
async fn test_fetch_waits_for_simulated_latency() {
    let store = memory_store();
    let source = MockSource::default();
    let start = tokio::time::Instant::now();

    fetch_user_data(&store, &source).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(800));

    fetch_dashboard_data(&store, &source).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(2300));
}

#[tokio::test(start_paused = true)]
async fn test_failures_surface_verbatim_and_keep_data() {
    let store = memory_store();
    fetch_dashboard_data(&store, &MockSource::default())
        .await
        .unwrap();

    let err = fetch_dashboard_data(&store, &DownSource).await.unwrap_err();
    assert_eq!(err, FetchError::Transport("connection refused".to_string()));

    let state = store.snapshot();
    assert!(!state.dashboard.loading());
    assert_eq!(
        state.dashboard.error(),
        Some("transport error: connection refused")
    );
    assert_eq!(state.dashboard.sales_data.len(), 12);
    assert_eq!(state.dashboard.kpis.total_revenue, 773000);

    fetch_user_data(&store, &DownSource).await.unwrap_err();
    assert_eq!(
        store.snapshot().user.error(),
        Some("parse error: expected value at line 1")
    );
}

// ============================================================================
// Composition Hook
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_hook_activation_is_idempotent() {
    let source = Arc::new(CountingSource::default());
    let mut hook = DashboardHook::new(memory_store(), source.clone());

    hook.activate();
    hook.activate();
    hook.settle().await;

    assert_eq!(source.dashboard.load(Ordering::SeqCst), 1);
    assert_eq!(source.user.load(Ordering::SeqCst), 1);

    // Teardown re-arms activation
    hook.deactivate().await;
    hook.activate();
    hook.settle().await;
    assert_eq!(source.dashboard.load(Ordering::SeqCst), 2);
    assert_eq!(source.user.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn test_hook_loading_and_error_never_overlap() {
    let store = memory_store();
    let mut rx = store.subscribe();
    let mut hook = DashboardHook::new(store, Arc::new(DownSource));

    hook.activate();
    let observer = tokio::spawn(async move {
        let mut seen = 0;
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            assert!(!(state.dashboard.loading() && state.dashboard.error().is_some()));
            assert!(!(state.user.loading() && state.user.error().is_some()));
            seen += 1;
            if state.dashboard.error().is_some() && state.user.error().is_some() {
                break;
            }
        }
        seen
    });

    hook.settle().await;
    let seen = observer.await.unwrap();
    assert!(seen >= 1);

    let view = hook.view();
    assert!(!view.loading);
    assert!(!view.user_loading);
    assert_eq!(view.first_error(), Some("transport error: connection refused"));
}

#[tokio::test(start_paused = true)]
async fn test_hook_teardown_during_interrupted_settle() {
    let store = memory_store();
    let mut hook = DashboardHook::new(store.clone(), Arc::new(CountingSource::default()));

    hook.activate();
    let interrupted = tokio::time::timeout(Duration::from_millis(100), hook.settle()).await;
    assert!(interrupted.is_err());
    hook.deactivate().await;

    tokio::time::sleep(Duration::from_millis(3000)).await;
    let state = store.snapshot();
    assert_eq!(state.dashboard.status, FetchStatus::Idle);
    assert_eq!(state.user.status, FetchStatus::Idle);
    assert!(state.dashboard.sales_data.is_empty());
    assert!(state.user.user.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_dropped_hook_leaves_no_slice_loading() {
    let store = memory_store();
    let mut hook = DashboardHook::new(store.clone(), Arc::new(CountingSource::default()));
    hook.activate();
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(store.snapshot().dashboard.loading());

    drop(hook);

    let state = store.snapshot();
    assert!(!state.dashboard.loading());
    assert!(!state.user.loading());
}

// ============================================================================
// Theme Persistence
// ============================================================================

#[test]
fn test_theme_sequence_persists_last_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let store = Store::new(Preferences::open(path.clone()), false);
    for is_dark in [true, false, false, true, true, false, true] {
        store.set_theme(is_dark);
    }
    store.toggle_theme();
    store.dispatch(Action::SetTheme(true));
    assert!(store.is_dark());

    // A fresh store over the same file restores the last write
    let reopened = Store::new(Preferences::open(path), false);
    assert!(reopened.is_dark());
    assert_eq!(
        reopened.preferences().get("theme").as_deref(),
        Some("dark")
    );
}

#[test]
fn test_saved_theme_beats_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    Store::new(Preferences::open(path.clone()), true).set_theme(false);

    let store = Store::new(Preferences::open(path), true);
    assert!(!store.is_dark());
}
