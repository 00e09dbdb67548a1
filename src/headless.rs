//! Headless mode: fetch once, print the dashboard as JSON, exit.

use std::io::Write;

use log::{info, warn};
use serde::Serialize;

use crate::core::hook::{DashboardHook, DashboardView};

/// What headless mode prints to stdout.
#[derive(Debug, Serialize)]
pub struct Report {
    pub theme: &'static str,
    #[serde(flatten)]
    pub view: DashboardView,
}

impl Report {
    pub fn has_error(&self) -> bool {
        self.view.first_error().is_some()
    }
}

/// Activate the hook and wait for both fetches. Ctrl+C tears the hook down
/// instead, leaving whatever had already resolved.
pub async fn collect(hook: &mut DashboardHook) -> Report {
    collect_until(hook, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

/// `collect`, interrupted when `shutdown` resolves first.
pub async fn collect_until(
    hook: &mut DashboardHook,
    shutdown: impl Future<Output = ()>,
) -> Report {
    hook.activate();

    tokio::select! {
        _ = hook.settle() => {}
        _ = shutdown => {
            warn!("Interrupted while fetching");
        }
    }
    hook.deactivate().await;

    let theme = if hook.store().is_dark() { "dark" } else { "light" };
    Report {
        theme,
        view: hook.view(),
    }
}

pub fn write_report(report: &Report, out: &mut impl Write) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

/// Runs the application in headless mode. Returns whether any fetch failed.
pub async fn run(mut hook: DashboardHook) -> std::io::Result<bool> {
    info!("Running headless");
    let report = collect(&mut hook).await;
    write_report(&report, &mut std::io::stdout().lock())?;
    Ok(report.has_error())
}
