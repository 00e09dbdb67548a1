use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use salesboard::ThemeChoice;
use salesboard::core::config::{self, CliOverrides, SalesboardConfig};
use salesboard::core::hook::DashboardHook;
use salesboard::core::preferences::Preferences;
use salesboard::core::store::Store;
use salesboard::source::MockSource;
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "salesboard", about = "Sales analytics dashboard for the terminal")]
struct Args {
    /// Fetch once, print the dashboard as JSON and exit
    #[arg(long)]
    headless: bool,

    /// Starting theme when no preference has been saved yet
    #[arg(short, long, value_enum)]
    theme: Option<ThemeChoice>,
}

#[tokio::main]
async fn main() -> std::io::Result<ExitCode> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Warning: {e}. Using defaults.");
        SalesboardConfig::default()
    });
    let cli = CliOverrides {
        theme: args.theme.map(|t| t.as_str().to_string()),
        headless: args.headless,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger - writes to salesboard.log unless configured otherwise
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!(
        "Salesboard starting up ({} mode)",
        if resolved.headless { "headless" } else { "tui" }
    );
    for warning in &resolved.warnings {
        log::warn!("{warning}");
    }

    let store = Store::new(Preferences::open_default(), resolved.default_dark);
    let source = Arc::new(MockSource::new(resolved.dashboard_delay, resolved.user_delay));
    let hook = DashboardHook::new(store, source);

    if resolved.headless {
        let failed = salesboard::headless::run(hook).await?;
        return Ok(if failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    salesboard::tui::run(hook).await?;
    Ok(ExitCode::SUCCESS)
}
