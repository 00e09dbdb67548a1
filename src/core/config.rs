//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.salesboard/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SalesboardConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// "light" or "dark". Only used until the user toggles once; after that
    /// the saved preference wins.
    pub default_theme: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DataConfig {
    pub dashboard_delay_ms: Option<u64>,
    pub user_delay_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: &str = "debug";
pub const DEFAULT_LOG_FILE: &str = "salesboard.log";
pub const DEFAULT_DASHBOARD_DELAY_MS: u64 = 1500;
pub const DEFAULT_USER_DELAY_MS: u64 = 800;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub default_dark: bool,
    pub log_level: log::LevelFilter,
    pub log_file: PathBuf,
    pub dashboard_delay: Duration,
    pub user_delay: Duration,
    pub headless: bool,
    /// Problems found while resolving. Resolution runs before the logger
    /// exists, so the caller reports these once logging is up.
    pub warnings: Vec<String>,
}

/// Values that came from the command line. `None` = flag not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub theme: Option<String>,
    pub headless: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.salesboard/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".salesboard").join("config.toml"))
}

/// Load config from `~/.salesboard/config.toml`.
pub fn load_config() -> Result<SalesboardConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(SalesboardConfig::default())
        }
    }
}

/// Load config from `path`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SalesboardConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<SalesboardConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(SalesboardConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SalesboardConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Salesboard Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_theme = "light"            # "light" or "dark"; a saved toggle wins
# log_level = "debug"                # "error", "warn", "info", "debug", "trace", "off"
# log_file = "salesboard.log"

# [data]
# dashboard_delay_ms = 1500          # Simulated latency of the dashboard fetch
# user_delay_ms = 800                # Simulated latency of the user fetch
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SalesboardConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// `resolve` with an injectable environment lookup.
pub fn resolve_with_env(
    config: &SalesboardConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Theme: CLI → env → config → light
    let default_dark = cli
        .theme
        .clone()
        .or_else(|| env("SALESBOARD_THEME"))
        .or_else(|| config.general.default_theme.clone())
        .map(|theme| parse_theme(&theme))
        .unwrap_or(false);

    let mut warnings = Vec::new();

    // Log level: env → config → default
    let log_level = env("SALESBOARD_LOG_LEVEL")
        .or_else(|| config.general.log_level.clone())
        .and_then(|level| match level.parse::<log::LevelFilter>() {
            Ok(filter) => Some(filter),
            Err(_) => {
                warnings.push(format!(
                    "Unknown log level '{}', using {}",
                    level, DEFAULT_LOG_LEVEL
                ));
                None
            }
        })
        .unwrap_or(log::LevelFilter::Debug);

    let log_file = config
        .general
        .log_file
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    let dashboard_delay_ms = env("SALESBOARD_DASHBOARD_DELAY_MS")
        .and_then(|v| v.parse().ok())
        .or(config.data.dashboard_delay_ms)
        .unwrap_or(DEFAULT_DASHBOARD_DELAY_MS);

    let user_delay_ms = env("SALESBOARD_USER_DELAY_MS")
        .and_then(|v| v.parse().ok())
        .or(config.data.user_delay_ms)
        .unwrap_or(DEFAULT_USER_DELAY_MS);

    ResolvedConfig {
        default_dark,
        log_level,
        log_file: PathBuf::from(log_file),
        dashboard_delay: Duration::from_millis(dashboard_delay_ms),
        user_delay: Duration::from_millis(user_delay_ms),
        headless: cli.headless,
        warnings,
    }
}

/// `"dark"` (any case) is dark; everything else is light.
fn parse_theme(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("dark")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = SalesboardConfig::default();
        assert!(config.general.default_theme.is_none());
        assert!(config.data.dashboard_delay_ms.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&SalesboardConfig::default(), &CliOverrides::default(), no_env);
        assert!(!resolved.default_dark);
        assert_eq!(resolved.log_level, log::LevelFilter::Debug);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(resolved.dashboard_delay, Duration::from_millis(1500));
        assert_eq!(resolved.user_delay, Duration::from_millis(800));
        assert!(!resolved.headless);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = SalesboardConfig {
            general: GeneralConfig {
                default_theme: Some("dark".to_string()),
                log_level: Some("warn".to_string()),
                log_file: Some("/tmp/board.log".to_string()),
            },
            data: DataConfig {
                dashboard_delay_ms: Some(10),
                user_delay_ms: Some(5),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert!(resolved.default_dark);
        assert_eq!(resolved.log_level, log::LevelFilter::Warn);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/board.log"));
        assert_eq!(resolved.dashboard_delay, Duration::from_millis(10));
        assert_eq!(resolved.user_delay, Duration::from_millis(5));
    }

    #[test]
    fn test_env_overrides_config_and_cli_overrides_env() {
        let config = SalesboardConfig {
            general: GeneralConfig {
                default_theme: Some("light".to_string()),
                ..Default::default()
            },
            data: DataConfig {
                dashboard_delay_ms: Some(10),
                user_delay_ms: None,
            },
        };
        let env: HashMap<&str, &str> = HashMap::from([
            ("SALESBOARD_THEME", "dark"),
            ("SALESBOARD_DASHBOARD_DELAY_MS", "0"),
            ("SALESBOARD_LOG_LEVEL", "info"),
        ]);
        let lookup = |key: &str| env.get(key).map(|v| v.to_string());

        let resolved = resolve_with_env(&config, &CliOverrides::default(), lookup);
        assert!(resolved.default_dark);
        assert_eq!(resolved.dashboard_delay, Duration::ZERO);
        assert_eq!(resolved.log_level, log::LevelFilter::Info);

        let cli = CliOverrides {
            theme: Some("light".to_string()),
            headless: true,
        };
        let resolved = resolve_with_env(&config, &cli, lookup);
        assert!(!resolved.default_dark);
        assert!(resolved.headless);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = SalesboardConfig {
            general: GeneralConfig {
                log_level: Some("chatty".to_string()),
                default_theme: Some("solarized".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let lookup = |key: &str| (key == "SALESBOARD_USER_DELAY_MS").then(|| "soon".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), lookup);
        assert_eq!(resolved.log_level, log::LevelFilter::Debug);
        assert!(!resolved.default_dark);
        assert_eq!(resolved.user_delay, Duration::from_millis(DEFAULT_USER_DELAY_MS));
        assert_eq!(
            resolved.warnings,
            vec![format!("Unknown log level 'chatty', using {DEFAULT_LOG_LEVEL}")]
        );
    }

    #[test]
    fn test_parse_theme_is_case_insensitive() {
        assert!(parse_theme("Dark"));
        assert!(parse_theme(" DARK "));
        assert!(!parse_theme("light"));
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
default_theme = "dark"
log_level = "trace"

[data]
dashboard_delay_ms = 250
user_delay_ms = 100
"#;
        let config: SalesboardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_theme.as_deref(), Some("dark"));
        assert_eq!(config.general.log_level.as_deref(), Some("trace"));
        assert!(config.general.log_file.is_none());
        assert_eq!(config.data.dashboard_delay_ms, Some(250));
        assert_eq!(config.data.user_delay_ms, Some(100));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[data]
user_delay_ms = 0
"#;
        let config: SalesboardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.data.user_delay_ms, Some(0));
        assert!(config.data.dashboard_delay_ms.is_none());
        assert!(config.general.default_theme.is_none());
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("salesboard").join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(config.general.default_theme.is_none());

        let generated = fs::read_to_string(&path).unwrap();
        assert!(generated.contains("# dashboard_delay_ms = 1500"));
        // Everything is commented out, so it parses back to defaults
        let reparsed = load_config_from(&path).unwrap();
        assert!(reparsed.data.dashboard_delay_ms.is_none());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[data]\ndashboard_delay_ms = \"soon\"\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }
}
