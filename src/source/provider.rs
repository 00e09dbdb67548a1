use std::fmt;

use async_trait::async_trait;

use crate::core::types::{DashboardPayload, User};

/// Why a fetch failed. The display text is what ends up in the slice's
/// `error` field, so it should read well on its own.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Connection-level failure (timeout, DNS, refused).
    Transport(String),
    /// The source answered but the body could not be decoded.
    Parse(String),
    /// The source refused or is not reachable right now.
    Unavailable(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "transport error: {msg}"),
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
            FetchError::Unavailable(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[async_trait]
pub trait DataSource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    /// Fetch the sales, product, region and KPI data as one payload.
    async fn fetch_dashboard(&self) -> Result<DashboardPayload, FetchError>;

    /// Fetch the signed-in user.
    async fn fetch_user(&self) -> Result<User, FetchError>;
}
