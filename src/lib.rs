//! cfxscan - FiveM server resolver and player locator
//!
//! Queries the public FiveM server directory to resolve a single server's
//! metadata, or to find which active servers a player is connected to.
//!
//! # Architecture
//!
//! - [`config`] - Configuration management and settings
//! - [`api`] - Directory and per-server detail client
//! - [`locator`] - Player scan over the whole directory
//! - [`models`] - Core data structures and types
//! - [`error`] - Unified error type
//! - [`utils`] - Common utilities and helpers
//!
//! # Example
//!
//! ```no_run
//! use cfxscan::api::CfxClient;
//! use cfxscan::config::Config;
//! use cfxscan::locator::PlayerLocator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = CfxClient::new(&config.api)?;
//!     let locator = PlayerLocator::new(client, config.scan.max_concurrent_requests);
//!     let outcome = locator.locate("alice").await?;
//!     println!("{} matches", outcome.report.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod locator;
pub mod models;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::api::{ApiError, CfxClient};
    pub use crate::config::Config;
    pub use crate::error::{CfxErrorTrait, Error, ErrorCategory, Result};
    pub use crate::locator::{PlayerLocator, ServerSource};
    pub use crate::models::{
        DirectoryEntry, MatchResult, PlayerInfo, ScanOutcome, ScanReport, ScanWarning,
        ServerDetails, ServerProfile, ServerSummary,
    };
}

// Direct re-exports for convenience
pub use models::{MatchResult, ScanOutcome, ScanReport, ServerDetails};
