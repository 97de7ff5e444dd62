//! Player locator
//!
//! Scans the whole directory for servers where a named player is connected.
//! The directory listing is fetched once; every listed server then gets one
//! detail fetch, with up to `concurrency` fetches in flight. Fetches are
//! collected as they complete and put back in listing order, so the report is
//! identical whatever the concurrency degree.
//!
//! A failed directory fetch fails the scan. A failed detail fetch, or a
//! directory entry without an id, only becomes a [`ScanWarning`].

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use crate::api::ApiError;
use crate::models::{DirectoryEntry, MatchResult, ScanOutcome, ScanWarning, ServerDetails};

/// Source of directory listings and server details
///
/// Implemented by [`crate::api::CfxClient`]; tests plug in an in-memory source.
#[async_trait]
pub trait ServerSource: Send + Sync {
    /// List every active server, in directory order
    async fn list_servers(&self) -> Result<Vec<DirectoryEntry>, ApiError>;

    /// Fetch normalized details for one server
    async fn server_details(&self, server_id: &str) -> Result<ServerDetails, ApiError>;
}

#[async_trait]
impl<S: ServerSource + ?Sized> ServerSource for &S {
    async fn list_servers(&self) -> Result<Vec<DirectoryEntry>, ApiError> {
        (**self).list_servers().await
    }

    async fn server_details(&self, server_id: &str) -> Result<ServerDetails, ApiError> {
        (**self).server_details(server_id).await
    }
}

/// Scans a [`ServerSource`] for a player name
pub struct PlayerLocator<S> {
    source: S,
    concurrency: usize,
}

impl<S: ServerSource> PlayerLocator<S> {
    /// Create a locator; a concurrency of 0 is treated as 1
    pub fn new(source: S, concurrency: usize) -> Self {
        Self {
            source,
            concurrency: concurrency.max(1),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Find every server where a player name contains `player_name`, ignoring case
    ///
    /// Each directory entry is attempted exactly once, duplicates included.
    ///
    /// # Errors
    ///
    /// Returns the directory error unchanged if the listing cannot be fetched;
    /// no partial report is produced in that case
    pub async fn locate(&self, player_name: &str) -> Result<ScanOutcome, ApiError> {
        let entries = self.source.list_servers().await.map_err(|e| {
            tracing::error!(error = %e, "Directory fetch failed, aborting scan");
            e
        })?;

        tracing::info!(
            player = player_name,
            servers = entries.len(),
            concurrency = self.concurrency,
            "Starting player scan"
        );

        let mut fetched: Vec<(usize, &str, Result<ServerDetails, ApiError>)> =
            stream::iter(entries.iter().enumerate())
                .map(|(position, entry)| async move {
                    match entry {
                        DirectoryEntry::Listed(summary) => {
                            let result = self.source.server_details(&summary.id).await;
                            (position, summary.id.as_str(), result)
                        }
                        DirectoryEntry::Unidentified { index, reason } => (
                            position,
                            DirectoryEntry::UNKNOWN_ID,
                            Err(ApiError::malformed(
                                format!("directory entry {index}"),
                                reason.clone(),
                            )),
                        ),
                    }
                })
                .buffer_unordered(self.concurrency)
                .collect()
                .await;

        fetched.sort_by_key(|(position, _, _)| *position);

        let mut outcome = ScanOutcome::default();

        for (_, server_id, result) in fetched {
            outcome.servers_scanned += 1;

            match result {
                Ok(details) => {
                    let before = outcome.report.len();
                    outcome.report.extend(
                        details
                            .matching_players(player_name)
                            .map(|player| MatchResult::new(&details, player)),
                    );

                    let found = outcome.report.len() - before;
                    if found > 0 {
                        tracing::debug!(
                            server_id,
                            hostname = %details.hostname,
                            found,
                            "Player match"
                        );
                    }
                }
                Err(e) => {
                    tracing::warn!(server_id, error = %e, "Skipping server");
                    outcome.warnings.push(ScanWarning {
                        server_id: server_id.to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            player = player_name,
            scanned = outcome.servers_scanned,
            matches = outcome.report.len(),
            warnings = outcome.warnings.len(),
            "Player scan finished"
        );

        Ok(outcome)
    }
}
