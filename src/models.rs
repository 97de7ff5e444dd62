//! Core data structures shared by the API client, the locator and the CLI
//!
//! Everything here is transient: values are built per invocation and
//! dropped once the report has been printed.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Minimal directory entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServerSummary {
    /// Opaque server identifier assigned by the directory
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
}

impl ServerSummary {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// One element of the directory listing
///
/// Entries without a usable id stay in the listing so the scan can report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryEntry {
    Listed(ServerSummary),
    Unidentified {
        /// Position in the directory listing
        index: usize,
        reason: String,
    },
}

impl DirectoryEntry {
    /// Id used in warnings for entries the directory did not identify
    pub const UNKNOWN_ID: &'static str = "Unknown";

    pub fn listed(id: impl Into<String>) -> Self {
        Self::Listed(ServerSummary::new(id))
    }

    /// Server id, or `None` for unidentified entries
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Listed(summary) => Some(&summary.id),
            Self::Unidentified { .. } => None,
        }
    }
}

/// A player connected to a server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    /// Server-local player slot id
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    /// Display name, free text
    pub name: String,

    /// Round-trip latency reported by the server, passed through as-is
    pub ping: i64,
}

/// Normalized server details from the per-server endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerDetails {
    /// First connection endpoint advertised by the server
    pub address: String,

    /// Server hostname (may contain colour codes)
    pub hostname: String,

    /// Player roster in the order returned by the API
    pub players: Vec<PlayerInfo>,
}

impl ServerDetails {
    /// Players whose name contains `query`, ignoring case
    pub fn matching_players<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a PlayerInfo> {
        self.players
            .iter()
            .filter(move |player| name_matches(query, &player.name))
    }
}

/// Advertised player slot count for a server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaxClients {
    Known(String),
    Unknown,
}

impl fmt::Display for MaxClients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(value) => write!(f, "{value}"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Full single-server view used by `resolve`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerProfile {
    pub details: ServerDetails,

    /// Resource names loaded on the server, empty when not advertised
    pub resources: Vec<String>,

    pub max_clients: MaxClients,
}

/// One (server, matching player) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub address: String,
    pub hostname: String,
    pub matched_player_name: String,
}

impl MatchResult {
    pub fn new(details: &ServerDetails, player: &PlayerInfo) -> Self {
        Self {
            address: details.address.clone(),
            hostname: details.hostname.clone(),
            matched_player_name: player.name.clone(),
        }
    }
}

/// Ordered scan results, in directory listing order
///
/// No deduplication and no sorting is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanReport {
    matches: Vec<MatchResult>,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: MatchResult) {
        self.matches.push(result);
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchResult> {
        self.matches.iter()
    }

    pub fn as_slice(&self) -> &[MatchResult] {
        &self.matches
    }
}

impl Extend<MatchResult> for ScanReport {
    fn extend<I: IntoIterator<Item = MatchResult>>(&mut self, iter: I) {
        self.matches.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ScanReport {
    type Item = &'a MatchResult;
    type IntoIter = std::slice::Iter<'a, MatchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

/// Non-fatal failure recorded for one server during a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanWarning {
    pub server_id: String,
    pub message: String,
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to fetch data for server {}: {}",
            self.server_id, self.message
        )
    }
}

/// Everything one `locate` call produces
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub report: ScanReport,
    pub warnings: Vec<ScanWarning>,

    /// Number of directory entries attempted
    pub servers_scanned: usize,
}

/// Case-insensitive substring test: `query` lowercased inside `name` lowercased
///
/// No trimming and no unicode normalization beyond `to_lowercase`.
pub fn name_matches(query: &str, name: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Accept either a JSON string or a JSON number and keep its textual form
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}
