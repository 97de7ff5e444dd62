//! Per-server detail payload
//!
//! Both the player scan and the single-server resolve read the same
//! `{"Data": {...}}` document; this module is the one place it gets normalized.

use serde::Deserialize;

use crate::api::error::ApiError;
use crate::models::{MaxClients, PlayerInfo, ServerDetails, ServerProfile};

#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    #[serde(rename = "Data")]
    data: RawServerData,
}

#[derive(Debug, Deserialize)]
struct RawServerData {
    #[serde(rename = "connectEndPoints")]
    connect_end_points: Vec<String>,

    hostname: String,

    players: Vec<PlayerInfo>,

    #[serde(default)]
    resources: Option<Vec<String>>,

    #[serde(default)]
    vars: Option<RawVars>,
}

#[derive(Debug, Default, Deserialize)]
struct RawVars {
    #[serde(default, rename = "sv_maxClients")]
    sv_max_clients: Option<serde_json::Value>,
}

impl RawServerData {
    fn into_profile(self, server_id: &str) -> Result<ServerProfile, ApiError> {
        let address = self.connect_end_points.into_iter().next().ok_or_else(|| {
            ApiError::malformed(context(server_id), "connectEndPoints is empty")
        })?;

        let max_clients = match self.vars.and_then(|v| v.sv_max_clients) {
            Some(serde_json::Value::String(s)) => MaxClients::Known(s),
            Some(serde_json::Value::Number(n)) => MaxClients::Known(n.to_string()),
            _ => MaxClients::Unknown,
        };

        Ok(ServerProfile {
            details: ServerDetails {
                address,
                hostname: self.hostname,
                players: self.players,
            },
            resources: self.resources.unwrap_or_default(),
            max_clients,
        })
    }
}

fn context(server_id: &str) -> String {
    format!("server {server_id}")
}

fn parse_envelope(server_id: &str, body: &str) -> Result<RawServerData, ApiError> {
    serde_json::from_str::<DetailEnvelope>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| ApiError::malformed(context(server_id), e.to_string()))
}

/// Parse a detail response body into address, hostname and roster
pub fn parse_details(server_id: &str, body: &str) -> Result<ServerDetails, ApiError> {
    parse_profile(server_id, body).map(|profile| profile.details)
}

/// Parse a detail response body including resources and slot count
pub fn parse_profile(server_id: &str, body: &str) -> Result<ServerProfile, ApiError> {
    parse_envelope(server_id, body)?.into_profile(server_id)
}
