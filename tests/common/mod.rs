//! Common test utilities

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cfxscan::config::ApiConfig;

pub const DIRECTORY_PATH: &str = "/api/servers/";

/// API config pointing both endpoints at a mock server
pub fn api_config(mock_server: &MockServer) -> ApiConfig {
    ApiConfig {
        directory_url: format!("{}{DIRECTORY_PATH}", mock_server.uri()),
        detail_base_url: format!("{}/api/servers/single/", mock_server.uri()),
        request_timeout_secs: 5,
        ..ApiConfig::default()
    }
}

pub fn detail_path(server_id: &str) -> String {
    format!("/api/servers/single/{server_id}")
}

/// Directory body listing the given ids
pub fn directory_body(ids: &[&str]) -> Value {
    json!({
        "servers": ids.iter().map(|id| json!({ "id": id })).collect::<Vec<_>>()
    })
}

/// Detail body with one endpoint and the given player names
pub fn detail_body(address: &str, hostname: &str, players: &[&str]) -> Value {
    json!({
        "EndPoint": "test",
        "Data": {
            "connectEndPoints": [address],
            "hostname": hostname,
            "players": players
                .iter()
                .enumerate()
                .map(|(i, name)| json!({ "id": i + 1, "name": name, "ping": 40 + i }))
                .collect::<Vec<_>>(),
            "resources": ["chat", "spawnmanager"],
            "vars": { "sv_maxClients": "32" }
        }
    })
}

#[allow(dead_code)]
pub async fn mount_directory(mock_server: &MockServer, ids: &[&str]) {
    Mock::given(method("GET"))
        .and(path(DIRECTORY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(directory_body(ids)))
        .mount(mock_server)
        .await;
}

#[allow(dead_code)]
pub async fn mount_detail(mock_server: &MockServer, server_id: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(detail_path(server_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

#[allow(dead_code)]
pub async fn mount_detail_status(mock_server: &MockServer, server_id: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(detail_path(server_id)))
        .respond_with(ResponseTemplate::new(status))
        .mount(mock_server)
        .await;
}
