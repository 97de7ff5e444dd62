//! End-to-end player scans against a mock directory

mod common;

use cfxscan::api::{ApiError, CfxClient};
use cfxscan::locator::PlayerLocator;
use common::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn locator(mock_server: &MockServer, concurrency: usize) -> PlayerLocator<CfxClient> {
    let client = CfxClient::new(&api_config(mock_server)).unwrap();
    PlayerLocator::new(client, concurrency)
}

/// One healthy server with a match, one failing server
#[tokio::test]
async fn test_match_with_one_failing_server() {
    let mock_server = MockServer::start().await;
    mount_directory(&mock_server, &["a", "b"]).await;
    mount_detail(
        &mock_server,
        "a",
        detail_body("1.2.3.4", "Server A", &["Alice"]),
    )
    .await;
    mount_detail_status(&mock_server, "b", 500).await;

    let outcome = locator(&mock_server, 8).locate("ali").await.unwrap();

    assert_eq!(outcome.report.len(), 1);
    let hit = &outcome.report.as_slice()[0];
    assert_eq!(hit.address, "1.2.3.4");
    assert_eq!(hit.hostname, "Server A");
    assert_eq!(hit.matched_player_name, "Alice");

    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].server_id, "b");
}

/// Directory failure aborts the scan before any detail call
#[tokio::test]
async fn test_directory_failure_aborts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTORY_PATH))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(detail_path("a")))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = locator(&mock_server, 8).locate("ali").await;

    assert!(matches!(
        result,
        Err(ApiError::DirectoryUnavailable {
            status: Some(502),
            ..
        })
    ));
}

/// Every server is requested exactly once, failures included
#[tokio::test]
async fn test_each_server_requested_once() {
    let mock_server = MockServer::start().await;
    let ids = ["s1", "s2", "s3", "s4", "s5", "s6"];
    mount_directory(&mock_server, &ids).await;

    for (i, id) in ids.iter().enumerate() {
        let template = if i % 2 == 0 {
            ResponseTemplate::new(200).set_body_json(detail_body(
                &format!("10.0.0.{i}"),
                &format!("Host {id}"),
                &["Runner"],
            ))
        } else {
            ResponseTemplate::new(503)
        };

        Mock::given(method("GET"))
            .and(path(detail_path(id)))
            .respond_with(template)
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let outcome = locator(&mock_server, 3).locate("run").await.unwrap();

    assert_eq!(outcome.servers_scanned, 6);
    assert_eq!(outcome.warnings.len(), 3);

    let hosts: Vec<_> = outcome.report.iter().map(|m| m.hostname.as_str()).collect();
    assert_eq!(hosts, vec!["Host s1", "Host s3", "Host s5"]);
}

/// Malformed detail payload is a warning, not a failure
#[tokio::test]
async fn test_malformed_detail_is_warning() {
    let mock_server = MockServer::start().await;
    mount_directory(&mock_server, &["bad", "good"]).await;
    mount_detail(
        &mock_server,
        "bad",
        serde_json::json!({ "Data": { "hostname": "no endpoints", "players": [] } }),
    )
    .await;
    mount_detail(&mock_server, "good", detail_body("5.5.5.5", "Good", &["Neo"])).await;

    let outcome = locator(&mock_server, 2).locate("neo").await.unwrap();

    assert_eq!(outcome.report.len(), 1);
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].server_id, "bad");
    assert!(outcome.warnings[0].message.contains("Malformed"));
}

/// No match anywhere yields an empty report and no warnings
#[tokio::test]
async fn test_not_found() {
    let mock_server = MockServer::start().await;
    mount_directory(&mock_server, &["a"]).await;
    mount_detail(&mock_server, "a", detail_body("1.1.1.1", "A", &["Alice"])).await;

    let outcome = locator(&mock_server, 4).locate("zorro").await.unwrap();

    assert!(outcome.report.is_empty());
    assert!(outcome.warnings.is_empty());
}

/// Empty directory means nothing to scan
#[tokio::test]
async fn test_empty_directory() {
    let mock_server = MockServer::start().await;
    mount_directory(&mock_server, &[]).await;

    let outcome = locator(&mock_server, 4).locate("anyone").await.unwrap();

    assert!(outcome.report.is_empty());
    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.servers_scanned, 0);
}

/// A directory entry without id is reported as an "Unknown" warning and counted
#[tokio::test]
async fn test_entry_without_id_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTORY_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "servers": [{ "name": "noid" }, { "id": "b" }] })),
        )
        .mount(&mock_server)
        .await;
    mount_detail(&mock_server, "b", detail_body("2.2.2.2", "B", &["Bob"])).await;

    let outcome = locator(&mock_server, 4).locate("zzz").await.unwrap();

    assert!(outcome.report.is_empty());
    assert_eq!(outcome.servers_scanned, 2);
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].server_id, "Unknown");
}
