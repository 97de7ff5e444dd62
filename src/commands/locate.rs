use anyhow::{Context, Result};
use std::fmt::Write;

use cfxscan::api::CfxClient;
use cfxscan::config::Config;
use cfxscan::locator::PlayerLocator;
use cfxscan::models::ScanOutcome;

use super::section_header;

pub async fn locate(config: &Config, player_name: &str, json: bool) -> Result<()> {
    let client = CfxClient::new(&config.api).context("Failed to create API client")?;
    let locator = PlayerLocator::new(client, config.scan.max_concurrent_requests);

    if !json {
        println!("Searching for player '{player_name}' across all active servers...");
    }

    let outcome = locator
        .locate(player_name)
        .await
        .context("Player scan aborted")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", render_outcome(player_name, &outcome));
    }

    Ok(())
}

/// Render warnings and matches as two distinct sections
///
/// An empty report prints an explicit not-found line rather than nothing.
pub fn render_outcome(player_name: &str, outcome: &ScanOutcome) -> String {
    let mut out = String::new();

    if !outcome.warnings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}",
            section_header(&format!("Warnings ({})", outcome.warnings.len()))
        );
        for warning in &outcome.warnings {
            let _ = writeln!(out, "  [WARNING] {warning}");
        }
    }

    let _ = writeln!(out);
    if outcome.report.is_empty() {
        let _ = writeln!(
            out,
            "Player '{player_name}' not found on any active server ({} scanned).",
            outcome.servers_scanned
        );
        return out;
    }

    let _ = writeln!(
        out,
        "{}",
        section_header(&format!("Matches ({})", outcome.report.len()))
    );
    for hit in &outcome.report {
        let _ = writeln!(
            out,
            "  - Player: {} | Server IP: {} | Hostname: {}",
            hit.matched_player_name,
            hit.address,
            hit.hostname
        );
    }

    out
}
