use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::{Display, Write};

use cfxscan::api::CfxClient;
use cfxscan::config::Config;
use cfxscan::models::ServerProfile;
use cfxscan::utils::{format_console_date, server_id_from_link};

use super::{section_header, RULE};

pub async fn resolve(config: &Config, link: &str, json: bool) -> Result<()> {
    let server_id = server_id_from_link(link)?;
    tracing::debug!(link, server_id = %server_id, "Resolved link to server id");

    let client = CfxClient::new(&config.api).context("Failed to create API client")?;

    let profile = client
        .resolve(&server_id)
        .await
        .with_context(|| format!("Failed to resolve server {server_id}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print!("{}", render_profile(&profile, &Local::now()));
    }

    Ok(())
}

/// Render the server, player and resource sections for a resolved server
pub fn render_profile<Tz>(profile: &ServerProfile, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let details = &profile.details;
    let mut out = String::new();

    let _ = writeln!(out, "{} Target Info:", format_console_date(now));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", section_header("Server Info"));
    let _ = writeln!(out, "|  Server IP: {}", details.address);
    let _ = writeln!(out, "|  Hostname: {}", details.hostname);
    let _ = writeln!(out, "|  Max Clients: {}", profile.max_clients);
    let _ = writeln!(out, "{}", section_header("Player Info"));

    for player in &details.players {
        let _ = writeln!(
            out,
            "  - ID: {} | Name: {} | Ping: {}",
            player.id, player.name, player.ping
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", section_header("Resources Info"));
    for resource in &profile.resources {
        let _ = writeln!(out, "  - {resource}");
    }
    let _ = writeln!(out, "{RULE}");

    out
}
