//! Common utilities and helper functions

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use url::Url;

/// Extract a server id from a join link, a server-browser URL or a bare id
///
/// The id is the last non-empty path segment, so `cfx.re/join/abc123`,
/// `https://cfx.re/join/abc123/` and `abc123` all yield `abc123`.
///
/// # Examples
///
/// ```
/// use cfxscan::utils::server_id_from_link;
///
/// assert_eq!(server_id_from_link("https://cfx.re/join/abc123").unwrap(), "abc123");
/// assert_eq!(server_id_from_link("abc123").unwrap(), "abc123");
/// ```
pub fn server_id_from_link(link: &str) -> Result<String> {
    let link = link.trim();

    let id = match Url::parse(link) {
        Ok(url) if !url.cannot_be_a_base() => url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(str::to_string),
        _ => link
            .split(['?', '#'])
            .next()
            .and_then(|path| path.split('/').filter(|s| !s.is_empty()).last())
            .map(str::to_string),
    };

    id.context(format!("No server id found in '{link}'"))
}

/// Format a timestamp for console output, e.g. `[Friday 10-16-2026 14-03-59]`
pub fn format_console_date<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("[{}]", date.format("%A %m-%d-%Y %H-%M-%S"))
}
