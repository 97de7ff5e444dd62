use reqwest::header::{
    HeaderMap, HeaderValue, InvalidHeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER, USER_AGENT,
};

/// Accept header the server browser frontend sends
pub const ACCEPT_JSON: &str = "application/json, text/plain, */*";

/// Build browser-like headers for the server directory API
///
/// The directory rejects requests that do not look like they come from the
/// server browser, so every request carries these.
///
/// # Arguments
///
/// * `user_agent` - User agent string (a modern browser UA)
/// * `referer` - Referer URL, skipped when empty
///
/// # Errors
///
/// Returns `InvalidHeaderValue` if either value contains characters that are
/// not allowed in an HTTP header
///
/// # Examples
///
/// ```
/// use cfxscan::api::headers::build_browser_headers;
///
/// let headers = build_browser_headers(
///     "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
///     "https://servers.fivem.net/",
/// )
/// .unwrap();
/// assert!(headers.contains_key("referer"));
/// ```
pub fn build_browser_headers(
    user_agent: &str,
    referer: &str,
) -> Result<HeaderMap, InvalidHeaderValue> {
    let mut headers = HeaderMap::new();

    headers.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
    if !referer.is_empty() {
        headers.insert(REFERER, HeaderValue::from_str(referer)?);
    }
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

    Ok(headers)
}
