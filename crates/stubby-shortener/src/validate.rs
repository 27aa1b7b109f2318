use crate::error::{Result, ShortenerError};
use std::borrow::Cow;
use url::Url;

const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Validates that `url` is an absolute http(s) URL with a network location.
///
/// The raw string is what gets stored and redirected to, so it is checked as
/// written: `Url::parse` alone drops tabs and newlines and fills in an
/// authority for `http:example.com`.
pub fn validate_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(ShortenerError::InvalidUrl("URL cannot be empty".to_string()));
    }

    if url.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL must not contain whitespace or control characters: {:?}",
            url
        )));
    }

    let parsed = Url::parse(url).map_err(|e| ShortenerError::InvalidUrl(e.to_string()))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL scheme must be http or https: {}",
            parsed.scheme()
        )));
    }

    let authority = url
        .split_once("://")
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case(parsed.scheme()))
        .map(|(_, rest)| rest.split(['/', '?', '#']).next().unwrap_or_default());
    if authority.is_none_or(str::is_empty) || parsed.host_str().is_none_or(str::is_empty) {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL must have a network location: {}",
            url
        )));
    }

    Ok(())
}

/// Returns a form of a validated URL usable as a `Location` header value.
///
/// URLs that are already visible ASCII are returned as stored; anything else
/// (e.g. a non-ASCII path or host) is returned in its normalized, percent
/// encoded form.
pub fn redirect_location(url: &str) -> Cow<'_, str> {
    if url.bytes().all(|b| b.is_ascii_graphic()) {
        return Cow::Borrowed(url);
    }

    match Url::parse(url) {
        Ok(parsed) => Cow::Owned(parsed.into()),
        Err(_) => Cow::Borrowed(url),
    }
}
