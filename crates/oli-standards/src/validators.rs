//! Format checks attached to schema fields.
//!
//! Each check receives a non-empty, trimmed value and returns an error message
//! when the value is malformed.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use ::url::{Host, Url};

static TX_HASH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]{64}$").expect("Invalid tx hash regex"));

static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("Invalid slug regex"));

pub const CONTRACT_NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 500;

fn too_long(value: &str, max: usize) -> Option<String> {
    let len = value.chars().count();
    (len > max).then(|| format!("Must be at most {max} characters (got {len})"))
}

pub fn contract_name(value: &str) -> Option<String> {
    too_long(value, CONTRACT_NAME_MAX_LEN)
}

pub fn description(value: &str) -> Option<String> {
    too_long(value, DESCRIPTION_MAX_LEN)
}

pub fn tx_hash(value: &str) -> Option<String> {
    if TX_HASH_REGEX.is_match(value) {
        None
    } else {
        Some("Must be a 0x-prefixed 32-byte transaction hash".to_string())
    }
}

/// Absolute http(s) URL whose host is a dotted domain name or an IP address.
fn web_url(value: &str) -> Option<Url> {
    if value.chars().any(char::is_whitespace) {
        return None;
    }
    let parsed = Url::parse(value).ok()?;
    let host_ok = match parsed.host()? {
        Host::Domain(domain) => {
            domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        Host::Ipv4(_) | Host::Ipv6(_) => true,
    };
    (matches!(parsed.scheme(), "http" | "https") && host_ok).then_some(parsed)
}

pub fn url(value: &str) -> Option<String> {
    match web_url(value) {
        Some(_) => None,
        None => Some("Must be a full URL starting with http:// or https://".to_string()),
    }
}

pub fn github_url(value: &str) -> Option<String> {
    let Some(parsed) = web_url(value) else {
        return url(value);
    };
    match parsed.host_str() {
        Some("github.com" | "www.github.com") => None,
        _ => Some("Must be a github.com URL".to_string()),
    }
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn date(value: &str) -> Option<String> {
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || DateTime::parse_from_rfc3339(value).is_ok()
    {
        None
    } else {
        Some("Must be a date in YYYY-MM-DD format".to_string())
    }
}

pub fn token_decimals(value: &str) -> Option<String> {
    match value.parse::<u8>() {
        Ok(_) => None,
        Err(_) => Some("Must be a whole number between 0 and 255".to_string()),
    }
}

/// Lowercase directory slug, e.g. `uniswap` or `lido-finance`.
pub fn project_slug(value: &str) -> Option<String> {
    if SLUG_REGEX.is_match(value) {
        None
    } else {
        Some("Must be lowercase letters, digits, '-' or '_'".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tx_hash_shape() {
        let hash = format!("0x{}", "ab".repeat(32));
        assert!(tx_hash(&hash).is_none());
        assert!(tx_hash("0x1234").is_some());
        assert!(tx_hash(&hash.replace("0x", "")).is_some());
    }

    #[test]
    fn url_shape() {
        assert!(url("https://uniswap.org").is_none());
        assert!(url("https://app.uniswap.org/swap?chain=base").is_none());
        assert!(url("uniswap.org").is_some());
        assert!(url("https://localhost").is_some());
        assert!(url("ftp://files.uniswap.org").is_some());
        assert!(url("https://uniswap.org/some path").is_some());
        assert!(url("http://[2001:db8::1]:8080/").is_none());
    }

    #[test]
    fn github_host_required() {
        assert!(github_url("https://github.com/Uniswap").is_none());
        assert!(github_url("https://gitlab.com/uniswap").is_some());
        assert!(github_url("https://GitHub.com/Uniswap").is_none());
        assert!(github_url("https://github.com.evil.io/uniswap").is_some());
        assert!(github_url("https://user@github.com:443/uniswap").is_none());
    }

    #[test]
    fn date_formats() {
        assert!(date("2024-03-01").is_none());
        assert!(date("2024-03-01T10:00:00Z").is_none());
        assert!(date("01/03/2024").is_some());
        assert!(date("2024-02-30").is_some());
    }

    #[test]
    fn length_limit_counts_chars() {
        assert!(contract_name(&"é".repeat(CONTRACT_NAME_MAX_LEN)).is_none());
        assert!(contract_name(&"a".repeat(CONTRACT_NAME_MAX_LEN + 1)).is_some());
    }

    #[test]
    fn decimals_and_slugs() {
        assert!(token_decimals("18").is_none());
        assert!(token_decimals("256").is_some());
        assert!(project_slug("lido-finance").is_none());
        assert!(project_slug("Lido Finance").is_some());
    }
}
