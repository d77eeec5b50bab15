//! Pure string similarity scoring.
//!
//! All functions normalize their inputs (trim, lowercase) themselves and never
//! touch reference data, so they can be tested in isolation.

use std::collections::BTreeSet;

use rapidfuzz::distance::levenshtein;
use url::{Host, Url};

/// Score of an exact (case-insensitive) match.
pub const EXACT_SCORE: f64 = 100.0;
/// Base score for substring containment; ratio adds up to [`CONTAINMENT_SPAN`].
pub const CONTAINMENT_BASE: f64 = 80.0;
pub const CONTAINMENT_SPAN: f64 = 15.0;
/// Minimum length ratio for containment to count.
pub const CONTAINMENT_MIN_RATIO: f64 = 0.4;
/// Score when the value appears in the candidate's description.
pub const DESCRIPTION_SCORE: f64 = 70.0;
/// Shortest value eligible for description containment.
pub const DESCRIPTION_MIN_LEN: usize = 3;
/// Edit similarity floor and scale.
pub const EDIT_MIN_SIMILARITY: f64 = 0.6;
pub const EDIT_SCALE: f64 = 75.0;
/// Candidates must score strictly above this to be suggested.
pub const SUGGESTION_FLOOR: f64 = 50.0;
pub const MAX_SUGGESTIONS: usize = 5;

/// Name containment ratio above which two names are considered the same.
pub const NAME_CONTAINMENT_RATIO: f64 = 0.8;
/// Share of the smaller token set that must overlap.
pub const NAME_TOKEN_OVERLAP: f64 = 0.7;

pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// `1 - distance / max_len` over characters; two empty strings are identical.
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein::distance(a.chars(), b.chars());
    1.0 - distance as f64 / max_len as f64
}

/// Length ratio (shorter / longer) when one string contains the other.
pub fn containment_ratio(a: &str, b: &str) -> Option<f64> {
    if a.is_empty() || b.is_empty() {
        return None;
    }
    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    longer
        .contains(shorter)
        .then(|| shorter.chars().count() as f64 / longer.chars().count() as f64)
}

/// Blended 0..=100 score of `value` against one candidate.
///
/// Exact match scores 100; containment with a length ratio above 0.4 maps into
/// 80..=95; the value appearing in `description` scores 70; otherwise edit
/// similarity above 0.6 maps into 0..=75.
pub fn blended_score(value: &str, candidate: &str, description: Option<&str>) -> f64 {
    let value = normalize(value);
    let candidate = normalize(candidate);
    if value.is_empty() || candidate.is_empty() {
        return 0.0;
    }
    if value == candidate {
        return EXACT_SCORE;
    }
    if let Some(ratio) = containment_ratio(&value, &candidate)
        && ratio > CONTAINMENT_MIN_RATIO
    {
        return CONTAINMENT_BASE + ratio * CONTAINMENT_SPAN;
    }
    if value.chars().count() >= DESCRIPTION_MIN_LEN
        && description.is_some_and(|text| normalize(text).contains(&value))
    {
        return DESCRIPTION_SCORE;
    }
    let similarity = levenshtein_similarity(&value, &candidate);
    if similarity > EDIT_MIN_SIMILARITY {
        similarity * EDIT_SCALE
    } else {
        0.0
    }
}

/// Keeps candidates above the floor, best first, at most five.
///
/// Equal scores keep their input order.
pub fn rank<'a>(scored: impl IntoIterator<Item = (&'a str, f64)>) -> Vec<String> {
    let mut kept: Vec<(&str, f64)> = scored
        .into_iter()
        .filter(|(_, score)| *score > SUGGESTION_FLOOR)
        .collect();
    kept.sort_by(|a, b| b.1.total_cmp(&a.1));
    let mut suggestions: Vec<String> = Vec::new();
    for (value, _) in kept {
        if !suggestions.iter().any(|existing| existing == value) {
            suggestions.push(value.to_string());
        }
        if suggestions.len() == MAX_SUGGESTIONS {
            break;
        }
    }
    suggestions
}

/// Parses a URL, reading values without a scheme as `https://`.
fn parse_url(value: &str) -> Option<Url> {
    let trimmed = value.trim();
    match Url::parse(trimmed) {
        Ok(url) if url.has_host() => Some(url),
        _ if !trimmed.contains("://") => Url::parse(&format!("https://{trimmed}")).ok(),
        _ => None,
    }
}

fn site_host(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    (!host.is_empty()).then(|| host.to_lowercase())
}

/// Lowercased host of a URL without a leading `www.`.
pub fn url_host(url: &str) -> Option<String> {
    parse_url(url).as_ref().and_then(site_host)
}

/// First path segment of a URL, lowercased.
fn first_path_segment(url: &Url) -> Option<String> {
    url.path_segments()?
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_lowercase)
}

fn without_tld(host: &str) -> &str {
    host.rsplit_once('.').map_or(host, |(name, _)| name)
}

/// Whether two URLs point at the same site.
///
/// Hosts are compared without `www.`, then domain names without their TLD.
/// GitHub URLs are compared by organization, since every repository shares the host.
pub fn urls_similar(a: &str, b: &str) -> bool {
    let (Some(url_a), Some(url_b)) = (parse_url(a), parse_url(b)) else {
        return false;
    };
    let (Some(host_a), Some(host_b)) = (site_host(&url_a), site_host(&url_b)) else {
        return false;
    };
    let is_github = |host: &str| host == "github.com";
    if is_github(&host_a) || is_github(&host_b) {
        return is_github(&host_a)
            && is_github(&host_b)
            && first_path_segment(&url_a).is_some_and(|org| Some(org) == first_path_segment(&url_b));
    }
    if host_a == host_b {
        return true;
    }
    let is_domain = |url: &Url| matches!(url.host(), Some(Host::Domain(_)));
    is_domain(&url_a) && is_domain(&url_b) && without_tld(&host_a) == without_tld(&host_b)
}

/// Alphanumeric word set of a name.
pub fn tokens(value: &str) -> BTreeSet<String> {
    normalize(value)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Shared tokens as a share of the smaller token set, 0 when either is empty.
pub fn token_overlap(a: &str, b: &str) -> f64 {
    let (tokens_a, tokens_b) = (tokens(a), tokens(b));
    let smaller = tokens_a.len().min(tokens_b.len());
    if smaller == 0 {
        return 0.0;
    }
    let shared = tokens_a.intersection(&tokens_b).count();
    shared as f64 / smaller as f64
}

/// Whether two names likely refer to the same project.
pub fn names_similar(a: &str, b: &str) -> bool {
    let (a, b) = (normalize(a), normalize(b));
    if a.is_empty() || b.is_empty() {
        return false;
    }
    containment_ratio(&a, &b).is_some_and(|ratio| ratio > NAME_CONTAINMENT_RATIO)
        || token_overlap(&a, &b) >= NAME_TOKEN_OVERLAP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_follow_bands() {
        assert_eq!(blended_score("DEX", "dex", None), EXACT_SCORE);
        let containment = blended_score("lend", "lending", None);
        assert!((80.0..=95.0).contains(&containment), "{containment}");
        assert_eq!(
            blended_score("swap", "dex", Some("Decentralized exchanges and swap routers")),
            DESCRIPTION_SCORE
        );
        let edit = blended_score("lendng", "lending", None);
        assert!(edit > SUGGESTION_FLOOR && edit < EDIT_SCALE, "{edit}");
        assert_eq!(blended_score("zzz", "lending", None), 0.0);
    }

    #[test]
    fn short_values_skip_description() {
        assert_eq!(blended_score("a", "dex", Some("a decentralized exchange")), 0.0);
    }

    #[test]
    fn rank_sorts_and_caps() {
        let scored = [
            ("a", 60.0),
            ("b", 90.0),
            ("c", 40.0),
            ("d", 70.0),
            ("e", 55.0),
            ("f", 51.0),
            ("g", 80.0),
        ];
        assert_eq!(rank(scored), vec!["b", "g", "d", "a", "e"]);
    }

    #[test]
    fn hosts_are_normalized() {
        assert_eq!(url_host("https://www.Uniswap.org/swap").as_deref(), Some("uniswap.org"));
        assert_eq!(url_host("http://app.aave.com:8080?x=1").as_deref(), Some("app.aave.com"));
        assert_eq!(url_host("https://"), None);
        assert_eq!(url_host("uniswap.org/app").as_deref(), Some("uniswap.org"));
        assert_eq!(url_host("https://uniswap.org\\app").as_deref(), Some("uniswap.org"));
    }

    #[test]
    fn ip_hosts_are_compared_whole() {
        assert_eq!(
            url_host("http://[2001:db8::1]:8080/").as_deref(),
            Some("[2001:db8::1]")
        );
        assert!(!urls_similar("http://[2001:db8::1]:8080/", "http://[2001:db8::2]/"));
        assert!(!urls_similar("http://10.0.0.1", "http://10.0.0.2"));
        assert!(urls_similar("http://10.0.0.1/a", "http://10.0.0.1:80/b"));
    }

    #[test]
    fn url_similarity() {
        assert!(urls_similar("https://uniswap.org", "https://www.uniswap.org/"));
        assert!(urls_similar("https://uniswap.org", "https://uniswap.com"));
        assert!(!urls_similar("https://uniswap.org", "https://aave.com"));
        assert!(urls_similar("https://github.com/Uniswap/v3-core", "https://github.com/uniswap"));
        assert!(!urls_similar("https://github.com/aave", "https://github.com/uniswap"));
        assert!(urls_similar("uniswap.org", "https://uniswap.org/app"));
    }

    #[test]
    fn name_similarity() {
        assert!(names_similar("Uniswap", "uniswap"));
        assert!(names_similar("Lido Finance", "lido-finance protocol"));
        assert!(names_similar("Lido", "Lido Finance Staking"));
        assert!(!names_similar("Uniswap Labs", "Sushi Labs"));
        assert!(!names_similar("Aave", "Compound"));
        assert!(!names_similar("", "Aave"));
    }
}
