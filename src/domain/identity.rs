use regex::Regex;
use std::sync::LazyLock;

const COMPETITOR_PREFIX: &str = "sr:competitor:";

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"));

static PLAYER_HANDLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<slug>[a-z0-9\-]*)-(?P<id>\d+)$").expect("valid handle regex"));

pub fn competitor_api_id(api_id_int: u64) -> String {
    format!("{}{}", COMPETITOR_PREFIX, api_id_int)
}

/// Numeric part of `sr:competitor:<n>`
pub fn parse_api_id_int(api_id: &str) -> Option<u64> {
    api_id.strip_prefix(COMPETITOR_PREFIX)?.parse().ok()
}

/// Lowercase ASCII slug; any run of other characters becomes a single `-`
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    NON_SLUG_CHARS
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

pub fn view_path(slug: &str, api_id_int: u64) -> String {
    format!("/api/player/{}-{}", slug, api_id_int)
}

/// Splits a `{slug}-{id}` path segment
pub fn parse_player_handle(handle: &str) -> Option<(String, u64)> {
    let caps = PLAYER_HANDLE.captures(handle)?;
    let id = caps["id"].parse().ok()?;
    Some((caps["slug"].to_string(), id))
}
