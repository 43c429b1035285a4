use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static FACEIT_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});

static STEAM_ID64: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{17}$").unwrap());

/// What kind of player reference a raw query string is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    FaceitPlayerId,
    SteamId64,
    SteamUrl,
    Nickname,
}

/// Classify a raw query. Never fails: anything unrecognised is a nickname.
pub fn classify(input: &str) -> IdentifierKind {
    let input = input.trim();

    if FACEIT_ID.is_match(input) {
        return IdentifierKind::FaceitPlayerId;
    }
    if STEAM_ID64.is_match(input) {
        return IdentifierKind::SteamId64;
    }
    if input.contains("steamcommunity.com")
        || input.contains("steam://")
        || input.starts_with("https://steam.")
    {
        return IdentifierKind::SteamUrl;
    }
    IdentifierKind::Nickname
}

/// A 64-bit Steam account id in its 17-digit decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SteamId64(String);

impl SteamId64 {
    /// Validate user-supplied input.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        STEAM_ID64.is_match(input).then(|| Self(input.to_string()))
    }

    /// Ids handed back by the Steam API are taken as-is.
    pub(crate) fn from_upstream(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SteamId64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
