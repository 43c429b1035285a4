use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::LookupError;
use crate::identifier::SteamId64;
use crate::sources::VanityResolver;

const STEAM_COMMUNITY: &str = "steamcommunity.com";

const VANITY_OK: i64 = 1;
const VANITY_NO_MATCH: i64 = 42;

static PROFILE_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/profiles/([0-9]{17})").unwrap());
static VANITY_PATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"/id/([^/]+)").unwrap());

/// Turns Steam profile links (or bare custom names) into a SteamID64.
pub struct ProfileUrlResolver<V> {
    vanity: V,
}

impl<V: VanityResolver> ProfileUrlResolver<V> {
    pub fn new(vanity: V) -> Self {
        Self { vanity }
    }

    pub async fn resolve(&self, url: &str) -> Result<SteamId64, LookupError> {
        let url = normalize(url);

        if url.contains("/profiles/") {
            return PROFILE_PATH
                .captures(&url)
                .and_then(|c| SteamId64::parse(&c[1]))
                .ok_or_else(|| LookupError::InvalidFormat("malformed Steam profile URL".into()));
        }

        if url.contains("/id/") {
            let name = VANITY_PATH
                .captures(&url)
                .map(|c| c[1].to_string())
                .ok_or_else(|| LookupError::InvalidFormat("malformed custom Steam URL".into()))?;
            return self.resolve_vanity(&name).await;
        }

        Err(LookupError::InvalidFormat(format!("unrecognised Steam URL: {url}")))
    }

    async fn resolve_vanity(&self, name: &str) -> Result<SteamId64, LookupError> {
        debug!("resolving Steam vanity name {name}");

        let resolution = self
            .vanity
            .resolve_vanity_name(name)
            .await
            .map_err(translate_transport)?;

        match resolution.success {
            VANITY_OK => resolution
                .steamid
                .filter(|id| !id.is_empty())
                .map(SteamId64::from_upstream)
                .ok_or_else(|| LookupError::ResolutionFailed("Steam returned no steamid".into())),
            VANITY_NO_MATCH => Err(LookupError::NotFound("custom URL not found".into())),
            code => {
                warn!("vanity name {name} not resolved, success code {code}");
                Err(LookupError::ResolutionFailed(
                    resolution
                        .message
                        .unwrap_or_else(|| "could not resolve vanity URL".into()),
                ))
            }
        }
    }
}

fn normalize(url: &str) -> String {
    let url = url.trim();

    if !url.starts_with("http") {
        if url.contains(STEAM_COMMUNITY) {
            return format!("https://{url}");
        }
        return format!("https://{STEAM_COMMUNITY}/id/{url}");
    }

    match url.strip_prefix("http:") {
        Some(rest) => format!("https:{rest}"),
        None => url.to_string(),
    }
}

fn translate_transport(err: LookupError) -> LookupError {
    let status = match &err {
        LookupError::Upstream { status, .. } => Some(*status),
        LookupError::Http(e) if e.is_timeout() => {
            return LookupError::Timeout("Steam API request timed out".into());
        }
        LookupError::Http(e) => e.status().map(|s| s.as_u16()),
        _ => None,
    };

    match status {
        Some(401) => LookupError::AuthError("invalid Steam API key".into()),
        Some(403) => LookupError::AuthError("access to Steam API forbidden".into()),
        _ => err,
    }
}
