use log::warn;
use reqwest::{Client, Response, StatusCode, Url};
use std::time::Duration;

use crate::config::Config;
use crate::error::LookupError;

/// FACEIT Data API v4 client.
#[derive(Clone)]
pub struct FaceitClient {
    pub(crate) http: Client,
    pub(crate) base_url: String,
    api_key: String,
}

impl FaceitClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, LookupError> {
        Ok(Self {
            http: build_http(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, LookupError> {
        Self::new(&config.faceit_api_base, &config.faceit_api_key, config.request_timeout)
    }

    /// GET `{base}/{segments...}`, each segment percent-encoded on its own.
    pub(crate) fn get(&self, segments: &[&str]) -> Result<reqwest::RequestBuilder, LookupError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| LookupError::InvalidFormat(format!("bad FACEIT base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidFormat("FACEIT base URL cannot take a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(self.http.get(url).bearer_auth(&self.api_key))
    }
}

/// Steam Web API client. The key is sent as a query parameter.
#[derive(Clone)]
pub struct SteamClient {
    pub(crate) http: Client,
    pub(crate) base_url: String,
    pub(crate) api_key: String,
}

impl SteamClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, LookupError> {
        Ok(Self {
            http: build_http(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, LookupError> {
        Self::new(&config.steam_api_base, &config.steam_api_key, config.request_timeout)
    }
}

fn build_http(timeout: Duration) -> Result<Client, LookupError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Pass successful responses through; turn anything else into
/// `LookupError::Upstream`, preferring the upstream's own message.
pub(crate) async fn check_status(resp: Response, fallback: &str) -> Result<Response, LookupError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = upstream_message(&body).unwrap_or_else(|| fallback.to_string());
    warn!("upstream answered {}: {}", status.as_u16(), message);

    Err(LookupError::Upstream { status: status.as_u16(), message })
}

pub(crate) fn is_not_found(resp: &Response) -> bool {
    resp.status() == StatusCode::NOT_FOUND
}

fn upstream_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json["message"]
        .as_str()
        .or_else(|| json["errors"][0]["message"].as_str())
        .filter(|m| !m.is_empty())
        .map(|m| m.to_string())
}
