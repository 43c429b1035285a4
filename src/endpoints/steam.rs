use async_trait::async_trait;
use log::debug;

use crate::client::{check_status, SteamClient};
use crate::error::LookupError;
use crate::models::steam::{SteamApiResponse, VanityResolution};
use crate::sources::VanityResolver;

impl SteamClient {
    /// `ISteamUser/ResolveVanityURL`. Success codes are left for the caller
    /// to interpret.
    pub async fn resolve_vanity_url(&self, vanity: &str) -> Result<VanityResolution, LookupError> {
        debug!("Steam vanity lookup for {vanity}");
        let resp = self
            .http
            .get(format!("{}/ISteamUser/ResolveVanityURL/v1/", self.base_url))
            .query(&[("key", self.api_key.as_str()), ("vanityurl", vanity)])
            .send()
            .await?;

        let data: SteamApiResponse<VanityResolution> =
            check_status(resp, "Failed to resolve vanity URL").await?.json().await?;
        Ok(data.response.unwrap_or_default())
    }
}

#[async_trait]
impl VanityResolver for SteamClient {
    async fn resolve_vanity_name(&self, name: &str) -> Result<VanityResolution, LookupError> {
        self.resolve_vanity_url(name).await
    }
}
