use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SteamApiResponse<T> {
    pub response: Option<T>,
}

/// Body of `ISteamUser/ResolveVanityURL`.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct VanityResolution {
    #[serde(default)]
    pub success: i64,
    pub steamid: Option<String>,
    pub message: Option<String>,
}
