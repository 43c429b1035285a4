use async_trait::async_trait;

use crate::error::LookupError;
use crate::identifier::SteamId64;
use crate::models::match_data::{MapSegment, MatchRecord};
use crate::models::player::PlayerProfile;
use crate::models::steam::VanityResolution;

/// Fetches FACEIT player documents. `Ok(None)` means the upstream has no
/// such player.
#[async_trait]
pub trait PlayerSource: Send + Sync {
    async fn player_by_steam_id(
        &self,
        id: &SteamId64,
    ) -> Result<Option<PlayerProfile>, LookupError>;
    async fn player_by_nickname(
        &self,
        nickname: &str,
    ) -> Result<Option<PlayerProfile>, LookupError>;
}

#[async_trait]
pub trait MatchHistorySource: Send + Sync {
    async fn match_history(
        &self,
        player_id: &str,
        limit: u32,
    ) -> Result<Vec<MatchRecord>, LookupError>;
    async fn map_stats(&self, player_id: &str) -> Result<Vec<MapSegment>, LookupError>;
}

/// Turns a Steam vanity name into whatever the upstream answered.
#[async_trait]
pub trait VanityResolver: Send + Sync {
    async fn resolve_vanity_name(&self, name: &str) -> Result<VanityResolution, LookupError>;
}
