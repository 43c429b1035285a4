use async_trait::async_trait;
use log::debug;
use reqwest::Response;

use crate::client::{check_status, is_not_found, FaceitClient};
use crate::error::LookupError;
use crate::identifier::SteamId64;
use crate::models::match_data::{
    MapSegment, MapStatsResponse, MatchHistoryResponse, MatchRecord,
};
use crate::models::player::PlayerProfile;
use crate::sources::{MatchHistorySource, PlayerSource};

const GAME: &str = "cs2";

impl FaceitClient {
    /// Look up the FACEIT account linked to a Steam account.
    pub async fn player_by_steam_id(
        &self,
        steam_id: &SteamId64,
    ) -> Result<Option<PlayerProfile>, LookupError> {
        debug!("FACEIT player lookup by steam id {steam_id}");
        let resp = self
            .get(&["players"])?
            .query(&[("game", GAME), ("game_player_id", steam_id.as_str())])
            .send()
            .await?;
        read_player(resp, "Failed to find player by SteamID").await
    }

    pub async fn player_by_nickname(
        &self,
        nickname: &str,
    ) -> Result<Option<PlayerProfile>, LookupError> {
        debug!("FACEIT player lookup by nickname {nickname}");
        let resp = self
            .get(&["players"])?
            .query(&[("nickname", nickname)])
            .send()
            .await?;
        read_player(resp, "Failed to find player by nickname").await
    }

    /// Per-match stats, newest first.
    pub async fn match_history(
        &self,
        player_id: &str,
        limit: u32,
    ) -> Result<Vec<MatchRecord>, LookupError> {
        debug!("FACEIT match history for {player_id}, limit {limit}");
        let resp = self
            .get(&["players", player_id, "games", GAME, "stats"])?
            .query(&[("limit", limit)])
            .send()
            .await?;
        if is_not_found(&resp) {
            return Err(LookupError::NotFound("player statistics not found".into()));
        }

        let history: MatchHistoryResponse = check_status(resp, "Failed to fetch FACEIT stats")
            .await?
            .json()
            .await?;
        Ok(history.items)
    }

    pub async fn map_stats(&self, player_id: &str) -> Result<Vec<MapSegment>, LookupError> {
        debug!("FACEIT map stats for {player_id}");
        let resp = self
            .get(&["players", player_id, "stats", GAME])?
            .send()
            .await?;
        if is_not_found(&resp) {
            return Err(LookupError::NotFound("player statistics not found".into()));
        }

        let stats: Option<MapStatsResponse> = check_status(resp, "Failed to fetch FACEIT map stats")
            .await?
            .json()
            .await?;
        stats
            .map(|s| s.segments)
            .ok_or_else(|| LookupError::NotFound("no statistics for this player".into()))
    }
}

async fn read_player(resp: Response, fallback: &str) -> Result<Option<PlayerProfile>, LookupError> {
    if is_not_found(&resp) {
        return Ok(None);
    }
    let body = check_status(resp, fallback).await?.text().await?;
    if body.trim().is_empty() {
        return Ok(None);
    }
    Ok(PlayerProfile::from_value(serde_json::from_str(&body)?))
}

#[async_trait]
impl PlayerSource for FaceitClient {
    async fn player_by_steam_id(
        &self,
        id: &SteamId64,
    ) -> Result<Option<PlayerProfile>, LookupError> {
        FaceitClient::player_by_steam_id(self, id).await
    }

    async fn player_by_nickname(
        &self,
        nickname: &str,
    ) -> Result<Option<PlayerProfile>, LookupError> {
        FaceitClient::player_by_nickname(self, nickname).await
    }
}

#[async_trait]
impl MatchHistorySource for FaceitClient {
    async fn match_history(
        &self,
        player_id: &str,
        limit: u32,
    ) -> Result<Vec<MatchRecord>, LookupError> {
        FaceitClient::match_history(self, player_id, limit).await
    }

    async fn map_stats(&self, player_id: &str) -> Result<Vec<MapSegment>, LookupError> {
        FaceitClient::map_stats(self, player_id).await
    }
}
