use log::debug;

use crate::error::LookupError;
use crate::identifier::{classify, IdentifierKind, SteamId64};
use crate::models::match_data::{MapSegment, MatchRecord};
use crate::models::player::PlayerProfile;
use crate::resolver::ProfileUrlResolver;
use crate::sources::{MatchHistorySource, PlayerSource, VanityResolver};
use crate::stats::{aggregate, AggregatedStats};

/// How many recent matches the stats endpoints look at.
pub const HISTORY_LIMIT: u32 = 100;

/// Classify → resolve → fetch. Each call is independent; nothing is cached.
pub struct PlayerLookup<P, H, V> {
    players: P,
    history: H,
    resolver: ProfileUrlResolver<V>,
}

impl<P, H, V> PlayerLookup<P, H, V>
where
    P: PlayerSource,
    H: MatchHistorySource,
    V: VanityResolver,
{
    pub fn new(players: P, history: H, vanity: V) -> Self {
        Self {
            players,
            history,
            resolver: ProfileUrlResolver::new(vanity),
        }
    }

    pub async fn find_player(&self, query: &str) -> Result<PlayerProfile, LookupError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LookupError::InvalidInput("query parameter q is required".into()));
        }

        let kind = classify(query);
        debug!("query {query:?} classified as {kind:?}");

        let profile = match kind {
            IdentifierKind::SteamId64 => {
                let id = SteamId64::parse(query).ok_or_else(|| {
                    LookupError::InvalidInput(format!("not a SteamID64: {query}"))
                })?;
                self.players.player_by_steam_id(&id).await?
            }
            IdentifierKind::SteamUrl => {
                let id = self.resolver.resolve(query).await?;
                self.players.player_by_steam_id(&id).await?
            }
            IdentifierKind::Nickname => self.players.player_by_nickname(query).await?,
            // TODO: FACEIT ids could be fetched directly via /players/{id}.
            IdentifierKind::FaceitPlayerId => {
                return Err(LookupError::InvalidInput("unsupported identifier format".into()));
            }
        };

        profile.ok_or_else(|| LookupError::NotFound("player not found".into()))
    }

    pub async fn aggregated_stats(&self, player_id: &str) -> Result<AggregatedStats, LookupError> {
        let records = self.match_history(player_id).await?;
        Ok(aggregate(&records))
    }

    /// Recent matches without aggregation.
    pub async fn match_history(&self, player_id: &str) -> Result<Vec<MatchRecord>, LookupError> {
        let player_id = require_player_id(player_id)?;
        self.history.match_history(player_id, HISTORY_LIMIT).await
    }

    pub async fn map_stats(&self, player_id: &str) -> Result<Vec<MapSegment>, LookupError> {
        let player_id = require_player_id(player_id)?;
        self.history.map_stats(player_id).await
    }
}

fn require_player_id(player_id: &str) -> Result<&str, LookupError> {
    let player_id = player_id.trim();
    if player_id.is_empty() {
        return Err(LookupError::InvalidInput("player_id is required".into()));
    }
    // Must stay a single path segment upstream.
    if player_id.contains(&['/', '\\', '?', '#'][..]) || player_id == "." || player_id == ".." {
        return Err(LookupError::InvalidInput(format!("malformed player_id: {player_id}")));
    }
    Ok(player_id)
}
