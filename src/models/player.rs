use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A FACEIT player document. Only the id and nickname are read; everything
/// else is carried through untouched.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlayerProfile {
    pub player_id: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl PlayerProfile {
    /// `None` when the payload has no usable `player_id`.
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        let has_id = value
            .get("player_id")
            .and_then(|v| v.as_str())
            .is_some_and(|id| !id.is_empty());
        if !has_id {
            return None;
        }
        serde_json::from_value(value).ok()
    }
}
