use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One played match from the FACEIT per-game stats feed.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct MatchRecord {
    #[serde(default)]
    pub stats: HashMap<String, serde_json::Value>,
}

impl MatchRecord {
    pub fn from_stats<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            stats: fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
                .collect(),
        }
    }

    /// Numeric value of a stat field; missing or unparsable fields are 0.
    pub fn number(&self, field: &str) -> f64 {
        let value = match self.stats.get(field) {
            Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(serde_json::Value::Number(n)) => n.as_f64(),
            _ => None,
        };
        value.filter(|v| v.is_finite()).unwrap_or(0.0)
    }
}

#[derive(Debug, Deserialize)]
pub struct MatchHistoryResponse {
    #[serde(default)]
    pub items: Vec<MatchRecord>,
}

/// Per-map breakdown, passed through as FACEIT sends it.
pub type MapSegment = serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct MapStatsResponse {
    #[serde(default)]
    pub segments: Vec<MapSegment>,
}
