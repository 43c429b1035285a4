use serde::{Serialize, Serializer};

use crate::models::match_data::MatchRecord;

pub const KR_RATIO: &str = "K/R Ratio";
pub const RESULT: &str = "Result";
pub const KD_RATIO: &str = "K/D Ratio";
pub const ADR: &str = "ADR";
pub const KILLS: &str = "Kills";

/// Averages over a run of matches. Serializes as
/// `{"KR":"0.78","Winrate":"55%","KD":"1.12","ADR":"81.4","Avg":"17.9"}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AggregatedStats {
    #[serde(rename = "KR", serialize_with = "two_places")]
    pub kr: f64,
    #[serde(rename = "Winrate", serialize_with = "percent")]
    pub winrate: u32,
    #[serde(rename = "KD", serialize_with = "two_places")]
    pub kd: f64,
    #[serde(rename = "ADR", serialize_with = "one_place")]
    pub adr: f64,
    #[serde(rename = "Avg", serialize_with = "one_place")]
    pub avg_kills: f64,
}

impl AggregatedStats {
    pub fn winrate_label(&self) -> String {
        format!("{}%", self.winrate)
    }
}

pub fn aggregate(records: &[MatchRecord]) -> AggregatedStats {
    if records.is_empty() {
        return AggregatedStats::default();
    }

    let mean = |field: &str| -> f64 {
        records.iter().map(|r| r.number(field)).sum::<f64>() / records.len() as f64
    };

    AggregatedStats {
        kr: round_to(mean(KR_RATIO), 2),
        winrate: (mean(RESULT) * 100.0).round().max(0.0) as u32,
        kd: round_to(mean(KD_RATIO), 2),
        adr: round_to(mean(ADR), 1),
        avg_kills: round_to(mean(KILLS), 1),
    }
}

// f64::round goes half away from zero, unlike `{:.N}` formatting.
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn two_places<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{:.2}", value))
}

fn one_place<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{:.1}", value))
}

fn percent<S: Serializer>(value: &u32, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{}%", value))
}
