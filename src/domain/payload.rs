use serde::Deserialize;
use serde_json::Value;

use crate::errors::{IngestError, IngestResult};

/// Sportradar player profile document
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileDocument {
    pub player: PlayerPayload,
    #[serde(default)]
    pub rankings: Option<Vec<RankingPayload>>,
    #[serde(default)]
    pub statistics: Option<Vec<StatisticsPayload>>,
}

impl ProfileDocument {
    pub fn from_value(value: Value) -> IngestResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| IngestError::malformed(format!("profile document: {}", e)))
    }

    pub fn rankings(&self) -> &[RankingPayload] {
        self.rankings.as_deref().unwrap_or(&[])
    }

    pub fn statistics(&self) -> &[StatisticsPayload] {
        self.statistics.as_deref().unwrap_or(&[])
    }
}

/// The `player` section; dates stay raw until the player factory parses them
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerPayload {
    pub id: String,
    pub name: String,
    pub nationality: String,
    pub country_code: String,
    pub abbreviation: String,
    pub gender: String,
    pub date_of_birth: String,
    #[serde(default)]
    pub pro_year: Option<i32>,
    #[serde(default)]
    pub handedness: Option<String>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub weight: Option<i32>,
    pub highest_singles_ranking: i32,
    pub date_highest_singles_ranking: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingPayload {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub rank: Option<i32>,
    #[serde(default)]
    pub points: Option<i32>,
    #[serde(default)]
    pub tournaments_played: Option<i32>,
    #[serde(default)]
    pub ranking_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatisticsPayload {
    pub period: i32,
    pub surface: String,
    #[serde(default)]
    pub competitions_played: i32,
    #[serde(default)]
    pub competitions_won: i32,
    #[serde(default)]
    pub matches_played: i32,
    #[serde(default)]
    pub matches_won: i32,
}
