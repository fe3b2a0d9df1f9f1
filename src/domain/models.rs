use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::ops::AddAssign;

use super::identity;

/// Canonical player record, keyed by the Sportradar competitor id
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Row id, `None` until the player has been committed once
    pub id: Option<i64>,
    pub api_id: String,
    pub name: String,
    pub nationality: String,
    pub country_code: String,
    pub abbreviation: String,
    pub gender: String,
    pub birth_date: NaiveDate,
    pub pro_year: Option<i32>,
    pub handedness: Option<String>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub highest_singles_ranking: i32,
    /// First day of the month in which the highest ranking was reached
    pub highest_singles_ranking_date: NaiveDate,
    pub updated_at: NaiveDateTime,
}

impl Player {
    pub fn api_id_int(&self) -> Option<u64> {
        identity::parse_api_id_int(&self.api_id)
    }

    pub fn slug(&self) -> String {
        identity::slugify(&self.name)
    }

    /// Canonical location of the player view, `None` for non-competitor ids
    pub fn view_path(&self) -> Option<String> {
        self.api_id_int()
            .map(|id| identity::view_path(&self.slug(), id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingKind {
    Singles,
    Doubles,
}

impl RankingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankingKind::Singles => "singles",
            RankingKind::Doubles => "doubles",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "singles" => Some(RankingKind::Singles),
            "doubles" => Some(RankingKind::Doubles),
            _ => None,
        }
    }
}

/// Singles or doubles ranking owned by one player
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ranking {
    #[serde(skip)]
    pub id: Option<i64>,
    #[serde(skip)]
    pub player_api_id: String,
    pub kind: RankingKind,
    pub rank: Option<i32>,
    pub points: Option<i32>,
    pub tournaments_played: Option<i32>,
    pub ranking_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsCounters {
    pub competitions_played: i32,
    pub competitions_won: i32,
    pub matches_played: i32,
    pub matches_won: i32,
}

impl AddAssign for StatisticsCounters {
    fn add_assign(&mut self, other: Self) {
        self.competitions_played = self.competitions_played.saturating_add(other.competitions_played);
        self.competitions_won = self.competitions_won.saturating_add(other.competitions_won);
        self.matches_played = self.matches_played.saturating_add(other.matches_played);
        self.matches_won = self.matches_won.saturating_add(other.matches_won);
    }
}

/// Surface and period; unique per player
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatisticsKey {
    pub surface: String,
    pub period: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatistics {
    #[serde(skip)]
    pub id: Option<i64>,
    #[serde(skip)]
    pub player_api_id: String,
    pub surface: String,
    pub period: i32,
    #[serde(flatten)]
    pub counters: StatisticsCounters,
}

impl PlayerStatistics {
    pub fn key(&self) -> StatisticsKey {
        StatisticsKey {
            surface: self.surface.clone(),
            period: self.period,
        }
    }
}
