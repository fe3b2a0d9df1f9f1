pub mod formatting;
pub mod identity;
pub mod models;
pub mod payload;

pub use formatting::{format_statistics, PeriodStatistics};
pub use identity::{competitor_api_id, parse_api_id_int, slugify};
pub use models::{Player, PlayerStatistics, Ranking, RankingKind, StatisticsCounters, StatisticsKey};
pub use payload::{PlayerPayload, ProfileDocument, RankingPayload, StatisticsPayload};
