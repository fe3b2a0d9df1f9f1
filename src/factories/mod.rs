//! Mapping of Sportradar profile sections onto stored records.
//!
//! Each factory consults the [`RecordStore`](crate::database::RecordStore) for
//! the record it would replace, so a re-sync updates rows instead of
//! duplicating them. None of them write; the ingestion service commits the
//! combined result once.

pub mod player;
pub mod rankings;
pub mod statistics;

pub use player::{build_player, normalize_name, parse_birth_date, parse_month_year};
pub use rankings::build_ranking;
pub use statistics::{build_statistics, StatisticsChanges};
