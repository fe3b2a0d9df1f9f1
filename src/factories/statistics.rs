use std::collections::HashMap;

use crate::database::RecordStore;
use crate::domain::{Player, PlayerStatistics, StatisticsCounters, StatisticsKey, StatisticsPayload};
use crate::errors::IngestResult;

/// Statistics records touched by one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsChanges {
    pub records: Vec<PlayerStatistics>,
}

impl StatisticsChanges {
    pub fn created(&self) -> usize {
        self.records.iter().filter(|s| s.id.is_none()).count()
    }

    pub fn updated(&self) -> usize {
        self.records.len() - self.created()
    }

    pub fn into_records(self) -> Vec<PlayerStatistics> {
        self.records
    }
}

/// Maps each (surface, period) entry onto the stored record with that key,
/// or a new one. Repeated keys in one payload collapse onto the last entry.
pub fn build_statistics<S>(
    store: &S,
    player: &Player,
    entries: &[StatisticsPayload],
) -> IngestResult<StatisticsChanges>
where
    S: RecordStore + ?Sized,
{
    if entries.is_empty() {
        return Ok(StatisticsChanges::default());
    }

    let mut existing: HashMap<StatisticsKey, PlayerStatistics> = store
        .find_statistics(&player.api_id)?
        .into_iter()
        .map(|stats| (stats.key(), stats))
        .collect();

    let mut records: Vec<PlayerStatistics> = Vec::with_capacity(entries.len());
    let mut touched: HashMap<StatisticsKey, usize> = HashMap::new();

    for entry in entries {
        let key = StatisticsKey {
            surface: entry.surface.clone(),
            period: entry.period,
        };
        let counters = counters_from(entry);

        if let Some(&idx) = touched.get(&key) {
            log::warn!(
                "Duplicate statistics entry {} {} for {}",
                key.surface,
                key.period,
                player.api_id
            );
            records[idx].counters = counters;
            continue;
        }

        let record = match existing.remove(&key) {
            Some(mut stored) => {
                stored.counters = counters;
                stored
            }
            None => PlayerStatistics {
                id: None,
                player_api_id: player.api_id.clone(),
                surface: key.surface.clone(),
                period: key.period,
                counters,
            },
        };

        touched.insert(key, records.len());
        records.push(record);
    }

    Ok(StatisticsChanges { records })
}

fn counters_from(entry: &StatisticsPayload) -> StatisticsCounters {
    StatisticsCounters {
        competitions_played: entry.competitions_played,
        competitions_won: entry.competitions_won,
        matches_played: entry.matches_played,
        matches_won: entry.matches_won,
    }
}
