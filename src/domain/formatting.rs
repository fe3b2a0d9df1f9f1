use serde::Serialize;
use std::collections::BTreeMap;

use super::models::{PlayerStatistics, StatisticsCounters};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStatistics {
    pub period: i32,
    pub surfaces: Vec<PlayerStatistics>,
    pub totals: StatisticsCounters,
}

/// Groups statistics by period, newest first, surfaces sorted by name
pub fn format_statistics(statistics: &[PlayerStatistics]) -> Vec<PeriodStatistics> {
    let mut by_period: BTreeMap<i32, Vec<PlayerStatistics>> = BTreeMap::new();
    for stats in statistics {
        by_period.entry(stats.period).or_default().push(stats.clone());
    }

    by_period
        .into_iter()
        .rev()
        .map(|(period, mut surfaces)| {
            surfaces.sort_by(|a, b| a.surface.cmp(&b.surface));
            let mut totals = StatisticsCounters::default();
            for stats in &surfaces {
                totals += stats.counters;
            }
            PeriodStatistics {
                period,
                surfaces,
                totals,
            }
        })
        .collect()
}
