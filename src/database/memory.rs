use std::collections::HashMap;
use std::sync::Mutex;

use super::store::{CommitBatch, RecordStore};
use crate::domain::{Player, PlayerStatistics, Ranking, RankingKind, StatisticsKey};
use crate::errors::{IngestError, IngestResult};

#[derive(Default)]
struct MemoryState {
    next_id: i64,
    players: HashMap<String, Player>,
    rankings: HashMap<(String, RankingKind), Ranking>,
    statistics: HashMap<(String, StatisticsKey), PlayerStatistics>,
    commits: usize,
    fail_commits: bool,
}

impl MemoryState {
    fn assign_id(&mut self, id: Option<i64>) -> i64 {
        id.unwrap_or_else(|| {
            self.next_id += 1;
            self.next_id
        })
    }
}

/// In-memory record store that counts commits
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let store = Self::default();
        store.state.lock().unwrap().fail_commits = true;
        store
    }

    pub fn commit_count(&self) -> usize {
        self.state.lock().unwrap().commits
    }

    pub fn player_count(&self) -> usize {
        self.state.lock().unwrap().players.len()
    }

    pub fn ranking_count(&self) -> usize {
        self.state.lock().unwrap().rankings.len()
    }

    pub fn statistics_count(&self) -> usize {
        self.state.lock().unwrap().statistics.len()
    }

    pub fn ranking(&self, api_id: &str, kind: RankingKind) -> Option<Ranking> {
        self.find_ranking(api_id, kind).unwrap()
    }

    pub fn insert_statistics(&self, mut stats: PlayerStatistics) {
        let mut state = self.state.lock().unwrap();
        stats.id = Some(state.assign_id(stats.id));
        let key = (stats.player_api_id.clone(), stats.key());
        state.statistics.insert(key, stats);
    }
}

impl RecordStore for MemoryStore {
    fn find_player(&self, api_id: &str) -> IngestResult<Option<Player>> {
        Ok(self.state.lock().unwrap().players.get(api_id).cloned())
    }

    fn find_ranking(&self, api_id: &str, kind: RankingKind) -> IngestResult<Option<Ranking>> {
        let state = self.state.lock().unwrap();
        Ok(state.rankings.get(&(api_id.to_string(), kind)).cloned())
    }

    fn find_statistics(&self, api_id: &str) -> IngestResult<Vec<PlayerStatistics>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .statistics
            .values()
            .filter(|s| s.player_api_id == api_id)
            .cloned()
            .collect())
    }

    fn commit(&self, batch: CommitBatch) -> IngestResult<Player> {
        let mut state = self.state.lock().unwrap();
        if state.fail_commits {
            return Err(IngestError::StoreUnavailable("store is offline".to_string()));
        }
        state.commits += 1;

        let mut player = batch.player.clone();
        let existing_id = state.players.get(&player.api_id).and_then(|p| p.id);
        player.id = Some(state.assign_id(existing_id));
        state.players.insert(player.api_id.clone(), player.clone());

        for ranking in batch.rankings() {
            let mut ranking = ranking.clone();
            let key = (ranking.player_api_id.clone(), ranking.kind);
            let existing_id = state.rankings.get(&key).and_then(|r| r.id);
            ranking.id = Some(state.assign_id(existing_id));
            state.rankings.insert(key, ranking);
        }

        for stats in batch.statistics {
            let key = (stats.player_api_id.clone(), stats.key());
            let existing_id = state.statistics.get(&key).and_then(|s| s.id);
            let mut stats = stats;
            stats.id = Some(state.assign_id(existing_id));
            state.statistics.insert(key, stats);
        }

        Ok(player)
    }
}
