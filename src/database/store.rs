use anyhow::Context;

use super::connection::{get_connection, DbPool};
use super::{players, rankings, statistics};
use crate::domain::{Player, PlayerStatistics, Ranking, RankingKind};
use crate::errors::{IngestError, IngestResult};

/// Everything one ingestion run writes, committed as a single unit
#[derive(Debug, Clone)]
pub struct CommitBatch {
    pub player: Player,
    pub singles: Option<Ranking>,
    pub doubles: Option<Ranking>,
    pub statistics: Vec<PlayerStatistics>,
}

impl CommitBatch {
    pub fn rankings(&self) -> impl Iterator<Item = &Ranking> {
        self.singles.iter().chain(self.doubles.iter())
    }

    pub fn record_count(&self) -> usize {
        1 + self.rankings().count() + self.statistics.len()
    }
}

/// Durable storage for players and the records they own
pub trait RecordStore {
    fn find_player(&self, api_id: &str) -> IngestResult<Option<Player>>;

    fn find_ranking(&self, api_id: &str, kind: RankingKind) -> IngestResult<Option<Ranking>>;

    fn find_statistics(&self, api_id: &str) -> IngestResult<Vec<PlayerStatistics>>;

    /// Writes the whole batch or nothing; returns the player with its row id
    fn commit(&self, batch: CommitBatch) -> IngestResult<Player>;
}

/// SQLite-backed record store
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    fn write_batch(&self, batch: &CommitBatch) -> anyhow::Result<Player> {
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to open transaction")?;

        let player = players::upsert_player(&tx, &batch.player)?;
        let player_id = player
            .id
            .context("Upserted player came back without a row id")?;

        for ranking in batch.rankings() {
            rankings::upsert_ranking(&tx, player_id, ranking)?;
        }
        for stats in &batch.statistics {
            statistics::upsert_statistics(&tx, player_id, stats)?;
        }

        tx.commit().context("Failed to commit transaction")?;
        Ok(player)
    }
}

impl RecordStore for SqliteStore {
    fn find_player(&self, api_id: &str) -> IngestResult<Option<Player>> {
        let conn = get_connection(&self.pool).map_err(IngestError::store)?;
        players::find_by_api_id(&conn, api_id).map_err(IngestError::store)
    }

    fn find_ranking(&self, api_id: &str, kind: RankingKind) -> IngestResult<Option<Ranking>> {
        let conn = get_connection(&self.pool).map_err(IngestError::store)?;
        rankings::find_for_player(&conn, api_id, kind).map_err(IngestError::store)
    }

    fn find_statistics(&self, api_id: &str) -> IngestResult<Vec<PlayerStatistics>> {
        let conn = get_connection(&self.pool).map_err(IngestError::store)?;
        statistics::list_by_player(&conn, api_id).map_err(IngestError::store)
    }

    fn commit(&self, batch: CommitBatch) -> IngestResult<Player> {
        let player = self.write_batch(&batch).map_err(IngestError::store)?;
        log::debug!(
            "Committed {} records for player {}",
            batch.record_count(),
            player.api_id
        );
        Ok(player)
    }
}
