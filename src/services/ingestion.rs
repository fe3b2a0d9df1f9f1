use chrono::{NaiveDateTime, Utc};
use log::{info, warn};

use crate::api::PlayerSource;
use crate::database::{CommitBatch, RecordStore};
use crate::domain::{competitor_api_id, Player, ProfileDocument, RankingKind};
use crate::errors::IngestResult;
use crate::factories;

/// Synchronizes one player from the data source into the record store.
///
/// A run fetches the profile, derives the player, both rankings and the
/// statistics, then writes all of it with a single [`RecordStore::commit`].
/// Nothing is written if any step before the commit fails.
pub struct IngestionService<P, S> {
    source: P,
    store: S,
}

impl<P, S> IngestionService<P, S>
where
    P: PlayerSource,
    S: RecordStore,
{
    pub fn new(source: P, store: S) -> Self {
        Self { source, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn sync_player(&self, api_id_int: u64) -> IngestResult<Player> {
        info!("=== Synchronizing {} ===", competitor_api_id(api_id_int));

        // Step 1: Fetch the profile document
        let document = self.source.fetch_profile(api_id_int).await?;
        let profile = ProfileDocument::from_value(document)?;

        if profile.player.id != competitor_api_id(api_id_int) {
            warn!(
                "Requested {} but source returned {}",
                competitor_api_id(api_id_int),
                profile.player.id
            );
        }

        self.ingest(&profile, Utc::now().naive_utc())
    }

    /// Steps 2-5 of a run, on an already fetched document
    pub fn ingest(&self, profile: &ProfileDocument, synced_at: NaiveDateTime) -> IngestResult<Player> {
        // Step 2: Player
        let player = factories::build_player(&self.store, &profile.player, synced_at)?;

        // Step 3: Rankings
        let synced_on = synced_at.date();
        let singles = factories::build_ranking(
            &self.store,
            &player,
            profile.rankings(),
            RankingKind::Singles,
            synced_on,
        )?;
        let doubles = factories::build_ranking(
            &self.store,
            &player,
            profile.rankings(),
            RankingKind::Doubles,
            synced_on,
        )?;

        // Step 4: Statistics
        let statistics = factories::build_statistics(&self.store, &player, profile.statistics())?;
        info!(
            "  → {}: singles {}, doubles {}, statistics {} new / {} updated",
            player.api_id,
            presence(&singles),
            presence(&doubles),
            statistics.created(),
            statistics.updated()
        );

        // Step 5: One commit for everything
        let batch = CommitBatch {
            player,
            singles,
            doubles,
            statistics: statistics.into_records(),
        };
        let player = self.store.commit(batch)?;

        info!("=== {} synchronized ===", player.api_id);
        Ok(player)
    }
}

fn presence<T>(record: &Option<T>) -> &'static str {
    if record.is_some() { "present" } else { "absent" }
}
