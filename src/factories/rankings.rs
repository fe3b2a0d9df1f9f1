use chrono::NaiveDate;

use crate::database::RecordStore;
use crate::domain::{Player, Ranking, RankingKind, RankingPayload};
use crate::errors::IngestResult;

/// Ranking of `kind` for the player, `None` when the source lists none.
///
/// The first entry tagged with `kind` wins. An entry without a usable
/// `ranking_date` is dated `synced_on`.
pub fn build_ranking<S>(
    store: &S,
    player: &Player,
    rankings: &[RankingPayload],
    kind: RankingKind,
    synced_on: NaiveDate,
) -> IngestResult<Option<Ranking>>
where
    S: RecordStore + ?Sized,
{
    let Some(entry) = rankings
        .iter()
        .find(|entry| RankingKind::from_tag(&entry.kind) == Some(kind))
    else {
        return Ok(None);
    };

    let existing = store.find_ranking(&player.api_id, kind)?;

    Ok(Some(Ranking {
        id: existing.and_then(|r| r.id),
        player_api_id: player.api_id.clone(),
        kind,
        rank: entry.rank,
        points: entry.points,
        tournaments_played: entry.tournaments_played,
        ranking_date: ranking_date(entry, synced_on),
    }))
}

fn ranking_date(entry: &RankingPayload, synced_on: NaiveDate) -> NaiveDate {
    match entry.ranking_date.as_deref() {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap_or_else(|_| {
            log::warn!("Ignoring unparseable {} ranking date {:?}", entry.kind, raw);
            synced_on
        }),
        None => synced_on,
    }
}
