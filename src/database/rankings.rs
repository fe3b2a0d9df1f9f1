use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{Ranking, RankingKind};

pub fn upsert_ranking(conn: &Connection, player_id: i64, ranking: &Ranking) -> Result<i64> {
    let sql = "INSERT INTO rankings (player_id, kind, current_rank, points, tournaments_played, ranking_date)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6)
               ON CONFLICT (player_id, kind) DO UPDATE SET
                  current_rank = excluded.current_rank,
                  points = excluded.points,
                  tournaments_played = excluded.tournaments_played,
                  ranking_date = excluded.ranking_date
               RETURNING id";

    conn.query_row(
        sql,
        params![
            player_id,
            ranking.kind.as_str(),
            ranking.rank,
            ranking.points,
            ranking.tournaments_played,
            ranking.ranking_date,
        ],
        |row| row.get(0),
    )
    .with_context(|| format!("Failed to upsert {} ranking", ranking.kind.as_str()))
}

pub fn find_for_player(
    conn: &Connection,
    api_id: &str,
    kind: RankingKind,
) -> Result<Option<Ranking>> {
    let sql = "SELECT r.id, p.api_id, r.current_rank, r.points, r.tournaments_played, r.ranking_date
               FROM rankings r
               JOIN players p ON r.player_id = p.id
               WHERE p.api_id = ?1 AND r.kind = ?2";

    conn.query_row(sql, params![api_id, kind.as_str()], |row| {
        Ok(Ranking {
            id: row.get(0)?,
            player_api_id: row.get(1)?,
            kind,
            rank: row.get(2)?,
            points: row.get(3)?,
            tournaments_played: row.get(4)?,
            ranking_date: row.get(5)?,
        })
    })
    .optional()
    .context("Failed to query ranking for player")
}

pub fn count(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM rankings", [], |row| row.get(0))
        .context("Failed to count rankings")
}
