use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::{PlayerStatistics, StatisticsCounters};

pub fn upsert_statistics(conn: &Connection, player_id: i64, stats: &PlayerStatistics) -> Result<i64> {
    let sql = "INSERT INTO player_statistics (player_id, surface, period, competitions_played, competitions_won, matches_played, matches_won)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
               ON CONFLICT (player_id, surface, period) DO UPDATE SET
                  competitions_played = excluded.competitions_played,
                  competitions_won = excluded.competitions_won,
                  matches_played = excluded.matches_played,
                  matches_won = excluded.matches_won
               RETURNING id";

    conn.query_row(
        sql,
        params![
            player_id,
            stats.surface,
            stats.period,
            stats.counters.competitions_played,
            stats.counters.competitions_won,
            stats.counters.matches_played,
            stats.counters.matches_won,
        ],
        |row| row.get(0),
    )
    .with_context(|| format!("Failed to upsert {} statistics for {}", stats.surface, stats.period))
}

pub fn list_by_player(conn: &Connection, api_id: &str) -> Result<Vec<PlayerStatistics>> {
    let sql = "SELECT s.id, p.api_id, s.surface, s.period, s.competitions_played, s.competitions_won, s.matches_played, s.matches_won
               FROM player_statistics s
               JOIN players p ON s.player_id = p.id
               WHERE p.api_id = ?1
               ORDER BY s.period DESC, s.surface";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![api_id], parse_statistics_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list statistics for player")?;

    Ok(rows)
}

pub fn count(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM player_statistics", [], |row| row.get(0))
        .context("Failed to count statistics")
}

fn parse_statistics_row(row: &rusqlite::Row) -> rusqlite::Result<PlayerStatistics> {
    Ok(PlayerStatistics {
        id: row.get(0)?,
        player_api_id: row.get(1)?,
        surface: row.get(2)?,
        period: row.get(3)?,
        counters: StatisticsCounters {
            competitions_played: row.get(4)?,
            competitions_won: row.get(5)?,
            matches_played: row.get(6)?,
            matches_won: row.get(7)?,
        },
    })
}
