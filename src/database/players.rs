use anyhow::{Context, Result};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use crate::domain::Player;

const PLAYER_COLUMNS: &str = "id, api_id, name, nationality, country_code, abbreviation, gender, birth_date, pro_year, handedness, height, weight, highest_singles_ranking, highest_singles_ranking_date, updated_at";

const SEARCH_LIMIT: usize = 50;

/// Inserts the player or overwrites every column of the row with the same `api_id`
pub fn upsert_player(conn: &Connection, player: &Player) -> Result<Player> {
    let sql = format!(
        "INSERT INTO players (api_id, name, nationality, country_code, abbreviation, gender, birth_date, pro_year, handedness, height, weight, highest_singles_ranking, highest_singles_ranking_date, updated_at, search_name)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
         ON CONFLICT (api_id) DO UPDATE SET
            name = excluded.name,
            search_name = excluded.search_name,
            nationality = excluded.nationality,
            country_code = excluded.country_code,
            abbreviation = excluded.abbreviation,
            gender = excluded.gender,
            birth_date = excluded.birth_date,
            pro_year = excluded.pro_year,
            handedness = excluded.handedness,
            height = excluded.height,
            weight = excluded.weight,
            highest_singles_ranking = excluded.highest_singles_ranking,
            highest_singles_ranking_date = excluded.highest_singles_ranking_date,
            updated_at = excluded.updated_at
         RETURNING {}",
        PLAYER_COLUMNS
    );

    conn.query_row(
        &sql,
        params![
            player.api_id,
            player.name,
            player.nationality,
            player.country_code,
            player.abbreviation,
            player.gender,
            player.birth_date,
            player.pro_year,
            player.handedness,
            player.height,
            player.weight,
            player.highest_singles_ranking,
            player.highest_singles_ranking_date,
            player.updated_at,
            search_name(&player.name),
        ],
        parse_player_row,
    )
    .with_context(|| format!("Failed to upsert player {}", player.api_id))
}

pub fn find_by_api_id(conn: &Connection, api_id: &str) -> Result<Option<Player>> {
    let sql = format!("SELECT {} FROM players WHERE api_id = ?1", PLAYER_COLUMNS);

    conn.query_row(&sql, params![api_id], parse_player_row)
        .optional()
        .context("Failed to query player by api_id")
}

/// Lowercased name the search matches against; SQLite's `lower()` only folds ASCII
pub fn search_name(name: &str) -> String {
    name.to_lowercase()
}

/// Players whose name contains every term, case-insensitively. Terms match literally.
pub fn search_by_terms(conn: &Connection, terms: &[String]) -> Result<Vec<Player>> {
    if terms.is_empty() {
        return Ok(Vec::new());
    }

    let conditions: Vec<String> = (1..=terms.len())
        .map(|idx| format!("instr(search_name, ?{}) > 0", idx))
        .collect();
    let sql = format!(
        "SELECT {} FROM players WHERE {} ORDER BY name LIMIT {}",
        PLAYER_COLUMNS,
        conditions.join(" AND "),
        SEARCH_LIMIT
    );
    let needles = terms.iter().map(|term| search_name(term));

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(needles), parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to search players")?;

    Ok(rows)
}

pub fn count(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))
        .context("Failed to count players")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        api_id: row.get(1)?,
        name: row.get(2)?,
        nationality: row.get(3)?,
        country_code: row.get(4)?,
        abbreviation: row.get(5)?,
        gender: row.get(6)?,
        birth_date: row.get(7)?,
        pro_year: row.get(8)?,
        handedness: row.get(9)?,
        height: row.get(10)?,
        weight: row.get(11)?,
        highest_singles_ranking: row.get(12)?,
        highest_singles_ranking_date: row.get(13)?,
        updated_at: row.get(14)?,
    })
}
