use anyhow::{Context, Result};
use rusqlite::Connection;

use super::connection::{create_pool, get_connection, DbPool};

const SCHEMA_SQL: &str = include_str!("schema.sql");
const DROP_SQL: &str = "
    DROP TABLE IF EXISTS player_statistics;
    DROP TABLE IF EXISTS rankings;
    DROP TABLE IF EXISTS players;
";

/// Opens the pool for `database_path` and makes sure the schema exists
pub fn open_database(database_path: &str) -> Result<DbPool> {
    let pool = create_pool(database_path)?;
    let conn = get_connection(&pool)?;
    ensure_schema(&conn)?;
    Ok(pool)
}

/// Creates missing tables and indexes, leaving existing data alone
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    run_statements(conn, SCHEMA_SQL)?;
    add_search_name(conn)?;
    log::debug!("Database schema ensured");
    Ok(())
}

/// Databases created before `players.search_name` existed get the column and a backfill
fn add_search_name(conn: &Connection) -> Result<()> {
    let present: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM pragma_table_info('players') WHERE name = 'search_name'",
            [],
            |row| row.get(0),
        )
        .context("Failed to inspect players columns")?;
    if present {
        return Ok(());
    }

    execute_sql(
        conn,
        "ALTER TABLE players ADD COLUMN search_name TEXT NOT NULL DEFAULT ''",
    )?;

    let names: Vec<(i64, String)> = {
        let mut stmt = conn.prepare("SELECT id, name FROM players")?;
        stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<_>>()
            .context("Failed to read player names")?
    };
    for (id, name) in &names {
        conn.execute(
            "UPDATE players SET search_name = ?1 WHERE id = ?2",
            rusqlite::params![super::players::search_name(name), id],
        )
        .context("Failed to backfill search_name")?;
    }
    log::info!("Added players.search_name ({} rows backfilled)", names.len());
    Ok(())
}

pub fn reset_database(conn: &Connection) -> Result<()> {
    run_statements(conn, DROP_SQL)?;
    run_statements(conn, SCHEMA_SQL)?;
    log::info!("Database schema reset successfully");
    Ok(())
}

fn run_statements(conn: &Connection, sql: &str) -> Result<()> {
    for (idx, statement) in split_sql_statements(sql).iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
