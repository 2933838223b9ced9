use rusqlite::Connection;

use crate::{Error, Result};

const SCHEMA_VERSION: i32 = 4;

pub fn run_migrations(conn: &mut Connection) -> Result<()> {
    ensure_migration_table(conn)?;

    let current_version = get_schema_version(conn)?;

    if current_version > SCHEMA_VERSION {
        return Err(Error::Internal(format!(
            "Database schema version ({}) is newer than supported version ({}). Please update the \
             service.",
            current_version, SCHEMA_VERSION
        )));
    }

    for version in (current_version + 1)..=SCHEMA_VERSION {
        apply_migration(conn, version).map_err(|e| {
            Error::Internal(format!("Failed to apply migration {}: {}", version, e))
        })?;
        tracing::debug!(version, "applied schema migration");
    }

    Ok(())
}

fn ensure_migration_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS migration (
            id INTEGER PRIMARY KEY
        )",
        [],
    )?;
    Ok(())
}

fn get_schema_version(conn: &Connection) -> Result<i32> {
    let version = conn.query_row("SELECT COALESCE(MAX(id), 0) FROM migration", [], |row| {
        row.get(0)
    })?;
    Ok(version)
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute("INSERT INTO migration (id) VALUES (?1)", [version])?;
    Ok(())
}

fn apply_migration(conn: &mut Connection, version: i32) -> Result<()> {
    let tx = conn.transaction()?;

    match version {
        1 => migration_v1(&tx)?,
        2 => migration_v2(&tx)?,
        3 => migration_v3(&tx)?,
        4 => migration_v4(&tx)?,
        _ => {
            return Err(Error::Internal(format!(
                "Unknown migration version: {}",
                version
            )));
        }
    }

    set_schema_version(&tx, version)?;
    tx.commit()?;

    Ok(())
}

fn migration_v1(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE teams(
            team_id INTEGER PRIMARY KEY,
            team TEXT NOT NULL,
            conference TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'Active'
        );

        CREATE TABLE players(
            player_id INTEGER PRIMARY KEY,
            position TEXT NOT NULL,
            name TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'Active',
            injury_status TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

// Stats rows reference players and teams without foreign keys: feeds may land
// before the dictionary rows, and unmatched rows drop out of the inner joins.
fn migration_v2(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE player_stats_ext(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            player_id INTEGER NOT NULL,
            team_id INTEGER NOT NULL,
            week INTEGER NOT NULL,

            defensive_touchdowns INTEGER NOT NULL DEFAULT 0,
            special_teams_touchdowns INTEGER NOT NULL DEFAULT 0,
            touchdowns_scored INTEGER NOT NULL DEFAULT 0,
            fumbles_forced INTEGER NOT NULL DEFAULT 0,
            fumbles_recovered INTEGER NOT NULL DEFAULT 0,
            interceptions INTEGER NOT NULL DEFAULT 0,
            tackles_for_loss INTEGER NOT NULL DEFAULT 0,
            quarterback_hits INTEGER NOT NULL DEFAULT 0,
            sacks REAL NOT NULL DEFAULT 0,
            safeties INTEGER NOT NULL DEFAULT 0,
            blocked_kicks INTEGER NOT NULL DEFAULT 0,
            points_allowed INTEGER NOT NULL DEFAULT 0,

            field_goals_made INTEGER NOT NULL DEFAULT 0,
            field_goals_attempted INTEGER NOT NULL DEFAULT 0,
            field_goals_made_0_to_19 INTEGER NOT NULL DEFAULT 0,
            field_goals_made_20_to_29 INTEGER NOT NULL DEFAULT 0,
            field_goals_made_30_to_39 INTEGER NOT NULL DEFAULT 0,
            field_goals_made_40_to_49 INTEGER NOT NULL DEFAULT 0,
            field_goals_made_50_plus INTEGER NOT NULL DEFAULT 0,
            extra_points_made INTEGER NOT NULL DEFAULT 0,
            extra_points_attempted INTEGER NOT NULL DEFAULT 0,

            fantasy_points REAL NOT NULL DEFAULT 0
        );
        "#,
    )?;
    Ok(())
}

fn migration_v3(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE configuration(
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migration_v4(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_player_stats_ext_week
            ON player_stats_ext(week);

        CREATE INDEX IF NOT EXISTS idx_player_stats_ext_player_week
            ON player_stats_ext(player_id, week);

        CREATE INDEX IF NOT EXISTS idx_players_position
            ON players(position);
        "#,
    )?;
    Ok(())
}
