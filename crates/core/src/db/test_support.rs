//! Throwaway databases and row builders shared by the DAO tests.

use std::env;
use std::sync::Arc;

use rusqlite::params;

use crate::db::Database;

pub fn setup_test_db() -> Arc<Database> {
    let db_path = env::temp_dir().join(format!("test_stats_{}.db", uuid::Uuid::new_v4()));
    Arc::new(Database::open(&db_path).unwrap())
}

pub fn insert_team(db: &Database, team_id: i32, team: &str, conference: &str) {
    db.with_connection(|conn| {
        conn.execute(
            "INSERT INTO teams (team_id, team, conference, status) VALUES (?1, ?2, ?3, 'Active')",
            params![team_id, team, conference],
        )?;
        Ok(())
    })
    .unwrap();
}

pub fn insert_player(db: &Database, player_id: i32, position: &str, name: &str) {
    db.with_connection(|conn| {
        conn.execute(
            "INSERT INTO players (player_id, position, name, status, injury_status)
             VALUES (?1, ?2, ?3, 'Active', 'Healthy')",
            params![player_id, position, name],
        )?;
        Ok(())
    })
    .unwrap();
}

/// Weekly kicker line: (field goals made, attempted, extra points made, attempted)
pub fn insert_kicker_week(
    db: &Database,
    player_id: i32,
    team_id: i32,
    week: i32,
    field_goals: (i32, i32),
    extra_points: (i32, i32),
    fantasy_points: f64,
) {
    db.with_connection(|conn| {
        conn.execute(
            r#"
            INSERT INTO player_stats_ext (
                player_id, team_id, week,
                field_goals_made, field_goals_attempted, field_goals_made_30_to_39,
                extra_points_made, extra_points_attempted, fantasy_points
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?4, ?6, ?7, ?8)
            "#,
            params![
                player_id,
                team_id,
                week,
                field_goals.0,
                field_goals.1,
                extra_points.0,
                extra_points.1,
                fantasy_points
            ],
        )?;
        Ok(())
    })
    .unwrap();
}

/// Weekly defense line: (sacks, interceptions, points allowed)
pub fn insert_defense_week(
    db: &Database,
    player_id: i32,
    team_id: i32,
    week: i32,
    line: (f64, i32, i32),
    fantasy_points: f64,
) {
    db.with_connection(|conn| {
        conn.execute(
            r#"
            INSERT INTO player_stats_ext (
                player_id, team_id, week, sacks, interceptions, points_allowed, fantasy_points
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![player_id, team_id, week, line.0, line.1, line.2, fantasy_points],
        )?;
        Ok(())
    })
    .unwrap();
}
