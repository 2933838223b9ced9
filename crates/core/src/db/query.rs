use rusqlite::ToSql;

use crate::error::{Error, Result};
use crate::models::{PlayerFilter, Position, PositionSpec, StatColumn};
use crate::utils::pattern::{LIKE_ESCAPE, contains_pattern};

/// Weeks covered by the window, counting the reference week
pub const WINDOW_WEEKS: i32 = 4;

// The reference week is re-selected from the stats table rather than trusted,
// so a week with no rows yields an empty window instead of a partial one.
const STARTING_WEEK_CTE: &str = r#"
WITH starting_week AS (
    SELECT week
    FROM player_stats_ext
    WHERE week = ?1
    ORDER BY week
    LIMIT 1
)"#;

const JOIN_SQL: &str = r#"
FROM player_stats_ext pse
JOIN players p ON p.player_id = pse.player_id
JOIN teams t ON t.team_id = pse.team_id
CROSS JOIN starting_week sw
WHERE p.position = ?2
    AND pse.week <= sw.week
    AND pse.week >= sw.week - ?3"#;

const GROUP_BY_SQL: &str = r#"
GROUP BY
    p.player_id,
    p.position,
    t.team,
    p.name,
    p.status,
    p.injury_status,
    t.conference,
    t.status
ORDER BY fantasy_points_total DESC, p.player_id"#;

/// Trailing-window aggregate statement for one position, with its bound values.
///
/// Parameters: `?1` reference week, `?2` position code, `?3` window span,
/// `?4` filter pattern when a filter is present. User text never reaches the
/// SQL string.
#[derive(Debug, Clone)]
pub struct Last4Query {
    sql: String,
    position: Position,
    position_code: &'static str,
    reference_week: i32,
    window_span: i32,
    pattern: Option<String>,
}

impl Last4Query {
    pub fn new(spec: &PositionSpec, filter: &PlayerFilter, current_week: i32) -> Result<Self> {
        let reference_week = current_week.checked_sub(1).ok_or_else(|| {
            Error::Configuration(format!("Current week {} is out of range", current_week))
        })?;
        let pattern = filter.text().map(contains_pattern);

        let mut sql = String::from(STARTING_WEEK_CTE);
        sql.push_str(
            r#"
SELECT
    p.player_id,
    COUNT(DISTINCT pse.week) AS week,
    p.position,
    t.team,
    p.name,
    p.status,
    p.injury_status,"#,
        );

        for column in spec.columns {
            push_stat_column(&mut sql, column);
        }

        sql.push_str(
            r#"
    SUM(pse.fantasy_points) AS fantasy_points_total,
    ROUND(AVG(pse.fantasy_points), 2) AS fantasy_points_average,
    t.conference,
    t.status AS team_status"#,
        );
        sql.push_str(JOIN_SQL);

        if let Some(column) = filter.column() {
            sql.push_str(&format!(
                "\n    AND lower({column}) LIKE ?4 ESCAPE '{LIKE_ESCAPE}'"
            ));
        }

        sql.push_str(GROUP_BY_SQL);

        Ok(Self {
            sql,
            position: spec.position,
            position_code: spec.position.code(),
            reference_week,
            window_span: WINDOW_WEEKS - 1,
            pattern,
        })
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Last week of the window, before it is checked against the stats table
    pub fn reference_week(&self) -> i32 {
        self.reference_week
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn params(&self) -> Vec<&dyn ToSql> {
        let mut params: Vec<&dyn ToSql> = vec![
            &self.reference_week,
            &self.position_code,
            &self.window_span,
        ];

        if let Some(pattern) = &self.pattern {
            params.push(pattern);
        }

        params
    }
}

fn push_stat_column(sql: &mut String, column: &StatColumn) {
    let name = column.name();
    let expr = match column {
        StatColumn::Sum(source) => format!("SUM(pse.{source})"),
        StatColumn::Ratio {
            made, attempted, ..
        } => format!(
            r#"CASE
        WHEN SUM(pse.{attempted}) = 0 THEN 0
        ELSE ROUND(CAST(SUM(pse.{made}) AS REAL) / SUM(pse.{attempted}) * 100, 2)
    END"#
        ),
    };

    sql.push_str(&format!("\n    {expr} AS {name},"));
}
