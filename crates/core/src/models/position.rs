use std::str::FromStr;

use rusqlite::Row;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ValueRef};

use crate::error::Error;
use crate::models::{DefenseStats, KickerStats, PositionStats};

/// Roster positions that have a trailing-window aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Defense,
    Kicker,
}

impl Position {
    pub const ALL: [Position; 2] = [Position::Defense, Position::Kicker];

    /// Code stored in `players.position`
    pub fn code(&self) -> &'static str {
        match self {
            Self::Defense => "DEF",
            Self::Kicker => "K",
        }
    }

    pub fn spec(&self) -> &'static PositionSpec {
        match self {
            Self::Defense => &DEFENSE_SPEC,
            Self::Kicker => &KICKER_SPEC,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEF" => Ok(Self::Defense),
            "K" => Ok(Self::Kicker),
            other => Err(Error::InvalidInput(format!("Unknown position: {}", other))),
        }
    }
}

impl FromSql for Position {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: Error| FromSqlError::Other(Box::new(e)))
    }
}

/// One aggregated output column of a position query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatColumn {
    /// `SUM(pse.<name>) AS <name>`
    Sum(&'static str),
    /// `made / attempted * 100` rounded to two places, `0` when nothing was attempted
    Ratio {
        name: &'static str,
        made: &'static str,
        attempted: &'static str,
    },
}

impl StatColumn {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sum(name) => *name,
            Self::Ratio { name, .. } => *name,
        }
    }
}

/// Column table and row mapper for one position
pub struct PositionSpec {
    pub position: Position,
    pub columns: &'static [StatColumn],
    pub map_stats: fn(&Row<'_>) -> rusqlite::Result<PositionStats>,
}

impl std::fmt::Debug for PositionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PositionSpec")
            .field("position", &self.position)
            .field("columns", &self.columns)
            .finish()
    }
}

pub const DEFENSE_COLUMNS: &[StatColumn] = &[
    StatColumn::Sum("defensive_touchdowns"),
    StatColumn::Sum("special_teams_touchdowns"),
    StatColumn::Sum("touchdowns_scored"),
    StatColumn::Sum("fumbles_forced"),
    StatColumn::Sum("fumbles_recovered"),
    StatColumn::Sum("interceptions"),
    StatColumn::Sum("tackles_for_loss"),
    StatColumn::Sum("quarterback_hits"),
    StatColumn::Sum("sacks"),
    StatColumn::Sum("safeties"),
    StatColumn::Sum("blocked_kicks"),
    StatColumn::Sum("points_allowed"),
];

pub const KICKER_COLUMNS: &[StatColumn] = &[
    StatColumn::Sum("field_goals_made"),
    StatColumn::Sum("field_goals_attempted"),
    StatColumn::Ratio {
        name: "field_goal_percentage",
        made: "field_goals_made",
        attempted: "field_goals_attempted",
    },
    StatColumn::Sum("field_goals_made_0_to_19"),
    StatColumn::Sum("field_goals_made_20_to_29"),
    StatColumn::Sum("field_goals_made_30_to_39"),
    StatColumn::Sum("field_goals_made_40_to_49"),
    StatColumn::Sum("field_goals_made_50_plus"),
    StatColumn::Sum("extra_points_made"),
    StatColumn::Sum("extra_points_attempted"),
    StatColumn::Ratio {
        name: "extra_point_percentage",
        made: "extra_points_made",
        attempted: "extra_points_attempted",
    },
];

static DEFENSE_SPEC: PositionSpec = PositionSpec {
    position: Position::Defense,
    columns: DEFENSE_COLUMNS,
    map_stats: map_defense,
};

static KICKER_SPEC: PositionSpec = PositionSpec {
    position: Position::Kicker,
    columns: KICKER_COLUMNS,
    map_stats: map_kicker,
};

fn map_defense(row: &Row<'_>) -> rusqlite::Result<PositionStats> {
    DefenseStats::from_row(row).map(PositionStats::Defense)
}

fn map_kicker(row: &Row<'_>) -> rusqlite::Result<PositionStats> {
    KickerStats::from_row(row).map(PositionStats::Kicker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_codes_round_trip() {
        for position in Position::ALL {
            assert_eq!(position.code().parse::<Position>().unwrap(), position);
            assert_eq!(position.spec().position, position);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("def".parse::<Position>().unwrap(), Position::Defense);
        assert_eq!(" k ".parse::<Position>().unwrap(), Position::Kicker);
    }

    #[test]
    fn test_unknown_position_rejected() {
        let err = "QB".parse::<Position>().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_column_names_are_unique() {
        for position in Position::ALL {
            let mut names: Vec<_> = position.spec().columns.iter().map(StatColumn::name).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "duplicate column for {}", position);
        }
    }

    #[test]
    fn test_ratio_inputs_are_summed_columns() {
        for position in Position::ALL {
            let columns = position.spec().columns;
            for column in columns {
                if let StatColumn::Ratio { made, attempted, .. } = column {
                    assert!(columns.contains(&StatColumn::Sum(*made)));
                    assert!(columns.contains(&StatColumn::Sum(*attempted)));
                }
            }
        }
    }
}
