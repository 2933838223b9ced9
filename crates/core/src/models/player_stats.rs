use rusqlite::Row;

use crate::models::{Position, PositionSpec};

/// Trailing-window aggregate for one player
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStatsExt {
    pub player_id: i32,
    /// Number of distinct weeks that contributed, not a calendar week
    pub week: i32,
    pub position: Position,
    pub team: String,
    pub name: String,
    pub status: String,
    pub injury_status: String,
    pub stats: PositionStats,
    pub fantasy_points_total: f64,
    pub fantasy_points_average: f64,
    pub conference: String,
    pub team_status: String,
}

impl PlayerStatsExt {
    pub(crate) fn from_row(row: &Row<'_>, spec: &PositionSpec) -> rusqlite::Result<Self> {
        Ok(Self {
            player_id: row.get("player_id")?,
            week: row.get("week")?,
            position: row.get("position")?,
            team: row.get("team")?,
            name: row.get("name")?,
            status: row.get("status")?,
            injury_status: row.get("injury_status")?,
            stats: (spec.map_stats)(row)?,
            fantasy_points_total: row.get("fantasy_points_total")?,
            fantasy_points_average: row.get("fantasy_points_average")?,
            conference: row.get("conference")?,
            team_status: row.get("team_status")?,
        })
    }

    pub fn defense(&self) -> Option<&DefenseStats> {
        match &self.stats {
            PositionStats::Defense(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn kicker(&self) -> Option<&KickerStats> {
        match &self.stats {
            PositionStats::Kicker(stats) => Some(stats),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PositionStats {
    Defense(DefenseStats),
    Kicker(KickerStats),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefenseStats {
    pub defensive_touchdowns: f64,
    pub special_teams_touchdowns: f64,
    pub touchdowns_scored: f64,
    pub fumbles_forced: f64,
    pub fumbles_recovered: f64,
    pub interceptions: f64,
    pub tackles_for_loss: f64,
    pub quarterback_hits: f64,
    pub sacks: f64,
    pub safeties: f64,
    pub blocked_kicks: f64,
    pub points_allowed: f64,
}

impl DefenseStats {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            defensive_touchdowns: row.get("defensive_touchdowns")?,
            special_teams_touchdowns: row.get("special_teams_touchdowns")?,
            touchdowns_scored: row.get("touchdowns_scored")?,
            fumbles_forced: row.get("fumbles_forced")?,
            fumbles_recovered: row.get("fumbles_recovered")?,
            interceptions: row.get("interceptions")?,
            tackles_for_loss: row.get("tackles_for_loss")?,
            quarterback_hits: row.get("quarterback_hits")?,
            sacks: row.get("sacks")?,
            safeties: row.get("safeties")?,
            blocked_kicks: row.get("blocked_kicks")?,
            points_allowed: row.get("points_allowed")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KickerStats {
    pub field_goals_made: f64,
    pub field_goals_attempted: f64,
    /// 0 when no field goals were attempted
    pub field_goal_percentage: f64,
    pub field_goals_made_0_to_19: f64,
    pub field_goals_made_20_to_29: f64,
    pub field_goals_made_30_to_39: f64,
    pub field_goals_made_40_to_49: f64,
    pub field_goals_made_50_plus: f64,
    pub extra_points_made: f64,
    pub extra_points_attempted: f64,
    /// 0 when no extra points were attempted
    pub extra_point_percentage: f64,
}

impl KickerStats {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            field_goals_made: row.get("field_goals_made")?,
            field_goals_attempted: row.get("field_goals_attempted")?,
            field_goal_percentage: row.get("field_goal_percentage")?,
            field_goals_made_0_to_19: row.get("field_goals_made_0_to_19")?,
            field_goals_made_20_to_29: row.get("field_goals_made_20_to_29")?,
            field_goals_made_30_to_39: row.get("field_goals_made_30_to_39")?,
            field_goals_made_40_to_49: row.get("field_goals_made_40_to_49")?,
            field_goals_made_50_plus: row.get("field_goals_made_50_plus")?,
            extra_points_made: row.get("extra_points_made")?,
            extra_points_attempted: row.get("extra_points_attempted")?,
            extra_point_percentage: row.get("extra_point_percentage")?,
        })
    }
}
