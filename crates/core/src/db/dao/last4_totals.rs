use std::sync::Arc;

use crate::db::Database;
use crate::db::dao::configuration::{CURRENT_WEEK_KEY, ConfigurationStore};
use crate::db::query::Last4Query;
use crate::error::Result;
use crate::models::{PlayerFilter, PlayerStatsExt, Position};

/// Per-player totals over the four weeks before the current week
#[derive(Clone)]
pub struct Last4TotalsDao {
    db: Arc<Database>,
    config: Arc<dyn ConfigurationStore>,
}

impl Last4TotalsDao {
    pub fn new(db: Arc<Database>, config: Arc<dyn ConfigurationStore>) -> Self {
        Self { db, config }
    }

    /// Aggregate every player at `position` matching `filter`, highest
    /// fantasy point total first. An empty window is an empty list.
    pub fn get_last4_totals(
        &self,
        position: Position,
        filter: &PlayerFilter,
    ) -> Result<Vec<PlayerStatsExt>> {
        let current_week = self.config.get_configuration_value(CURRENT_WEEK_KEY)?;
        let spec = position.spec();
        let query = Last4Query::new(spec, filter, current_week)?;

        tracing::debug!(
            position = %query.position(),
            current_week,
            reference_week = query.reference_week(),
            pattern = ?query.pattern(),
            "querying last 4 week totals"
        );
        tracing::trace!(sql = query.sql());

        let stats = self.db.with_connection(|conn| {
            let mut stmt = conn.prepare(query.sql())?;

            let stats = stmt
                .query_map(&query.params()[..], |row| PlayerStatsExt::from_row(row, spec))?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(stats)
        })?;

        tracing::debug!(%position, rows = stats.len(), "mapped last 4 week totals");

        Ok(stats)
    }

    pub fn get_all(&self, position: Position) -> Result<Vec<PlayerStatsExt>> {
        self.get_last4_totals(position, &PlayerFilter::All)
    }

    pub fn get_by_conference(
        &self,
        position: Position,
        conference: &str,
    ) -> Result<Vec<PlayerStatsExt>> {
        self.get_last4_totals(position, &PlayerFilter::Conference(conference.to_string()))
    }

    pub fn get_by_team(&self, position: Position, team: &str) -> Result<Vec<PlayerStatsExt>> {
        self.get_last4_totals(position, &PlayerFilter::Team(team.to_string()))
    }

    pub fn get_by_name(&self, position: Position, name: &str) -> Result<Vec<PlayerStatsExt>> {
        self.get_last4_totals(position, &PlayerFilter::Name(name.to_string()))
    }
}
