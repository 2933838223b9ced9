use std::sync::Arc;

use crate::db::{ConfigurationDao, ConfigurationStore, Database, Last4TotalsDao};
use crate::error::Result;
use crate::models::{PlayerFilter, PlayerStatsExt, Position};

#[derive(Clone)]
pub struct Last4TotalsService {
    dao: Last4TotalsDao,
}

impl Last4TotalsService {
    /// Service reading the current week from the database's own settings
    pub fn new(db: Arc<Database>) -> Self {
        let config = Arc::new(ConfigurationDao::new(Arc::clone(&db)));
        Self::with_configuration(db, config)
    }

    pub fn with_configuration(db: Arc<Database>, config: Arc<dyn ConfigurationStore>) -> Self {
        Self {
            dao: Last4TotalsDao::new(db, config),
        }
    }

    /// Totals for every player at a position
    pub fn get_totals(&self, position: Position) -> Result<Vec<PlayerStatsExt>> {
        self.dao.get_all(position)
    }

    /// Totals for players whose conference contains `conference`
    pub fn get_totals_by_conference(
        &self,
        position: Position,
        conference: &str,
    ) -> Result<Vec<PlayerStatsExt>> {
        self.dao.get_by_conference(position, conference)
    }

    /// Totals for players whose team name contains `team`
    pub fn get_totals_by_team(&self, position: Position, team: &str) -> Result<Vec<PlayerStatsExt>> {
        self.dao.get_by_team(position, team)
    }

    /// Totals for players whose name contains `name`
    pub fn get_totals_by_name(&self, position: Position, name: &str) -> Result<Vec<PlayerStatsExt>> {
        self.dao.get_by_name(position, name)
    }

    pub fn get_filtered(
        &self,
        position: Position,
        filter: &PlayerFilter,
    ) -> Result<Vec<PlayerStatsExt>> {
        self.dao.get_last4_totals(position, filter)
    }
}
