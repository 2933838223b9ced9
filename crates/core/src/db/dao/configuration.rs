use std::sync::Arc;

use rusqlite::{OptionalExtension, params};

use crate::db::Database;
use crate::error::{Error, Result};

/// Key of the NFL week the app is currently showing
pub const CURRENT_WEEK_KEY: &str = "currentWeek";

/// Source of integer application settings
pub trait ConfigurationStore: Send + Sync {
    fn get_configuration_value(&self, key: &str) -> Result<i32>;
}

/// Settings kept in the `configuration` table
#[derive(Clone)]
pub struct ConfigurationDao {
    db: Arc<Database>,
}

impl ConfigurationDao {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn set_configuration_value(&self, key: &str, value: i32) -> Result<()> {
        self.db.with_connection(|conn| {
            conn.execute(
                "INSERT INTO configuration (key, value)
                 VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = ?2",
                params![key, value.to_string()],
            )?;
            Ok(())
        })
    }
}

impl ConfigurationStore for ConfigurationDao {
    fn get_configuration_value(&self, key: &str) -> Result<i32> {
        let raw = self
            .db
            .with_connection(|conn| {
                let value = conn
                    .query_row(
                        "SELECT value FROM configuration WHERE key = ?1",
                        params![key],
                        |row| row.get::<_, String>(0),
                    )
                    .optional()?;
                Ok(value)
            })
            .map_err(|e| {
                Error::Configuration(format!("Failed to read configuration '{}': {}", key, e))
            })?;

        let Some(raw) = raw else {
            tracing::warn!(key, "configuration value missing");
            return Err(Error::Configuration(format!(
                "Missing configuration value '{}'",
                key
            )));
        };

        raw.trim().parse().map_err(|_| {
            tracing::warn!(key, value = %raw, "configuration value is not an integer");
            Error::Configuration(format!(
                "Configuration value '{}' is not an integer: {}",
                key, raw
            ))
        })
    }
}
