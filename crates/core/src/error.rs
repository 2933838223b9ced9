use thiserror::Error;

/// Main error type for fantasy-stats operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[source] rusqlite::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Row mapping error: {0}")]
    Mapping(#[source] rusqlite::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::InvalidColumnIndex(_)
            | rusqlite::Error::InvalidColumnName(_)
            | rusqlite::Error::InvalidColumnType(..)
            | rusqlite::Error::FromSqlConversionFailure(..)
            | rusqlite::Error::IntegralValueOutOfRange(..) => Error::Mapping(err),
            other => Error::Database(other),
        }
    }
}

impl Error {
    /// Check if the current week (or another setting) could not be resolved
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }

    /// Check if a result row did not match the expected shape
    pub fn is_mapping(&self) -> bool {
        matches!(self, Error::Mapping(_))
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::types::Type;

    use super::*;

    #[test]
    fn test_column_errors_map_to_mapping() {
        let err: Error = rusqlite::Error::InvalidColumnName("sacks".into()).into();
        assert!(err.is_mapping());

        let err: Error = rusqlite::Error::InvalidColumnType(3, "team".into(), Type::Null).into();
        assert!(err.is_mapping());
    }

    #[test]
    fn test_other_errors_map_to_database() {
        let err: Error = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, Error::Database(_)));
        assert!(!err.is_mapping());
    }
}
