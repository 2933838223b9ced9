pub mod connection;
pub mod dao;
pub mod migrations;
pub mod query;

#[cfg(test)]
pub(crate) mod test_support;

pub use connection::Database;
pub use dao::{ConfigurationDao, ConfigurationStore, Last4TotalsDao};
pub use query::Last4Query;
