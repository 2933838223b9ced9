//! Rolling "last 4 weeks" position aggregates over weekly NFL player stats.
//!
//! [`domain::Last4TotalsService`] is the entry point; it resolves the current
//! week from the `configuration` table and returns one [`models::PlayerStatsExt`]
//! per player, highest fantasy point total first.

pub mod db;
pub mod domain;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{Error, Result};
