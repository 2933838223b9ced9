pub mod filter;
pub mod player_stats;
pub mod position;

pub use filter::PlayerFilter;
pub use player_stats::{DefenseStats, KickerStats, PlayerStatsExt, PositionStats};
pub use position::{Position, PositionSpec, StatColumn};
