pub mod configuration;
pub mod last4_totals;

pub use configuration::{CURRENT_WEEK_KEY, ConfigurationDao, ConfigurationStore};
pub use last4_totals::Last4TotalsDao;
