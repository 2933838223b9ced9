pub mod last4_totals;

pub use last4_totals::Last4TotalsService;
