pub mod summary;

pub use summary::{DashboardStats, TickerSummary};
