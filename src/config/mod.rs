//! Configuration module for the tickerboard application.

pub mod plot;
pub mod tickers;

// Re-export commonly used items
pub use plot::PLOT_CONFIG;
pub use tickers::TICKERS;
