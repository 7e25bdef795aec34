// User interface components
pub mod app;
pub mod chart_view;
pub mod config;
pub mod dashboard;
pub mod detail;
pub mod styles;

// Re-export main app
pub use app::TickerBoardApp;
pub use config::UI_CONFIG;
