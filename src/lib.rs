#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod chart;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use chart::{render, AxisDomain, CandleGeometry, PlotArea, TooltipSummary};
pub use data::{configured_symbols, generate_ohlc, ticker_summaries};
pub use domain::{Direction, OhlcBar};
pub use models::{DashboardStats, TickerSummary};
pub use ui::TickerBoardApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed for the mock random-walk generator (same seed, same charts)
    #[arg(long, default_value_t = 7)]
    pub seed: u64,

    /// Days of OHLC history to generate per ticker
    #[arg(long, default_value_t = crate::config::TICKERS.history_days)]
    pub days: usize,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, cli: &Cli) -> Box<dyn eframe::App> {
    let app = ui::TickerBoardApp::new(cc, cli.seed, cli.days);
    Box::new(app)
}
