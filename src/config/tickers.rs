//! config/tickers.rs Mock-universe configuration knobs.
//!
//! Everything the dashboard shows is generated client-side, so the set of
//! symbols, their walk starting points and the series length all live here.

/// A symbol the dashboard is configured to track, with the base price its
/// random walk starts from.
pub struct ConfiguredTicker {
    pub symbol: &'static str,
    pub base_price: f64,
}

pub struct TickerConfig {
    /// Curated list of symbols that should appear in the dashboard
    pub configured: &'static [ConfiguredTicker],
    /// Walk starting point for symbols not in the curated list
    pub fallback_base_price: f64,
    /// Days of history generated per symbol
    pub history_days: usize,
    /// First calendar day of the generated history
    pub history_start_date: &'static str,
    /// Daily volatility as a fraction of the running price
    pub volatility_pct: f64,
}

pub const TICKERS: TickerConfig = TickerConfig {
    configured: &[
        ConfiguredTicker {
            symbol: "2330.TW",
            base_price: 950.0,
        },
        ConfiguredTicker {
            symbol: "TSM",
            base_price: 180.0,
        },
        ConfiguredTicker {
            symbol: "NVDA",
            base_price: 850.0,
        },
        ConfiguredTicker {
            symbol: "GOOG",
            base_price: 175.0,
        },
    ],
    fallback_base_price: 100.0,
    history_days: 60,
    history_start_date: "2025-01-13",
    volatility_pct: 0.02,
};

impl TickerConfig {
    pub fn base_price_for(&self, symbol: &str) -> f64 {
        self.configured
            .iter()
            .find(|t| t.symbol == symbol)
            .map(|t| t.base_price)
            .unwrap_or(self.fallback_base_price)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.configured.iter().map(|t| t.symbol)
    }
}
