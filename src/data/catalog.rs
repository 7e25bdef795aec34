use crate::config::TICKERS;
use crate::models::TickerSummary;

/// The "database" behind the dashboard: a hard-coded snapshot of per-ticker
/// record counts and date coverage, sorted by symbol the way the real index
/// endpoint returns them.
pub fn ticker_summaries() -> Vec<TickerSummary> {
    vec![
        TickerSummary::new("2330.TW", 243, "2025-01-13", "2026-01-13"),
        TickerSummary::new("GOOG", 252, "2025-01-13", "2026-01-13"),
        TickerSummary::new("NVDA", 252, "2025-01-13", "2026-01-13"),
        TickerSummary::new("TSM", 252, "2025-01-13", "2026-01-13"),
    ]
}

/// Symbols the app is configured to track (chips row), independent of which
/// ones actually have catalog rows.
pub fn configured_symbols() -> Vec<&'static str> {
    TICKERS.symbols().collect()
}

pub fn is_in_catalog(symbol: &str) -> bool {
    ticker_summaries().iter().any(|t| t.ticker == symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_configured_symbol_has_a_row() {
        for symbol in configured_symbols() {
            assert!(is_in_catalog(symbol), "{} missing from catalog", symbol);
        }
    }

    #[test]
    fn test_rows_sorted_by_symbol() {
        let rows = ticker_summaries();
        for pair in rows.windows(2) {
            assert!(pair[0].ticker < pair[1].ticker);
        }
    }
}
