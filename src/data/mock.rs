use chrono::Duration;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hash::{Hash, Hasher};

use crate::config::TICKERS;
use crate::domain::OhlcBar;
use crate::utils::time_utils::{date_key, parse_date_key};

/// Generate a daily random-walk OHLC history for `symbol`.
///
/// Deterministic: the same (symbol, seed) pair always yields the same series,
/// so the dashboard is stable across reruns and the wasm build stays
/// reproducible. Every bar honors `low <= min(o,c) <= max(o,c) <= high`.
pub fn generate_ohlc(symbol: &str, seed: u64, days: usize) -> Vec<OhlcBar> {
    let mut rng = StdRng::seed_from_u64(ticker_seed(symbol, seed));
    let mut base_price = TICKERS.base_price_for(symbol);

    let start = parse_date_key(TICKERS.history_start_date)
        .unwrap_or_else(|| chrono::NaiveDate::from_ymd_opt(2025, 1, 13).unwrap());

    let mut bars = Vec::with_capacity(days);
    for i in 0..days {
        let date = start + Duration::days(i as i64);
        let volatility = base_price * TICKERS.volatility_pct;

        let open = base_price + (rng.random::<f64>() - 0.5) * volatility;
        let close = open + (rng.random::<f64>() - 0.5) * volatility * 2.0;
        let high = open.max(close) + rng.random::<f64>() * volatility * 0.5;
        let low = open.min(close) - rng.random::<f64>() * volatility * 0.5;
        let volume = rng.random_range(1_000_000..=11_000_000);

        bars.push(OhlcBar::new(date_key(date), open, high, low, close, volume));

        // Next day opens around where this one closed
        base_price = close;
    }

    bars
}

// Per-ticker stream offset so symbols sharing a seed still walk independently
fn ticker_seed(symbol: &str, seed: u64) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    symbol.hash(&mut hasher);
    seed ^ hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_honor_ohlc_invariant() {
        for symbol in ["NVDA", "GOOG", "TSM", "2330.TW", "UNKNOWN"] {
            let bars = generate_ohlc(symbol, 7, 60);
            assert_eq!(bars.len(), 60);
            for bar in &bars {
                assert!(bar.is_well_formed(), "bad bar for {}: {:?}", symbol, bar);
                assert!(bar.volume >= 1_000_000);
            }
        }
    }

    #[test]
    fn test_same_seed_same_series() {
        let a = generate_ohlc("NVDA", 42, 30);
        let b = generate_ohlc("NVDA", 42, 30);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_symbols_walk_independently() {
        let a = generate_ohlc("NVDA", 42, 30);
        let b = generate_ohlc("GOOG", 42, 30);
        assert_ne!(a, b);
    }

    #[test]
    fn test_dates_ascend_daily_from_start() {
        let bars = generate_ohlc("TSM", 1, 3);
        assert_eq!(bars[0].date, TICKERS.history_start_date);
        assert_eq!(bars[1].date, "2025-01-14");
        assert_eq!(bars[2].date, "2025-01-15");
    }
}
