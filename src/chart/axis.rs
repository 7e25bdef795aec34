use crate::config::plot::PLOT_CONFIG;
use crate::domain::OhlcBar;

/// Displayed price range of the Y axis, derived from the bar sequence.
///
/// Extremes are taken over `low`/`high` only (open/close always sit inside
/// them on well-formed data), then the range is widened by
/// `PLOT_CONFIG.axis_padding_pct` of the raw span on each side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDomain {
    pub min_price: f64,
    pub max_price: f64,
}

impl AxisDomain {
    /// Precondition: `bars` is non-empty. The caller owns that guarantee.
    pub fn from_bars(bars: &[OhlcBar]) -> Self {
        debug_assert!(!bars.is_empty(), "axis domain over an empty sequence");

        let mut min_low = f64::INFINITY;
        let mut max_high = f64::NEG_INFINITY;
        for bar in bars {
            min_low = min_low.min(bar.low);
            max_high = max_high.max(bar.high);
        }

        let padding = (max_high - min_low) * PLOT_CONFIG.axis_padding_pct;
        AxisDomain {
            min_price: min_low - padding,
            max_price: max_high + padding,
        }
    }

    pub fn span(&self) -> f64 {
        self.max_price - self.min_price
    }

    pub fn mid_price(&self) -> f64 {
        (self.min_price + self.max_price) / 2.0
    }

    /// Evenly spaced tick values from min to max, inclusive of both ends.
    pub fn ticks(&self, divisions: usize) -> Vec<f64> {
        let step = self.span() / divisions as f64;
        (0..=divisions)
            .map(|i| self.min_price + step * i as f64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(low: f64, high: f64) -> OhlcBar {
        OhlcBar::new("2025-01-13", low, high, low, high, 1_000_000)
    }

    #[test]
    fn test_padding_is_ten_pct_each_side() {
        let bars = vec![bar(100.0, 150.0), bar(120.0, 200.0)];
        let domain = AxisDomain::from_bars(&bars);
        // Raw span [100, 200] widens to [90, 210]
        assert!((domain.min_price - 90.0).abs() < 1e-9);
        assert!((domain.max_price - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_extremes_come_from_low_and_high_only() {
        // Open/close excursions outside [low, high] must not widen the domain
        let malformed = OhlcBar::new("2025-01-13", 50.0, 120.0, 100.0, 300.0, 0);
        let bars = vec![malformed, bar(100.0, 120.0)];
        let domain = AxisDomain::from_bars(&bars);
        assert!((domain.min_price - 98.0).abs() < 1e-9);
        assert!((domain.max_price - 122.0).abs() < 1e-9);
    }

    #[test]
    fn test_flat_series_collapses_to_zero_span() {
        let bars = vec![bar(100.0, 100.0), bar(100.0, 100.0)];
        let domain = AxisDomain::from_bars(&bars);
        assert_eq!(domain.span(), 0.0);
        assert_eq!(domain.mid_price(), 100.0);
    }

    #[test]
    fn test_ticks_include_both_ends() {
        let bars = vec![bar(100.0, 200.0)];
        let domain = AxisDomain::from_bars(&bars);
        let ticks = domain.ticks(5);
        assert_eq!(ticks.len(), 6);
        assert!((ticks[0] - domain.min_price).abs() < 1e-9);
        assert!((ticks[5] - domain.max_price).abs() < 1e-9);
    }
}
