use crate::domain::{Direction, OhlcBar};

/// Pre-formatted hover summary for one bar. The host surface only lays it out.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipSummary {
    pub date: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
    /// Direction of the close line, reusing the Up/Down rule.
    pub direction: Direction,
}

impl TooltipSummary {
    pub fn for_bar(bar: &OhlcBar) -> Self {
        TooltipSummary {
            date: bar.date.clone(),
            open: format_price(bar.open),
            high: format_price(bar.high),
            low: format_price(bar.low),
            close: format_price(bar.close),
            volume: format_volume(bar.volume),
            direction: bar.direction(),
        }
    }
}

/// Dollar prefix, exactly two decimals.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Volume scaled to millions, two decimals: 12_345_678 -> "12.35M".
pub fn format_volume(volume: u64) -> String {
    format!("{:.2}M", volume as f64 / 1_000_000.0)
}

/// Signed delta against a reference close: "+1.25 (0.71%)" / "-0.40 (-0.23%)".
pub fn format_change(change: f64, pct: f64) -> String {
    let sign = if change >= 0.0 { "+" } else { "" };
    format!("{}{:.2} ({:.2}%)", sign, change, pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_formatting() {
        assert_eq!(format_price(100.0), "$100.00");
        assert_eq!(format_price(0.5), "$0.50");
        assert_eq!(format_price(1234.567), "$1234.57");
    }

    #[test]
    fn test_volume_scaled_to_millions() {
        assert_eq!(format_volume(12_345_678), "12.35M");
        assert_eq!(format_volume(1_000_000), "1.00M");
        assert_eq!(format_volume(0), "0.00M");
    }

    #[test]
    fn test_change_sign() {
        assert_eq!(format_change(1.254, 0.714), "+1.25 (0.71%)");
        assert_eq!(format_change(-0.4, -0.23), "-0.40 (-0.23%)");
        assert_eq!(format_change(0.0, 0.0), "+0.00 (0.00%)");
    }

    #[test]
    fn test_summary_reuses_direction_rule() {
        let doji = OhlcBar::new("2025-03-01", 100.0, 101.0, 99.0, 100.0, 2_500_000);
        let summary = TooltipSummary::for_bar(&doji);
        assert_eq!(summary.direction, Direction::Up);
        assert_eq!(summary.close, "$100.00");
        assert_eq!(summary.volume, "2.50M");
        assert_eq!(summary.date, "2025-03-01");
    }
}
