use serde::{Deserialize, Serialize};

/// Direction of a bar: did it close at or above its open?
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::EnumIter,
)]
pub enum Direction {
    Up,
    Down,
}

// One OHLC record, the unit the chart renders.
// `date` is a calendar-day key ("%Y-%m-%d"), sequences are ordered by it ascending.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OhlcBar {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl OhlcBar {
    pub fn new(
        date: impl Into<String>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        OhlcBar {
            date: date.into(),
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Up when close >= open. Equal open/close counts as Up.
    pub fn direction(&self) -> Direction {
        if self.close >= self.open {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// Low and high of the bar body as a (low, high) tuple.
    pub fn body_range(&self) -> (f64, f64) {
        match self.direction() {
            Direction::Up => (self.open, self.close),
            Direction::Down => (self.close, self.open),
        }
    }

    /// Whether the bar satisfies `low <= min(o,c) <= max(o,c) <= high`.
    /// The renderer never checks this; upstream data quality does.
    pub fn is_well_formed(&self) -> bool {
        let (body_low, body_high) = self.body_range();
        self.low <= body_low && body_high <= self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_tie_break_is_up() {
        let bar = OhlcBar::new("2025-01-13", 100.0, 101.0, 99.0, 100.0, 1_000_000);
        assert_eq!(bar.direction(), Direction::Up);
    }

    #[test]
    fn test_direction_down() {
        let bar = OhlcBar::new("2025-01-13", 100.0, 101.0, 98.0, 99.0, 1_000_000);
        assert_eq!(bar.direction(), Direction::Down);
    }

    #[test]
    fn test_body_range_orders_prices() {
        let down = OhlcBar::new("2025-01-13", 105.0, 106.0, 99.0, 100.0, 1_000_000);
        assert_eq!(down.body_range(), (100.0, 105.0));

        let up = OhlcBar::new("2025-01-14", 100.0, 106.0, 99.0, 105.0, 1_000_000);
        assert_eq!(up.body_range(), (100.0, 105.0));
    }

    #[test]
    fn test_well_formed_detects_inverted_range() {
        let bad = OhlcBar::new("2025-01-13", 100.0, 99.0, 101.0, 100.0, 0);
        assert!(!bad.is_well_formed());
    }
}
