use serde::{Deserialize, Serialize};

/// One catalog row: how much history the "database" holds for a ticker.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TickerSummary {
    pub ticker: String,
    pub record_count: u64,
    pub earliest_date: String,
    pub latest_date: String,
}

impl TickerSummary {
    pub fn new(
        ticker: impl Into<String>,
        record_count: u64,
        earliest_date: impl Into<String>,
        latest_date: impl Into<String>,
    ) -> Self {
        TickerSummary {
            ticker: ticker.into(),
            record_count,
            earliest_date: earliest_date.into(),
            latest_date: latest_date.into(),
        }
    }

    /// Share of a trading-ish year the records cover, as a rounded percent.
    pub fn yearly_coverage_pct(&self) -> u64 {
        ((self.record_count as f64 / 365.0) * 100.0).round() as u64
    }
}

/// Totals shown in the stat-card strip at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_tickers: usize,
    pub total_records: u64,
    pub configured_count: usize,
}

impl DashboardStats {
    pub fn compute(summaries: &[TickerSummary], configured_count: usize) -> Self {
        DashboardStats {
            total_tickers: summaries.len(),
            total_records: summaries.iter().map(|t| t.record_count).sum(),
            configured_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_totals() {
        let summaries = vec![
            TickerSummary::new("NVDA", 252, "2025-01-13", "2026-01-13"),
            TickerSummary::new("TSM", 243, "2025-01-13", "2026-01-13"),
        ];
        let stats = DashboardStats::compute(&summaries, 4);
        assert_eq!(stats.total_tickers, 2);
        assert_eq!(stats.total_records, 495);
        assert_eq!(stats.configured_count, 4);
    }

    #[test]
    fn test_yearly_coverage_rounds() {
        let row = TickerSummary::new("2330.TW", 243, "2025-01-13", "2026-01-13");
        assert_eq!(row.yearly_coverage_pct(), 67); // 243/365 = 66.6%
        let full = TickerSummary::new("NVDA", 365, "2025-01-13", "2026-01-13");
        assert_eq!(full.yearly_coverage_pct(), 100);
    }
}
