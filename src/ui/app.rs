use std::collections::HashMap;

use eframe::egui;

use crate::data::{configured_symbols, generate_ohlc, ticker_summaries};
use crate::domain::OhlcBar;
use crate::models::TickerSummary;
use crate::ui::config::UI_CONFIG;
use crate::ui::dashboard::{render_dashboard, DashboardEvent};
use crate::ui::detail::{render_detail, DetailEvent};
use crate::ui::styles::setup_custom_visuals;

/// Which page is showing. The original dashboard routes between an index page
/// and a per-ticker chart page; same shape here.
#[derive(Clone, PartialEq, Eq)]
enum Screen {
    Dashboard,
    Detail { ticker: String },
}

pub struct TickerBoardApp {
    screen: Screen,
    summaries: Vec<TickerSummary>,
    configured: Vec<&'static str>,
    /// Generated series per ticker; one walk per (ticker, seed), reused across frames
    series_cache: HashMap<String, Vec<OhlcBar>>,
    seed: u64,
    days: usize,
}

impl TickerBoardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, seed: u64, days: usize) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        TickerBoardApp {
            screen: Screen::Dashboard,
            summaries: ticker_summaries(),
            configured: configured_symbols(),
            series_cache: HashMap::new(),
            seed,
            days,
        }
    }

    fn ensure_series(&mut self, ticker: &str) {
        if !self.series_cache.contains_key(ticker) {
            log::info!("generating {}-day series for {}", self.days, ticker);
            let bars = generate_ohlc(ticker, self.seed, self.days);
            self.series_cache.insert(ticker.to_string(), bars);
        }
    }
}

impl eframe::App for TickerBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Screen::Detail { ticker } = &self.screen {
            let ticker = ticker.clone();
            self.ensure_series(&ticker);
        }

        let panel_frame = egui::Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(egui::Margin::same(16));

        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| match self.screen.clone() {
                Screen::Dashboard => {
                    if let Some(DashboardEvent::OpenTicker(ticker)) =
                        render_dashboard(ui, &self.summaries, &self.configured)
                    {
                        log::info!("opening detail view for {}", ticker);
                        self.screen = Screen::Detail { ticker };
                    }
                }
                Screen::Detail { ticker } => {
                    let bars = &self.series_cache[&ticker];
                    if let Some(DetailEvent::Back) = render_detail(ui, &ticker, bars) {
                        self.screen = Screen::Dashboard;
                    }
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TICKERS;

    #[test]
    fn test_detail_series_length_follows_config() {
        // The cache path is exercised headlessly; generation must match config
        let bars = generate_ohlc("NVDA", 7, TICKERS.history_days);
        assert_eq!(bars.len(), TICKERS.history_days);
    }
}
