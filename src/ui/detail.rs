use eframe::egui::{self, RichText, Ui};

use crate::chart::{format_change, format_price, format_volume};
use crate::config::plot::PLOT_CONFIG;
use crate::config::TICKERS;
use crate::domain::{Direction, OhlcBar};
use crate::ui::chart_view::show_candlestick_chart;
use crate::ui::config::UI_CONFIG;
use crate::ui::styles::UiStyleExt;

pub enum DetailEvent {
    Back,
}

pub fn render_detail(ui: &mut Ui, ticker: &str, bars: &[OhlcBar]) -> Option<DetailEvent> {
    let mut event = None;

    ui.vertical(|ui| {
        if render_header(ui, ticker, bars) {
            event = Some(DetailEvent::Back);
        }
        ui.separator();

        // Chart takes whatever is left above the footer strip
        let footer_height = 64.0;
        let chart_height = (ui.available_height() - footer_height).max(0.0);
        ui.allocate_ui(
            egui::Vec2::new(ui.available_width(), chart_height),
            |ui| {
                show_candlestick_chart(ui, bars);
            },
        );

        ui.separator();
        render_footer(ui, bars);
    });

    event
}

/// Title, latest close and session delta. Returns true when Back is clicked.
fn render_header(ui: &mut Ui, ticker: &str, bars: &[OhlcBar]) -> bool {
    let mut back = false;

    ui.horizontal(|ui| {
        if ui.button("←").clicked() {
            back = true;
        }
        ui.vertical(|ui| {
            ui.label(
                RichText::new(ticker)
                    .heading()
                    .monospace()
                    .color(UI_CONFIG.colors.primary),
            );
            ui.label_subdued(format!(
                "Candlestick Chart • {} Days",
                TICKERS.history_days
            ));
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let [.., previous, latest] = bars {
                let change = latest.close - previous.close;
                let pct = change / previous.close * 100.0;
                let (arrow, color) = if change >= 0.0 {
                    ("▲", PLOT_CONFIG.up_color)
                } else {
                    ("▼", PLOT_CONFIG.down_color)
                };

                ui.vertical(|ui| {
                    ui.value_strong(format_price(latest.close), UI_CONFIG.colors.heading);
                    ui.label(
                        RichText::new(format!("{} {}", arrow, format_change(change, pct)))
                            .monospace()
                            .color(color),
                    );
                });
            }
        });
    });

    back
}

/// OHLC + volume strip for the latest bar.
fn render_footer(ui: &mut Ui, bars: &[OhlcBar]) {
    let Some(latest) = bars.last() else {
        return;
    };

    let close_color = match latest.direction() {
        Direction::Up => PLOT_CONFIG.up_color,
        Direction::Down => PLOT_CONFIG.down_color,
    };

    let cells = [
        ("Open", format_price(latest.open), UI_CONFIG.colors.label),
        ("High", format_price(latest.high), PLOT_CONFIG.up_color),
        ("Low", format_price(latest.low), PLOT_CONFIG.down_color),
        ("Close", format_price(latest.close), close_color),
        ("Volume", format_volume(latest.volume), UI_CONFIG.colors.label),
    ];

    ui.horizontal(|ui| {
        for (label, value, color) in cells {
            ui.vertical(|ui| {
                ui.set_min_width(90.0);
                ui.label_section(label);
                ui.label(RichText::new(value).monospace().strong().color(color));
            });
        }
    });
}
