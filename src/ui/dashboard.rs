use eframe::egui::{self, CornerRadius, Frame, Margin, RichText, ScrollArea, Stroke, Ui};

use crate::models::{DashboardStats, TickerSummary};
use crate::ui::config::UI_CONFIG;
use crate::ui::styles::UiStyleExt;
use crate::utils::time_utils::pretty_date;

/// Things the dashboard can ask the app to do.
pub enum DashboardEvent {
    OpenTicker(String),
}

pub fn render_dashboard(
    ui: &mut Ui,
    summaries: &[TickerSummary],
    configured: &[&'static str],
) -> Option<DashboardEvent> {
    let mut event = None;
    let stats = DashboardStats::compute(summaries, configured.len());

    ScrollArea::vertical().show(ui, |ui| {
        render_header(ui);
        ui.add_space(16.0);
        render_stat_cards(ui, &stats);
        ui.add_space(16.0);
        render_configured_chips(ui, configured);
        ui.add_space(16.0);

        ui.label_section("Database Records");
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for summary in summaries {
                if ticker_card(ui, summary) {
                    event = Some(DashboardEvent::OpenTicker(summary.ticker.clone()));
                }
            }
        });

        ui.add_space(24.0);
        ui.separator();
        ui.vertical_centered(|ui| {
            ui.label_subdued("quant-crew © 2026 • Real-time market analytics");
        });
    });

    event
}

fn render_header(ui: &mut Ui) {
    ui.add_space(8.0);
    ui.heading(
        RichText::new("quant-crew")
            .color(UI_CONFIG.colors.primary)
            .strong(),
    );
    ui.label(
        RichText::new("Real-time market data monitoring & analytics")
            .color(UI_CONFIG.colors.subdued),
    );
}

fn render_stat_cards(ui: &mut Ui, stats: &DashboardStats) {
    let cards = [
        ("Configured Tickers", stats.configured_count.to_string()),
        ("Active in Database", stats.total_tickers.to_string()),
        ("Total Records", stats.total_records.to_string()),
        ("Last Updated", "Now".to_string()),
    ];

    ui.horizontal_wrapped(|ui| {
        for (label, value) in cards {
            card_frame().show(ui, |ui| {
                ui.set_min_width(150.0);
                ui.vertical(|ui| {
                    ui.label_section(label);
                    ui.value_strong(value, UI_CONFIG.colors.heading);
                });
            });
        }
    });
}

fn render_configured_chips(ui: &mut Ui, configured: &[&'static str]) {
    ui.label_section("Configured Tickers");
    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui| {
        for symbol in configured {
            let present = crate::data::is_in_catalog(symbol);
            let (mark, color) = if present {
                ("✔", UI_CONFIG.colors.accent)
            } else {
                ("○", UI_CONFIG.colors.subdued)
            };
            Frame::new()
                .fill(UI_CONFIG.colors.card)
                .stroke(Stroke::new(1.0, color.linear_multiply(0.4)))
                .corner_radius(CornerRadius::same(12))
                .inner_margin(Margin::symmetric(10, 4))
                .show(ui, |ui| {
                    ui.label(RichText::new(format!("{} {}", mark, symbol)).monospace().color(color));
                });
        }
    });
}

/// One catalog card. Returns true when clicked.
fn ticker_card(ui: &mut Ui, summary: &TickerSummary) -> bool {
    let response = card_frame()
        .show(ui, |ui| {
            ui.set_min_width(UI_CONFIG.card_min_width);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&summary.ticker)
                            .heading()
                            .monospace()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new("● LIVE").small().color(UI_CONFIG.colors.accent));
                    });
                });
                ui.add_space(6.0);

                ui.label_section("Records");
                ui.label(
                    RichText::new(summary.record_count.to_string())
                        .monospace()
                        .color(UI_CONFIG.colors.label),
                );
                ui.add_space(4.0);

                ui.label_section("Date Range");
                ui.label(
                    RichText::new(pretty_date(&summary.earliest_date))
                        .small()
                        .monospace()
                        .color(UI_CONFIG.colors.label),
                );
                ui.label(
                    RichText::new(format!("→ {}", pretty_date(&summary.latest_date)))
                        .small()
                        .monospace()
                        .color(UI_CONFIG.colors.subdued),
                );
                ui.add_space(4.0);

                ui.metric(
                    "Coverage",
                    &format!("{}% yearly", summary.yearly_coverage_pct()),
                    UI_CONFIG.colors.accent,
                );
            });
        })
        .response
        .interact(egui::Sense::click());

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response.clicked()
}

fn card_frame() -> Frame {
    Frame::new()
        .fill(UI_CONFIG.colors.card)
        .stroke(Stroke::new(1.0, UI_CONFIG.colors.card_border))
        .corner_radius(CornerRadius::same(UI_CONFIG.card_rounding))
        .inner_margin(Margin::same(12))
}
