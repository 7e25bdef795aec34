use eframe::egui::{
    Align2, CornerRadius, FontId, Id, LayerId, Order::Tooltip, Pos2, RichText, Sense, Shape,
    Stroke, Ui,
};

#[allow(deprecated)]
use eframe::egui::show_tooltip_at_pointer;

use crate::chart::{
    render_with_domain, AxisDomain, PlotArea, PriceScale, TooltipSummary,
};
use crate::config::plot::PLOT_CONFIG;
use crate::domain::{Direction, OhlcBar};
use crate::ui::config::UI_CONFIG;
use crate::utils::time_utils::month_day_label;

// Gutters around the plot area: dollar labels on the right, dates below
const RIGHT_GUTTER: f32 = 64.0;
const BOTTOM_GUTTER: f32 = 22.0;
const INNER_MARGIN: f32 = 8.0;

/// Paints a full candlestick chart (grid, axes, candles, hover tooltip) into
/// whatever space the parent gives us. All geometry comes from `chart::`.
pub fn show_candlestick_chart(ui: &mut Ui, bars: &[OhlcBar]) {
    if bars.is_empty() {
        ui.label(RichText::new("No data").color(UI_CONFIG.colors.subdued));
        return;
    }

    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let rect = response.rect;

    let area = PlotArea::new(
        rect.left() + INNER_MARGIN,
        rect.top() + INNER_MARGIN,
        rect.width() - RIGHT_GUTTER - INNER_MARGIN,
        rect.height() - BOTTOM_GUTTER - INNER_MARGIN,
    );
    // Collapsed layout: defined no-draw rather than a guessed default size
    if area.is_empty() {
        return;
    }

    let domain = AxisDomain::from_bars(bars);
    let scale = PriceScale::new(domain, &area);

    draw_y_axis(&painter, &area, &domain, &scale);
    draw_x_axis(&painter, &area, bars);
    draw_midline(&painter, &area, &domain, &scale);
    draw_legend(&painter, &area);

    for geom in render_with_domain(bars, &area, domain) {
        let color = direction_color(geom.direction);

        painter.line_segment(
            [
                Pos2::new(geom.wick.x, geom.wick.y1),
                Pos2::new(geom.wick.x, geom.wick.y2),
            ],
            Stroke::new(PLOT_CONFIG.wick_width, color),
        );

        let body = eframe::egui::Rect::from_min_size(
            Pos2::new(geom.body.x, geom.body.y_top),
            eframe::egui::Vec2::new(geom.body.width, geom.body.height),
        );
        painter.rect_filled(body, CornerRadius::ZERO, color);
    }

    if let Some(pointer) = response.hover_pos() {
        show_bar_tooltip(ui, &area, bars, pointer);
    }
}

fn draw_y_axis(
    painter: &eframe::egui::Painter,
    area: &PlotArea,
    domain: &AxisDomain,
    scale: &PriceScale,
) {
    for tick in domain.ticks(PLOT_CONFIG.y_axis_divisions) {
        let y = scale.y(tick);
        painter.line_segment(
            [
                Pos2::new(area.x, y),
                Pos2::new(area.x + area.width, y),
            ],
            Stroke::new(0.5, PLOT_CONFIG.grid_color),
        );
        painter.text(
            Pos2::new(area.x + area.width + 6.0, y),
            Align2::LEFT_CENTER,
            format!("${:.0}", tick),
            FontId::monospace(10.0),
            PLOT_CONFIG.axis_label_color,
        );
    }
}

fn draw_x_axis(painter: &eframe::egui::Painter, area: &PlotArea, bars: &[OhlcBar]) {
    let column_width = area.width / bars.len() as f32;
    // Evenly spaced date labels, always keeping the first and last bar
    let step = ((bars.len() - 1) / (PLOT_CONFIG.x_axis_labels - 1)).max(1);

    let mut index = 0;
    while index < bars.len() {
        draw_date_label(painter, area, bars, column_width, index);
        index += step;
    }
    if (bars.len() - 1) % step != 0 {
        draw_date_label(painter, area, bars, column_width, bars.len() - 1);
    }
}

fn draw_date_label(
    painter: &eframe::egui::Painter,
    area: &PlotArea,
    bars: &[OhlcBar],
    column_width: f32,
    index: usize,
) {
    let x = area.x + (index as f32 + 0.5) * column_width;
    painter.text(
        Pos2::new(x, area.y + area.height + 4.0),
        Align2::CENTER_TOP,
        month_day_label(&bars[index].date),
        FontId::monospace(10.0),
        PLOT_CONFIG.axis_label_color,
    );
}

fn draw_midline(
    painter: &eframe::egui::Painter,
    area: &PlotArea,
    domain: &AxisDomain,
    scale: &PriceScale,
) {
    let y = scale.y(domain.mid_price());
    painter.extend(Shape::dashed_line(
        &[
            Pos2::new(area.x, y),
            Pos2::new(area.x + area.width, y),
        ],
        Stroke::new(0.5, PLOT_CONFIG.grid_color),
        3.0,
        3.0,
    ));
}

fn draw_legend(painter: &eframe::egui::Painter, area: &PlotArea) {
    use strum::IntoEnumIterator;

    let mut x = area.x + 4.0;
    for direction in Direction::iter() {
        let color = direction_color(direction);
        let swatch = eframe::egui::Rect::from_min_size(
            Pos2::new(x, area.y + 4.0),
            eframe::egui::Vec2::splat(9.0),
        );
        painter.rect_filled(swatch, CornerRadius::ZERO, color);
        let label_rect = painter.text(
            Pos2::new(swatch.right() + 4.0, swatch.center().y),
            Align2::LEFT_CENTER,
            direction.to_string(),
            FontId::monospace(10.0),
            PLOT_CONFIG.axis_label_color,
        );
        x = label_rect.right() + 12.0;
    }
}

fn direction_color(direction: Direction) -> eframe::egui::Color32 {
    match direction {
        Direction::Up => PLOT_CONFIG.up_color,
        Direction::Down => PLOT_CONFIG.down_color,
    }
}

fn show_bar_tooltip(ui: &Ui, area: &PlotArea, bars: &[OhlcBar], pointer: Pos2) {
    if pointer.x < area.x || pointer.x > area.x + area.width {
        return;
    }
    if pointer.y < area.y || pointer.y > area.y + area.height {
        return;
    }

    let column_width = area.width / bars.len() as f32;
    let index = (((pointer.x - area.x) / column_width) as usize).min(bars.len() - 1);
    let summary = TooltipSummary::for_bar(&bars[index]);

    let close_color = direction_color(summary.direction);

    let tooltip_layer = LayerId::new(Tooltip, Id::new("chart_tooltips"));

    #[allow(deprecated)]
    show_tooltip_at_pointer(
        ui.ctx(),
        tooltip_layer,
        Id::new(format!("tooltip_{}", summary.date)),
        |ui: &mut Ui| {
            ui.label(
                RichText::new(&summary.date)
                    .monospace()
                    .color(UI_CONFIG.colors.subdued),
            );
            ui.separator();
            ui.label(format!("Open:   {}", summary.open));
            ui.label(RichText::new(format!("High:   {}", summary.high)).color(PLOT_CONFIG.up_color));
            ui.label(RichText::new(format!("Low:    {}", summary.low)).color(PLOT_CONFIG.down_color));
            ui.label(RichText::new(format!("Close:  {}", summary.close)).color(close_color));
            ui.label(format!("Volume: {}", summary.volume));
        },
    );
}
