use crate::chart::axis::AxisDomain;
use crate::config::plot::PLOT_CONFIG;
use crate::domain::{Direction, OhlcBar};

/// Pixel rectangle available for plotting, in screen coordinates (y grows down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PlotArea {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        PlotArea {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Linear, inverted price-to-pixel mapping over a plot area.
/// Higher price, smaller y. A flat domain maps everything to the midline.
#[derive(Debug, Clone, Copy)]
pub struct PriceScale {
    domain: AxisDomain,
    area_y: f32,
    area_height: f32,
}

impl PriceScale {
    pub fn new(domain: AxisDomain, area: &PlotArea) -> Self {
        PriceScale {
            domain,
            area_y: area.y,
            area_height: area.height,
        }
    }

    pub fn y(&self, price: f64) -> f32 {
        let span = self.domain.span();
        if span == 0.0 {
            // Flat series: every price sits on the vertical center
            return self.area_y + self.area_height / 2.0;
        }
        let ratio = (self.domain.max_price - price) / span;
        self.area_y + (ratio as f32) * self.area_height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wick {
    pub x: f32,
    pub y1: f32,
    pub y2: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub x: f32,
    pub y_top: f32,
    pub height: f32,
    pub width: f32,
}

/// Drawing primitives for one bar. Recomputed every render pass; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandleGeometry {
    pub wick: Wick,
    pub body: Body,
    pub direction: Direction,
}

/// Map an ordered bar sequence onto `area`, one geometry record per bar in
/// input order. Pure: identical inputs always yield identical output.
///
/// Malformed bars (e.g. `high < low`) are not validated; the formulas are
/// applied as-is and may yield inverted wicks, but never a panic.
pub fn render(bars: &[OhlcBar], area: &PlotArea) -> Vec<CandleGeometry> {
    let domain = AxisDomain::from_bars(bars);
    render_with_domain(bars, area, domain)
}

/// Same as [`render`] but with a caller-supplied domain, so the view layer
/// can share one domain between candles, gridlines and axis labels.
pub fn render_with_domain(
    bars: &[OhlcBar],
    area: &PlotArea,
    domain: AxisDomain,
) -> Vec<CandleGeometry> {
    let scale = PriceScale::new(domain, area);
    let column_width = area.width / bars.len() as f32;

    bars.iter()
        .enumerate()
        .map(|(i, bar)| candle_geometry(bar, &scale, area.x, column_width, i))
        .collect()
}

fn candle_geometry(
    bar: &OhlcBar,
    scale: &PriceScale,
    area_x: f32,
    column_width: f32,
    index: usize,
) -> CandleGeometry {
    let center_x = area_x + (index as f32 + 0.5) * column_width;

    let open_y = scale.y(bar.open);
    let close_y = scale.y(bar.close);

    // A doji still gets a visible 1px body; very narrow columns keep a 2px body
    let body_width = (column_width * PLOT_CONFIG.body_width_ratio).max(PLOT_CONFIG.min_body_width);
    let body_height = (close_y - open_y).abs().max(PLOT_CONFIG.min_body_height);

    CandleGeometry {
        wick: Wick {
            x: center_x,
            y1: scale.y(bar.high),
            y2: scale.y(bar.low),
        },
        body: Body {
            x: center_x - body_width / 2.0,
            y_top: open_y.min(close_y),
            height: body_height,
            width: body_width,
        },
        direction: bar.direction(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: PlotArea = PlotArea {
        x: 0.0,
        y: 0.0,
        width: 600.0,
        height: 400.0,
    };

    fn bar(open: f64, high: f64, low: f64, close: f64) -> OhlcBar {
        OhlcBar::new("2025-01-13", open, high, low, close, 5_000_000)
    }

    #[test]
    fn test_axis_inversion_preserved() {
        let bars = vec![bar(110.0, 150.0, 100.0, 140.0), bar(140.0, 160.0, 120.0, 125.0)];
        let domain = AxisDomain::from_bars(&bars);
        let scale = PriceScale::new(domain, &AREA);

        for b in &bars {
            let high_y = scale.y(b.high);
            let low_y = scale.y(b.low);
            assert!(high_y <= scale.y(b.open));
            assert!(high_y <= scale.y(b.close));
            assert!(low_y >= scale.y(b.open));
            assert!(low_y >= scale.y(b.close));
        }
    }

    #[test]
    fn test_doji_body_keeps_one_pixel() {
        let bars = vec![bar(100.0, 105.0, 95.0, 100.0)];
        let geoms = render(&bars, &AREA);
        assert_eq!(geoms.len(), 1);
        assert!((geoms[0].body.height - 1.0).abs() < f32::EPSILON);
        assert_eq!(geoms[0].direction, Direction::Up);
    }

    #[test]
    fn test_body_width_scaling_and_floor() {
        // column width -> expected body width: max(0.8 * w, 2.0)
        for (column_width, expected) in [(1.0f32, 2.0f32), (2.0, 2.0), (10.0, 8.0), (100.0, 80.0)] {
            let n = (AREA.width / column_width) as usize;
            let bars: Vec<OhlcBar> = (0..n).map(|_| bar(100.0, 110.0, 90.0, 105.0)).collect();
            let geoms = render(&bars, &AREA);
            for g in &geoms {
                assert!(
                    (g.body.width - expected).abs() < 1e-3,
                    "column {} gave body width {}",
                    column_width,
                    g.body.width
                );
            }
        }
    }

    #[test]
    fn test_flat_series_maps_to_midline() {
        let bars: Vec<OhlcBar> = (0..5).map(|_| bar(100.0, 100.0, 100.0, 100.0)).collect();
        let geoms = render(&bars, &AREA);
        let midline = AREA.y + AREA.height / 2.0;
        for g in &geoms {
            assert!((g.wick.y1 - midline).abs() < f32::EPSILON);
            assert!((g.wick.y2 - midline).abs() < f32::EPSILON);
            assert!((g.body.y_top - midline).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_wick_centered_in_column() {
        let bars: Vec<OhlcBar> = (0..3).map(|_| bar(100.0, 110.0, 90.0, 105.0)).collect();
        let geoms = render(&bars, &AREA);
        let column = AREA.width / 3.0;
        for (i, g) in geoms.iter().enumerate() {
            let expected = AREA.x + (i as f32 + 0.5) * column;
            assert!((g.wick.x - expected).abs() < 1e-3);
            // body is centered on the wick
            assert!((g.body.x + g.body.width / 2.0 - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn test_geometry_matches_mapping_formula() {
        let bars = vec![bar(120.0, 150.0, 100.0, 130.0)];
        // Domain [100, 150] pads to [95, 155], span 60
        let geoms = render(&bars, &AREA);
        let y = |price: f64| AREA.y + ((155.0 - price) / 60.0) as f32 * AREA.height;

        let g = &geoms[0];
        assert!((g.wick.y1 - y(150.0)).abs() < 1e-3);
        assert!((g.wick.y2 - y(100.0)).abs() < 1e-3);
        assert!((g.body.y_top - y(130.0)).abs() < 1e-3);
        assert!((g.body.height - (y(120.0) - y(130.0))).abs() < 1e-3);
    }

    #[test]
    fn test_malformed_bar_does_not_panic() {
        // high below low: degenerate but defined output, no validation
        let bars = vec![bar(100.0, 90.0, 110.0, 100.0)];
        let geoms = render(&bars, &AREA);
        let g = &geoms[0];
        assert!(g.wick.y1.is_finite() && g.wick.y2.is_finite());
        assert!(g.body.y_top.is_finite() && g.body.height >= 1.0);
    }
}
