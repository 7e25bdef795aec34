//! OHLC-to-geometry renderer: pure mapping from bar sequences and a plot
//! rectangle to drawing primitives, plus tooltip formatting. No egui types in
//! any signature; the view layer owns actual painting.

pub mod axis;
pub mod geometry;
pub mod tooltip;

// Re-export the public contract
pub use axis::AxisDomain;
pub use geometry::{render, render_with_domain, Body, CandleGeometry, PlotArea, PriceScale, Wick};
pub use tooltip::{format_change, format_price, format_volume, TooltipSummary};
