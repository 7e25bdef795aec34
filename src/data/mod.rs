// Client-side data sources: hard-coded catalog + seeded mock OHLC generation
pub mod catalog;
pub mod mock;

pub use catalog::{configured_symbols, is_in_catalog, ticker_summaries};
pub use mock::generate_ohlc;
