// Domain types and value objects
pub mod ohlc;

// Re-export commonly used types
pub use ohlc::{Direction, OhlcBar};
