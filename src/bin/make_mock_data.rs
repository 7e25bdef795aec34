//! Dumps the generated OHLC series for one or all configured tickers as JSON,
//! so the walk can be inspected (or diffed across seeds) without the GUI.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use tickerboard::config::TICKERS;
use tickerboard::data::generate_ohlc;

#[derive(Parser, Debug)]
#[command(author, version, about = "Dump mock OHLC series as JSON")]
struct Args {
    /// Ticker symbol to dump; omit to dump every configured ticker
    #[arg(long)]
    ticker: Option<String>,

    /// Seed for the random walk
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Days of history
    #[arg(long, default_value_t = TICKERS.history_days)]
    days: usize,

    /// Write here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let symbols: Vec<String> = match &args.ticker {
        Some(symbol) => vec![symbol.clone()],
        None => TICKERS.symbols().map(String::from).collect(),
    };

    let mut dump = serde_json::Map::new();
    for symbol in &symbols {
        let bars = generate_ohlc(symbol, args.seed, args.days);
        dump.insert(symbol.clone(), serde_json::to_value(bars)?);
    }
    let json = serde_json::to_string_pretty(&dump)?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write {:?}", path))?;
            println!("Wrote {} series to {:?}", symbols.len(), path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
