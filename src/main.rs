use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ticker_wall::config::RotationConfig;
use ticker_wall::constants::FRAME_TIME;
use ticker_wall::engine::{Engine, EngineKind};
use ticker_wall::sink::{RenderSink, TracingSink};
use ticker_wall::symbol::Pool;
use ticker_wall::watchlist_loader::{load_watchlist, Watchlist};

#[derive(Parser, Debug)]
#[command(
    name = "ticker-wall",
    version,
    about = "Rotate a watchlist of chart symbols across a bounded display"
)]
struct Args {
    /// Watchlist file: comma or newline separated symbols, entries starting with `###` are skipped
    watchlist: PathBuf,

    /// Rotation strategy
    #[arg(short, long, value_enum, default_value_t = EngineKind::Crossfade)]
    engine: EngineKind,

    /// TOML file overriding the default timings and watchlist format
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Append a symbol after the file is imported (repeatable)
    #[arg(long = "add", value_name = "SYMBOL")]
    add: Vec<String>,

    /// Drop a symbol after the file is imported (repeatable)
    #[arg(long = "remove", value_name = "SYMBOL")]
    remove: Vec<String>,

    /// Stop after this many seconds
    #[arg(long, value_name = "SECS", value_parser = parse_run_for)]
    run_for: Option<Duration>,

    /// Advance time without sleeping, printing the rotation schedule
    #[arg(long, requires = "run_for")]
    simulate: bool,

    /// Open a window instead of logging to the terminal
    #[cfg(feature = "window")]
    #[arg(long, conflicts_with = "simulate")]
    window: bool,
}

fn parse_run_for(raw: &str) -> Result<Duration, String> {
    let secs: f32 = raw.parse().map_err(|e| format!("`{raw}` is not a number of seconds: {e}"))?;
    Duration::try_from_secs_f32(secs).map_err(|e| format!("`{raw}` is not a usable duration: {e}"))
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).with_target(false).init();
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RotationConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RotationConfig::default(),
    };

    // --- Load Watchlist ---
    let mut watchlist = load_watchlist(&args.watchlist, &config.watchlist)
        .with_context(|| format!("Failed to load watchlist {}", args.watchlist.display()))?;
    for symbol in &args.add {
        if !watchlist.add(symbol) {
            warn!(symbol = %symbol, "Not added: blank or already in the watchlist");
        }
    }
    for symbol in &args.remove {
        if !watchlist.remove(symbol) {
            warn!(symbol = %symbol, "Not removed: not in the watchlist");
        }
    }

    let pool = activate(watchlist, &config)?;

    let engine = args.engine.build(&config);
    let run_for = args.run_for;

    #[cfg(feature = "window")]
    if args.window {
        return ticker_wall::window::run(engine, args.engine, pool, run_for);
    }

    let mut engine = engine;
    let mut sink = TracingSink;
    engine.initialize(pool, &mut sink)?;
    run_headless(engine.as_mut(), &mut sink, run_for, args.simulate)
}

fn activate(watchlist: Watchlist, config: &RotationConfig) -> Result<Pool> {
    watchlist
        .into_pool(config.watchlist.min_symbols)
        .context("Load rejected, rotation not started")
}

/// Drives the engine at a fixed frame rate until `run_for` elapses (or forever).
fn run_headless(
    engine: &mut dyn Engine,
    sink: &mut dyn RenderSink,
    run_for: Option<Duration>,
    simulate: bool,
) -> Result<()> {
    let frame = Duration::from_secs_f32(FRAME_TIME);
    let mut elapsed = Duration::ZERO;
    let mut cycles = 0;

    info!(engine = engine.name(), simulate, "Rotation running");
    while run_for.is_none_or(|limit| elapsed < limit) {
        if !simulate {
            thread::sleep(frame);
        }
        cycles += engine.update(frame, sink)?;
        elapsed += frame;
    }

    engine.teardown();
    info!(cycles, elapsed_secs = elapsed.as_secs_f32(), "Rotation stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_for_accepts_fractional_seconds() {
        assert_eq!(parse_run_for("1.5"), Ok(Duration::from_millis(1500)));
        assert_eq!(parse_run_for("0"), Ok(Duration::ZERO));
    }

    #[test]
    fn run_for_rejects_unusable_values() {
        for raw in ["inf", "-1", "NaN", "abc", ""] {
            assert!(parse_run_for(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn bad_run_for_is_a_usage_error() {
        for raw in ["--run-for=inf", "--run-for=-1"] {
            let err = Args::try_parse_from(["ticker-wall", "list.txt", raw, "--simulate"]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        }

        let args = Args::try_parse_from(["ticker-wall", "list.txt", "--run-for", "30"]).unwrap();
        assert_eq!(args.run_for, Some(Duration::from_secs(30)));
    }

    #[test]
    fn short_watchlist_error_names_the_cause() {
        let config = RotationConfig::default();
        let watchlist = Watchlist::parse("A,B,C", &config.watchlist);
        let err = activate(watchlist, &config).unwrap_err();

        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        assert_eq!(
            chain,
            vec![
                "Load rejected, rotation not started".to_string(),
                "watchlist holds 3 symbols, at least 6 are required".to_string(),
            ]
        );
    }
}
