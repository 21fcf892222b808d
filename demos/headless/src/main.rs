//! headless — run a Rock/Paper/Scissors swarm to completion without a screen.
//!
//! ```text
//! headless [CONFIG.toml] [OUTPUT_DIR]
//! ```
//!
//! Without a config file the default run is used (20 sprites per kind on a
//! 1080×1920 surface, speed 2, random seed).  The loop runs on its own thread;
//! the main thread prints a text score bar from the published frames until a
//! kind has absorbed everyone.  Set `RUST_LOG=debug` to see every conversion.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::info;

use rps_core::{Kind, SimConfig, Tick};
use rps_output::{CONVERSIONS_FILE, CENSUS_FILE, CsvWriter, SimOutputObserver};
use rps_sim::{Frame, HeadlessHost, SimBuilder, SimObserver, TickReport};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_OUTPUT_DIR: &str = "output/headless";
const PROGRESS_INTERVAL:  Duration = Duration::from_millis(500);
const BAR_COLUMNS:        usize = 60;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Wraps the CSV observer and counts rows for the summary.
struct CountingObserver<O: SimObserver> {
    inner:       O,
    ticks:       u64,
    conversions: u64,
}

impl<O: SimObserver> SimObserver for CountingObserver<O> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        self.ticks += 1;
        self.conversions += report.conversions.len() as u64;
        self.inner.on_tick_end(report);
    }

    fn on_winner(&mut self, tick: Tick, winner: Kind) {
        self.inner.on_winner(tick, winner);
    }

    fn on_sim_end(&mut self, final_tick: Tick, winner: Option<Kind>) {
        self.inner.on_sim_end(final_tick, winner);
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: SimConfig =
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

/// One-line text rendering of the score bars.
fn text_bar(frame: &Frame) -> String {
    let glyph = |k: Kind| match k {
        Kind::Rock     => 'R',
        Kind::Paper    => 'P',
        Kind::Scissors => 'S',
    };
    let scale = BAR_COLUMNS as f32 / frame.arena.width as f32;
    let mut out = String::with_capacity(BAR_COLUMNS);
    for bar in frame.score_bars() {
        let cols = (bar.width() * scale).round() as usize;
        out.extend(std::iter::repeat_n(glyph(bar.kind), cols));
    }
    out
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args.next().map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

    let config = load_config(config_path.as_deref())?;
    let seed = config.resolve_seed();
    let arena = config.arena();
    println!("=== headless rock/paper/scissors ===");
    println!(
        "{} sprites per kind, speed {}, arena {}, sprite size {}, seed {}",
        config.group_size,
        config.speed,
        arena,
        arena.sprite_size(config.group_size),
        seed
    );

    let sim = SimBuilder::new(config, HeadlessHost::default()).seed(seed).build()?;

    let writer = CsvWriter::new(&output_dir)?;
    let obs = CountingObserver { inner: SimOutputObserver::new(writer), ticks: 0, conversions: 0 };

    let t0 = Instant::now();
    let handle = sim.spawn(obs);
    while handle.is_running() {
        thread::sleep(PROGRESS_INTERVAL);
        if let Some(frame) = handle.latest_frame() {
            println!("{:>8}  {}  {:?}", frame.tick, text_bar(&frame), frame.counts);
        }
    }
    let mut outcome = handle.join()?;
    let elapsed = t0.elapsed();

    if let Some(e) = outcome.observer.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!();
    match outcome.winner {
        Some(winner) => println!("{}", winner.winner_message()),
        None => println!("Stopped without a winner."),
    }
    info!(ticks = outcome.ticks.0, frames = outcome.host.frames_drawn, "run finished");
    println!("Run complete in {:.3} s ({} ticks)", elapsed.as_secs_f64(), outcome.ticks.0);
    println!("  {:<16}: {} rows", CENSUS_FILE, outcome.observer.ticks);
    println!("  {:<16}: {} rows", CONVERSIONS_FILE, outcome.observer.conversions);
    println!("  output dir      : {}", output_dir.display());
    debug_assert_eq!(outcome.host.winner, outcome.winner);
    Ok(())
}
