use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use tracing::info;

use candlegen::catalog::Source;
use candlegen::position::{DEFAULT_CENTER, DEFAULT_SPREAD};
use candlegen::timestamp::SystemClock;
use candlegen::{Catalog, GenerateConfig, Position, PositionMode, WorldBounds};

#[derive(Parser)]
#[command(
    name = "candlegen",
    about = "Generate a CSV of random candles for bulk import",
    version
)]
struct Cli {
    /// Number of candles to generate
    #[arg(long, default_value_t = 1000)]
    count: u64,

    /// Output CSV file, or `-` for stdout
    #[arg(short, long, default_value = "candles_import.csv")]
    output: String,

    /// Generate timestamps within the last N days
    #[arg(long, default_value_t = 30)]
    days_back: u32,

    /// Center latitude for position generation (default: Washington, DC)
    #[arg(long, default_value_t = DEFAULT_CENTER.lat, allow_negative_numbers = true)]
    center_lat: f64,

    /// Center longitude for position generation (default: Washington, DC)
    #[arg(long, default_value_t = DEFAULT_CENTER.lng, allow_negative_numbers = true)]
    center_lng: f64,

    /// Spread radius in degrees from the center
    #[arg(long, default_value_t = DEFAULT_SPREAD)]
    spread: f64,

    /// Sample positions uniformly over the whole world; ignores center and spread
    #[arg(long)]
    worldwide: bool,

    /// With --worldwide, limit latitude to the Web Mercator range (about ±85.05);
    /// ignored otherwise
    #[arg(long)]
    web_mercator: bool,

    /// Emotion taxonomy JSON (category -> subcategory -> [emotion]); a built-in
    /// list is used if the file does not exist
    #[arg(long, default_value = candlegen::catalog::DEFAULT_PATH)]
    emotions: PathBuf,

    /// Seed for the random generator, for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mode = if cli.worldwide {
        PositionMode::Worldwide(if cli.web_mercator {
            WorldBounds::WebMercator
        } else {
            WorldBounds::Geographic
        })
    } else {
        PositionMode::Centered {
            center: Position::new(cli.center_lat, cli.center_lng),
            spread: cli.spread,
        }
    };
    let config = GenerateConfig {
        count: cli.count,
        days_back: cli.days_back,
        mode,
    };

    let catalog = Catalog::load(&cli.emotions)?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!("generating {} candles", config.count);
    match catalog.source() {
        Source::File => info!(
            "using {} emotions from {}",
            catalog.len(),
            cli.emotions.display()
        ),
        Source::Fallback => info!("using {} emotions from the built-in list", catalog.len()),
    }
    info!("output: {}", cli.output);
    info!("mode: {}", config.mode);

    let summary = if candlegen::is_stdout(&cli.output) {
        let stdout = io::stdout().lock();
        let mut out = BufWriter::with_capacity(128 * 1024, stdout);
        let summary = candlegen::generate(&config, &catalog, &SystemClock, &mut rng, &mut out)?;
        out.flush()?;
        summary
    } else {
        let file = File::create(&cli.output)
            .with_context(|| format!("failed to create output file: {}", cli.output))?;
        let mut out = BufWriter::with_capacity(128 * 1024, file);
        let summary = candlegen::generate(&config, &catalog, &SystemClock, &mut rng, &mut out)?;
        out.flush()
            .with_context(|| format!("failed to write output file: {}", cli.output))?;
        summary
    };

    info!(
        "successfully generated {} candles in {} ({} distinct labels available)",
        summary.rows, cli.output, summary.catalog_len
    );

    Ok(())
}
