use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::{
    ConfigFallback, DEFAULT_HEIGHT, DEFAULT_WIDTH, FoodPlacement, GameOverNotice, SelfCollision,
    StartupValues,
};
use grid_snake::modes::HumanMode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Single-player Snake in the terminal")]
struct Cli {
    /// Grid width in cells (asked for on stdin when no size or level is given)
    #[arg(long, allow_negative_numbers = true)]
    width: Option<i64>,

    /// Grid height in cells
    #[arg(long, allow_negative_numbers = true)]
    height: Option<i64>,

    /// Speed level: 0 = easy, 1 = medium, 2 = hard
    #[arg(long, allow_negative_numbers = true)]
    level: Option<i64>,

    /// Whether the tail cell counts as solid while it moves away
    #[arg(long, value_enum, default_value_t = SelfCollision::Body)]
    self_collision: SelfCollision,

    /// Where food may appear
    #[arg(long, value_enum, default_value_t = FoodPlacement::Anywhere)]
    food: FoodPlacement,

    /// How the end of a round is shown
    #[arg(long, value_enum, default_value_t = GameOverNotice::Inline)]
    notice: GameOverNotice,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let (startup, fallbacks) = match (cli.width, cli.height, cli.level) {
        (None, None, None) => prompt_startup_values()?,
        (width, height, level) => StartupValues::resolve(
            width.unwrap_or(DEFAULT_WIDTH as i64),
            height.unwrap_or(DEFAULT_HEIGHT as i64),
            level.unwrap_or(0),
        ),
    };
    report_fallbacks(&fallbacks);

    let config = startup
        .into_config()
        .with_self_collision(cli.self_collision)
        .with_food_placement(cli.food)
        .with_notice(cli.notice);

    let mut human_mode = HumanMode::new(config).with_seed(cli.seed);
    human_mode.run().await?;

    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn prompt_startup_values() -> Result<(StartupValues, Vec<ConfigFallback>)> {
    print!(
        "Enter the width, height, and level (0=EASY, 1=MEDIUM, 2=HARD) separated by spaces \
         (press Enter for defaults {DEFAULT_WIDTH} {DEFAULT_HEIGHT} 0): "
    );
    io::stdout().flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read startup values")?;

    Ok(StartupValues::parse_line(&line))
}

fn report_fallbacks(fallbacks: &[ConfigFallback]) {
    for fallback in fallbacks {
        println!("{fallback}");
        warn!(%fallback, "startup value replaced");
    }
}
