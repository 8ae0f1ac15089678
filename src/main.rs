use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use wrap_snake::game::GameConfig;
use wrap_snake::modes::HumanMode;
use wrap_snake::store::{FileScoreStore, MemoryScoreStore, ScoreStore};

#[derive(Parser)]
#[command(name = "wrap_snake")]
#[command(version, about = "Snake on a wraparound grid")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cells per side of the square grid
    #[arg(long, conflicts_with = "canvas_size")]
    grid_size: Option<usize>,

    /// Canvas size in pixels; the grid size is canvas / cell size
    #[arg(long)]
    canvas_size: Option<usize>,

    /// Cell size in pixels, used with --canvas-size
    #[arg(long, default_value = "20")]
    cell_size: usize,

    /// Milliseconds between ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Where the best score is kept
    #[arg(long, default_value = "snake_scores.json")]
    score_file: PathBuf,

    /// Keep the best score in memory only
    #[arg(long)]
    no_persist: bool,

    /// Append logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Defaults, then the config file, then command-line flags
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("Failed to load config from {:?}", path))?,
            None => GameConfig::default(),
        };

        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        } else if let Some(canvas_size) = self.canvas_size {
            config.grid_size = GameConfig::from_canvas(canvas_size, self.cell_size)?.grid_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }

    fn score_store(&self) -> Box<dyn ScoreStore> {
        if self.no_persist {
            Box::new(MemoryScoreStore::new())
        } else {
            Box::new(FileScoreStore::new(&self.score_file))
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    wrap_snake::logging::init(cli.log_file.as_deref())?;

    let config = cli.game_config()?;
    tracing::info!(?config, "starting");

    let mut human_mode = HumanMode::new(config, cli.score_store())?;
    human_mode.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wrap_snake").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).game_config().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_canvas_derives_grid() {
        let config = parse(&["--canvas-size", "300", "--cell-size", "15"])
            .game_config()
            .unwrap();
        assert_eq!(config.grid_size, 20);
    }

    #[test]
    fn test_grid_and_canvas_conflict() {
        let result = Cli::try_parse_from(["wrap_snake", "--grid-size", "10", "--canvas-size", "400"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"grid_size": 12, "tick_interval_ms": 90}}"#).unwrap();
        let path = file.path().to_str().unwrap();

        let config = parse(&["--config", path, "--tick-ms", "200", "--seed", "3"])
            .game_config()
            .unwrap();
        assert_eq!(config.grid_size, 12);
        assert_eq!(config.tick_interval_ms, 200);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_invalid_grid_rejected() {
        assert!(parse(&["--grid-size", "2"]).game_config().is_err());
        assert!(parse(&["--canvas-size", "400", "--cell-size", "0"]).game_config().is_err());
    }

    #[test]
    fn test_oversized_grid_rejected() {
        assert!(parse(&["--grid-size", "256"]).game_config().is_ok());
        assert!(parse(&["--grid-size", "257"]).game_config().is_err());
        assert!(parse(&["--grid-size", "100000"]).game_config().is_err());
        assert!(parse(&["--canvas-size", "100000", "--cell-size", "1"]).game_config().is_err());
    }
}
