use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ook_engine::legality::perft;
use ook_engine::{Engine, EngineConfig, Game, Strategy};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Replay a game and let the engine answer
#[derive(Debug, Parser)]
#[command(name = "ookchess", version, about)]
struct Cli {
    /// Moves in algebraic notation, played from the starting position
    moves: Vec<String>,

    /// Engine settings as JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum search depth
    #[arg(long)]
    depth: Option<u32>,

    /// Time budget per move in milliseconds
    #[arg(long = "time-ms")]
    time_ms: Option<u64>,

    /// Never consult the opening book
    #[arg(long)]
    no_book: bool,

    /// Seed for book and random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Play uniformly random legal moves instead of searching
    #[arg(long)]
    random: bool,

    /// Number of engine moves to play
    #[arg(long, default_value_t = 1)]
    plies: u32,

    /// Count leaf nodes of the replayed position to this depth and exit
    #[arg(long)]
    perft: Option<u32>,
}

impl Cli {
    fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                EngineConfig::from_json_str(&text)?
            }
            None => EngineConfig::default(),
        };
        if let Some(depth) = self.depth {
            config.max_depth = depth;
        }
        if let Some(time_ms) = self.time_ms {
            config.time_budget_ms = time_ms;
        }
        if self.no_book {
            config.use_book = false;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.random {
            config.strategy = Strategy::Random;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let game = Game::from_moves(cli.moves.iter().map(String::as_str)).context("replaying moves")?;
    info!("[GAME] replayed {} moves", game.history().len());

    if let Some(depth) = cli.perft {
        let mut board = game.board().clone();
        let nodes = perft(&mut board, game.side_to_move(), game.last_moved(), depth);
        println!("perft({}) = {}", depth, nodes);
        return Ok(());
    }

    let config = cli.engine_config()?;
    info!("[ENGINE] config {}", config.to_json_string()?);
    let mut engine = Engine::new(config)?;

    let mut game = game;
    for _ in 0..cli.plies {
        if game.is_over() {
            break;
        }
        let reply = engine.play(&mut game)?;
        match reply.score {
            Some(score) => println!(
                "{} ({:?}, score {}, depth {}, {} nodes)",
                reply.san, reply.source, score, reply.depth, reply.nodes
            ),
            None => println!("{} ({:?})", reply.san, reply.source),
        }
    }

    println!();
    println!("{}", game.board());
    println!("{}", game.transcript());
    if game.is_over() {
        println!("{:?}", game.status());
    }
    Ok(())
}
