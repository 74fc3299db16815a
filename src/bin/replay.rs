use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use drop_four::game::{BoardStatus, GameState};
use drop_four::logging::{self, LogTarget};
use drop_four::replay::{replay, ReplayOptions};

/// Replay a script of Connect Four actions and print the final state.
#[derive(Parser)]
#[command(name = "replay", about = "Replay Connect Four actions from a JSON-lines script")]
struct Cli {
    /// Script to read, one JSON action per line; stdin when omitted
    script: Option<PathBuf>,

    /// Tick each dropped piece to rest right after it is selected
    #[arg(long)]
    settle: bool,

    /// Log level for progress written to stderr
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level, LogTarget::Stderr).context("setting up logging")?;

    let options = ReplayOptions {
        settle: cli.settle,
    };
    let state = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening script {}", path.display()))?;
            replay(BufReader::new(file), options)
                .with_context(|| format!("replaying {}", path.display()))?
        }
        None => replay(io::stdin().lock(), options).context("replaying stdin")?,
    };

    print_state(&state);
    Ok(())
}

fn print_state(state: &GameState) {
    println!("{}", state.board());
    let status = match state.status() {
        BoardStatus::Idle => "idle",
        BoardStatus::PieceFalling => "piece falling",
        BoardStatus::RedWins => "red wins",
        BoardStatus::YellowWins => "yellow wins",
        BoardStatus::Tie => "tie",
    };
    println!("status: {status}");
    println!("active player: {}", state.active_player());
    if let Some(cell) = state.active_cell() {
        println!("falling piece: row {}, column {}", cell.row, cell.column);
    }
}
