use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use drop_four::config::AppConfig;
use drop_four::logging::{self, LogTarget};
use drop_four::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "drop_four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "drop_four.toml")]
    config: PathBuf,

    /// Override the delay between animation steps, in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = AppConfig::load_if_present(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let config_found = loaded.is_some();
    let mut config = loaded.unwrap_or_default();

    // Apply CLI overrides
    if let Some(tick_ms) = cli.tick_ms {
        config.animation.tick_interval_ms = tick_ms;
    }
    if let Some(log_file) = cli.log_file {
        config.logging.file = Some(log_file);
    }
    config.validate().context("invalid configuration")?;

    if let Some(path) = &config.logging.file {
        logging::init(&config.logging.level, LogTarget::File(path.clone()))
            .context("setting up logging")?;
    }
    info!(tick_ms = config.animation.tick_interval_ms, "starting game");

    let notice = if config_found {
        None
    } else {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
        Some(format!("No {} found, using defaults", cli.config.display()))
    };

    run(&config, notice).context("terminal error")
}

fn run(config: &AppConfig, notice: Option<String>) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    if let Some(notice) = notice {
        app.show_message(notice);
    }
    let res = app.run(&mut terminal);

    // Restore terminal even if the app returned an error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
