use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use burger_stacker::config::GameConfig;
use burger_stacker::game::Session;
use burger_stacker::store::{self, JsonFileStore};
use burger_stacker::ui::App;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Rebuild the burger before the clock runs out.
#[derive(Parser)]
#[command(name = "burger_stacker", about = "Terminal color-stacking memory game")]
#[command(version)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "burger_stacker.toml")]
    config: PathBuf,

    /// Override where the high score is kept
    #[arg(long)]
    high_score_file: Option<PathBuf>,

    /// Seed for a replayable sequence of burgers
    #[arg(long)]
    seed: Option<u64>,

    /// File to write logs to (the terminal is taken by the game)
    #[arg(long, default_value = "burger_stacker.log")]
    log_file: PathBuf,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", GameConfig::default_toml()?);
        return Ok(());
    }

    init_logging(&cli)?;

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(path) = cli.high_score_file {
        config.high_score_path = path;
    }

    let store = JsonFileStore::new(&config.high_score_path);
    let high_score = store::load_or_zero(&store);
    tracing::info!(
        high_score,
        path = %store.path().display(),
        seed = ?cli.seed,
        "starting game"
    );

    let session = Session::new(
        config.generator(cli.seed),
        config.round_duration(),
        high_score,
    );
    let mut app = App::new(session, Box::new(store), config.frame_interval());

    run_terminal(&mut app).context("terminal I/O failed")
}

fn init_logging(cli: &Cli) -> Result<()> {
    let file = File::create(&cli.log_file)
        .with_context(|| format!("creating log file {}", cli.log_file.display()))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();
    Ok(())
}

fn run_terminal(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            let _ = disable_raw_mode();
            return Err(e);
        }
    };

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture);
    let _ = terminal.show_cursor();

    res
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}
