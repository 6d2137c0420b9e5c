mod cleaner;
mod cli;
mod config;
mod error;
mod logging;
mod plugin;
mod safety;
mod scanner;
mod tui;
mod utils;

use anyhow::Result;
use cli::Cli;
use config::Config;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use error::SweepError;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tui::App;

fn main() -> ExitCode {
    let _cli = Cli::parse_args();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let config = Config::load()?;

    match logging::init(&config.log) {
        Ok(path) => tracing::info!(log = %path.display(), "homesweep {} starting", env!("CARGO_PKG_VERSION")),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    let home = dirs::home_dir().ok_or(SweepError::HomeDirNotFound)?;
    run_tui(config, home)
}

fn run_tui(config: Config, home: PathBuf) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, home);
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("homesweep exiting");
    result
}
