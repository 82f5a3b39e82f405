//! `vrcare`: VR Assurance Care provider directory in the terminal.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use vrcare_core::Catalog;
use vrcare_tui::{AppConfig, AppState, input, logging, ui};

#[derive(Debug, Parser)]
#[command(name = "vrcare", version, about = "Find a behavioral health provider")]
struct Args {
    /// Config file (default: <config dir>/vrcare/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog file (.toml or .json); overrides the config
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Log file; overrides the config
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref()).context("loading config")?;
    if args.catalog.is_some() {
        config.catalog = args.catalog;
    }
    if args.log_file.is_some() {
        config.log_file = args.log_file;
    }

    logging::init(&config.log_path())?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting vrcare");

    let catalog = match &config.catalog {
        Some(path) => Catalog::from_file(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::seed(),
    };
    tracing::info!(
        providers = catalog.providers.len(),
        countries = catalog.countries.len(),
        "catalog ready"
    );

    let mut app = AppState::new(catalog, config.location.clone());

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, Duration::from_millis(config.tick_ms));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("exiting");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    tick: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}
