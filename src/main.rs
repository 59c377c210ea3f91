mod app;
mod config;
mod domain;
mod input;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use config::{Overrides, Settings};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{AppEvent, ItemStore};
use log::{info, warn};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use ticker::Ticker;

#[derive(Parser)]
#[command(name = "classdesk")]
#[command(about = "A terminal desk for English-class assignments, reading, notes and study timers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path. Defaults to ~/.classdesk/config.json
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Tab to start on (assignments, reading, notes, timers)
    #[arg(short, long)]
    tab: Option<String>,

    /// Tick interval in milliseconds; each tick takes this much off every timer
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Start with empty lists instead of the sample coursework
    #[arg(long)]
    no_seed: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Log file path. Defaults to ~/.classdesk/classdesk.log
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    InitConfig {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };

    match cli.command {
        Some(Commands::InitConfig { force }) => {
            config::write_default_config(&config_path, force)?;
            println!("Wrote config file: {}", config_path.display());
            Ok(())
        }
        None => {
            let file_config = config::load_config(&config_path)?;
            let overrides = Overrides {
                tick_ms: cli.tick_ms,
                no_seed: cli.no_seed,
                start_tab: cli.tab,
                log_level: cli.log_level,
                log_file: cli.log_file,
            };
            let settings = config::resolve(&file_config, &overrides, config::default_log_path()?)?;

            init_logging(&settings)?;
            info!("classdesk starting with {:?}", settings);

            run_tui(&settings)
        }
    }
}

/// Route log output to a file; the terminal belongs to the TUI
fn init_logging(settings: &Settings) -> Result<()> {
    if let Some(parent) = settings.log_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let log_file = File::create(&settings.log_file)
        .with_context(|| format!("Failed to create log file: {}", settings.log_file.display()))?;

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(settings.log_level, log_config, log_file)
        .context("Failed to initialize logger")?;

    Ok(())
}

fn run_tui(settings: &Settings) -> Result<()> {
    let store = if settings.seed_data {
        ItemStore::seeded()
    } else {
        ItemStore::default()
    };
    let app = AppState::new(store, settings.tick_unit()).with_tab(settings.start_tab);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            return Err(e).context("Failed to initialize terminal");
        }
    };

    // Run app
    let result = run_app(&mut terminal, app, Ticker::new(settings.tick_interval()));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        warn!("Event loop stopped with error: {:#}", e);
    }
    info!("classdesk exiting");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: AppState,
    mut ticker: Ticker,
) -> Result<()> {
    let mut tabs_area = Rect::default();

    loop {
        // Render
        terminal.draw(|f| {
            tabs_area = ui::layout::create_layout(f.size()).tabs_area;
            ui::render(f, &app);
        })?;

        // Handle events with timeout for ticking
        if event::poll(ticker.timeout())? {
            let terminal_event = event::read()?;
            if let Some(app_event) = input::translate(&terminal_event, tabs_area) {
                app = app.update(app_event);
            }
        }

        if ticker.is_due() {
            app = app.update(AppEvent::Tick);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
