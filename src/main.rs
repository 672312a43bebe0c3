// Folio: a slide-based portfolio presenter for the terminal

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use folio::controller::Controller;
use folio::markup::load_page;
use folio::store::{FileStore, KeyValueStore, MemoryStore};
use folio::ui::App;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Present a portfolio page as terminal slides")]
#[command(version)]
struct Cli {
    /// Page description (TOML)
    page: PathBuf,

    /// Fragment to open at, e.g. `slide-2`
    #[arg(short, long)]
    fragment: Option<String>,

    /// Preference file (defaults to the user config directory)
    #[arg(long)]
    store: Option<PathBuf>,

    /// Keep preferences in memory only
    #[arg(long, conflicts_with = "store")]
    no_persist: bool,

    /// Write logs to this file (filter with FOLIO_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Install a file-backed subscriber. Nothing is logged to the terminal,
/// which belongs to the UI.
fn init_tracing(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))
}

fn default_store_path() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
        .join("preferences.json")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let page = match load_page(&cli.page) {
        Ok(page) => page,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    info!(page = %cli.page.display(), "page loaded");

    if cli.no_persist {
        return present(page, MemoryStore::new(), cli.fragment.as_deref());
    }

    let store_path = cli.store.clone().unwrap_or_else(default_store_path);
    match FileStore::open(&store_path) {
        Ok(store) => {
            info!(path = %store.path().display(), "preference store opened");
            present(page, store, cli.fragment.as_deref())
        }
        Err(e) => {
            // An unreadable preference file only costs the saved theme
            warn!(error = %e, "preference store unavailable; using memory");
            eprintln!("Warning: {}", e);
            present(page, MemoryStore::new(), cli.fragment.as_deref())
        }
    }
}

fn present<S: KeyValueStore>(
    page: folio::markup::Page,
    store: S,
    fragment: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = Controller::new(page.document, store, page.config);
    controller.load(fragment);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(controller);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    // Print the final location so it can be passed back with --fragment
    println!("{}", app.controller.document().location.hash());

    Ok(())
}
