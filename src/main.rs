use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use apothecary::config::AppConfig;
use apothecary::core::alchemy::{load_pool, PoolKind};
use apothecary::core::session::Session;
use apothecary::tui::app::AppState;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // File-only logging; stderr belongs to the terminal UI
    let _log_guard = apothecary::core::logging::init_tui();
    log::info!("Apothecary v{} starting", apothecary::VERSION);

    let config = AppConfig::load();

    // Catalogs load before the terminal is taken over so errors stay readable
    let plants = match load_pool(&config.data.plants_path, PoolKind::Plants) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load plant catalog");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let animals = match load_pool(&config.data.animals_path, PoolKind::Animals) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load animal catalog");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let session = Session::new(plants, animals, config.session_options());
    let mut app = AppState::new(session);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal, Duration::from_millis(config.tui.tick_rate_ms));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    log::info!("Apothecary shutting down");
    Ok(())
}
