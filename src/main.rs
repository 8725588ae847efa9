use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use financeai::config::AppConfig;
use financeai::tui::app::AppState;
use financeai::tui::services::Services;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load();

    // Initialize logging
    let _log_guard =
        financeai::core::logging::init_tui(&config.logging.log_dir(), &config.logging.level);
    log::info!("FinanceAI v{} starting", financeai::VERSION);

    // Services fail before the terminal is touched
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let services = match Services::init(&config, event_tx).await {
        Ok(services) => services,
        Err(e) => {
            log::error!("Startup failed: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.tui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let mut app = AppState::new(event_rx, services);
    let result = app.run(&mut terminal, config.tui.tick_rate()).await;
    // Cancels any pending advisor reply
    drop(app);

    // Restore terminal
    disable_raw_mode()?;
    if config.tui.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        log::error!("Dashboard exited with error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    log::info!("FinanceAI shut down cleanly");
    Ok(())
}
