mod config;
mod controller;
mod logging;
mod model;
mod theme;
mod view;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::Mutex;

use config::Config;
use controller::AppController;
use model::{AppModel, TmdbClient};
use theme::ThemeStore;
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Movies TUI Starting ===");

    let config = Config::from_env()?;
    let tmdb = TmdbClient::new(&config.api_token)?;

    // Theme: saved preference, then terminal background, then dark
    let theme_store = ThemeStore::new();
    let initial_theme = theme::resolve_initial(theme_store.load(), theme::detect_terminal_theme());
    tracing::info!(theme = initial_theme.label(), "Theme resolved");

    let mut app_model = AppModel::new(initial_theme, theme_store);
    app_model.set_tmdb_client(tmdb);

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let model = Arc::new(Mutex::new(app_model));
    let controller = AppController::new(model.clone());

    // Load the genre catalog and the first trending page in the background
    let controller_for_init = controller.clone();
    tokio::spawn(async move {
        controller_for_init.load_initial().await;
    });

    let res = run_app(&mut terminal, model.clone(), controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Movies TUI shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        // Get current state
        let (ui_state, browse_state, selected_movie, should_quit) = {
            let model_guard = model.lock().await;

            // Auto-clear old errors (after 5 seconds)
            model_guard.auto_clear_old_errors().await;

            (
                model_guard.get_ui_state().await,
                model_guard.get_browse_state().await,
                model_guard.get_selected_movie().await,
                model_guard.should_quit().await,
            )
        };

        // Draw UI
        terminal.draw(|f| {
            AppView::render(f, &ui_state, &browse_state, selected_movie.as_ref());
        })?;

        // Handle input with shorter poll time for smoother UI updates
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    // Errors are surfaced through the model's popup state
                    let _ = controller.handle_key_event(key).await;
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let screen = Rect::new(0, 0, size.width, size.height);
                    let _ = controller.handle_mouse_event(mouse, screen).await;
                }
                _ => {}
            }
        }

        if should_quit {
            break;
        }
    }

    Ok(())
}
