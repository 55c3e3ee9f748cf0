mod audio;
mod config;
mod controller;
mod logging;
mod model;
mod source;
mod storage;
mod theme;
mod view;

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::Mutex;

use audio::AudioBackend;
use config::Config;
use controller::AppController;
use model::AppModel;
use source::ContentSource;
use storage::Storage;
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Munir-RS Starting ===");

    let config = Config::load(Path::new("config.toml"))?;

    let storage = Storage::new(
        config
            .storage
            .state_dir
            .clone()
            .unwrap_or_else(Storage::default_dir),
    );
    let source = ContentSource::from_config(&config.source);

    let (player_events_tx, player_events_rx) = tokio::sync::mpsc::unbounded_channel();
    let audio = AudioBackend::start(player_events_tx)?;

    let model = Arc::new(Mutex::new(AppModel::new()));
    let controller = AppController::new(
        model.clone(),
        source,
        storage,
        audio,
        config.playback.range_seed,
    );

    controller.start_player_event_listener(player_events_rx);
    controller.load_catalogs().await;
    controller.restore_session().await;

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model.clone(), controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Munir-RS shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        // Get current state
        let (playback, ui_state, content_state, should_quit) = {
            let model_guard = model.lock().await;

            // Auto-clear old errors (after 5 seconds)
            model_guard.auto_clear_old_errors().await;

            (
                model_guard.playback_snapshot().await,
                model_guard.get_ui_state().await,
                model_guard.get_content_state().await,
                model_guard.should_quit().await,
            )
        };

        // Draw UI
        terminal.draw(|f| {
            AppView::render(f, &playback, &ui_state, &content_state);
        })?;

        // Handle input with shorter poll time for smoother UI updates
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let _ = controller.handle_key_event(key).await;
            }
        }

        if should_quit {
            break;
        }
    }

    Ok(())
}
