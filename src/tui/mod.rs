//! TUI to browse the model catalog and pick a model.

mod app;
mod constants;
mod draw;
mod handlers;

pub use app::{App, CatalogPhase};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use std::io;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tokio::runtime::Runtime;

use crate::core::catalog::{self, ModelCatalog};
use crate::core::config::Config;
use crate::core::persistence;

use draw::draw;
use handlers::SelectorAction;

/// A completed fetch tagged with the generation that spawned it.
type FetchOutcome = (u64, Result<ModelCatalog, String>);

/// Spawn a catalog fetch in the background. The result arrives on the shared
/// channel tagged with `generation`; the loop drops results from superseded
/// fetches, so a slow stale response cannot overwrite a newer catalog.
fn spawn_catalog_fetch(
    config: Arc<Config>,
    rt: &Arc<Runtime>,
    generation: u64,
    tx: mpsc::Sender<FetchOutcome>,
) {
    let rt_clone = Arc::clone(rt);
    thread::spawn(move || {
        let result = rt_clone
            .block_on(catalog::fetch_catalog(&config.backend_url))
            .map_err(|e| e.message());
        let _ = tx.send((generation, result));
    });
}

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// The upward report: store the choice and persist it (best-effort).
fn apply_model_change(app_state: &mut App, model_id: &str) {
    app_state.selected_model = model_id.to_string();
    if let Err(e) = persistence::save_last_model(model_id) {
        log::debug!("failed to persist model choice: {}", e);
    }
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for background fetches.
/// Returns the model selected when the user left the picker, if any.
pub fn run(
    config: Arc<Config>,
    initial_model: Option<String>,
    disabled: bool,
) -> io::Result<Option<String>> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );

    let mut app = App::new(initial_model.unwrap_or_default(), disabled);
    let (fetch_tx, fetch_rx) = mpsc::channel::<FetchOutcome>();
    let mut fetch_generation: u64 = 0;

    // Fetch on mount; after that, only an explicit refresh re-fetches.
    spawn_catalog_fetch(
        Arc::clone(&config),
        &rt,
        fetch_generation,
        fetch_tx.clone(),
    );

    loop {
        while let Ok((generation, result)) = fetch_rx.try_recv() {
            if generation != fetch_generation {
                log::debug!("dropping stale catalog fetch (generation {})", generation);
                continue;
            }
            if let Some(default_id) = app.apply_fetch_result(result) {
                apply_model_change(&mut app, &default_id);
            }
        }

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match handlers::handle_selector_key(key.code, key.modifiers, &mut app) {
                    SelectorAction::Quit => break,
                    SelectorAction::Refresh => {
                        fetch_generation += 1;
                        app.begin_fetch();
                        spawn_catalog_fetch(
                            Arc::clone(&config),
                            &rt,
                            fetch_generation,
                            fetch_tx.clone(),
                        );
                    }
                    SelectorAction::Select(model_id) => apply_model_change(&mut app, &model_id),
                    SelectorAction::Keep => {}
                }
            }
        }
    }

    terminal.show_cursor()?;
    let selection = app.selected_model;
    Ok(if selection.is_empty() {
        None
    } else {
        Some(selection)
    })
}
