//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event loop
//!
//! The loop uses conditional redraw with a dynamic poll timeout:
//!
//! - **Animating** (spinner while a request is in flight): polls every
//!   ~80ms for smooth animation.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//! - **Debounce pending**: the timeout is additionally capped at the
//!   debouncer's deadline so a settled query fires on time instead of
//!   waiting out the idle sleep.
//!
//! Network I/O runs in spawned tokio tasks that send completion actions
//! back over a std mpsc channel; the loop drains it every iteration.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::debounce::Debouncer;
use crate::core::state::{App, SearchState};
use crate::github::{GithubClient, languages_by_size};
use crate::tui::component::EventHandler;
use crate::tui::components::{ResultsEvent, ResultsListState, SearchBar, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic).
pub struct TuiState {
    pub search_bar: SearchBar,
    pub results: ResultsListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            results: ResultsListState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // SteadyBlock instead of a blinking cursor: set_cursor_position
        // resets the terminal's blink timer on every draw, which makes a
        // blinking cursor look erratic during spinner animation.
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client = GithubClient::new(
        config.base_url.clone(),
        config.token.as_deref(),
        Duration::from_secs(config.request_timeout_secs),
    )
    .map_err(std::io::Error::other)?;
    let client = Arc::new(client);

    let mut app = App::new(config.token.is_some());
    let mut tui = TuiState::new();
    let mut debouncer = Debouncer::new(Duration::from_millis(config.quiet_interval_ms));

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background request tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        // Spinner runs while any request the user can see is in flight.
        let animating = app.search == SearchState::Loading
            || app.details.as_ref().is_some_and(|d| d.languages.is_none());
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating, long when idle,
        // never past the debounce deadline.
        let now = Instant::now();
        let mut timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        if let Some(deadline) = debouncer.deadline() {
            timeout = timeout.min(deadline.saturating_duration_since(now));
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of screen
            if matches!(event, TuiEvent::ForceQuit) {
                break 'main;
            }

            if app.details.is_some() {
                // Details screen: Enter/o opens the browser, Esc/Backspace goes back.
                let action = match event {
                    TuiEvent::Escape | TuiEvent::Backspace => Some(Action::CloseDetails),
                    TuiEvent::Submit | TuiEvent::InputChar('o') => Some(Action::OpenRepoLink),
                    _ => None,
                };
                if let Some(action) = action {
                    let effect = update(&mut app, action);
                    if apply_effect(effect, &client, &config, &tx) {
                        break 'main;
                    }
                }
                continue;
            }

            // Search screen
            match event {
                TuiEvent::Escape => {
                    let effect = update(&mut app, Action::Quit);
                    if apply_effect(effect, &client, &config, &tx) {
                        break 'main;
                    }
                }
                TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::Submit => {
                    if let Some(ResultsEvent::Open(index)) = tui.results.handle_event(&event) {
                        let effect = update(&mut app, Action::OpenDetails(index));
                        if apply_effect(effect, &client, &config, &tx) {
                            break 'main;
                        }
                    }
                }
                _ => {
                    if let Some(SearchEvent::Changed(text)) = tui.search_bar.handle_event(&event)
                    {
                        debouncer.update(&text, Instant::now());
                    }
                }
            }
        }

        // Settled query values come out of the debouncer, not the raw
        // keystroke stream.
        if let Some(settled) = debouncer.poll(Instant::now()) {
            needs_redraw = true;
            debug!("Query settled: {settled:?}");
            let effect = update(&mut app, Action::QuerySettled(settled));
            tui.results.reset(0);
            if apply_effect(effect, &client, &config, &tx) {
                break 'main;
            }
        }

        // Handle background task actions (request completions)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let completion_seq = match &action {
                Action::SearchCompleted { seq, .. } => Some(*seq),
                _ => None,
            };
            let effect = update(&mut app, action);
            // A fresh (non-stale) result set restarts the selection.
            if completion_seq == Some(app.request_seq) {
                let len = match &app.search {
                    SearchState::Results(items) => items.len(),
                    _ => 0,
                };
                tui.results.reset(len);
            }
            if apply_effect(effect, &client, &config, &tx) {
                break 'main;
            }
        }
    }

    // Teardown: a pending debounce emission must not outlive its consumer.
    debouncer.cancel();

    ratatui::restore();
    Ok(())
}

/// Performs the I/O an `update()` asked for. Returns true if the app
/// should quit.
fn apply_effect(
    effect: Effect,
    client: &Arc<GithubClient>,
    config: &ResolvedConfig,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::SpawnSearch { seq, query } => {
            spawn_search(client.clone(), config.per_page, seq, query, tx.clone());
            false
        }
        Effect::SpawnLanguageFetch {
            repo_id,
            owner,
            name,
        } => {
            spawn_language_fetch(client.clone(), repo_id, owner, name, tx.clone());
            false
        }
        Effect::OpenLink(url) => {
            crate::link::open_in_browser(&url);
            false
        }
    }
}

fn spawn_search(
    client: Arc<GithubClient>,
    per_page: u8,
    seq: u64,
    query: String,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning search request (seq={seq}, query={query:?})");
    tokio::spawn(async move {
        let result = client
            .search_repositories(&query, per_page)
            .await
            .map_err(|e| {
                warn!("Search request failed (seq={seq}): {e}");
                e.to_string()
            });
        if tx.send(Action::SearchCompleted { seq, result }).is_err() {
            warn!("Failed to send search completion (seq={seq}): receiver dropped");
        }
    });
}

fn spawn_language_fetch(
    client: Arc<GithubClient>,
    repo_id: u64,
    owner: String,
    name: String,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning language fetch for {owner}/{name}");
    tokio::spawn(async move {
        // Failure degrades to "no languages known" — logged, never shown.
        let languages = match client.repo_languages(&owner, &name).await {
            Ok(map) => languages_by_size(map),
            Err(e) => {
                warn!("Failed to fetch languages for {owner}/{name}: {e}");
                Vec::new()
            }
        };
        if tx
            .send(Action::LanguagesLoaded { repo_id, languages })
            .is_err()
        {
            warn!("Failed to send language fetch result for {owner}/{name}: receiver dropped");
        }
    });
}
