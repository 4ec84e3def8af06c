//! TUI module for the interactive browser.
//!
//! Uses `ratatui` + `crossterm` for rendering. The event loop is a
//! draw/poll/sleep cycle on a current-thread runtime; fetch effects run as
//! spawned tasks reporting back over an `mpsc` channel so a slow request
//! never blocks input handling.

/// Browser state types and reducer.
pub mod state;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use cinefind_api::tmdb::{GenreCatalog, TmdbClient, fetch_browse_rows, fetch_trailer_url};

use self::state::{BrowserEvent, BrowserState, Effect, FilterDimension, InputMode};

/// Poll-free frame delay; keeps spawned fetch tasks progressing.
const TICK: Duration = Duration::from_millis(50);

/// Runs the browser TUI until the user quits.
///
/// The genre catalog is fetched once by the caller before the loop starts;
/// an empty catalog is valid (genre filters then silently no-op).
///
/// # Errors
///
/// Returns an error if terminal setup or event handling fails.
pub async fn run_browser(client: TmdbClient, catalog: GenreCatalog, row_size: usize) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let result = run_event_loop(&mut terminal, client, catalog, row_size).await;

    // Cleanup (always attempt even if event loop failed)
    disable_raw_mode().context("failed to disable raw mode")?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;

    result
}

/// Main event loop: draw, drain fetch outcomes, handle input, yield.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    client: TmdbClient,
    catalog: GenreCatalog,
    row_size: usize,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<BrowserEvent>();
    let mut state = BrowserState::new(row_size);

    if let Some(effect) = state.apply(BrowserEvent::CatalogLoaded(catalog)) {
        spawn_effect(effect, &client, &tx);
    }

    loop {
        terminal
            .draw(|frame| ui::draw(frame, &state))
            .context("failed to draw TUI")?;

        while let Ok(outcome) = rx.try_recv() {
            if let Some(effect) = state.apply(outcome) {
                spawn_effect(effect, &client, &tx);
            }
        }

        // Zero-timeout poll so the runtime thread stays free for fetch tasks.
        while event::poll(Duration::ZERO).context("failed to poll events")? {
            if let Event::Key(key) = event::read().context("failed to read event")?
                && key.kind == KeyEventKind::Press
            {
                match map_key(&state, key) {
                    KeyAction::Quit => return Ok(()),
                    KeyAction::OpenUrl(url) => {
                        if let Err(error) = open::that(&url) {
                            tracing::warn!(url = %url, error = %error, "failed to open trailer URL");
                        }
                    }
                    KeyAction::Apply(browser_event) => {
                        if let Some(effect) = state.apply(browser_event) {
                            spawn_effect(effect, &client, &tx);
                        }
                    }
                    KeyAction::None => {}
                }
            }
        }

        tokio::time::sleep(TICK).await;
    }
}

/// What the loop does with one key press.
#[derive(Debug)]
enum KeyAction {
    /// Leave the browser.
    Quit,
    /// Launch the trailer URL in the system browser.
    OpenUrl(String),
    /// Feed an event to the reducer.
    Apply(BrowserEvent),
    /// Ignore the key.
    None,
}

/// Maps a key press to a loop action based on the current state.
fn map_key(state: &BrowserState, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    if let Some(url) = &state.trailer {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('q') => KeyAction::Apply(BrowserEvent::CloseTrailer),
            KeyCode::Char('o') | KeyCode::Enter => KeyAction::OpenUrl(url.clone()),
            _ => KeyAction::None,
        };
    }
    if state.notice.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => KeyAction::Apply(BrowserEvent::DismissNotice),
            _ => KeyAction::None,
        };
    }

    match state.input_mode {
        InputMode::Search => match key.code {
            KeyCode::Esc => KeyAction::Apply(BrowserEvent::SearchCancel),
            KeyCode::Enter => KeyAction::Apply(BrowserEvent::SearchSubmit),
            KeyCode::Backspace => KeyAction::Apply(BrowserEvent::SearchBackspace),
            KeyCode::Char(c) => KeyAction::Apply(BrowserEvent::SearchChar(c)),
            _ => KeyAction::None,
        },
        InputMode::Menu(_) => match key.code {
            KeyCode::Esc => KeyAction::Apply(BrowserEvent::MenuCancel),
            KeyCode::Enter => KeyAction::Apply(BrowserEvent::MenuPick),
            KeyCode::Up | KeyCode::Char('k') => KeyAction::Apply(BrowserEvent::MenuUp),
            KeyCode::Down | KeyCode::Char('j') => KeyAction::Apply(BrowserEvent::MenuDown),
            KeyCode::Char('c') | KeyCode::Delete => KeyAction::Apply(BrowserEvent::MenuClear),
            _ => KeyAction::None,
        },
        InputMode::Grid => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('/') => KeyAction::Apply(BrowserEvent::StartSearch),
            KeyCode::Char('g') => KeyAction::Apply(BrowserEvent::OpenMenu(FilterDimension::Genre)),
            KeyCode::Char('y') => KeyAction::Apply(BrowserEvent::OpenMenu(FilterDimension::Year)),
            KeyCode::Char('l') => {
                KeyAction::Apply(BrowserEvent::OpenMenu(FilterDimension::Language))
            }
            KeyCode::Char('t') => KeyAction::Apply(BrowserEvent::OpenMenu(FilterDimension::Type)),
            KeyCode::Char('H') => KeyAction::Apply(BrowserEvent::ResetHome),
            KeyCode::Left | KeyCode::Char('h') => KeyAction::Apply(BrowserEvent::CursorLeft),
            KeyCode::Right => KeyAction::Apply(BrowserEvent::CursorRight),
            KeyCode::Up | KeyCode::Char('k') => KeyAction::Apply(BrowserEvent::CursorUp),
            KeyCode::Down | KeyCode::Char('j') => KeyAction::Apply(BrowserEvent::CursorDown),
            KeyCode::Enter => KeyAction::Apply(BrowserEvent::RequestTrailer),
            _ => KeyAction::None,
        },
    }
}

/// Spawns the task for one effect; the outcome comes back over `tx`.
fn spawn_effect(
    effect: Effect,
    client: &TmdbClient,
    tx: &mpsc::UnboundedSender<BrowserEvent>,
) {
    let client = client.clone();
    let tx = tx.clone();
    match effect {
        Effect::Refresh(spec) => {
            tokio::spawn(async move {
                let items = fetch_browse_rows(
                    &client,
                    &spec.filters,
                    &spec.search,
                    &spec.catalog,
                    spec.row_size,
                )
                .await;
                let _ = tx.send(BrowserEvent::ResultsArrived {
                    token: spec.token,
                    items,
                });
            });
        }
        Effect::ResolveTrailer(spec) => {
            tokio::spawn(async move {
                let outcome = match fetch_trailer_url(&client, spec.media_type, spec.id).await {
                    Ok(url) => BrowserEvent::TrailerArrived {
                        token: spec.token,
                        url,
                    },
                    Err(error) => {
                        tracing::warn!(id = spec.id, error = %error, "trailer resolution failed");
                        BrowserEvent::TrailerFailed { token: spec.token }
                    }
                };
                let _ = tx.send(outcome);
            });
        }
    }
}
