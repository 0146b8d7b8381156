//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Request Lifecycle
//!
//! Submit runs through `core::update`, which validates and moves the view to
//! `Loading`. The returned `Effect::SpawnRequest` carries the text snapshot;
//! a tokio task sends it and reports back with `Action::SummaryReady` over a
//! channel drained once per loop iteration. Typing keeps working meanwhile.
//!
//! While the view is loading, Enter is ignored here. This is the only
//! guard against overlapping submissions.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms to animate the spinner.
//! - **Otherwise**: sleeps up to 500ms, only redraws on events or replies.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::service::{HttpSummaryService, SummaryService};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, SummaryPanelState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
    pub summary_panel: SummaryPanelState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
            summary_panel: SummaryPanelState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: continuous redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Routes one terminal event. Returns `true` when the app should quit.
fn handle_event(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match event {
        TuiEvent::Resize => false,
        TuiEvent::Quit => update(app, Action::Quit) == Effect::Quit,
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.summary_panel.handle_event(&event);
            false
        }
        _ => {
            match tui.input_box.handle_event(&event) {
                Some(InputEvent::Changed(text)) => {
                    update(app, Action::UpdateText(text));
                }
                Some(InputEvent::Submit) => {
                    // Submit control is disabled while a request is in flight
                    if app.view.is_loading() {
                        debug!("Submit ignored: request in flight");
                    } else if let Effect::SpawnRequest { submission, text } =
                        update(app, Action::Submit)
                    {
                        tui.summary_panel.reset();
                        spawn_request(app.service.clone(), submission, text, tx.clone());
                    }
                }
                Some(InputEvent::CursorMoved) | None => {}
            }
            false
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let service: Arc<dyn SummaryService> = Arc::new(HttpSummaryService::new(config.base_url));
    let mut app = App::new(service);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    if config.health_check {
        spawn_health_check(app.service.clone(), tx.clone());
    }

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui, &tx, &rx));

    info!("Shutting down");
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
    rx: &mpsc::Receiver<Action>,
) -> std::io::Result<()> {
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.view.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(app, tui, event, tx) {
                return Ok(());
            }
        }

        // Handle background task actions (replies and health probe)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(app, action) == Effect::Quit {
                return Ok(());
            }
        }
    }
}

fn spawn_request(
    service: Arc<dyn SummaryService>,
    submission: u64,
    text: String,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning summarize request #{}", submission);
    tokio::spawn(async move {
        let result = service.summarize(&text).await;
        if tx.send(Action::SummaryReady { submission, result }).is_err() {
            warn!("Failed to deliver reply #{}: receiver dropped", submission);
        }
    });
}

fn spawn_health_check(service: Arc<dyn SummaryService>, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        let result = service.health().await;
        if tx.send(Action::HealthChecked(result)).is_err() {
            warn!("Failed to deliver health check: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{EMPTY_INPUT_MESSAGE, Status};
    use crate::test_support::{FakeService, test_app};

    fn type_text(app: &mut App, tui: &mut TuiState, text: &str, tx: &mpsc::Sender<Action>) {
        handle_event(app, tui, TuiEvent::Paste(text.to_string()), tx);
    }

    #[test]
    fn test_typing_updates_view() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let (tx, _rx) = mpsc::channel();
        type_text(&mut app, &mut tui, "hello", &tx);
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('!'), &tx);
        assert_eq!(app.view.input, "hello!");
    }

    #[test]
    fn test_enter_on_empty_shows_error_without_request() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let (tx, rx) = mpsc::channel();
        let quit = handle_event(&mut app, &mut tui, TuiEvent::Submit, &tx);
        assert!(!quit);
        assert_eq!(app.view.error(), Some(EMPTY_INPUT_MESSAGE));
        assert_eq!(app.submissions, 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_enter_while_loading_is_ignored() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let (tx, _rx) = mpsc::channel();
        type_text(&mut app, &mut tui, "text", &tx);
        app.view.status = Status::Loading;
        handle_event(&mut app, &mut tui, TuiEvent::Submit, &tx);
        assert_eq!(app.submissions, 0);
    }

    #[test]
    fn test_quit_events() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let (tx, _rx) = mpsc::channel();
        assert!(handle_event(&mut app, &mut tui, TuiEvent::Quit, &tx));
        assert!(!handle_event(&mut app, &mut tui, TuiEvent::Resize, &tx));
    }

    #[tokio::test]
    async fn test_submit_round_trip_through_channel() {
        let service = Arc::new(FakeService::replying(Ok(Some("A fox story.".to_string()))));
        let mut app = App::new(service.clone());
        let mut tui = TuiState::new();
        let (tx, rx) = mpsc::channel();

        type_text(&mut app, &mut tui, "The quick brown fox...", &tx);
        handle_event(&mut app, &mut tui, TuiEvent::Submit, &tx);
        assert!(app.view.is_loading());

        // Typing during the request does not change what was sent
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('!'), &tx);

        let action = tokio::task::spawn_blocking(move || rx.recv())
            .await
            .unwrap()
            .unwrap();
        update(&mut app, action);

        assert_eq!(service.calls(), vec!["The quick brown fox...".to_string()]);
        assert_eq!(app.view.summary(), Some("A fox story."));
        assert!(!app.view.is_loading());
        assert_eq!(app.view.input, "The quick brown fox...!");
    }
}
