//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm. Dragging
//! a file onto the terminal arrives as a bracketed-paste event carrying the
//! file's path; that is the terminal's drag-and-drop, so pastes that resolve
//! to an existing file are routed to intake instead of the input buffer.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Busy** (uploading, answering): draws every ~80ms for a smooth spinner.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::answer::AnswerRouter;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, SUCCESS_BANNER_SECS};
use crate::intake::{CandidateFile, DocumentIntake, SimulatedIntake, validate};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, MessageListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub message_list: MessageListState,
    pub input_box: InputBox,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Bracketed paste is required for file drops; mouse capture for
        // wheel scrolling in the transcript.
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
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
            Hide // Hide cursor on exit
        );
    }
}

/// Interprets pasted text as a dropped file when it points at one.
/// Terminals quote paths containing spaces, so surrounding quotes are
/// stripped before the check.
fn dropped_path(pasted: &str) -> Option<PathBuf> {
    let trimmed = pasted.trim();
    let unquoted = trimmed
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .or_else(|| trimmed.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
        .unwrap_or(trimmed);
    let path = Path::new(unquoted);
    path.is_file().then(|| path.to_path_buf())
}

pub fn run(config: ResolvedConfig, initial_document: Option<PathBuf>) -> std::io::Result<()> {
    let router = Arc::new(AnswerRouter::from_config(&config));
    let intake: Arc<dyn DocumentIntake> = Arc::new(SimulatedIntake::new());
    let mut app = App::new(config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // A document passed on the command line goes through the same intake
    // path as a dropped file.
    if let Some(path) = initial_document {
        let effect = update(&mut app, Action::FileDropped(path));
        handle_effect(effect, &router, &intake, &tx);
    }

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    let mut should_quit = false;
    while !should_quit {
        let busy = app.is_uploading || app.is_answering;
        if busy {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 8.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when busy (spinner), long when idle
        let timeout = if busy {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(tui_event, TuiEvent::Resize) {
                continue;
            }

            // Quit keys bypass the components
            if matches!(tui_event, TuiEvent::ForceQuit | TuiEvent::Quit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Scroll events always go to the message list
            if matches!(
                tui_event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
            ) {
                tui.message_list.handle_event(&tui_event);
                continue;
            }

            // A paste that points at an existing file is a drop
            if let TuiEvent::Paste(data) = &tui_event {
                if let Some(path) = dropped_path(data) {
                    debug!("File dropped onto terminal: {}", path.display());
                    let effect = update(&mut app, Action::FileDropped(path));
                    if handle_effect(effect, &router, &intake, &tx) {
                        should_quit = true;
                    }
                    continue;
                }
            }

            // InputBox handles everything else
            if let Some(input_event) = tui.input_box.handle_event(&tui_event) {
                match input_event {
                    InputEvent::Submit(text) => {
                        let effect = update(&mut app, Action::SubmitInput(text));
                        if handle_effect(effect, &router, &intake, &tx) {
                            should_quit = true;
                        }
                    }
                    InputEvent::ContentChanged => {}
                }
            }
        }

        // Handle background task actions (intake, answers, banner clears)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if handle_effect(effect, &router, &intake, &tx) {
                should_quit = true;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Performs the I/O an `update()` asked for. Returns true on quit.
fn handle_effect(
    effect: Effect,
    router: &Arc<AnswerRouter>,
    intake: &Arc<dyn DocumentIntake>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::None => {}
        Effect::SpawnIntake(path) => spawn_intake(path, intake.clone(), tx.clone()),
        Effect::SpawnQuery(query) => spawn_query(query, router.clone(), tx.clone()),
        Effect::ScheduleStatusClear { seq } => schedule_status_clear(seq, tx.clone()),
        Effect::Quit => return true,
    }
    false
}

/// Validate fast, then run the simulated processing step. Every outcome is
/// reported back through the action channel.
fn spawn_intake(path: PathBuf, intake: Arc<dyn DocumentIntake>, tx: mpsc::Sender<Action>) {
    info!("Spawning intake for {}", path.display());
    tokio::spawn(async move {
        let candidate = match CandidateFile::from_path(&path) {
            Ok(c) => c,
            Err(e) => {
                let _ = tx.send(Action::IntakeFailed(e));
                return;
            }
        };
        if let Err(e) = validate(&candidate.name, candidate.size) {
            let _ = tx.send(Action::IntakeFailed(e));
            return;
        }

        let file_name = candidate.name.clone();
        if tx
            .send(Action::IntakeStarted {
                file_name: file_name.clone(),
            })
            .is_err()
        {
            warn!("Failed to send IntakeStarted: receiver dropped");
            return;
        }

        let action = match intake.process(&candidate).await {
            Ok(()) => Action::IntakeFinished { file_name },
            Err(e) => Action::IntakeFailed(e),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send intake result: receiver dropped");
        }
    });
}

/// Route the query; the router collapses every failure mode into one reply.
fn spawn_query(query: String, router: Arc<AnswerRouter>, tx: mpsc::Sender<Action>) {
    info!("Spawning query routing");
    tokio::spawn(async move {
        let reply = router.route(&query).await;
        if tx.send(Action::AnswerReady(reply)).is_err() {
            warn!("Failed to send answer: receiver dropped");
        }
    });
}

/// One-shot auto-clear for success banners. The sequence number makes it
/// cancellable: the reducer drops clears for banners that were replaced.
fn schedule_status_clear(seq: u64, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(SUCCESS_BANNER_SECS)).await;
        let _ = tx.send(Action::ClearStatus { seq });
    });
}
