// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Settling deferred field state into the form once per loop turn
// - Rendering the UI

pub mod app;
pub mod components;
pub mod input;
pub mod modal;
pub mod traits;
pub mod ui;
pub mod widgets;

use crate::config::Config;
use crate::form::FieldDefinition;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, Focus};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::ModalAction;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// even when the loop fails.
pub async fn run_tui(
    config: Config,
    fields: Vec<FieldDefinition>,
    log_buffer: LogBuffer,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, fields, log_buffer);
    tracing::info!(
        fields = app.form.fields().len(),
        theme = %app.theme.name,
        "Form ready"
    );

    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Each turn: apply queued field state, draw, then wait for a key or the
/// redraw tick. Settling before the draw means a keystroke and its effect
/// on the state map land in the same frame.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        let applied = app.form.settle();
        if applied > 0 {
            tracing::trace!(applied, "Settled field state");
        }

        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.clear_expired_toast();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Global → Focus movement → Focused widget
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if handle_modal_input(app, &key_event) {
        return;
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    let key = key_event.code;
    match key_event.kind {
        KeyEventKind::Press => {
            if !app.handle_key_press(key) {
                return;
            }
            match key {
                KeyCode::Tab | KeyCode::Down => app.focus_next(),
                KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
                KeyCode::Enter => app.activate(),
                KeyCode::Delete if matches!(app.focus, Focus::Field(_)) => app.delete_focused(),
                _ => {
                    app.dispatch_to_focused(key_event);
                }
            }
        }
        KeyEventKind::Release => app.handle_key_release(key),
        _ => {}
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    if app.modal.is_none() {
        return false;
    }

    // Release events keep the key gate in sync while a modal is open
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }

    if key_event.kind != KeyEventKind::Press || !app.handle_key_press(key_event.code) {
        return true;
    }

    let action = app
        .modal
        .as_mut()
        .map(|modal| modal.handle_input(key_event.code))
        .unwrap_or(ModalAction::None);
    if action == ModalAction::Close {
        app.modal = None;
    }

    true
}

/// Handle global keys - returns true if handled
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            true
        }
        KeyCode::F(1) => {
            if app.handle_key_press(key_event.code) {
                app.modal = Some(modal::Modal::help());
            }
            true
        }
        KeyCode::F(2) => {
            if app.handle_key_press(key_event.code) {
                app.submit();
            }
            true
        }
        _ => false,
    }
}
