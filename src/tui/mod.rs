//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (web form,
//! etc.) in the future if needed.
//!
//! ## Event Loop
//!
//! Fully synchronous, one action at a time: each user action completes
//! (reducer mutation + status message) before the next event is read,
//! and the whole view is regenerated from store state on every draw.
//! Redraws are conditional — the loop sleeps up to 500ms and only draws
//! after an event arrived or the terminal resized.

pub mod components;
pub mod event;
mod ui;

use std::io::stdout;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use log::info;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::{FormDefaults, ResolvedConfig};
use crate::core::report;
use crate::core::state::App;
use crate::tui::components::{ComparisonState, DeletePickerState, Form, FormEvent, PickerEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// A reusable UI component.
///
/// Receives data via props (struct fields), may hold internal state, and
/// renders into a `Rect`. `render` takes `&mut self` so components can
/// update presentation state (scroll offsets, caches) during the render
/// pass, in line with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub form: Form,
    pub comparison: ComparisonState,
    /// Delete overlay (None = hidden)
    pub delete_picker: Option<DeletePickerState>,
}

impl TuiState {
    pub fn new(defaults: &FormDefaults) -> Self {
        Self {
            form: Form::new(defaults),
            comparison: ComparisonState::default(),
            delete_picker: None,
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
            Show,                        // Show cursor for field editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
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

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(config);
    let mut tui = TuiState::new(&app.config.defaults);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        // The form only owns the terminal cursor while no overlay is up
        tui.form.active = tui.delete_picker.is_none();

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
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

            // Ctrl+C always quits regardless of what's focused
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // When the delete overlay is open, it owns every event
            if let Some(ref mut picker) = tui.delete_picker {
                if let Some(picker_event) = picker.handle_event(&event) {
                    match picker_event {
                        PickerEvent::Delete(label) => {
                            update(&mut app, Action::DeleteSelection(label));
                            tui.delete_picker = None;
                        }
                        PickerEvent::Dismiss => {
                            tui.delete_picker = None;
                        }
                    }
                }
                continue;
            }

            // Scroll events always go to the comparison pane
            if matches!(
                event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
            ) {
                tui.comparison.handle_event(&event);
                continue;
            }

            match event {
                TuiEvent::Escape => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                TuiEvent::OpenDeletePicker => {
                    if app.store.is_empty() {
                        app.status_message = String::from("Nothing to delete yet");
                    } else {
                        tui.delete_picker = Some(DeletePickerState::new(report::delete_choices(
                            app.store.records(),
                        )));
                    }
                }
                TuiEvent::ClearAll => {
                    if update(&mut app, Action::ClearAll) == Effect::ResetForm {
                        tui.form.reset(&app.config.defaults);
                    }
                }
                other => {
                    if let Some(FormEvent::Submit(draft)) = tui.form.handle_event(&other)
                        && update(&mut app, Action::AddRecord(draft)) == Effect::ResetForm
                    {
                        tui.form.reset(&app.config.defaults);
                    }
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}
