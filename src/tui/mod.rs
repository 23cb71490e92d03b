//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing here animates and nothing runs in the background, so the event
//! loop sleeps in `poll` (up to 250ms) and only redraws after it actually
//! handled an event. Every user action runs the reducer to completion on
//! this thread before the next frame is drawn.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on
//! every `draw()` call.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::stdout;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::NumberField;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which input field currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Height,
    Weight,
}

impl Focus {
    fn toggled(self) -> Self {
        match self {
            Focus::Height => Focus::Weight,
            Focus::Weight => Focus::Height,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic).
/// The raw input text lives here, in the two fields, not in core `App`.
pub struct TuiState {
    pub height_field: NumberField,
    pub weight_field: NumberField,
    pub focus: Focus,
    pub scroll_state: ScrollViewState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            height_field: NumberField::new("키 (cm)", "cm", "170"),
            weight_field: NumberField::new("몸무게 (kg)", "kg", "65"),
            focus: Focus::Height,
            scroll_state: ScrollViewState::default(),
        }
    }

    fn focused_field(&mut self) -> &mut NumberField {
        match self.focus {
            Focus::Height => &mut self.height_field,
            Focus::Weight => &mut self.weight_field,
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
            Hide
        );
    }
}

pub fn run() -> std::io::Result<()> {
    let mut app = App::new();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    'main: loop {
        // Sync field focus props with TUI state
        tui.height_field.focused = tui.focus == Focus::Height && app.notice.is_none();
        tui.weight_field.focused = tui.focus == Focus::Weight && app.notice.is_none();

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));
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

            // ForceQuit (Ctrl+C) always quits regardless of state
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    break 'main;
                }
                continue;
            }

            // While the validation notice is up it blocks everything:
            // any key dismisses it, nothing else happens.
            if app.notice.is_some() {
                update(&mut app, Action::DismissNotice);
                continue;
            }

            let effect = match event {
                TuiEvent::Escape => update(&mut app, Action::Quit),
                TuiEvent::Submit => update(
                    &mut app,
                    Action::Calculate {
                        height: tui.height_field.buffer.clone(),
                        weight: tui.weight_field.buffer.clone(),
                    },
                ),
                TuiEvent::Reset => update(&mut app, Action::Reset),
                TuiEvent::ToggleTable => update(&mut app, Action::ToggleTable),
                TuiEvent::FocusNext | TuiEvent::FocusPrev => {
                    tui.focus = tui.focus.toggled();
                    Effect::None
                }
                TuiEvent::ScrollUp => {
                    tui.scroll_state.scroll_up();
                    Effect::None
                }
                TuiEvent::ScrollDown => {
                    tui.scroll_state.scroll_down();
                    Effect::None
                }
                TuiEvent::ScrollPageUp => {
                    tui.scroll_state.scroll_page_up();
                    Effect::None
                }
                TuiEvent::ScrollPageDown => {
                    tui.scroll_state.scroll_page_down();
                    Effect::None
                }
                // Everything else is field editing for the focused field
                ref editing => {
                    tui.focused_field().handle_event(editing);
                    Effect::None
                }
            };

            match effect {
                Effect::Quit => break 'main,
                Effect::ClearInputs => {
                    tui.height_field.clear();
                    tui.weight_field.clear();
                    tui.focus = Focus::Height;
                    tui.scroll_state.scroll_to_top();
                }
                Effect::None => {}
            }
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}
