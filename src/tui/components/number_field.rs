//! # NumberField Component
//!
//! Single-line numeric input for one measurement (height or weight).
//!
//! ## Responsibilities
//!
//! - Capture digits and at most one decimal point, up to [`MAX_INPUT_CHARS`]
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Display the label, current text, placeholder, and unit suffix
//! - Own the terminal cursor while focused
//!
//! The buffer is internal state; `focused` is a prop from the event loop.
//! Anything the field filters out (letters, a second dot) is silently
//! dropped, so a stray keystroke never corrupts the value.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Maximum number of characters a field accepts ("250.5" is the widest
/// meaningful value).
pub const MAX_INPUT_CHARS: usize = 5;

/// High-level events emitted by a NumberField.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// Text content changed.
    Changed,
}

/// Single-line numeric input with label and unit suffix.
///
/// # Props
///
/// - `focused`: whether this field currently receives keystrokes
///
/// # State
///
/// - `buffer`: the digits typed so far (ASCII digits and at most one '.')
/// - `cursor`: byte offset into `buffer`
pub struct NumberField {
    pub label: &'static str,
    pub unit: &'static str,
    pub placeholder: &'static str,
    pub buffer: String,
    pub focused: bool,
    cursor: usize,
}

impl NumberField {
    pub fn new(label: &'static str, unit: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            unit,
            placeholder,
            buffer: String::new(),
            focused: false,
            cursor: 0,
        }
    }

    /// Clear the buffer (reset was performed).
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn accepts(&self, c: char) -> bool {
        if self.buffer.chars().count() >= MAX_INPUT_CHARS {
            return false;
        }
        c.is_ascii_digit() || (c == '.' && !self.buffer.contains('.'))
    }

    fn insert_char(&mut self, c: char) -> bool {
        if !self.accepts(c) {
            return false;
        }
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }
}

impl Component for NumberField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (text_style, border_style) = if self.focused {
            (
                Style::default().fg(Color::Green),
                Style::default().fg(Color::Green),
            )
        } else {
            (
                Style::default(),
                Style::default().add_modifier(Modifier::DIM),
            )
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.label);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.buffer.is_empty() {
            let hint = Paragraph::new(self.placeholder)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hint, inner);
        } else {
            frame.render_widget(Paragraph::new(self.buffer.as_str()).style(text_style), inner);
        }

        // Unit suffix hugs the right edge; values are at most 5 chars so
        // the two never collide on any sane field width.
        let unit = Paragraph::new(self.unit)
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(unit, inner);

        if self.focused {
            let cursor_x = inner.x + self.buffer[..self.cursor].width() as u16;
            frame.set_cursor_position((cursor_x, inner.y));
        }
    }
}

impl EventHandler for NumberField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => self.insert_char(*c).then_some(FieldEvent::Changed),
            TuiEvent::Paste(text) => {
                let mut changed = false;
                for c in text.chars() {
                    changed |= self.insert_char(c);
                }
                changed.then_some(FieldEvent::Changed)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    // Buffer holds only ASCII digits and '.', so byte steps
                    // are char steps.
                    self.cursor -= 1;
                    self.buffer.remove(self.cursor);
                    Some(FieldEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    self.buffer.remove(self.cursor);
                    Some(FieldEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    Some(FieldEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor += 1;
                    Some(FieldEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                FieldEvent::Changed
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                FieldEvent::Changed
            }),
            _ => None,
        }
    }
}
