//! # Header Component
//!
//! Top status bar showing the application title and the current status
//! message ("키와 몸무게를 입력하세요", "BMI 22.5 · 정상", ...).
//!
//! Purely presentational: all fields are props, there is no internal state.
//! The status message is owned by core `App` state; the header just renders
//! whatever it is given.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct Header {
    /// Status message from the core state (may be empty).
    pub status_message: String,
}

impl Header {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }
}

impl Component for Header {
    /// Single-line render: title, subtitle, and the status message when
    /// one is present.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "⚖ BMI 계산기",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" · 체질량지수 계산", Style::default().fg(Color::DarkGray)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::Cyan),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
