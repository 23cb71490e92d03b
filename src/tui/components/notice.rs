//! # Notice Dialog
//!
//! Blocking validation notice, rendered as a centered modal over the rest
//! of the screen. While a notice is up, the event loop routes every key
//! press to dismissal, so the calculation stays blocked until the user
//! acknowledges the message.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

use crate::core::bmi::ValidationError;
use crate::tui::component::Component;

pub struct NoticeDialog {
    pub error: ValidationError,
}

impl NoticeDialog {
    pub fn new(error: ValidationError) -> Self {
        Self { error }
    }

    /// Centered popup area, clamped to the frame.
    fn popup_area(area: Rect) -> Rect {
        let [horizontal] = Layout::horizontal([Constraint::Max(44)])
            .flex(Flex::Center)
            .areas(area);
        let [vertical] = Layout::vertical([Constraint::Max(6)])
            .flex(Flex::Center)
            .areas(horizontal);
        vertical
    }
}

impl Component for NoticeDialog {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let popup = Self::popup_area(area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red))
            .title("알림");

        let body = Paragraph::new(vec![
            Line::raw(""),
            Line::raw(self.error.message()),
            Line::raw(""),
            Line::styled("아무 키나 눌러 닫기", Style::default().fg(Color::DarkGray)),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

        // Clear what's underneath so the modal reads as a separate layer.
        frame.render_widget(Clear, popup);
        frame.render_widget(body, popup);
    }
}
