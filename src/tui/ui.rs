//! Frame composition: header, input fields, the scrollable card area
//! (result card, reference table) and the footer.
//!
//! The result card and reference table are built as plain paragraphs with
//! cached heights and rendered into a `ScrollView`, so the card area
//! scrolls when it outgrows the terminal, the same way the original
//! single-screen layout scrolls.

use crate::core::bmi::{self, BmiResult, CATEGORIES, CategoryThreshold};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Header, NoticeDialog};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollbarVisibility};
use unicode_width::UnicodeWidthStr;

/// A card ready to be placed in the scroll view.
struct RenderedCard<'a> {
    paragraph: Paragraph<'a>,
    height: u16,
}

impl<'a> RenderedCard<'a> {
    fn new(paragraph: Paragraph<'a>, content_width: u16) -> Self {
        let inner_width = content_width.saturating_sub(2);
        let height = paragraph.line_count(inner_width) as u16;
        RenderedCard { paragraph, height }
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0), Length(2)]);
    let [header_area, input_area, card_area, footer_area] = layout.areas(frame.area());

    Header::new(app.status_message.clone()).render(frame, header_area);

    let [height_area, weight_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(input_area);
    tui.height_field.render(frame, height_area);
    tui.weight_field.render(frame, weight_area);

    draw_card_area(frame, card_area, app, tui);
    draw_footer(frame, footer_area, app.show_table);

    // Modal last, over everything else. While it is up the fields keep
    // their text but the cursor belongs to the dialog layer.
    if let Some(error) = app.notice {
        NoticeDialog::new(error).render(frame, frame.area());
    }
}

fn draw_card_area(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let content_width = area.width.saturating_sub(1);

    let mut cards: Vec<RenderedCard> = Vec::new();
    if let Some(result) = &app.result {
        cards.push(RenderedCard::new(result_card(result), content_width));
    }
    if app.show_table {
        cards.push(RenderedCard::new(reference_table(), content_width));
    }

    if cards.is_empty() {
        let hint = Paragraph::new("키와 몸무게를 입력한 뒤 Enter 를 누르세요")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        let [centered] = Layout::vertical([Constraint::Length(1)])
            .flex(ratatui::layout::Flex::Center)
            .areas(area);
        frame.render_widget(hint, centered);
        return;
    }

    let total_height: u16 = cards.iter().map(|c| c.height).sum();
    let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

    let mut y_offset: u16 = 0;
    for card in &cards {
        let card_rect = Rect::new(0, y_offset, content_width, card.height);
        scroll_view.render_widget(card.paragraph.clone(), card_rect);
        y_offset += card.height;
    }

    frame.render_stateful_widget(scroll_view, area, &mut tui.scroll_state);
}

fn draw_footer(frame: &mut Frame, area: Rect, show_table: bool) {
    let table_hint = if show_table {
        "^T 기준표 숨기기"
    } else {
        "^T 기준표 보기"
    };
    let keys = Line::from(vec![
        Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" 계산하기 · "),
        Span::styled("^R", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" 초기화 · "),
        Span::raw(table_hint),
        Span::raw(" · "),
        Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" 종료"),
    ]);
    let disclaimer = Line::styled(
        "BMI는 참고 지표일 뿐이며, 정확한 건강 상태는 전문의와 상담하시기 바랍니다.",
        Style::default().fg(Color::DarkGray),
    );
    frame.render_widget(Paragraph::new(vec![keys, disclaimer]), area);
}

fn category_color(row: &CategoryThreshold) -> Color {
    let (r, g, b) = row.display_color;
    Color::Rgb(r, g, b)
}

/// Echo a measurement the way it was entered: whole numbers without a
/// trailing ".0", decimals as typed.
fn format_measure(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Pad `text` with spaces to `columns` terminal cells. Korean labels are
/// double-width, so char-count padding would misalign the table.
fn pad_to_columns(text: &str, columns: usize) -> String {
    let width = text.width();
    let padding = columns.saturating_sub(width);
    format!("{text}{}", " ".repeat(padding))
}

fn result_card(result: &BmiResult) -> Paragraph<'static> {
    let color = category_color(result.category);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{:.1}", result.bmi),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" BMI", Style::default().fg(Color::DarkGray)),
        ])
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            format!(
                "{} {}",
                result.category.display_icon,
                result.category.label.label()
            ),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::raw(""),
        Line::from(vec![
            Span::styled("입력 정보      ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!(
                "키 {}cm / 몸무게 {}kg",
                format_measure(result.height_cm),
                format_measure(result.weight_kg)
            )),
        ]),
        Line::from(vec![
            Span::styled("정상 체중 범위  ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{:.1} ~ {:.1} kg", result.ideal_min, result.ideal_max)),
        ]),
    ];

    if let Some(tip) = bmi::health_tip(result.category.label) {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "💡 건강 팁",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::raw(tip));
    }

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color))
                .title("측정 결과"),
        )
        .wrap(Wrap { trim: true })
}

fn reference_table() -> Paragraph<'static> {
    let mut lines: Vec<Line> = CATEGORIES
        .iter()
        .map(|row| {
            Line::from(vec![
                Span::styled("● ", Style::default().fg(category_color(row))),
                Span::raw(pad_to_columns(row.label.label(), 10)),
                Span::styled(bmi::range_text(row), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "* BMI = 체중(kg) ÷ 키(m)²",
        Style::default().fg(Color::DarkGray),
    ));

    Paragraph::new(lines).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .title("대한비만학회 BMI 기준"),
    )
}
