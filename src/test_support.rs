//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use unicode_width::UnicodeWidthStr;

/// Flatten a rendered `TestBackend` buffer into a single string.
///
/// Wide graphemes (Korean text, emoji) occupy two cells; the buffer keeps a
/// placeholder cell after each one. Skipping those placeholders makes
/// multi-character Korean substrings contiguous, so tests can assert
/// `text.contains("측정 결과")` directly.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let mut text = String::new();
    let mut skip = 0usize;
    for cell in terminal.backend().buffer().content() {
        if skip > 0 {
            skip -= 1;
            continue;
        }
        let symbol = cell.symbol();
        text.push_str(symbol);
        skip = symbol.width().saturating_sub(1);
    }
    text
}
