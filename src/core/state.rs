//! # Application State
//!
//! Core business state for bmical. This module contains domain state only -
//! no TUI-specific types. Presentation state (input buffers, focus, scroll)
//! lives in the `tui` module.
//!
//! ```text
//! App
//! ├── result: Option<BmiResult>          // current calculation, if any
//! ├── notice: Option<ValidationError>    // blocking validation notice
//! ├── show_table: bool                   // reference table visibility
//! └── status_message: String             // status bar text
//! ```
//!
//! There is at most one `BmiResult` at a time: replaced wholesale on the
//! next calculation, cleared on reset, and left untouched when validation
//! fails. State changes only happen through `update(state, action)` in
//! action.rs.

use crate::core::bmi::{BmiResult, ValidationError};

pub struct App {
    /// The current result. `None` until the first successful calculation
    /// and after a reset.
    pub result: Option<BmiResult>,
    /// A blocking validation notice. While set, the TUI shows a modal and
    /// routes every key press to dismissal.
    pub notice: Option<ValidationError>,
    /// Whether the BMI reference table card is visible.
    pub show_table: bool,
    pub status_message: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            result: None,
            notice: None,
            show_table: false,
            status_message: String::from("키와 몸무게를 입력하세요"),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
