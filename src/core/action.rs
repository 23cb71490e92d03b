//! # Actions
//!
//! Everything that can happen in bmical becomes an `Action`.
//! User presses Enter? That's `Action::Calculate`.
//! User presses Ctrl+R? That's `Action::Reset`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an [`Effect`] telling the adapter what (if
//! anything) to do on its side. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state.

use log::{debug, info};

use crate::core::bmi;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Run the full validate/compute/classify pipeline on the raw field
    /// text. On failure the previous result is kept and a notice is raised.
    Calculate { height: String, weight: String },
    /// Clear the result and notice. The adapter clears its input buffers
    /// in response to [`Effect::ClearInputs`].
    Reset,
    /// Show or hide the BMI reference table card.
    ToggleTable,
    /// Dismiss the blocking validation notice.
    DismissNotice,
    Quit,
}

/// What the adapter must do after a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Clear presentation-side input buffers (reset was performed).
    ClearInputs,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Calculate { height, weight } => {
            match bmi::evaluate(&height, &weight) {
                Ok(result) => {
                    info!(
                        "calculated: bmi={} category={}",
                        result.bmi,
                        result.category.label.label()
                    );
                    app.status_message =
                        format!("BMI {:.1} · {}", result.bmi, result.category.label.label());
                    app.result = Some(result);
                    app.notice = None;
                }
                Err(error) => {
                    // Previous result stays untouched; the notice blocks
                    // input until dismissed.
                    info!("calculation refused: {:?}", error);
                    app.notice = Some(error);
                }
            }
            Effect::None
        }
        Action::Reset => {
            app.result = None;
            app.notice = None;
            app.status_message = String::from("키와 몸무게를 입력하세요");
            Effect::ClearInputs
        }
        Action::ToggleTable => {
            app.show_table = !app.show_table;
            Effect::None
        }
        Action::DismissNotice => {
            app.notice = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
