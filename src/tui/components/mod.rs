//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `Header`: Top bar showing the app title and status message
//! - `NoticeDialog`: Blocking validation notice rendered as a modal
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `NumberField`: Single-line numeric input with label and unit suffix
//!
//! The result card and the reference table are plain widget builders in
//! `tui::ui` — they have no state and no events, just layout.
//!
//! ## Design Philosophy
//!
//! Components receive external data as props, not by reaching into global
//! state. This makes dependencies explicit and components testable with
//! ratatui's `TestBackend` alone.

mod header;
mod notice;
mod number_field;

pub use header::Header;
pub use notice::NoticeDialog;
pub use number_field::{FieldEvent, NumberField};
