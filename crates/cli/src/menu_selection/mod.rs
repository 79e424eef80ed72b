//! Interactive checklist for choosing installation actions.
//!
//! This module provides the terminal-based user interface: it owns the
//! terminal session, maps key presses to navigation events and draws the
//! current section after every event.
//!
//! # User Interface
//!
//! The interface supports:
//! - Up/Down arrows to move the cursor
//! - Enter or Right arrow to toggle a checkbox or open a section
//! - Escape, Left arrow, Backspace or `q` to leave a section, or finish at the top level
//! - Ctrl+C to abort without producing a script

pub mod input;
pub mod types;
pub mod ui;

pub use input::{map_key, KeyAction};
pub use types::{MenuOutcome, ViewportState};
pub use ui::{install_signal_handler, run_menu};

/// Label shown in the header for the top level
pub const ROOT_LABEL: &str = "root";

pub const FOOTER_HINT: &str = "↑/↓ move  →/Enter select  ←/ESC back  q quit";
