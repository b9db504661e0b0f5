//! # New Column Form
//!
//! Form component for naming and labeling a new data column. The user types
//! a column name (an identifier such as `order_total`) and a human readable
//! label. The form validates both fields, auto-corrects an invalid name once,
//! and reports the final values and their validity to its parent.
//!
//! ```
//! use new_column_form::column::{ColumnIdentifierEditor, ColumnProps, EventLog};
//!
//! let mut editor = ColumnIdentifierEditor::new(
//!     ColumnProps::new("", "Order total"),
//!     EventLog::default(),
//! );
//! editor.blur_name("order_total");
//! assert!(editor.is_valid());
//! ```
//!
//! ## Modules
//!
//! - [`column`]: headless editor, validation rules, auto-correction, events
//! - [`gui`]: egui widget and the eframe window hosting it
//! - [`config`]: JSON settings (initial props, messages, window size)
//! - [`error`]: error type for the application shell
//! - [`logging`]: `env_logger` setup
//! - [`theme`]: colours and frames

#![warn(clippy::all, rust_2018_idioms)]

pub mod column;
pub mod config;
pub mod error;
pub mod gui;
pub mod logging;
pub mod theme;
