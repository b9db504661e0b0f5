//! egui front end for the column editor.
//!
//! [`ColumnForm`] renders a [`crate::column::ColumnIdentifierEditor`];
//! [`ColumnFormApp`] hosts it in an eframe window and plays the parent,
//! pushing props in and listening to the emitted events.

pub mod app;
pub mod form;

pub use app::ColumnFormApp;
pub use form::{ColumnForm, pulse_strength, sync_buffer};
