//! # Column Identifier Editor
//!
//! Headless state for the "new column" form: two drafts (name and label),
//! the rules that validate them, and the one-shot auto-correction that turns
//! an invalid name into a usable identifier.
//!
//! The editor never renders anything. [`crate::gui`] drives it from egui,
//! and tests drive it directly:
//!
//! ```
//! use new_column_form::column::{ColumnIdentifierEditor, ColumnProps, EditorEvent, EventLog};
//!
//! let mut editor = ColumnIdentifierEditor::new(ColumnProps::default(), EventLog::default());
//! editor.blur_name("My Col 1!");
//!
//! assert_eq!(editor.name(), "my_col_1");
//! assert_eq!(editor.label(), "My Col 1!");
//! assert!(editor.listener().contains(&EditorEvent::IsValid(true)));
//! ```
//!
//! ## Event Flow
//!
//! ```text
//! blur_name / blur_label ──> draft + dirty ──> auto-correct check ──> NewColumnName / NewColumnLabel
//!                                                                          │
//! set_column_name / set_column_label ──> resync (if clean) ────────────────┤
//!                                                                          v
//!                                                       revalidate ──> IsValid (on change only)
//! ```

pub mod editor;
pub mod events;
pub mod naming;
pub mod validation;

pub use editor::{ColumnIdentifierEditor, ColumnProps};
pub use events::{ChannelListener, EditorEvent, EditorListener, EventLog, ValidityWatch};
pub use naming::normalize_column_name;
pub use validation::{FieldError, ValidationState, is_valid_column_name, validate_label, validate_name};
