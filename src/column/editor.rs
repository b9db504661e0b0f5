use super::events::{EditorEvent, EditorListener, ValidityWatch};
use super::naming::normalize_column_name;
use super::validation::{FieldError, ValidationState, is_valid_column_name};
use serde::{Deserialize, Serialize};

/// Initial values supplied by the parent. Either may be pushed again later.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnProps {
    pub column_name: String,
    pub column_label: String,
}

impl ColumnProps {
    pub fn new(column_name: impl Into<String>, column_label: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            column_label: column_label.into(),
        }
    }
}

#[derive(Clone, Debug)]
struct Field {
    draft: String,
    initial: String,
    dirty: bool,
}

impl Field {
    fn new(initial: String) -> Self {
        Self {
            draft: initial.clone(),
            initial,
            dirty: false,
        }
    }

    fn commit(&mut self, raw: String) {
        self.draft = raw;
        self.dirty = true;
    }

    /// Takes a new initial value. Returns true if the draft was overwritten.
    fn resync(&mut self, initial: String) -> bool {
        if initial == self.initial {
            return false;
        }
        self.initial = initial;
        if self.dirty {
            return false;
        }
        self.draft.clone_from(&self.initial);
        true
    }
}

/// Editor for a new column's identifier (name) and display label.
///
/// Owns both drafts, their dirty flags, the one-shot auto-correction and the
/// validity watch. All state changes happen synchronously inside the public
/// operations; each one ends with a revalidation that emits
/// [`EditorEvent::IsValid`] only when validity actually changed.
pub struct ColumnIdentifierEditor<L: EditorListener> {
    name: Field,
    label: Field,
    should_auto_correct: bool,
    pulse: bool,
    validity: Option<ValidityWatch>,
    listener: L,
}

impl<L: EditorListener> ColumnIdentifierEditor<L> {
    /// Creates the editor from the parent's props and attaches the validity
    /// watch, which emits the initial `isValid` right away.
    pub fn new(props: ColumnProps, listener: L) -> Self {
        let mut editor = Self {
            name: Field::new(props.column_name),
            label: Field::new(props.column_label),
            should_auto_correct: true,
            pulse: false,
            validity: Some(ValidityWatch::default()),
            listener,
        };
        editor.revalidate();
        editor
    }

    /// Commits the name field's raw value (the field lost focus).
    pub fn blur_name(&mut self, raw: impl Into<String>) {
        self.name.commit(raw.into());
        log::debug!("Committed column name draft {:?}", self.name.draft);
        self.check_auto_correct();
        self.emit(EditorEvent::NewColumnName(self.name.draft.clone()));
        self.revalidate();
    }

    /// Commits the label field's raw value (the field lost focus).
    pub fn blur_label(&mut self, raw: impl Into<String>) {
        self.label.commit(raw.into());
        log::debug!("Committed column label draft {:?}", self.label.draft);
        self.check_auto_correct();
        self.emit(EditorEvent::NewColumnLabel(self.label.draft.clone()));
        self.revalidate();
    }

    /// Pushes a new initial name from the parent. Ignored once the name is dirty.
    pub fn set_column_name(&mut self, column_name: impl Into<String>) {
        if self.name.resync(column_name.into()) {
            log::debug!("Resynced column name to {:?}", self.name.draft);
            self.emit(EditorEvent::NewColumnName(self.name.draft.clone()));
        }
        self.revalidate();
    }

    /// Pushes a new initial label from the parent. Ignored once the label is dirty.
    pub fn set_column_label(&mut self, column_label: impl Into<String>) {
        if self.label.resync(column_label.into()) {
            log::debug!("Resynced column label to {:?}", self.label.draft);
            self.emit(EditorEvent::NewColumnLabel(self.label.draft.clone()));
        }
        self.revalidate();
    }

    /// Pushes both props, name first.
    pub fn set_props(&mut self, props: ColumnProps) {
        self.set_column_name(props.column_name);
        self.set_column_label(props.column_label);
    }

    /// Detaches the validity watch. No `isValid` is emitted afterwards.
    pub fn teardown(&mut self) {
        if self.validity.take().is_some() {
            log::debug!("Validity watch detached");
        }
    }

    pub fn name(&self) -> &str {
        &self.name.draft
    }

    pub fn label(&self) -> &str {
        &self.label.draft
    }

    pub fn validation(&self) -> ValidationState {
        ValidationState::evaluate(&self.name.draft, &self.label.draft)
    }

    pub fn is_valid(&self) -> bool {
        self.validation().is_valid()
    }

    pub fn name_error(&self) -> Option<FieldError> {
        self.validation().name
    }

    pub fn label_error(&self) -> Option<FieldError> {
        self.validation().label
    }

    /// Name error to display: only once the user has touched the field.
    pub fn visible_name_error(&self) -> Option<FieldError> {
        self.name_error().filter(|_| self.name.dirty)
    }

    /// Label error to display: only once the user has touched the field.
    pub fn visible_label_error(&self) -> Option<FieldError> {
        self.label_error().filter(|_| self.label.dirty)
    }

    pub fn is_name_dirty(&self) -> bool {
        self.name.dirty
    }

    pub fn is_label_dirty(&self) -> bool {
        self.label.dirty
    }

    /// True right after auto-correction changed the drafts, until the next check.
    pub fn is_pulsing(&self) -> bool {
        self.pulse
    }

    /// True until auto-correction has fired.
    pub fn auto_correct_pending(&self) -> bool {
        self.should_auto_correct
    }

    pub fn is_torn_down(&self) -> bool {
        self.validity.is_none()
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    fn check_auto_correct(&mut self) {
        let fires = self.should_auto_correct
            && self.name.dirty
            && !self.name.draft.is_empty()
            && !is_valid_column_name(&self.name.draft);

        if !fires {
            self.pulse = false;
            return;
        }

        self.should_auto_correct = false;
        self.label.draft.clone_from(&self.name.draft);
        self.name.draft = normalize_column_name(&self.label.draft);
        self.pulse = true;
        log::info!(
            "Auto-corrected column name {:?} to {:?}",
            self.label.draft,
            self.name.draft
        );

        self.emit(EditorEvent::NewColumnName(self.name.draft.clone()));
        self.emit(EditorEvent::NewColumnLabel(self.label.draft.clone()));
    }

    fn revalidate(&mut self) {
        let valid = self.is_valid();
        let changed = self.validity.as_mut().and_then(|watch| watch.observe(valid));
        if let Some(valid) = changed {
            self.emit(EditorEvent::IsValid(valid));
        }
    }

    fn emit(&mut self, event: EditorEvent) {
        self.listener.on_event(event);
    }
}

impl<L: EditorListener> Drop for ColumnIdentifierEditor<L> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<L: EditorListener> std::fmt::Debug for ColumnIdentifierEditor<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnIdentifierEditor")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("should_auto_correct", &self.should_auto_correct)
            .field("pulse", &self.pulse)
            .field("validity", &self.validity)
            .finish_non_exhaustive()
    }
}
