use crate::column::{ColumnIdentifierEditor, EditorListener, FieldError};
use crate::config::FormConfig;
use eframe::egui;

/// Copies `draft` into the edit buffer unless the user is typing in it.
/// Returns true if the buffer changed.
pub fn sync_buffer(buffer: &mut String, draft: &str, focused: bool) -> bool {
    if focused || buffer == draft {
        return false;
    }
    draft.clone_into(buffer);
    true
}

/// Pulse intensity `elapsed` seconds into a pulse lasting `duration`:
/// rises from 0 to 1 and back, then stays at 0.
pub fn pulse_strength(elapsed: f64, duration: f32) -> f32 {
    if duration.is_nan() || duration <= 0.0 {
        return 0.0;
    }
    let t = elapsed as f32 / duration;
    if !(0.0..1.0).contains(&t) {
        return 0.0;
    }
    (std::f32::consts::PI * t).sin()
}

#[derive(Debug, Default)]
struct FieldOutcome {
    committed: Option<String>,
    cleared: bool,
    focused: bool,
}

/// Edit buffer of one field.
///
/// A clear commits `""` at once. The focus loss that usually follows in the
/// next frame would commit the same value again, so it is swallowed.
#[derive(Debug, Default)]
struct FieldBuffer {
    text: String,
    cleared: bool,
}

impl FieldBuffer {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            cleared: false,
        }
    }

    /// The value to commit to the editor for this frame, if any.
    fn take_commit(&mut self, outcome: &FieldOutcome, draft: &str) -> Option<String> {
        if outcome.cleared {
            self.cleared = true;
            return Some(String::new());
        }
        match &outcome.committed {
            Some(raw) => {
                let echo = self.cleared && raw == draft;
                self.cleared = false;
                (!echo).then(|| raw.clone())
            }
            None => {
                if outcome.focused {
                    self.cleared = false;
                }
                None
            }
        }
    }
}

/// Two-field form bound to a [`ColumnIdentifierEditor`].
///
/// Keystrokes stay in local buffers; the editor only sees a value when its
/// field loses focus or is cleared.
pub struct ColumnForm<L: EditorListener> {
    editor: ColumnIdentifierEditor<L>,
    name_buffer: FieldBuffer,
    label_buffer: FieldBuffer,
    pulse_started: Option<f64>,
    id: egui::Id,
}

impl<L: EditorListener> ColumnForm<L> {
    pub fn new(id_salt: impl std::hash::Hash, editor: ColumnIdentifierEditor<L>) -> Self {
        Self {
            name_buffer: FieldBuffer::new(editor.name()),
            label_buffer: FieldBuffer::new(editor.label()),
            editor,
            pulse_started: None,
            id: egui::Id::new(id_salt),
        }
    }

    pub fn editor(&self) -> &ColumnIdentifierEditor<L> {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut ColumnIdentifierEditor<L> {
        &mut self.editor
    }

    pub fn show(&mut self, ui: &mut egui::Ui, config: &FormConfig) {
        let pulse = self.current_pulse(ui, config.pulse_seconds);

        let name_error = self.editor.visible_name_error();
        let stroke = theme_stroke(ui, name_error, pulse);
        let name = field_row(
            ui,
            self.id.with("name"),
            "Column name",
            "e.g. order_total",
            &mut self.name_buffer.text,
            name_error.map(|e| config.messages.for_name(e)),
            stroke,
        );
        if let Some(raw) = self.name_buffer.take_commit(&name, self.editor.name()) {
            self.editor.blur_name(raw);
        }

        ui.add_space(crate::theme::SPACING_MEDIUM);

        let label_error = self.editor.visible_label_error();
        let stroke = theme_stroke(ui, label_error, pulse);
        let label = field_row(
            ui,
            self.id.with("label"),
            "Column label",
            "e.g. Order total",
            &mut self.label_buffer.text,
            label_error.map(|e| config.messages.for_label(e)),
            stroke,
        );
        if let Some(raw) = self.label_buffer.take_commit(&label, self.editor.label()) {
            self.editor.blur_label(raw);
        }

        sync_buffer(&mut self.name_buffer.text, self.editor.name(), name.focused);
        sync_buffer(&mut self.label_buffer.text, self.editor.label(), label.focused);
    }

    fn current_pulse(&mut self, ui: &egui::Ui, duration: f32) -> f32 {
        let now = ui.input(|i| i.time);
        if !self.editor.is_pulsing() {
            self.pulse_started = None;
            return 0.0;
        }
        let started = *self.pulse_started.get_or_insert(now);
        let elapsed = now - started;
        if elapsed < f64::from(duration) {
            ui.ctx().request_repaint();
        }
        pulse_strength(elapsed, duration)
    }
}

fn theme_stroke(ui: &egui::Ui, error: Option<FieldError>, pulse: f32) -> egui::Stroke {
    crate::theme::field_stroke(ui, error.is_some(), pulse)
}

fn field_row(
    ui: &mut egui::Ui,
    id: egui::Id,
    title: &str,
    hint: &str,
    buffer: &mut String,
    error: Option<&str>,
    stroke: egui::Stroke,
) -> FieldOutcome {
    let mut outcome = FieldOutcome::default();

    ui.label(egui::RichText::new(title).strong());
    ui.add_space(crate::theme::SPACING_TINY);

    crate::theme::field_frame(ui, stroke).show(ui, |ui| {
        ui.horizontal(|ui| {
            let width = (ui.available_width() - 32.0).max(80.0);
            let edit = ui.add(
                egui::TextEdit::singleline(buffer)
                    .id(id)
                    .hint_text(hint)
                    .desired_width(width),
            );
            outcome.focused = edit.has_focus();
            if edit.lost_focus() {
                outcome.committed = Some(buffer.clone());
            }

            // Clear affordance
            if !buffer.is_empty()
                && ui
                    .small_button("✖")
                    .on_hover_text(format!("Clear {}", title.to_lowercase()))
                    .clicked()
            {
                buffer.clear();
                outcome.cleared = true;
                outcome.committed = None;
                outcome.focused = false;
            }
        });
    });

    if let Some(message) = error {
        ui.label(
            egui::RichText::new(message)
                .color(crate::theme::INVALID_COLOR)
                .small(),
        );
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_skips_focused_field() {
        let mut buffer = "typing".to_owned();
        assert!(!sync_buffer(&mut buffer, "orders", true));
        assert_eq!(buffer, "typing");
    }

    #[test]
    fn test_sync_copies_draft() {
        let mut buffer = "My Col 1!".to_owned();
        assert!(sync_buffer(&mut buffer, "my_col_1", false));
        assert_eq!(buffer, "my_col_1");
        assert!(!sync_buffer(&mut buffer, "my_col_1", false));
    }

    #[test]
    fn test_pulse_shape() {
        assert!(pulse_strength(0.0, 0.6).abs() < 1e-6);
        assert!((pulse_strength(0.3, 0.6) - 1.0).abs() < 1e-6);
        assert!(pulse_strength(0.1, 0.6) > 0.0);
        assert!(pulse_strength(0.6, 0.6).abs() < f32::EPSILON);
        assert!(pulse_strength(5.0, 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn test_pulse_ends_exactly_at_duration() {
        assert!(pulse_strength(0.6, 0.6).abs() < f32::EPSILON);
        assert!(pulse_strength(1.5, 1.5).abs() < f32::EPSILON);
        assert!(pulse_strength(-0.1, 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zero_duration_never_pulses() {
        assert!(pulse_strength(0.1, 0.0).abs() < f32::EPSILON);
        assert!(pulse_strength(0.1, f32::NAN).abs() < f32::EPSILON);
    }

    fn blur(text: &str) -> FieldOutcome {
        FieldOutcome {
            committed: Some(text.to_owned()),
            ..FieldOutcome::default()
        }
    }

    fn cleared() -> FieldOutcome {
        FieldOutcome {
            cleared: true,
            ..FieldOutcome::default()
        }
    }

    fn focused() -> FieldOutcome {
        FieldOutcome {
            focused: true,
            ..FieldOutcome::default()
        }
    }

    #[test]
    fn test_blur_commits_buffer() {
        let mut field = FieldBuffer::new("");
        assert_eq!(field.take_commit(&blur("orders"), ""), Some("orders".to_owned()));
        assert_eq!(field.take_commit(&blur("orders"), "orders"), Some("orders".to_owned()));
    }

    #[test]
    fn test_clear_then_focus_loss_commits_once() {
        let mut field = FieldBuffer::new("orders");
        assert_eq!(field.take_commit(&cleared(), "orders"), Some(String::new()));
        assert_eq!(field.take_commit(&blur(""), ""), None, "focus loss after clear is an echo");
        assert_eq!(field.take_commit(&blur(""), ""), Some(String::new()));
    }

    #[test]
    fn test_clear_then_refocus_blur_commits() {
        let mut field = FieldBuffer::new("orders");
        assert_eq!(field.take_commit(&cleared(), "orders"), Some(String::new()));
        assert_eq!(field.take_commit(&FieldOutcome::default(), ""), None);
        assert_eq!(field.take_commit(&focused(), ""), None);
        assert_eq!(field.take_commit(&blur(""), ""), Some(String::new()));
    }

    #[test]
    fn test_clear_then_typed_value_commits() {
        let mut field = FieldBuffer::new("orders");
        field.take_commit(&cleared(), "orders");
        assert_eq!(field.take_commit(&blur("amount"), ""), Some("amount".to_owned()));
    }
}
