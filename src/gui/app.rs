use crate::column::{ChannelListener, ColumnIdentifierEditor, ColumnProps, EditorEvent};
use crate::config::FormConfig;
use crate::gui::ColumnForm;
use eframe::egui;

const MAX_LOG_LINES: usize = 200;

/// Window hosting one [`ColumnForm`] and acting as its parent.
pub struct ColumnFormApp {
    config: FormConfig,
    form: ColumnForm<ChannelListener>,
    events_rx: crossbeam_channel::Receiver<EditorEvent>,
    /// Props as the parent currently wants them; pushed on demand.
    props: ColumnProps,
    received_name: String,
    received_label: String,
    is_valid: bool,
    event_log: Vec<String>,
    status: String,
    generation: u64,
}

impl ColumnFormApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: FormConfig) -> Self {
        crate::theme::apply_form_theme(&cc.egui_ctx);
        Self::with_config(config)
    }

    /// Builds the app without a window, so it can be driven headless.
    pub fn with_config(config: FormConfig) -> Self {
        let props = config.props();
        let (form, events_rx) = build_form(0, props.clone());
        let mut app = Self {
            config,
            form,
            events_rx,
            received_name: props.column_name.clone(),
            received_label: props.column_label.clone(),
            props,
            is_valid: false,
            event_log: Vec::new(),
            status: String::new(),
            generation: 0,
        };
        app.poll_events();
        app
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn received_name(&self) -> &str {
        &self.received_name
    }

    pub fn received_label(&self) -> &str {
        &self.received_label
    }

    pub fn event_log(&self) -> &[String] {
        &self.event_log
    }

    pub fn form(&self) -> &ColumnForm<ChannelListener> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ColumnForm<ChannelListener> {
        &mut self.form
    }

    /// Sends the parent's current props to the editor.
    pub fn push_props(&mut self, props: ColumnProps) {
        self.props = props;
        self.form.editor_mut().set_props(self.props.clone());
        self.poll_events();
    }

    /// Tears the current editor down and starts a fresh one from the props.
    pub fn reset_form(&mut self) {
        self.form.editor_mut().teardown();
        self.generation += 1;
        let (form, events_rx) = build_form(self.generation, self.props.clone());
        self.form = form;
        self.events_rx = events_rx;
        self.received_name.clone_from(&self.props.column_name);
        self.received_label.clone_from(&self.props.column_label);
        self.status = "Form reset".to_owned();
        log::info!("Column form reset (generation {})", self.generation);
        self.poll_events();
    }

    /// Applies every event the editor emitted since the last poll.
    pub fn poll_events(&mut self) {
        for event in self.events_rx.try_iter() {
            match &event {
                EditorEvent::NewColumnName(name) => self.received_name.clone_from(name),
                EditorEvent::NewColumnLabel(label) => self.received_label.clone_from(label),
                EditorEvent::IsValid(valid) => self.is_valid = *valid,
            }
            self.event_log.push(event.to_string());
        }
        if self.event_log.len() > MAX_LOG_LINES {
            let excess = self.event_log.len() - MAX_LOG_LINES;
            self.event_log.drain(0..excess);
        }
    }

    fn render_parent_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Parent");
        ui.add_space(crate::theme::SPACING_SMALL);

        let mut push = false;
        egui::Grid::new("parent_props_grid")
            .num_columns(2)
            .spacing([20.0, crate::theme::SPACING_SMALL])
            .show(ui, |ui| {
                ui.label("columnName:");
                ui.text_edit_singleline(&mut self.props.column_name);
                ui.end_row();

                ui.label("columnLabel:");
                ui.text_edit_singleline(&mut self.props.column_label);
                ui.end_row();
            });

        ui.add_space(crate::theme::SPACING_SMALL);
        ui.horizontal(|ui| {
            if ui
                .button("Push props")
                .on_hover_text("Send these initial values to the form")
                .clicked()
            {
                push = true;
            }
            if ui.button("Reset form").clicked() {
                self.reset_form();
            }
        });
        if push {
            self.push_props(self.props.clone());
        }

        ui.add_space(crate::theme::SPACING_LARGE);
        ui.separator();
        ui.label(egui::RichText::new("Received").strong());
        ui.label(format!("name:  {}", self.received_name));
        ui.label(format!("label: {}", self.received_label));
        let (text, color) = if self.is_valid {
            ("valid", crate::theme::VALID_COLOR)
        } else {
            ("invalid", crate::theme::INVALID_COLOR)
        };
        ui.label(egui::RichText::new(text).color(color));

        ui.add_space(crate::theme::SPACING_MEDIUM);
        ui.label(egui::RichText::new("Events").strong());
        egui::ScrollArea::vertical()
            .stick_to_bottom(true)
            .max_height(200.0)
            .show(ui, |ui| {
                for line in &self.event_log {
                    ui.monospace(line);
                }
            });
    }

    fn render_form_card(&mut self, ui: &mut egui::Ui) {
        crate::theme::card_frame(ui).show(ui, |ui| {
            ui.heading("New column");
            ui.add_space(crate::theme::SPACING_MEDIUM);
            self.form.show(ui, &self.config);
        });
        self.poll_events();

        ui.add_space(crate::theme::SPACING_LARGE);
        ui.horizontal(|ui| {
            let create = ui.add_enabled(self.is_valid, egui::Button::new("Create column"));
            if create.clicked() {
                self.status = format!(
                    "Column {} ({}) ready",
                    self.received_name, self.received_label
                );
                log::info!("{}", self.status);
            }
            if !self.status.is_empty() {
                ui.label(egui::RichText::new(&self.status).weak());
            }
        });
    }
}

fn build_form(
    generation: u64,
    props: ColumnProps,
) -> (
    ColumnForm<ChannelListener>,
    crossbeam_channel::Receiver<EditorEvent>,
) {
    let (listener, rx) = ChannelListener::channel();
    let editor = ColumnIdentifierEditor::new(props, listener);
    (ColumnForm::new(("column_form", generation), editor), rx)
}

impl eframe::App for ColumnFormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("column_form_top")
            .frame(crate::theme::top_bar_frame())
            .show(ctx, |ui| {
                ui.heading("New Column");
            });

        egui::SidePanel::right("parent_panel")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                self.render_parent_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_form_card(ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_validity_reaches_parent() {
        let app = ColumnFormApp::with_config(FormConfig {
            initial_name: "orders".to_owned(),
            initial_label: "Orders".to_owned(),
            ..FormConfig::default()
        });
        assert!(app.is_valid());
        assert_eq!(app.event_log(), &["isValid(true)".to_owned()]);
    }

    #[test]
    fn test_push_props_resyncs_untouched_form() {
        let mut app = ColumnFormApp::with_config(FormConfig::default());
        app.push_props(ColumnProps::new("orders", "Orders"));
        assert_eq!(app.received_name(), "orders");
        assert_eq!(app.received_label(), "Orders");
        assert!(app.is_valid());
    }

    #[test]
    fn test_edits_flow_to_parent() {
        let mut app = ColumnFormApp::with_config(FormConfig::default());
        app.form_mut().editor_mut().blur_name("Order Total");
        app.poll_events();
        assert_eq!(app.received_name(), "order_total");
        assert_eq!(app.received_label(), "Order Total");
        assert!(app.is_valid());
    }

    #[test]
    fn test_reset_rearms_auto_correct() {
        let mut app = ColumnFormApp::with_config(FormConfig::default());
        app.form_mut().editor_mut().blur_name("Bad Name");
        app.poll_events();
        assert!(!app.form().editor().auto_correct_pending());

        app.reset_form();
        assert!(app.form().editor().auto_correct_pending());
        assert!(!app.is_valid());
    }
}
