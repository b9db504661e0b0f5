use eframe::egui;
use egui::{Color32, CornerRadius, Margin, Stroke};

pub const ACCENT_COLOR: Color32 = Color32::from_rgb(211, 47, 47);
pub const INVALID_COLOR: Color32 = Color32::from_rgb(239, 83, 80);
pub const PULSE_COLOR: Color32 = Color32::from_rgb(255, 193, 7);
pub const VALID_COLOR: Color32 = Color32::from_rgb(102, 187, 106);

// Spacing constants
pub const SPACING_TINY: f32 = 4.0;
pub const SPACING_SMALL: f32 = 8.0;
pub const SPACING_MEDIUM: f32 = 12.0;
pub const SPACING_LARGE: f32 = 20.0;

// Margin/Padding constants
pub const MARGIN_CARD: f32 = 15.0;
pub const MARGIN_FIELD: f32 = 4.0;
pub const PANEL_LEFT: f32 = 20.0;
pub const PANEL_RIGHT: f32 = 30.0;
pub const PANEL_TOP: f32 = 10.0;
pub const PANEL_BOTTOM: f32 = 10.0;

pub fn apply_form_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();

    visuals.widgets.active.bg_fill = ACCENT_COLOR;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(183, 28, 28);
    visuals.widgets.hovered.corner_radius = CornerRadius::same(6);

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(45, 45, 45);
    visuals.widgets.inactive.corner_radius = CornerRadius::same(6);

    visuals.selection.bg_fill = ACCENT_COLOR.linear_multiply(0.4);

    visuals.faint_bg_color = Color32::from_rgb(35, 35, 35);
    visuals.extreme_bg_color = Color32::from_rgb(20, 20, 20);

    ctx.set_visuals(visuals);
}

pub fn card_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(MARGIN_CARD as i8))
        .stroke(Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
}

pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgb(30, 30, 30))
        .inner_margin(Margin {
            left: PANEL_LEFT as i8,
            right: PANEL_RIGHT as i8,
            top: PANEL_TOP as i8,
            bottom: PANEL_BOTTOM as i8,
        })
        .stroke(Stroke::new(1.0, Color32::from_rgb(45, 45, 45)))
}

/// Border for a text field. `pulse` is the current pulse strength in `0..=1`
/// and wins over the invalid colour while it is visible.
pub fn field_stroke(ui: &egui::Ui, invalid: bool, pulse: f32) -> Stroke {
    let base = if invalid {
        Stroke::new(1.5, INVALID_COLOR)
    } else {
        ui.visuals().widgets.inactive.bg_stroke
    };

    if pulse > 0.0 {
        Stroke::new(
            base.width + 1.5 * pulse,
            base.color.lerp_to_gamma(PULSE_COLOR, pulse.clamp(0.0, 1.0)),
        )
    } else {
        base
    }
}

pub fn field_frame(ui: &egui::Ui, stroke: Stroke) -> egui::Frame {
    egui::Frame::new()
        .fill(ui.visuals().extreme_bg_color)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(MARGIN_FIELD as i8))
        .stroke(stroke)
}
