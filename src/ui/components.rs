//! Shared UI components.

use eframe::egui::{self, Color32, Response, RichText, Stroke, Ui};

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 100);
    pub const PRIMARY: Color32 = Color32::from_rgb(70, 120, 220);
}

/// Render a panel header with title.
pub fn panel_header(ui: &mut Ui, title: &str) {
    ui.heading(RichText::new(title).size(24.0));
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(20.0);
}

/// Render a filled primary button with a leading icon.
pub fn primary_button_with_icon(ui: &mut Ui, icon: &str, text: &str) -> Response {
    let label = if icon.is_empty() {
        text.to_string()
    } else {
        format!("{icon} {text}")
    };
    ui.add(
        egui::Button::new(RichText::new(label).size(14.0).color(Color32::WHITE))
            .fill(colors::PRIMARY)
            .min_size(egui::vec2(110.0, 30.0)),
    )
}

/// Draw the widgets added in `add_contents` with an error outline when `invalid`.
pub fn with_error_outline<R>(ui: &mut Ui, invalid: bool, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    ui.scope(|ui| {
        if invalid {
            let stroke = Stroke::new(1.5, colors::ERROR);
            let widgets = &mut ui.visuals_mut().widgets;
            widgets.inactive.bg_stroke = stroke;
            widgets.hovered.bg_stroke = stroke;
            widgets.active.bg_stroke = stroke;
        }
        add_contents(ui)
    })
    .inner
}

/// Render a field error message beneath its input.
pub fn field_error(ui: &mut Ui, message: Option<&str>) {
    if let Some(message) = message {
        ui.label(RichText::new(message).size(12.0).color(colors::ERROR));
    }
}
