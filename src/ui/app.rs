//! Main application UI.

use eframe::egui::{self, Align, Layout};

use crate::config::AppConfig;
use crate::form::{EmployeeForm, LogSubmitHandler, SubmitOutcome};

use super::components::{colors, panel_header};
use super::employee_panel;

/// Main application state.
pub struct App {
    pub form: EmployeeForm,
    /// Config problem reported at startup; the app runs on defaults.
    pub config_error: Option<String>,
    /// Fields that failed the last submit, for the status bar.
    invalid_count: usize,
}

impl App {
    pub fn new(config: &AppConfig, config_error: Option<String>) -> Self {
        Self {
            form: EmployeeForm::new(config.reference.clone(), LogSubmitHandler),
            config_error,
            invalid_count: 0,
        }
    }

    /// Validate and submit the current draft.
    pub fn submit(&mut self) {
        self.invalid_count = match self.form.submit() {
            SubmitOutcome::Submitted => 0,
            SubmitOutcome::Invalid(errors) => errors.len(),
        };
    }

    /// Render the status bar.
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(28.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if self.invalid_count > 0 {
                        ui.colored_label(
                            colors::ERROR,
                            format!("{} field(s) need attention", self.invalid_count),
                        );
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.weak("Dates: YYYY-MM-DD");
                    });
                });
            });
    }

    /// Render the startup config error dialog.
    fn show_config_error(&mut self, ctx: &egui::Context) {
        if let Some(err) = self.config_error.clone() {
            egui::Window::new("Configuration Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, &err);
                    ui.add_space(6.0);
                    ui.colored_label(colors::WARNING, "Using built-in reference data.");
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.config_error = None;
                    }
                });
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Status bar
        self.show_status_bar(ctx);

        // Config error dialog
        self.show_config_error(ctx);

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| {
            panel_header(ui, "Employee Details");
            if employee_panel::show(&mut self.form, ui) {
                self.submit();
            }
        });
    }
}
