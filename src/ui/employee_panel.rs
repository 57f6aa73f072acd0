//! Employee data-entry panel.

use chrono::Local;
use eframe::egui::{self, ScrollArea, Ui};
use egui_extras::DatePickerButton;
use egui_phosphor::regular::PAPER_PLANE_RIGHT;

use super::components::{field_error, primary_button_with_icon, with_error_outline};
use crate::form::{EmployeeDraft, EmployeeForm, FieldKind, FieldPath, UNSELECTED, ValidationErrors, parse_flexible_date};
use crate::models::ReferenceData;

const FIELD_WIDTH: f32 = 260.0;
const COLUMNS: usize = 3;

/// Show the employee form.
///
/// Returns `true` if the submit button was clicked.
pub fn show(form: &mut EmployeeForm, ui: &mut Ui) -> bool {
    let mut submit = false;
    let (draft, reference, errors) = form.parts_mut();

    ScrollArea::vertical().id_salt("employee_form_scroll").show(ui, |ui| {
        field_grid(ui, "employee_form_grid", &FieldPath::PRIMARY, draft, reference, errors);

        ui.add_space(10.0);

        egui::CollapsingHeader::new("Additional details")
            .id_salt("employee_form_additional")
            .default_open(false)
            .show(ui, |ui| {
                field_grid(ui, "employee_form_additional_grid", &FieldPath::ADDITIONAL, draft, reference, errors);
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        if primary_button_with_icon(ui, PAPER_PLANE_RIGHT, "Submit").clicked() {
            submit = true;
        }
    });

    submit
}

fn field_grid(
    ui: &mut Ui,
    id: &str,
    paths: &[FieldPath],
    draft: &mut EmployeeDraft,
    reference: &ReferenceData,
    errors: &ValidationErrors,
) {
    egui::Grid::new(id)
        .num_columns(COLUMNS)
        .spacing([24.0, 14.0])
        .show(ui, |ui| {
            for (idx, path) in paths.iter().enumerate() {
                ui.vertical(|ui| {
                    field_cell(ui, *path, draft, reference, errors.get(*path));
                });
                if (idx + 1) % COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });
}

/// One labelled input with its error message beneath.
fn field_cell(ui: &mut Ui, path: FieldPath, draft: &mut EmployeeDraft, reference: &ReferenceData, error: Option<&str>) {
    ui.label(path.label());
    with_error_outline(ui, error.is_some(), |ui| match path.kind() {
        FieldKind::Select => select_input(ui, path, draft, reference),
        FieldKind::Date => date_input(ui, path, draft),
        kind => text_input(ui, path, kind, draft),
    });
    field_error(ui, error);
}

fn text_input(ui: &mut Ui, path: FieldPath, kind: FieldKind, draft: &mut EmployeeDraft) {
    let hint = match kind {
        FieldKind::Email => "name@example.com",
        FieldKind::Number => "Number",
        _ => path.label(),
    };
    if let Some(value) = draft.text_mut(path) {
        ui.add(egui::TextEdit::singleline(value).desired_width(FIELD_WIDTH).hint_text(hint));
    }
}

/// Typed date text plus a picker that writes the picked date back as text.
fn date_input(ui: &mut Ui, path: FieldPath, draft: &mut EmployeeDraft) {
    let Some(value) = draft.text_mut(path) else {
        return;
    };

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(value)
                .desired_width(FIELD_WIDTH - 40.0)
                .hint_text("YYYY-MM-DD"),
        );

        let mut picked = parse_flexible_date(value).unwrap_or_else(|| Local::now().date_naive());
        let response = ui.add(
            DatePickerButton::new(&mut picked)
                .id_salt(path.as_str())
                .format("")
                .calendar_week(false),
        );
        if response.changed() {
            *value = picked.format("%Y-%m-%d").to_string();
        }
    });
}

fn select_input(ui: &mut Ui, path: FieldPath, draft: &mut EmployeeDraft, reference: &ReferenceData) {
    if path == FieldPath::Gender {
        let placeholder = "Select your gender";
        egui::ComboBox::from_id_salt(path.as_str())
            .width(FIELD_WIDTH)
            .selected_text(reference.gender_label(&draft.gender).unwrap_or(placeholder))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut draft.gender, String::new(), placeholder);
                for gender in &reference.genders {
                    ui.selectable_value(&mut draft.gender, gender.id.clone(), &gender.label);
                }
            });
        return;
    }

    let (options, placeholder) = match path {
        FieldPath::DepartmentId => (&reference.departments, "Select your department"),
        _ => (&reference.designations, "Select your designation"),
    };
    let Some(selected) = draft.select_mut(path) else {
        return;
    };
    let selected_text = options
        .iter()
        .find(|o| o.id == *selected)
        .map(|o| o.label.as_str())
        .unwrap_or(placeholder);

    egui::ComboBox::from_id_salt(path.as_str())
        .width(FIELD_WIDTH)
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            ui.selectable_value(selected, UNSELECTED, placeholder);
            for option in options {
                ui.selectable_value(selected, option.id, &option.label);
            }
        });
}
