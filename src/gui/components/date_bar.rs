// src/gui/components/date_bar.rs
//
// Header row: title plus the date picker. Picking a date restarts the
// fetch cycle (weekends short-circuit without a request).

use eframe::egui::{self, Align, Layout};
use egui_extras::DatePickerButton;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("급식");
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let changed = ui
                .add(DatePickerButton::new(&mut app.state.gui.selected_date).id_salt("meal_date"))
                .changed();
            if changed {
                logf!("UI: date → {}", app.state.gui.selected_date);
                let ctx = ui.ctx().clone();
                app.restart_cycle(&ctx);
            }
        });
    });
}
