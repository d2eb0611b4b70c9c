// src/gui/components/menu_card.rs
//
// Central card: the dish list for the selected slot, or the state
// message. Dish entries are reparsed from the raw row on every frame;
// the parse is cheap and the rows stay canonical.

use eframe::egui::{self, Align, Color32, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::data::DishEntry;
use crate::gui::app::App;
use crate::view::{self, FetchStatus};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    match app.cycle.status() {
        FetchStatus::Idle | FetchStatus::Loading => center_note(ui, "로딩중..."),
        FetchStatus::Failed(_) => {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(RichText::new("서버 오류").color(Color32::from_rgb(0xE6, 0x55, 0x55)));
            });
        }
        FetchStatus::Weekend => center_note(ui, "🍽 주말은 급식이 없습니다."),
        FetchStatus::Loaded(_) => {
            let slot = app.state.gui.selected_slot;
            match view::selected_row(app.cycle.status(), slot) {
                None => center_note(ui, "🍽 급식이 없습니다."),
                Some(row) => {
                    if let Some(cal) = &row.calories {
                        ui.label(RichText::new(cal.as_str()).weak().small());
                        ui.add_space(4.0);
                    }
                    dish_table(ui, &row.dishes());
                }
            }
        }
    }
}

fn center_note(ui: &mut egui::Ui, text: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(RichText::new(text).weak());
    });
}

fn dish_table(ui: &mut egui::Ui, dishes: &[DishEntry]) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder())
        .column(Column::auto().at_least(60.0))
        .body(|body| {
            body.rows(22.0, dishes.len(), |mut row| {
                let dish = &dishes[row.index()];
                row.col(|ui| {
                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                        ui.label(&dish.name);
                    });
                });
                row.col(|ui| {
                    if !dish.allergy.is_empty() {
                        ui.label(RichText::new(format!("({})", dish.allergy)).weak().small());
                    }
                });
            });
        });
}
