// src/gui/components/slot_tabs.rs
//
// The three meal-slot buttons. Availability comes straight from the
// derived view state; the card below decides what to show for the pick.

use eframe::egui::{self, SelectableLabel};

use crate::data::MealSlot;
use crate::gui::app::App;
use crate::view;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let choosable: Vec<(MealSlot, bool)> = MealSlot::ALL
        .iter()
        .map(|&slot| (slot, view::slot_choosable(app.cycle.status(), slot)))
        .collect();

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for (slot, enabled) in choosable {
            let selected = app.state.gui.selected_slot == slot;
            let clicked = ui
                .add_enabled(enabled, SelectableLabel::new(selected, slot.label()))
                .clicked();
            if clicked && !selected {
                logf!("UI: slot {:?} → {:?}", app.state.gui.selected_slot, slot);
                app.state.gui.selected_slot = slot;
            }
        }
    });
}
