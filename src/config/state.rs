// src/config/state.rs
use chrono::{Local, NaiveDate};

use super::options::AppOptions;
use crate::data::MealSlot;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Date being queried
    pub selected_date: NaiveDate,

    /// Which of the three slots is showing
    pub selected_slot: MealSlot,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_date: Local::now().date_naive(),
            selected_slot: MealSlot::Breakfast,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            gui: GuiState::default(),
        }
    }
}
