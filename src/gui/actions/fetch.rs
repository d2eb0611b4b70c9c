// src/gui/actions/fetch.rs
//
// Background fetch worker. One thread per request; the result comes back
// through the channel tagged with the cycle generation that started it,
// and FetchCycle::apply on the UI side drops anything stale.

use std::sync::mpsc::Sender;
use std::thread;

use chrono::NaiveDate;
use eframe::egui;

use crate::api::MealService;
use crate::config::options::SchoolOptions;
use crate::data::MealRow;

/// One finished fetch attempt.
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<Vec<MealRow>, String>,
}

pub fn start(
    tx: Sender<FetchOutcome>,
    ctx: egui::Context,
    school: SchoolOptions,
    date: NaiveDate,
    generation: u64,
) {
    thread::spawn(move || {
        let result = MealService::new(school)
            .and_then(|service| service.fetch_meals(date))
            .map_err(|e| e.to_string());
        // receiver may be gone if the window closed; nothing to do then
        let _ = tx.send(FetchOutcome { generation, result });
        ctx.request_repaint();
    });
}
