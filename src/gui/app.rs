// src/gui/app.rs
use std::error::Error;
use std::sync::{
    Arc, Mutex,
    mpsc::{self, Receiver, Sender},
};

use eframe::egui;

use crate::config::state::AppState;
use crate::view::{FetchCycle, FetchStatus};

use super::{
    actions::fetch::{self, FetchOutcome},
    components, fonts,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "급식 식단표",
        options,
        Box::new(|cc| {
            fonts::install(&cc.egui_ctx);
            let mut app = App::new(AppState::default());
            app.restart_cycle(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // per-date fetch lifecycle; generation-tagged against stale results
    pub cycle: FetchCycle,

    // status line shown at the bottom of the window
    pub status: Arc<Mutex<String>>,

    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let (tx, rx) = mpsc::channel();

        logf!(
            "Init: date={} slot={:?} school={}/{}",
            state.gui.selected_date,
            state.gui.selected_slot,
            state.options.school.office_code,
            state.options.school.school_code
        );

        Self {
            state,
            cycle: FetchCycle::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            tx,
            rx,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Restart the fetch cycle for the currently selected date.
    pub fn restart_cycle(&mut self, ctx: &egui::Context) {
        let date = self.state.gui.selected_date;
        match self.cycle.begin(date) {
            None => {
                logf!("Fetch: {date} is a weekend, no request");
                self.status("Weekend, no meal service");
            }
            Some(generation) => {
                logf!("Fetch: Begin date={date} generation={generation}");
                self.status("Loading…");
                fetch::start(
                    self.tx.clone(),
                    ctx.clone(),
                    self.state.options.school.clone(),
                    date,
                    generation,
                );
            }
        }
    }

    /// Apply finished fetches; stale generations are dropped.
    fn drain_fetch_outcomes(&mut self) {
        while let Ok(outcome) = self.rx.try_recv() {
            let generation = outcome.generation;
            if self.cycle.apply(generation, outcome.result) {
                match self.cycle.status() {
                    FetchStatus::Loaded(rows) => {
                        logf!("Fetch: OK generation={generation} rows={}", rows.len());
                        self.status("Ready");
                    }
                    FetchStatus::Failed(e) => {
                        loge!("Fetch: Error generation={generation}: {e}");
                        self.status(format!("Error: {e}"));
                    }
                    _ => {}
                }
            } else {
                logd!("Fetch: Dropped stale result generation={generation}");
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_fetch_outcomes();

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status.lock().unwrap().as_str());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::date_bar::draw(ui, self);
            components::slot_tabs::draw(ui, self);

            ui.separator();

            components::menu_card::draw(ui, self);
        });
    }
}
