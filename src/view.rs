// src/view.rs
//
// Derived view state for one selected date, and the fetch cycle that
// feeds it. Nothing here touches the network or the UI; the GUI and the
// CLI both consume these helpers, and tests drive them directly.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::data::{MealRow, MealSlot, SlotSet};

/// Saturday/Sunday have no meal service; no fetch is issued for them.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Display states for one date selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchStatus {
    /// Nothing fetched yet for the current date.
    #[default]
    Idle,
    Loading,
    Loaded(Vec<MealRow>),
    /// Single generic failure; transport and decode problems collapse here.
    Failed(String),
    /// Weekend selected. Terminal: no fetch result may override it.
    Weekend,
}

/// Fetch lifecycle for the currently selected date.
///
/// Every date change restarts the cycle and bumps the generation, so a
/// result from an older fetch can never overwrite newer state.
#[derive(Debug, Default)]
pub struct FetchCycle {
    generation: u64,
    status: FetchStatus,
}

impl FetchCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// Restart for a new date. Returns the generation token to tag the
    /// fetch with, or None when the date is a weekend and no fetch
    /// should be issued.
    pub fn begin(&mut self, date: NaiveDate) -> Option<u64> {
        self.generation += 1;
        if is_weekend(date) {
            self.status = FetchStatus::Weekend;
            None
        } else {
            self.status = FetchStatus::Loading;
            Some(self.generation)
        }
    }

    /// Apply a fetch result; reports whether it was applied. Stale
    /// generations are dropped, as is anything arriving in Weekend.
    pub fn apply(&mut self, generation: u64, result: Result<Vec<MealRow>, String>) -> bool {
        if generation != self.generation || self.status == FetchStatus::Weekend {
            return false;
        }
        self.status = match result {
            Ok(rows) => FetchStatus::Loaded(rows),
            Err(msg) => FetchStatus::Failed(msg),
        };
        true
    }
}

/// Slots present among the fetched rows. Empty unless Loaded.
pub fn available_slots(status: &FetchStatus) -> SlotSet {
    match status {
        FetchStatus::Loaded(rows) => SlotSet::from_rows(rows),
        _ => SlotSet::default(),
    }
}

/// Whether a slot can be picked right now. Before the first fetch every
/// slot is open; after a successful fetch only slots with data are; a
/// weekend, an in-flight fetch, or a failed one closes all three.
pub fn slot_choosable(status: &FetchStatus, slot: MealSlot) -> bool {
    match status {
        FetchStatus::Idle => true,
        FetchStatus::Loaded(_) => available_slots(status).contains(slot),
        FetchStatus::Loading | FetchStatus::Failed(_) | FetchStatus::Weekend => false,
    }
}

/// The row to display for the requested slot, if any.
pub fn selected_row(status: &FetchStatus, slot: MealSlot) -> Option<&MealRow> {
    match status {
        FetchStatus::Loaded(rows) => rows.iter().find(|r| r.slot() == Some(slot)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 10).unwrap()
    }

    #[test]
    fn cycle_restarts_as_loading() {
        let mut cycle = FetchCycle::new();
        assert_eq!(*cycle.status(), FetchStatus::Idle);

        let first = cycle.begin(monday()).unwrap();
        assert_eq!(*cycle.status(), FetchStatus::Loading);

        let second = cycle.begin(monday()).unwrap();
        assert!(second > first);
        assert_eq!(*cycle.status(), FetchStatus::Loading);
    }

    #[test]
    fn apply_sets_loaded_and_failed() {
        let mut cycle = FetchCycle::new();
        let generation = cycle.begin(monday()).unwrap();
        assert!(cycle.apply(generation, Ok(Vec::new())));
        assert_eq!(*cycle.status(), FetchStatus::Loaded(Vec::new()));

        let generation = cycle.begin(monday()).unwrap();
        assert!(cycle.apply(generation, Err(s!("boom"))));
        assert_eq!(*cycle.status(), FetchStatus::Failed(s!("boom")));
    }
}
