// src/data.rs
//
// Domain types for the meal view.
//
// - MealSlot: the three daily services, keyed by the source's ordinal code.
// - MealRow: one raw API row per (date, slot); only SCRAPE-equivalent code
//            (the fetch path) produces these, everything else reads them.
// - DishEntry: one parsed dish plus its allergen annotation.
// - SlotSet: tiny bitmask set of slots, used for availability.

use serde::Deserialize;

/// One of the three daily meal services, in source order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MealSlot {
    Breakfast = 1,
    Lunch = 2,
    Dinner = 3,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    /// The MMEAL_SC_CODE ordinal.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Display label, as published by the source.
    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "조식",
            MealSlot::Lunch => "중식",
            MealSlot::Dinner => "석식",
        }
    }

    /// Map a raw slot code ("1", " 2", "03") to a slot.
    pub fn from_code(code: &str) -> Option<MealSlot> {
        match code.trim().parse::<u8>().ok()? {
            1 => Some(MealSlot::Breakfast),
            2 => Some(MealSlot::Lunch),
            3 => Some(MealSlot::Dinner),
            _ => None,
        }
    }
}

/// Raw row from the meal endpoint. Held in memory for the current date
/// only; replaced wholesale when the date changes.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MealRow {
    #[serde(rename = "MMEAL_SC_CODE", default)]
    pub slot_code: String,

    /// Source's own display name for the slot ("중식", ...).
    #[serde(rename = "MMEAL_SC_NM", default)]
    pub slot_name: Option<String>,

    /// Served date as bare digits (YYYYMMDD).
    #[serde(rename = "MLSV_YMD", default)]
    pub served_on: Option<String>,

    /// Raw dish string, entries joined by "<br/>".
    #[serde(rename = "DDISH_NM", default)]
    pub dish_text: String,

    /// Calorie summary, e.g. "745.1 Kcal".
    #[serde(rename = "CAL_INFO", default)]
    pub calories: Option<String>,
}

impl MealRow {
    pub fn slot(&self) -> Option<MealSlot> {
        MealSlot::from_code(&self.slot_code)
    }

    /// Parse the dish string. Recomputed on demand; rows stay raw.
    pub fn dishes(&self) -> Vec<DishEntry> {
        crate::menu::parse_menu(&self.dish_text)
    }
}

/// One parsed dish plus its allergen codes ("" when none).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DishEntry {
    pub name: String,
    /// Dot-separated digit groups, e.g. "5.6.13".
    pub allergy: String,
}

/// Set of meal slots as a bitmask. Three slots, so a u8 is plenty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlotSet(u8);

impl SlotSet {
    pub fn insert(&mut self, slot: MealSlot) {
        self.0 |= 1 << (slot.code() - 1);
    }

    pub fn contains(self, slot: MealSlot) -> bool {
        self.0 & (1 << (slot.code() - 1)) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Distinct slots present among the rows; junk codes are ignored.
    pub fn from_rows(rows: &[MealRow]) -> SlotSet {
        let mut set = SlotSet::default();
        for slot in rows.iter().filter_map(MealRow::slot) {
            set.insert(slot);
        }
        set
    }

    pub fn iter(self) -> impl Iterator<Item = MealSlot> {
        MealSlot::ALL.into_iter().filter(move |s| self.contains(*s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_codes_parse_loosely() {
        assert_eq!(MealSlot::from_code("1"), Some(MealSlot::Breakfast));
        assert_eq!(MealSlot::from_code(" 2 "), Some(MealSlot::Lunch));
        assert_eq!(MealSlot::from_code("03"), Some(MealSlot::Dinner));
        assert_eq!(MealSlot::from_code("4"), None);
        assert_eq!(MealSlot::from_code("lunch"), None);
        assert_eq!(MealSlot::from_code(""), None);
    }

    #[test]
    fn slot_set_insert_contains_iter() {
        let mut set = SlotSet::default();
        assert!(set.is_empty());

        set.insert(MealSlot::Dinner);
        set.insert(MealSlot::Breakfast);
        assert!(set.contains(MealSlot::Breakfast));
        assert!(!set.contains(MealSlot::Lunch));
        assert_eq!(set.len(), 2);

        // iteration follows slot order, not insertion order
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![MealSlot::Breakfast, MealSlot::Dinner]);
    }

    #[test]
    fn labels_are_fixed() {
        let labels: Vec<_> = MealSlot::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["조식", "중식", "석식"]);
    }
}
