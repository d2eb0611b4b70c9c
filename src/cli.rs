// src/cli.rs
use std::env;
use std::error::Error;

use chrono::{Local, NaiveDate};

use crate::api::MealService;
use crate::config::options::SchoolOptions;
use crate::data::{MealRow, MealSlot, SlotSet};
use crate::view::is_weekend;

pub struct Params {
    pub date: NaiveDate,
    /// None prints every slot the date has.
    pub slot: Option<MealSlot>,
    pub school: SchoolOptions,
}

impl Params {
    fn new() -> Self {
        Self {
            date: Local::now().date_naive(),
            slot: None,
            school: SchoolOptions::default(),
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    // Weekends short-circuit; no request is made.
    if is_weekend(params.date) {
        println!("주말은 급식이 없습니다.");
        return Ok(());
    }

    let service = MealService::new(params.school.clone())?;
    let rows = service.fetch_meals(params.date)?;
    if rows.is_empty() {
        println!("급식이 없습니다.");
        return Ok(());
    }

    let slots: Vec<MealSlot> = match params.slot {
        Some(slot) => vec![slot],
        None => SlotSet::from_rows(&rows).iter().collect(),
    };

    for slot in slots {
        print_slot(&rows, slot);
    }
    Ok(())
}

fn print_slot(rows: &[MealRow], slot: MealSlot) {
    let Some(row) = rows.iter().find(|r| r.slot() == Some(slot)) else {
        println!("[{}] 급식이 없습니다.", slot.label());
        return;
    };

    let label = row.slot_name.as_deref().unwrap_or(slot.label());
    match &row.calories {
        Some(cal) => println!("[{}] {}", label, cal),
        None => println!("[{}]", label),
    }
    for dish in row.dishes() {
        if dish.allergy.is_empty() {
            println!("  {}", dish.name);
        } else {
            println!("  {} ({})", dish.name, dish.allergy);
        }
    }
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-d" | "--date" => {
                let v = args.next().ok_or("Missing value for --date")?;
                params.date = NaiveDate::parse_from_str(&v, "%Y-%m-%d")
                    .map_err(|_| format!("Invalid date (want YYYY-MM-DD): {}", v))?;
            }
            "-s" | "--slot" => {
                let v = args.next().ok_or("Missing value for --slot")?;
                params.slot = Some(parse_slot(&v)?);
            }
            "--office" => params.school.office_code = args.next().ok_or("Missing office code")?,
            "--school" => params.school.school_code = args.next().ok_or("Missing school code")?,
            "--key" => params.school.api_key = args.next().ok_or("Missing API key")?,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(())
}

fn parse_slot(v: &str) -> Result<MealSlot, Box<dyn Error>> {
    match v.to_ascii_lowercase().as_str() {
        "1" | "breakfast" | "조식" => Ok(MealSlot::Breakfast),
        "2" | "lunch" | "중식" => Ok(MealSlot::Lunch),
        "3" | "dinner" | "석식" => Ok(MealSlot::Dinner),
        other => Err(format!("Unknown slot: {}", other).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_arg_variants() {
        assert_eq!(parse_slot("1").unwrap(), MealSlot::Breakfast);
        assert_eq!(parse_slot("LUNCH").unwrap(), MealSlot::Lunch);
        assert_eq!(parse_slot("석식").unwrap(), MealSlot::Dinner);
        assert!(parse_slot("brunch").is_err());
    }
}
