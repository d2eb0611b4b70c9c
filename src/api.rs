// src/api.rs
//
// Meal data source: the NEIS mealServiceDietInfo open endpoint.
//
// One GET per (school, date). The response nests the rows two levels deep
// inside a named envelope; "no rows for this date" is reported by the
// service as an INFO-200 result code and surfaces here as an empty Vec,
// not an error.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::config::consts::MEAL_ENDPOINT;
use crate::config::options::SchoolOptions;
use crate::core::net::{self, NetError};
use crate::data::MealRow;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Net(#[from] NetError),

    /// Error result code from the service itself (bad key, bad school id, ...).
    #[error("service error {code}: {message}")]
    Service { code: String, message: String },
}

pub struct MealService {
    client: reqwest::blocking::Client,
    school: SchoolOptions,
}

impl MealService {
    pub fn new(school: SchoolOptions) -> Result<Self, ApiError> {
        Ok(Self {
            client: net::client().map_err(NetError::from)?,
            school,
        })
    }

    /// Fetch all meal rows for one date. Empty when the date has no service.
    pub fn fetch_meals(&self, date: NaiveDate) -> Result<Vec<MealRow>, ApiError> {
        let ymd = mlsv_ymd(date);
        let envelope: Envelope = net::get_json(
            &self.client,
            MEAL_ENDPOINT,
            &[
                ("KEY", self.school.api_key.as_str()),
                ("Type", "json"),
                ("ATPT_OFCDC_SC_CODE", self.school.office_code.as_str()),
                ("SD_SCHUL_CODE", self.school.school_code.as_str()),
                ("MLSV_YMD", ymd.as_str()),
            ],
        )?;
        envelope.into_rows()
    }
}

/// The endpoint wants the date as bare digits.
fn mlsv_ymd(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/* ---------- response envelope ---------- */

// Success: {"mealServiceDietInfo":[{"head":[...]},{"row":[...]}]}
// No data / error: {"RESULT":{"CODE":"INFO-200","MESSAGE":"..."}}
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "mealServiceDietInfo")]
    blocks: Option<Vec<Block>>,
    #[serde(rename = "RESULT")]
    result: Option<ServiceResult>,
}

#[derive(Debug, Deserialize)]
struct Block {
    #[serde(default)]
    row: Option<Vec<MealRow>>,
}

#[derive(Debug, Deserialize)]
struct ServiceResult {
    #[serde(rename = "CODE", default)]
    code: String,
    #[serde(rename = "MESSAGE", default)]
    message: String,
}

impl Envelope {
    fn into_rows(self) -> Result<Vec<MealRow>, ApiError> {
        if let Some(blocks) = self.blocks {
            return Ok(blocks.into_iter().find_map(|b| b.row).unwrap_or_default());
        }
        match self.result {
            // INFO-200: nothing published for the requested filters.
            Some(r) if r.code.starts_with("INFO-200") => Ok(Vec::new()),
            Some(r) => Err(ApiError::Service { code: r.code, message: r.message }),
            // Unknown shape: treat like an empty day rather than failing the view.
            None => Ok(Vec::new()),
        }
    }
}
