// src/config/consts.rs

// Net config
pub const MEAL_ENDPOINT: &str = "https://open.neis.go.kr/hub/mealServiceDietInfo";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Default school: Gyeonggi-do education office, sample high school.
// Override with --office/--school (CLI) or your own SchoolOptions.
pub const DEFAULT_OFFICE_CODE: &str = "J10";
pub const DEFAULT_SCHOOL_CODE: &str = "7530909";

// The open-data key the project ships with; NEIS_KEY wins when set.
pub const DEFAULT_API_KEY: &str = "a63b8a36cb7f4971bdcc868a91dd25c5";
pub const API_KEY_ENV: &str = "NEIS_KEY";

// Logging
pub const LOG_FILE: &str = "debug.log";
pub const LOG_ENV: &str = "NEIS_MEAL_LOG";
