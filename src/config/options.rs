// src/config/options.rs
use std::env;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub school: SchoolOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self { school: SchoolOptions::default() }
    }
}

/// Which school to query, plus the key the requests carry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchoolOptions {
    /// ATPT_OFCDC_SC_CODE, e.g. "J10" for Gyeonggi-do.
    pub office_code: String,
    /// SD_SCHUL_CODE, the per-school identifier.
    pub school_code: String,
    pub api_key: String,
}

impl Default for SchoolOptions {
    fn default() -> Self {
        Self {
            office_code: s!(DEFAULT_OFFICE_CODE),
            school_code: s!(DEFAULT_SCHOOL_CODE),
            api_key: env::var(API_KEY_ENV).unwrap_or_else(|_| s!(DEFAULT_API_KEY)),
        }
    }
}
