// src/core/net.rs
//
// Blocking HTTP JSON GET. Every request shares the timeout and UA set here.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::consts::REQUEST_TIMEOUT_SECS;

#[derive(Debug, Error)]
pub enum NetError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub fn client() -> reqwest::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .user_agent(concat!("neis_meal/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// GET `url` with `query` and decode the JSON body.
pub fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<T, NetError> {
    let body = client
        .get(url)
        .query(query)
        .send()?
        .error_for_status()?
        .text()?;
    Ok(serde_json::from_str(&body)?)
}
