// SPDX-License-Identifier: MIT

use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;
use std::collections::HashMap;
use std::str::FromStr;

use crate::currencies::replace_rates;
use crate::error::AppError;

/// Expected shape of the provider body. Anything else is malformed.
#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

/// Fetch the current exchange rates from the provider (rates per one unit
/// of the provider's base currency)
pub async fn fetch_current_exchange_rates(
    http: &reqwest::Client,
    base_url: &str,
    api_key: &str,
) -> Result<HashMap<String, Decimal>, AppError> {
    let url = format!("{base_url}/latest?access_key={api_key}");
    let response = http.get(&url).send().await?.error_for_status()?;
    let body = response.text().await?;

    let parsed: RatesResponse = match serde_json::from_str(&body) {
        Ok(parsed) => parsed,
        Err(_) => return Err(AppError::MalformedResponse(body)),
    };

    let mut rates = HashMap::with_capacity(parsed.rates.len());
    for (code, value) in parsed.rates {
        // Through the textual form, so no binary-float artifacts reach the
        // decimal domain.
        match Decimal::from_str(&value.to_string()) {
            Ok(rate) => {
                rates.insert(code, rate);
            }
            Err(_) => return Err(AppError::MalformedResponse(body)),
        }
    }

    Ok(rates)
}

/// Update exchange rates in the database with a fresh provider snapshot
pub async fn update_exchange_rates(
    http: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    pool: &SqlitePool,
) -> Result<(), AppError> {
    tracing::info!("fetching current exchange rates");
    let rates = fetch_current_exchange_rates(http, base_url, api_key).await?;

    replace_rates(pool, &rates).await?;
    tracing::info!(count = rates.len(), "exchange rates updated in database");

    Ok(())
}
