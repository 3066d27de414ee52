use anyhow::{Context, Result};
use std::env;

const DEFAULT_RATES_API_URL: &str = "http://api.exchangeratesapi.io";

#[derive(Debug, Clone)]
pub struct Config {
    /// Access key for the rates provider.
    pub api_key: String,
    /// SQLite connection string, e.g. "sqlite://exchange_rates.db".
    pub database_url: String,
    /// Rates provider base URL. Overridable so tests can point at a mock.
    pub rates_api_url: String,
}

pub fn load_config() -> Result<Config> {
    let api_key = env::var("API_KEY").context("API_KEY must be set")?;
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let rates_api_url =
        env::var("RATES_API_URL").unwrap_or_else(|_| DEFAULT_RATES_API_URL.to_string());

    Ok(Config {
        api_key,
        database_url,
        rates_api_url,
    })
}
