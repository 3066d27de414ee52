pub mod currency;
pub mod rates;

use axum::Router;
use sqlx::sqlite::SqlitePool;

/// Shared handler state, constructed once at startup and injected into
/// every handler through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub http: reqwest::Client,
    pub api_key: String,
    pub rates_api_url: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(currency::routes())
        .merge(rates::routes())
        .with_state(state)
}
