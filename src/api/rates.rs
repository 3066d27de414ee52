use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::api::AppState;
use crate::currencies;
use crate::error::AppError;
use crate::exchange_rates;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/last-update-time", get(last_update_time))
        .route("/update-rates", post(update_rates))
}

#[derive(Serialize)]
struct LastUpdateResponse {
    last_update_time: String,
}

async fn last_update_time(
    State(state): State<AppState>,
) -> Result<Json<LastUpdateResponse>, AppError> {
    let last_updated = currencies::get_last_update_time(&state.pool)
        .await?
        .ok_or(AppError::NoUpdateHistory)?;

    Ok(Json(LastUpdateResponse {
        last_update_time: last_updated.format("%d-%b-%Y %H:%M").to_string(),
    }))
}

#[derive(Serialize)]
struct UpdateResponse {
    message: String,
}

async fn update_rates(State(state): State<AppState>) -> Result<Json<UpdateResponse>, AppError> {
    exchange_rates::update_exchange_rates(
        &state.http,
        &state.rates_api_url,
        &state.api_key,
        &state.pool,
    )
    .await?;

    Ok(Json(UpdateResponse {
        message: "Exchange rates updated successfully.".to_string(),
    }))
}
