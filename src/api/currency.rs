use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::currencies;
use crate::error::AppError;
use crate::models::Currency;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/currencies", get(get_currencies))
        .route("/convert", get(convert))
}

async fn get_currencies(
    State(state): State<AppState>,
) -> Result<Json<Vec<Currency>>, AppError> {
    let currencies = currencies::list_currencies(&state.pool).await?;

    Ok(Json(currencies))
}

#[derive(Deserialize)]
struct ConvertParams {
    source: String,
    target: String,
    amount: Decimal,
}

#[derive(Serialize)]
struct ConvertResponse {
    converted_amount: Decimal,
}

async fn convert(
    State(state): State<AppState>,
    Query(params): Query<ConvertParams>,
) -> Result<Json<ConvertResponse>, AppError> {
    let converted_amount = currencies::convert_currency(
        &state.pool,
        &params.source,
        &params.target,
        params.amount,
    )
    .await?;

    Ok(Json(ConvertResponse { converted_amount }))
}
