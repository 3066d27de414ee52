// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::sqlite::SqlitePool;
use std::collections::HashMap;
use std::str::FromStr;

use crate::error::AppError;
use crate::models::Currency;

fn parse_stored_rate(raw: &str) -> Result<Decimal, AppError> {
    Decimal::from_str(raw).map_err(|e| AppError::Database(sqlx::Error::Decode(Box::new(e))))
}

/// Get the stored rate for a currency by its code
pub async fn get_currency_rate(pool: &SqlitePool, code: &str) -> Result<Decimal, AppError> {
    let record = sqlx::query_as::<_, (String,)>(
        r#"
        SELECT rate
        FROM currencies
        WHERE code = ?
        "#,
    )
    .bind(code)
    .fetch_optional(pool)
    .await?;

    match record {
        Some((rate,)) => parse_stored_rate(&rate),
        None => Err(AppError::CurrencyNotFound(code.to_string())),
    }
}

/// List all currencies in the database
pub async fn list_currencies(pool: &SqlitePool) -> Result<Vec<Currency>, AppError> {
    let records = sqlx::query_as::<_, (String, String, String)>(
        r#"
        SELECT code, name, rate
        FROM currencies
        ORDER BY code
        "#,
    )
    .fetch_all(pool)
    .await?;

    records
        .into_iter()
        .map(|(code, name, rate)| {
            let rate = parse_stored_rate(&rate)?;
            Ok(Currency { code, name, rate })
        })
        .collect()
}

/// Get the timestamp of the most recent bulk rate refresh, if any
pub async fn get_last_update_time(pool: &SqlitePool) -> Result<Option<DateTime<Utc>>, AppError> {
    let record = sqlx::query_as::<_, (DateTime<Utc>,)>(
        r#"
        SELECT last_updated
        FROM currency_updates
        ORDER BY id DESC
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;

    Ok(record.map(|(last_updated,)| last_updated))
}

/// Overwrite the rates of all known currencies present in the mapping and
/// append one update-log record, atomically. Codes the store doesn't track
/// are ignored; stored codes missing from the mapping keep their rate.
pub async fn replace_rates(
    pool: &SqlitePool,
    rates: &HashMap<String, Decimal>,
) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    for (code, rate) in rates {
        sqlx::query(
            r#"
            UPDATE currencies
            SET rate = ?, updated_at = CURRENT_TIMESTAMP
            WHERE code = ?
            "#,
        )
        .bind(rate.to_string())
        .bind(code)
        .execute(&mut *tx)
        .await?;
    }

    sqlx::query(
        r#"
        INSERT INTO currency_updates (last_updated)
        VALUES (?)
        "#,
    )
    .bind(Utc::now())
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}

/// Convert an amount from one currency to another using the stored rates
pub async fn convert_currency(
    pool: &SqlitePool,
    source: &str,
    target: &str,
    amount: Decimal,
) -> Result<Decimal, AppError> {
    let source_rate = get_currency_rate(pool, source).await?;
    let target_rate = get_currency_rate(pool, target).await?;

    // A zero source rate would divide by zero; treat it as unavailable.
    let ratio = target_rate
        .checked_div(source_rate)
        .ok_or_else(|| AppError::CurrencyNotFound(source.to_string()))?;

    Ok(amount * ratio)
}
