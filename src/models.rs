use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A tracked currency and its current rate against the base currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub rate: Decimal,
}
