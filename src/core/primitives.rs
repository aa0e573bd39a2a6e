use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::error::{ScaleError, ScaleResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ScaleResult<f64> {
    value.to_f64().ok_or_else(|| {
        ScaleError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

pub fn f64_to_decimal(value: f64, field_name: &str) -> ScaleResult<Decimal> {
    Decimal::from_f64(value).ok_or_else(|| {
        ScaleError::InvalidData(format!("{field_name} cannot be represented as decimal"))
    })
}
