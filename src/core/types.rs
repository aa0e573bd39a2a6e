use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ScaleError, ScaleResult};

/// Actual data extent to be plotted on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRange {
    pub min_point: f64,
    pub max_point: f64,
}

impl DataRange {
    /// Creates a range from finite bounds with `min_point <= max_point`.
    ///
    /// Equal bounds are accepted; the scale still produces a usable spacing.
    pub fn new(min_point: f64, max_point: f64) -> ScaleResult<Self> {
        if !min_point.is_finite() || !max_point.is_finite() || min_point > max_point {
            return Err(ScaleError::InvalidRange {
                min: min_point,
                max: max_point,
            });
        }

        Ok(Self {
            min_point,
            max_point,
        })
    }

    /// Extent of the finite values in `values`. Non-finite entries are skipped.
    pub fn from_values(values: &[f64]) -> ScaleResult<Self> {
        let (min_point, max_point) = values
            .iter()
            .copied()
            .filter(|value| value.is_finite())
            .fold(None, |extent: Option<(f64, f64)>, value| match extent {
                Some((min, max)) => Some((min.min(value), max.max(value))),
                None => Some((value, value)),
            })
            .ok_or_else(|| {
                ScaleError::InvalidData("range requires at least one finite value".to_owned())
            })?;

        Self::new(min_point, max_point)
    }

    pub fn from_decimal(min_point: Decimal, max_point: Decimal) -> ScaleResult<Self> {
        Self::new(
            decimal_to_f64(min_point, "min point")?,
            decimal_to_f64(max_point, "max point")?,
        )
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max_point - self.min_point
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.min_point == self.max_point
    }
}
