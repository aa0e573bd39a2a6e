use serde::{Deserialize, Serialize};

/// How a raw value is snapped onto the `{1, 2, 5, 10} * 10^k` ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NiceRounding {
    /// Nearest step (fraction thresholds 1.5, 3 and 7).
    #[default]
    Round,
    /// Smallest step that is not below the value, up to a relative slack of
    /// `1e-9` for float noise.
    Ceil,
}

/// Smallest value snapped; subnormal inputs are raised to it so the result
/// never underflows to zero.
pub const MIN_NICE_INPUT: f64 = f64::MIN_POSITIVE;

/// Slack for `Ceil` so a fraction of `1.0000000000000002` stays on step 1.
const CEIL_TOLERANCE: f64 = 1e-9;

/// Snaps `value` to a "nice" number: 1, 2, 5 or 10 times a power of ten.
///
/// Non-finite input yields NaN. Zero and negative input yield `0.0`.
/// Positive values below [`MIN_NICE_INPUT`] are snapped as `MIN_NICE_INPUT`.
#[must_use]
pub fn nice_number(value: f64, rounding: NiceRounding) -> f64 {
    if !value.is_finite() {
        return f64::NAN;
    }
    if value <= 0.0 {
        return 0.0;
    }

    let value = value.max(MIN_NICE_INPUT);
    let magnitude = power_of_ten_floor(value);
    let fraction = value / magnitude;
    let nice_fraction = match rounding {
        NiceRounding::Round => {
            if fraction < 1.5 {
                1.0
            } else if fraction < 3.0 {
                2.0
            } else if fraction < 7.0 {
                5.0
            } else {
                10.0
            }
        }
        NiceRounding::Ceil => {
            if fraction <= 1.0 + CEIL_TOLERANCE {
                1.0
            } else if fraction <= 2.0 + CEIL_TOLERANCE {
                2.0
            } else if fraction <= 5.0 + CEIL_TOLERANCE {
                5.0
            } else {
                10.0
            }
        }
    };

    nice_fraction * magnitude
}

/// `10^floor(log10(value))` for finite positive `value`.
#[must_use]
pub fn power_of_ten_floor(value: f64) -> f64 {
    10f64.powf(value.log10().floor())
}
