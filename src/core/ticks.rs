use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::core::nice_scale::NiceScale;
use crate::core::primitives::f64_to_decimal;
use crate::error::ScaleResult;

/// Upper bound on generated ticks for pathological override bounds.
pub const MAX_TICK_COUNT: usize = 100_000;
/// Finer spacings switch labels to exponent notation.
pub const MAX_FIXED_LABEL_PRECISION: usize = 12;
/// Ticks at or beyond `10^15` switch labels to exponent notation.
pub const SCIENTIFIC_MAGNITUDE_EXPONENT: i32 = 15;
/// Significant digits an `f64` can distinguish.
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;
const DECIMAL_MAX_SCALE: usize = 28;

const TICK_STEP_EPSILON: f64 = 1e-6;
const PRECISION_EPSILON: f64 = 1e-9;

pub type TickLabels = SmallVec<[String; 16]>;
pub type DecimalTicks = SmallVec<[Decimal; 16]>;

/// Tick positions `nice_min + i * tick_spacing`, ending at `nice_max`.
///
/// A tick within rounding noise of zero is reported as exactly `0.0`.
///
/// Positions are computed from the index rather than accumulated, so long
/// axes do not drift.
#[derive(Debug, Clone)]
pub struct Ticks {
    start: f64,
    end: f64,
    spacing: f64,
    index: usize,
    count: usize,
}

impl Iterator for Ticks {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }

        let mut value = self.start + self.index as f64 * self.spacing;
        if self.index + 1 == self.count
            && (value - self.end).abs() <= self.spacing * TICK_STEP_EPSILON
        {
            value = self.end;
        } else if value.abs() <= self.spacing * TICK_STEP_EPSILON {
            value = 0.0;
        }
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ticks {}

impl NiceScale {
    /// Number of gridlines between `nice_min` and `nice_max`, both included.
    ///
    /// Returns 0 for non-finite scales or a non-positive spacing.
    #[must_use]
    pub fn tick_count(self) -> usize {
        if !self.nice_min.is_finite()
            || !self.nice_max.is_finite()
            || !self.tick_spacing.is_finite()
            || self.tick_spacing <= 0.0
            || self.nice_max < self.nice_min
        {
            return 0;
        }

        let steps = (self.nice_max / self.tick_spacing - self.nice_min / self.tick_spacing
            + TICK_STEP_EPSILON)
            .floor();
        steps.min((MAX_TICK_COUNT - 1) as f64) as usize + 1
    }

    #[must_use]
    pub fn ticks(self) -> Ticks {
        Ticks {
            start: self.nice_min,
            end: self.nice_max,
            spacing: self.tick_spacing,
            index: 0,
            count: self.tick_count(),
        }
    }

    /// Fraction digits a fixed-point label needs to resolve the spacing.
    #[must_use]
    pub fn label_precision(self) -> usize {
        if !self.tick_spacing.is_finite() || self.tick_spacing <= 0.0 {
            return 0;
        }
        (-floor_exponent(self.tick_spacing)).max(0) as usize
    }

    /// Fixed-point while that stays short, exponent notation for very fine
    /// spacings or very large ticks.
    #[must_use]
    pub fn label_format(self) -> TickLabelFormat {
        if !self.tick_spacing.is_finite() || self.tick_spacing <= 0.0 {
            return TickLabelFormat::Fixed { precision: 0 };
        }

        let spacing_exponent = floor_exponent(self.tick_spacing);
        let extent = self.nice_min.abs().max(self.nice_max.abs());
        let magnitude_exponent = if extent.is_finite() && extent > 0.0 {
            floor_exponent(extent).max(spacing_exponent)
        } else {
            spacing_exponent
        };

        let precision = self.label_precision();
        if precision > MAX_FIXED_LABEL_PRECISION
            || magnitude_exponent >= SCIENTIFIC_MAGNITUDE_EXPONENT
        {
            let digits = (magnitude_exponent - spacing_exponent) as usize;
            TickLabelFormat::Scientific {
                precision: digits.min(MAX_SIGNIFICANT_DIGITS - 1),
            }
        } else {
            TickLabelFormat::Fixed { precision }
        }
    }

    #[must_use]
    pub fn format_tick(self, value: f64) -> String {
        format_tick_label(value, self.label_format())
    }

    #[must_use]
    pub fn tick_labels(self) -> TickLabels {
        let format = self.label_format();
        self.ticks()
            .map(|value| format_tick_label(value, format))
            .collect()
    }

    /// Tick values as decimals rounded to [`NiceScale::label_precision`].
    pub fn decimal_ticks(self) -> ScaleResult<DecimalTicks> {
        let precision = self.label_precision().min(DECIMAL_MAX_SCALE) as u32;
        self.ticks()
            .map(|value| f64_to_decimal(value, "tick").map(|tick| tick.round_dp(precision)))
            .collect()
    }
}

/// How tick values are rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickLabelFormat {
    /// Fixed-point with `precision` fraction digits.
    Fixed { precision: usize },
    /// Exponent notation with `precision` mantissa fraction digits.
    Scientific { precision: usize },
}

pub fn format_tick_label(value: f64, format: TickLabelFormat) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    let text = match format {
        TickLabelFormat::Fixed { precision } => format!("{value:.precision$}"),
        TickLabelFormat::Scientific { precision } => format!("{value:.precision$e}"),
    };
    if let Some(unsigned) = text.strip_prefix('-') {
        let mantissa = unsigned.split_once('e').map_or(unsigned, |(mantissa, _)| mantissa);
        if mantissa.chars().all(|c| c == '0' || c == '.') {
            return unsigned.to_owned();
        }
    }
    text
}

fn floor_exponent(value: f64) -> i32 {
    (value.log10() + PRECISION_EPSILON).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_label_is_normalized() {
        let fixed = TickLabelFormat::Fixed { precision: 2 };
        assert_eq!(format_tick_label(-0.0, fixed), "0.00");
        assert_eq!(format_tick_label(-1e-17, fixed), "0.00");
        assert_eq!(format_tick_label(-0.05, fixed), "-0.05");

        let scientific = TickLabelFormat::Scientific { precision: 1 };
        assert_eq!(format_tick_label(-0.0, scientific), "0.0e0");
        assert_eq!(format_tick_label(-2.5e19, scientific), "-2.5e19");
    }

    #[test]
    fn non_finite_label() {
        assert_eq!(
            format_tick_label(f64::NAN, TickLabelFormat::Fixed { precision: 2 }),
            "nan"
        );
    }

    #[test]
    fn near_zero_tick_is_exact_zero() {
        let scale = NiceScale {
            nice_min: -0.3,
            nice_max: 0.3,
            tick_spacing: 0.1,
        };
        assert!(scale.ticks().any(|value| value == 0.0));
    }

    #[test]
    fn degenerate_scale_has_no_ticks() {
        let scale = NiceScale {
            nice_min: 0.0,
            nice_max: 10.0,
            tick_spacing: 0.0,
        };
        assert_eq!(scale.tick_count(), 0);
        assert_eq!(scale.ticks().next(), None);
    }

    #[test]
    fn ticks_report_exact_size() {
        let scale = NiceScale {
            nice_min: 0.0,
            nice_max: 1.0,
            tick_spacing: 0.25,
        };
        let mut ticks = scale.ticks();
        assert_eq!(ticks.len(), 5);
        ticks.next();
        assert_eq!(ticks.len(), 4);
    }
}
