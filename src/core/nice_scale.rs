use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::nice_number::{NiceRounding, nice_number, power_of_ten_floor};
use crate::core::types::DataRange;
use crate::error::{ScaleError, ScaleResult};

pub const DEFAULT_MAX_TICKS: usize = 10;
pub const MIN_MAX_TICKS: usize = 2;

/// Share of the value magnitude used as span when `min == max`.
const DEGENERATE_SPAN_RATIO: f64 = 0.10;
/// Wider spans are snapped in a domain divided by a power of ten.
const RESCALE_SPAN_THRESHOLD: f64 = 1e300;

fn default_max_ticks() -> usize {
    DEFAULT_MAX_TICKS
}

/// Caller constraints for one scale computation.
///
/// Options are built fresh per redraw; nothing is cached between calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceScaleOptions {
    #[serde(default = "default_max_ticks")]
    pub max_ticks: usize,
    /// Exact lower bound to report instead of the floored one.
    #[serde(default)]
    pub min_point: Option<f64>,
    /// Exact upper bound to report instead of the ceiled one.
    #[serde(default)]
    pub max_point: Option<f64>,
}

impl Default for NiceScaleOptions {
    fn default() -> Self {
        Self {
            max_ticks: DEFAULT_MAX_TICKS,
            min_point: None,
            max_point: None,
        }
    }
}

impl NiceScaleOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_ticks(mut self, max_ticks: usize) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    #[must_use]
    pub fn with_min_point(mut self, min_point: f64) -> Self {
        self.min_point = Some(min_point);
        self
    }

    #[must_use]
    pub fn with_max_point(mut self, max_point: f64) -> Self {
        self.max_point = Some(max_point);
        self
    }

    #[must_use]
    pub fn with_bounds(self, min_point: f64, max_point: f64) -> Self {
        self.with_min_point(min_point).with_max_point(max_point)
    }

    #[must_use]
    pub fn has_overrides(self) -> bool {
        self.min_point.is_some() || self.max_point.is_some()
    }

    pub fn validate(self) -> ScaleResult<Self> {
        if self.max_ticks < MIN_MAX_TICKS {
            return Err(ScaleError::InvalidMaxTicks(self.max_ticks));
        }

        if self.min_point.is_some_and(|value| !value.is_finite())
            || self.max_point.is_some_and(|value| !value.is_finite())
        {
            return Err(ScaleError::InvalidData(
                "override bounds must be finite".to_owned(),
            ));
        }

        if let (Some(min), Some(max)) = (self.min_point, self.max_point) {
            if min > max {
                return Err(ScaleError::InvalidRange { min, max });
            }
        }

        Ok(self)
    }

    fn effective_max_ticks(self) -> usize {
        if self.max_ticks < MIN_MAX_TICKS {
            warn!(
                max_ticks = self.max_ticks,
                clamped = MIN_MAX_TICKS,
                "max ticks below minimum, clamping"
            );
            return MIN_MAX_TICKS;
        }
        self.max_ticks
    }
}

/// Round-number axis bounds and the interval between gridlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceScale {
    pub nice_min: f64,
    pub nice_max: f64,
    pub tick_spacing: f64,
}

impl NiceScale {
    /// Computes a scale with default options.
    #[must_use]
    pub fn compute(min_point: f64, max_point: f64) -> Self {
        compute_nice_scale(min_point, max_point, NiceScaleOptions::default())
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.nice_max - self.nice_min
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.nice_min && value <= self.nice_max
    }
}

/// Computes nice axis bounds and tick spacing for `[min_point, max_point]`.
///
/// The range is first snapped up to a nice number, then divided into
/// `max_ticks - 1` intervals whose width is snapped to the nearest nice
/// number. Override bounds in `options` are returned verbatim and also define
/// the range the spacing is derived from.
///
/// Never fails: non-finite input propagates as NaN, `max_ticks < 2` is
/// clamped, and a zero-width range is widened internally. Bounds whose nice
/// multiple exceeds `f64::MAX` come back infinite.
#[must_use]
pub fn compute_nice_scale(min_point: f64, max_point: f64, options: NiceScaleOptions) -> NiceScale {
    let max_ticks = options.effective_max_ticks();
    let lower = options.min_point.unwrap_or(min_point);
    let upper = options.max_point.unwrap_or(max_point);

    let factor = rescale_factor(lower, upper);
    let scaled_lower = lower / factor;
    let scaled_upper = upper / factor;

    let span = resolve_span(scaled_lower, scaled_upper);
    let nice_range = nice_number(span, NiceRounding::Ceil);
    let scaled_spacing = nice_number(nice_range / (max_ticks - 1) as f64, NiceRounding::Round);

    let tick_spacing = scaled_spacing * factor;
    let nice_min = options
        .min_point
        .unwrap_or_else(|| (scaled_lower / scaled_spacing).floor() * scaled_spacing * factor);
    let mut nice_max = options
        .max_point
        .unwrap_or_else(|| (scaled_upper / scaled_spacing).ceil() * scaled_spacing * factor);
    if !options.has_overrides() && nice_max <= nice_min {
        nice_max = nice_min + tick_spacing;
    }

    trace!(
        min_point,
        max_point,
        max_ticks,
        factor,
        nice_min,
        nice_max,
        tick_spacing,
        "compute nice scale"
    );

    NiceScale {
        nice_min,
        nice_max,
        tick_spacing,
    }
}

/// Strict variant of [`compute_nice_scale`].
///
/// Rejects invalid options, a lower bound above the upper bound (after
/// overrides are applied), and results that are not finite.
pub fn try_compute_nice_scale(
    range: DataRange,
    options: NiceScaleOptions,
) -> ScaleResult<NiceScale> {
    let options = options.validate()?;
    DataRange::new(range.min_point, range.max_point)?;

    let lower = options.min_point.unwrap_or(range.min_point);
    let upper = options.max_point.unwrap_or(range.max_point);
    if lower > upper {
        return Err(ScaleError::InvalidRange {
            min: lower,
            max: upper,
        });
    }

    let scale = compute_nice_scale(range.min_point, range.max_point, options);
    if !scale.nice_min.is_finite()
        || !scale.nice_max.is_finite()
        || !scale.tick_spacing.is_finite()
        || scale.tick_spacing <= 0.0
    {
        return Err(ScaleError::UnrepresentableScale {
            min: lower,
            max: upper,
        });
    }
    Ok(scale)
}

/// Power of ten that brings spans wider than [`RESCALE_SPAN_THRESHOLD`] back
/// into a range where snapping cannot overflow. `1.0` otherwise.
fn rescale_factor(lower: f64, upper: f64) -> f64 {
    let half_span = (upper / 2.0 - lower / 2.0).abs();
    if half_span.is_finite() && half_span > RESCALE_SPAN_THRESHOLD / 2.0 {
        power_of_ten_floor(half_span)
    } else {
        1.0
    }
}

fn resolve_span(lower: f64, upper: f64) -> f64 {
    let span = (upper - lower).abs();
    if span != 0.0 {
        return span;
    }

    let fallback = lower.abs() * DEGENERATE_SPAN_RATIO;
    if fallback.is_finite() && fallback > 0.0 {
        fallback
    } else {
        1.0
    }
}
