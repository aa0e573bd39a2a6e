use crate::core::{MIN_MAX_TICKS, NiceScaleOptions};

pub const AXIS_TARGET_SPACING_PX: f64 = 26.0;
pub const AXIS_MAX_TICKS: usize = 10;

/// Tick budget for an axis of `axis_span_px` pixels.
///
/// Falls back to `min_ticks` for non-finite or non-positive inputs.
#[must_use]
pub fn axis_max_ticks(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = ((axis_span_px / target_spacing_px).floor() as usize).saturating_add(1);
    raw.clamp(min_ticks, max_ticks.max(min_ticks))
}

impl NiceScaleOptions {
    /// Options whose tick budget fits an axis of `axis_span_px` pixels.
    #[must_use]
    pub fn for_axis_span(axis_span_px: f64) -> Self {
        Self::new().with_max_ticks(axis_max_ticks(
            axis_span_px,
            AXIS_TARGET_SPACING_PX,
            MIN_MAX_TICKS,
            AXIS_MAX_TICKS,
        ))
    }
}
