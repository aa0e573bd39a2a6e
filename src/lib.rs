//! nice-scale: human-friendly axis bounds and tick spacing.
//!
//! Given a data extent, the crate picks round-number axis bounds and a tick
//! interval from the `{1, 2, 5, 10} * 10^k` ladder so chart gridlines land on
//! readable values. Computations are pure and stateless.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use crate::core::{
    DataRange, NiceScale, NiceScaleOptions, compute_nice_scale, try_compute_nice_scale,
};
pub use error::{ScaleError, ScaleResult};
