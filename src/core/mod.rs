pub mod nice_number;
pub mod nice_scale;
pub mod primitives;
pub mod ticks;
pub mod types;

pub use nice_number::{MIN_NICE_INPUT, NiceRounding, nice_number, power_of_ten_floor};
pub use nice_scale::{
    DEFAULT_MAX_TICKS, MIN_MAX_TICKS, NiceScale, NiceScaleOptions, compute_nice_scale,
    try_compute_nice_scale,
};
pub use ticks::{DecimalTicks, TickLabelFormat, TickLabels, Ticks, format_tick_label};
pub use types::DataRange;
