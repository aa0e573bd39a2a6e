mod axis_ticks;
mod json_contract;

pub use axis_ticks::{AXIS_MAX_TICKS, AXIS_TARGET_SPACING_PX, axis_max_ticks};
pub use json_contract::{NICE_SCALE_JSON_SCHEMA_V1, NiceScaleJsonContractV1};
