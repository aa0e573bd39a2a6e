use thiserror::Error;

pub type ScaleResult<T> = Result<T, ScaleError>;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("invalid range: min={min}, max={max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("scale for range min={min}, max={max} is not representable")]
    UnrepresentableScale { min: f64, max: f64 },

    #[error("invalid max ticks: {0} (must be > 1)")]
    InvalidMaxTicks(usize),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
