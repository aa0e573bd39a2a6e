use serde::{Deserialize, Serialize};

use crate::core::NiceScale;
use crate::error::{ScaleError, ScaleResult};

pub const NICE_SCALE_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NiceScaleJsonContractV1 {
    pub schema_version: u32,
    pub scale: NiceScale,
}

impl NiceScale {
    pub fn to_json_pretty(self) -> ScaleResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ScaleError::InvalidData(format!("failed to serialize scale json: {e}")))
    }

    pub fn to_json_contract_v1_pretty(self) -> ScaleResult<String> {
        let payload = NiceScaleJsonContractV1 {
            schema_version: NICE_SCALE_JSON_SCHEMA_V1,
            scale: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ScaleError::InvalidData(format!("failed to serialize scale contract v1: {e}"))
        })
    }

    /// Parses either a bare scale object or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ScaleResult<Self> {
        if let Ok(scale) = serde_json::from_str::<NiceScale>(input) {
            return Ok(scale);
        }
        let payload: NiceScaleJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ScaleError::InvalidData(format!("failed to parse scale json payload: {e}"))
        })?;
        if payload.schema_version != NICE_SCALE_JSON_SCHEMA_V1 {
            return Err(ScaleError::InvalidData(format!(
                "unsupported scale schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.scale)
    }
}
