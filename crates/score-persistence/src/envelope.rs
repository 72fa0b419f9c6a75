use crate::traits::PersistenceMetadata;
use score_core::{ScoreError, ScoreResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const CURRENT_FORMAT_VERSION: u32 = 2;

/// Wrapper written around the row array (format v2)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowsEnvelope {
    pub version: u32,
    pub metadata: PersistenceMetadata,
    pub data: serde_json::Value,
}

impl RowsEnvelope {
    pub fn new(data: serde_json::Value, instance_id: Uuid) -> Self {
        Self {
            version: CURRENT_FORMAT_VERSION,
            metadata: PersistenceMetadata::new(CURRENT_FORMAT_VERSION, instance_id),
            data,
        }
    }

    pub fn to_json_string(&self) -> ScoreResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ScoreError::Serialization(e.to_string()))
    }

    pub fn from_json_value(value: serde_json::Value) -> ScoreResult<Self> {
        let envelope: Self =
            serde_json::from_value(value).map_err(|e| ScoreError::Serialization(e.to_string()))?;
        if envelope.version != CURRENT_FORMAT_VERSION {
            return Err(ScoreError::Serialization(format!(
                "Unsupported format version: {}",
                envelope.version
            )));
        }
        Ok(envelope)
    }
}
