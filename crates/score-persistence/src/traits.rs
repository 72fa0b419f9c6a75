use async_trait::async_trait;
use chrono::{DateTime, Utc};
use score_core::ScoreResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata stamped on every saved payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistenceMetadata {
    /// Version of the persistence format
    pub format_version: u32,
    /// ID of the process that performed the save
    pub instance_id: Uuid,
    /// When this data was saved
    pub saved_at: DateTime<Utc>,
    /// Schema version of the row objects
    pub schema_version: String,
}

impl PersistenceMetadata {
    pub fn new(format_version: u32, instance_id: Uuid) -> Self {
        Self {
            format_version,
            instance_id,
            saved_at: Utc::now(),
            schema_version: "2.0.0".to_string(),
        }
    }
}

/// Storage capability: opaque strings under string keys.
///
/// A missing key is `Ok(None)`, never an error.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> ScoreResult<Option<String>>;

    async fn set(&self, key: &str, value: String) -> ScoreResult<()>;

    /// Removing a missing key succeeds.
    async fn remove(&self, key: &str) -> ScoreResult<()>;

    /// Where the data lives, for log messages.
    fn location(&self) -> String;
}

/// Payload format versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormatVersion {
    /// Bare JSON array of rows, no version tag
    V1,
    /// `{version, metadata, data}` envelope
    V2,
}

impl FormatVersion {
    pub fn from_u32(v: u32) -> Option<Self> {
        match v {
            1 => Some(Self::V1),
            2 => Some(Self::V2),
            _ => None,
        }
    }
}
