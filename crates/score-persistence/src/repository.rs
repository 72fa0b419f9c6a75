use crate::envelope::RowsEnvelope;
use crate::migration::Migrator;
use crate::traits::{FormatVersion, KeyValueStore, PersistenceMetadata};
use score_core::{ScoreError, ScoreResult};
use score_domain::Snapshot;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// Reads and writes the row list under one storage key, in the versioned
/// envelope format. Legacy bare-array payloads are upgraded on load.
#[derive(Clone)]
pub struct RowRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
    instance_id: Uuid,
}

impl RowRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            instance_id: Uuid::new_v4(),
        }
    }

    pub fn location(&self) -> String {
        format!("{} [{}]", self.store.location(), self.key)
    }

    fn backup_key(&self) -> String {
        format!("{}.v1.backup", self.key)
    }

    /// Loads the saved rows; `None` when nothing was ever saved.
    pub async fn load(&self) -> ScoreResult<Option<Snapshot>> {
        let Some(raw) = self.store.get(&self.key).await? else {
            tracing::info!("No saved rows at {}", self.location());
            return Ok(None);
        };

        let value: Value =
            serde_json::from_str(&raw).map_err(|e| ScoreError::Serialization(e.to_string()))?;

        let snapshot = match Migrator::detect_version(&value)? {
            FormatVersion::V1 => {
                tracing::info!(
                    "Detected V1 payload at {}. Starting migration to V2...",
                    self.location()
                );
                self.upgrade_legacy(raw, value).await?
            }
            FormatVersion::V2 => {
                let envelope = RowsEnvelope::from_json_value(value)?;
                Snapshot::from_json_value(envelope.data)?
            }
        };

        tracing::info!("Loaded {} rows from {}", snapshot.rows.len(), self.location());
        Ok(Some(snapshot))
    }

    async fn upgrade_legacy(&self, raw: String, value: Value) -> ScoreResult<Snapshot> {
        let envelope =
            Migrator::migrate(FormatVersion::V1, FormatVersion::V2, value.clone(), self.instance_id)?;
        let snapshot = Snapshot::from_json_value(envelope.data.clone())?;

        let backup_key = self.backup_key();
        self.store.set(&backup_key, raw).await?;
        tracing::info!("Created backup at {} [{}]", self.store.location(), backup_key);

        self.store.set(&self.key, envelope.to_json_string()?).await?;

        let rewritten = self.store.get(&self.key).await?.unwrap_or_default();
        match Migrator::verify_migration(&rewritten, &value) {
            Ok(()) => {
                if let Err(e) = self.store.remove(&backup_key).await {
                    tracing::warn!(
                        "Migration successful but failed to remove backup {}: {}",
                        backup_key,
                        e
                    );
                } else {
                    tracing::info!("Migration verified, backup removed");
                }
                Ok(snapshot)
            }
            Err(e) => {
                tracing::error!(
                    "Migration verification failed: {}. Backup preserved at {}",
                    e,
                    backup_key
                );
                Err(e)
            }
        }
    }

    pub async fn save(&self, snapshot: &Snapshot) -> ScoreResult<PersistenceMetadata> {
        let envelope = RowsEnvelope::new(snapshot.to_json_value()?, self.instance_id);
        let json = envelope.to_json_string()?;
        let bytes = json.len();

        self.store.set(&self.key, json).await?;

        tracing::info!(
            "Saved {} rows ({} bytes) to {}",
            snapshot.rows.len(),
            bytes,
            self.location()
        );
        Ok(envelope.metadata)
    }
}
