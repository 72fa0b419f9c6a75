use crate::envelope::{RowsEnvelope, CURRENT_FORMAT_VERSION};
use crate::traits::FormatVersion;
use score_core::{ScoreError, ScoreResult};
use score_domain::Snapshot;
use serde_json::Value;
use uuid::Uuid;

/// Orchestrates upgrades between payload format versions
pub struct Migrator;

impl Migrator {
    /// Detect the version of a stored payload
    pub fn detect_version(value: &Value) -> ScoreResult<FormatVersion> {
        // V1 payloads are the bare row array
        if value.is_array() {
            return Ok(FormatVersion::V1);
        }

        match value.get("version").and_then(Value::as_u64) {
            Some(version) => u32::try_from(version)
                .ok()
                .and_then(FormatVersion::from_u32)
                .ok_or_else(|| {
                    ScoreError::Serialization(format!("Unsupported format version: {}", version))
                }),
            None => Err(ScoreError::Serialization(
                "Unrecognized payload: neither a row array nor a versioned envelope".to_string(),
            )),
        }
    }

    /// Upgrade a payload from one version to another
    pub fn migrate(
        from: FormatVersion,
        to: FormatVersion,
        value: Value,
        instance_id: Uuid,
    ) -> ScoreResult<RowsEnvelope> {
        match (from, to) {
            (FormatVersion::V1, FormatVersion::V2) => Self::migrate_v1_to_v2(value, instance_id),
            (FormatVersion::V2, FormatVersion::V2) => RowsEnvelope::from_json_value(value),
            _ => Err(ScoreError::Serialization(format!(
                "Unsupported migration: {:?} -> {:?}",
                from, to
            ))),
        }
    }

    fn migrate_v1_to_v2(value: Value, instance_id: Uuid) -> ScoreResult<RowsEnvelope> {
        // Normalizes rows saved without a score field
        let snapshot = Snapshot::from_json_value(value)?;
        Ok(RowsEnvelope::new(snapshot.to_json_value()?, instance_id))
    }

    /// Check that a rewritten payload is a v2 envelope holding the same rows
    pub fn verify_migration(migrated: &str, original: &Value) -> ScoreResult<()> {
        let migrated_value: Value = serde_json::from_str(migrated).map_err(|e| {
            ScoreError::Serialization(format!("Failed to parse migrated payload: {}", e))
        })?;

        migrated_value
            .get("version")
            .and_then(Value::as_u64)
            .filter(|&v| v == u64::from(CURRENT_FORMAT_VERSION))
            .ok_or_else(|| {
                ScoreError::Serialization(
                    "Migrated payload missing or invalid version field".to_string(),
                )
            })?;

        let expected = Snapshot::from_json_value(original.clone())?;
        let envelope = RowsEnvelope::from_json_value(migrated_value)?;
        let actual = Snapshot::from_json_value(envelope.data)?;
        if actual != expected {
            return Err(ScoreError::Serialization(
                "Migrated rows differ from the original payload".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_v1_array() {
        let value = json!([{"id": 1, "text": "Alice", "score": 3}]);
        assert_eq!(Migrator::detect_version(&value).unwrap(), FormatVersion::V1);
        assert_eq!(Migrator::detect_version(&json!([])).unwrap(), FormatVersion::V1);
    }

    #[test]
    fn test_detect_v2_envelope() {
        let value = serde_json::to_value(RowsEnvelope::new(json!([]), Uuid::new_v4())).unwrap();
        assert_eq!(Migrator::detect_version(&value).unwrap(), FormatVersion::V2);
    }

    #[test]
    fn test_detect_unknown() {
        assert!(Migrator::detect_version(&json!({"version": 9})).is_err());
        assert!(Migrator::detect_version(&json!({"rows": []})).is_err());
        assert!(Migrator::detect_version(&json!("text")).is_err());
    }

    #[test]
    fn test_migrate_v1_without_scores() {
        let original = json!([{"id": 5, "text": "Alice"}, {"id": 6, "text": "Bob"}]);
        let envelope =
            Migrator::migrate(FormatVersion::V1, FormatVersion::V2, original.clone(), Uuid::new_v4())
                .unwrap();

        assert_eq!(envelope.version, 2);
        assert_eq!(envelope.data[0]["score"], 0);
        assert_eq!(envelope.data[1]["text"], "Bob");

        let json = envelope.to_json_string().unwrap();
        Migrator::verify_migration(&json, &original).unwrap();
    }

    #[test]
    fn test_migrate_invalid_rows() {
        let original = json!([{"id": "not-a-number", "text": 1}]);
        let result =
            Migrator::migrate(FormatVersion::V1, FormatVersion::V2, original, Uuid::new_v4());
        assert!(matches!(result, Err(ScoreError::Serialization(_))));
    }

    #[test]
    fn test_verify_detects_mismatch() {
        let original = json!([{"id": 1, "text": "Alice", "score": 1}]);
        let other = RowsEnvelope::new(json!([{"id": 1, "text": "Alice", "score": 2}]), Uuid::new_v4());
        let json = other.to_json_string().unwrap();
        assert!(Migrator::verify_migration(&json, &original).is_err());
    }

    #[test]
    fn test_unsupported_direction() {
        let result = Migrator::migrate(FormatVersion::V2, FormatVersion::V1, json!([]), Uuid::new_v4());
        assert!(result.is_err());
    }
}
