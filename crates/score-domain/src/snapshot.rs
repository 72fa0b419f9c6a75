//! Point-in-time copy of the row list as it is persisted.

use crate::{Row, RowList};
use score_core::{ScoreError, ScoreResult};
use serde::{Deserialize, Serialize};

/// The persisted payload: the rows in display order, serialized as a bare
/// JSON array of `{id, text, score}` objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    pub rows: Vec<Row>,
}

impl Snapshot {
    pub fn from_list(list: &RowList) -> Self {
        Self {
            rows: list.rows().to_vec(),
        }
    }

    pub fn to_json_value(&self) -> ScoreResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| ScoreError::Serialization(e.to_string()))
    }

    pub fn from_json_value(value: serde_json::Value) -> ScoreResult<Self> {
        serde_json::from_value(value).map_err(|e| ScoreError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScoreDelta;

    #[test]
    fn test_round_trip_preserves_order_and_scores() {
        let (mut list, _) = RowList::from_rows(vec![
            Row::new(20, "Bob".to_string()),
            Row::new(10, "Alice".to_string()),
        ]);
        list.adjust(20, ScoreDelta::MinusTen).unwrap();

        let value = Snapshot::from_list(&list).to_json_value().unwrap();
        let restored = Snapshot::from_json_value(value).unwrap();

        assert_eq!(restored.rows, list.rows());
    }

    #[test]
    fn test_rejects_non_array() {
        let result = Snapshot::from_json_value(serde_json::json!({"rows": []}));
        assert!(matches!(result, Err(ScoreError::Serialization(_))));
    }
}
