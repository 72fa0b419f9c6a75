use crate::row::RowId;
use score_core::{ScoreError, ScoreResult};

/// Hands out row ids that increase strictly, even when several rows are
/// created within the same clock tick.
///
/// Ids follow the wall clock in milliseconds so they stay comparable with
/// timestamp ids already present in older saved lists.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    last: RowId,
    clock: fn() -> RowId,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::with_clock(now_millis)
    }

    pub fn with_clock(clock: fn() -> RowId) -> Self {
        Self { last: 0, clock }
    }

    /// Never hand out an id at or below `floor`.
    pub fn seed(&mut self, floor: RowId) {
        self.last = self.last.max(floor);
    }

    /// Fails once the id space is used up rather than repeating an id.
    pub fn next_id(&mut self) -> ScoreResult<RowId> {
        let floor = self
            .last
            .checked_add(1)
            .ok_or_else(|| ScoreError::Internal("row ids exhausted".to_string()))?;
        let id = (self.clock)().max(floor);
        self.last = id;
        Ok(id)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn now_millis() -> RowId {
    chrono::Utc::now().timestamp_millis().max(0) as RowId
}
