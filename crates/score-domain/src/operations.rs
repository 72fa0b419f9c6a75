use crate::{Row, RowId, ScoreDelta};
use score_core::{ScoreError, ScoreResult};

/// Trait ensuring TUI and CLI implement the same operations.
/// Adding a method here forces both implementations to add it.
///
/// Implementations persist after each successful mutation. A missing row
/// id is absorbed: the call succeeds and reports that nothing changed.
pub trait ScoreOperations {
    /// Returns the new row, or `None` when `text` is blank.
    fn add_row(&mut self, text: String) -> ScoreResult<Option<Row>>;
    fn list_rows(&self) -> ScoreResult<Vec<Row>>;
    fn get_row(&self, id: RowId) -> ScoreResult<Option<Row>>;
    /// Returns whether a row was removed.
    fn delete_row(&mut self, id: RowId) -> ScoreResult<bool>;
    /// Returns the updated row, or `None` when nothing was adjusted.
    fn adjust_score(&mut self, id: RowId, delta: ScoreDelta) -> ScoreResult<Option<Row>>;
    fn reset_scores(&mut self) -> ScoreResult<bool>;
    /// Applies an explicit id order; fails with `InvalidReorder` when `order`
    /// is not a permutation of the current rows.
    fn reorder_rows(&mut self, order: Vec<RowId>) -> ScoreResult<()>;
    /// Drag-and-drop: moves one row to `position`.
    fn move_row(&mut self, id: RowId, position: usize) -> ScoreResult<Option<Row>>;
}

/// Maps the errors a missing target produces (`NotFound`, or `Validation`
/// when a feature is switched off) to `Ok(None)`; other errors pass through.
pub fn absorb_missing<T>(result: ScoreResult<T>) -> ScoreResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ScoreError::NotFound(_)) | Err(ScoreError::Validation(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
