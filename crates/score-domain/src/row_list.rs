use crate::reorder;
use crate::row::{Row, RowId, ScoreDelta};
use score_core::{ScoreError, ScoreResult};
use serde::Serialize;
use std::collections::HashSet;

/// Ordered rows with unique ids. Order is exactly what the last append or
/// reorder produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RowList {
    rows: Vec<Row>,
}

impl RowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from restored rows, keeping the first row for each id.
    /// Returns the list and how many duplicates were dropped.
    pub fn from_rows(rows: Vec<Row>) -> (Self, usize) {
        let total = rows.len();
        let mut seen = HashSet::with_capacity(total);
        let rows: Vec<Row> = rows.into_iter().filter(|row| seen.insert(row.id())).collect();
        let dropped = total - rows.len();
        (Self { rows }, dropped)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn position(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id() == id)
    }

    pub fn max_id(&self) -> Option<RowId> {
        self.rows.iter().map(Row::id).max()
    }

    pub fn push(&mut self, row: Row) -> ScoreResult<()> {
        if self.get(row.id()).is_some() {
            return Err(ScoreError::Validation(format!(
                "row id {} already exists",
                row.id()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn remove(&mut self, id: RowId) -> ScoreResult<Row> {
        let index = self
            .position(id)
            .ok_or_else(|| ScoreError::NotFound(format!("row {}", id)))?;
        Ok(self.rows.remove(index))
    }

    pub fn adjust(&mut self, id: RowId, delta: ScoreDelta) -> ScoreResult<&Row> {
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or_else(|| ScoreError::NotFound(format!("row {}", id)))?;
        row.adjust(delta);
        Ok(&*row)
    }

    pub fn reset_scores(&mut self) {
        self.rows.iter_mut().for_each(Row::reset_score);
    }

    /// Replaces the order with `new_order` verbatim, provided it holds the
    /// same rows. Otherwise the list is left as it was.
    pub fn replace_order(&mut self, new_order: Vec<Row>) -> ScoreResult<()> {
        if !reorder::is_permutation(&self.rows, &new_order) {
            return Err(ScoreError::InvalidReorder(format!(
                "new order does not match the {} current rows",
                self.rows.len()
            )));
        }
        self.rows = new_order;
        Ok(())
    }
}
