use super::{Command, CommandContext};
use crate::{Row, RowId};
use score_core::{ScoreError, ScoreResult};

/// Append a row labelled with the trimmed `text`.
pub struct AddRow {
    pub text: String,
}

impl Command for AddRow {
    fn execute(&self, context: &mut CommandContext) -> ScoreResult<()> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(ScoreError::Validation("row text is empty".to_string()));
        }
        let row = Row::new(context.ids.next_id()?, text.to_string());
        context.rows.push(row)
    }

    fn description(&self) -> String {
        format!("Add row: '{}'", self.text.trim())
    }
}

/// Remove a row, keeping the others in order.
pub struct DeleteRow {
    pub row_id: RowId,
}

impl Command for DeleteRow {
    fn execute(&self, context: &mut CommandContext) -> ScoreResult<()> {
        context.rows.remove(self.row_id).map(|_| ())
    }

    fn description(&self) -> String {
        format!("Delete row {}", self.row_id)
    }
}

/// Replace the whole list with a permutation of itself (drag end).
pub struct ReorderRows {
    pub order: Vec<Row>,
}

impl Command for ReorderRows {
    fn execute(&self, context: &mut CommandContext) -> ScoreResult<()> {
        context.rows.replace_order(self.order.clone())
    }

    fn description(&self) -> String {
        format!("Reorder {} rows", self.order.len())
    }
}
