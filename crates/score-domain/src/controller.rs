use crate::commands::{
    AddRow, AdjustScore, Command, CommandContext, DeleteRow, ReorderRows, ResetScores,
};
use crate::{reorder, Features, IdGenerator, Row, RowId, RowList, ScoreDelta, Snapshot};
use score_core::{InputBuffer, ScoreError, ScoreResult};

/// Owns the row list and the input buffer and applies every mutation.
///
/// Mutating methods return strict results (`NotFound`, `InvalidReorder`,
/// `Validation`) so tests can see why nothing happened; on any error the
/// list is unchanged. Persistence is layered on top by the front ends.
#[derive(Debug, Clone)]
pub struct RowListController {
    rows: RowList,
    input: InputBuffer,
    ids: IdGenerator,
    features: Features,
}

impl RowListController {
    pub fn new(features: Features) -> Self {
        Self {
            rows: RowList::new(),
            input: InputBuffer::new(),
            ids: IdGenerator::new(),
            features,
        }
    }

    /// Restores a controller from saved rows. Duplicate ids beyond the first
    /// are dropped; the count is returned so the caller can report it.
    pub fn restore(rows: Vec<Row>, features: Features) -> (Self, usize) {
        let (rows, dropped) = RowList::from_rows(rows);
        let mut controller = Self {
            rows,
            ..Self::new(features)
        };
        controller.seed_ids();
        (controller, dropped)
    }

    pub fn with_id_generator(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self.seed_ids();
        self
    }

    fn seed_ids(&mut self) {
        if let Some(max) = self.rows.max_id() {
            self.ids.seed(max);
        }
    }

    pub fn features(&self) -> Features {
        self.features
    }

    pub fn rows(&self) -> &[Row] {
        self.rows.rows()
    }

    pub fn get_row(&self, id: RowId) -> Option<&Row> {
        self.rows.get(id)
    }

    pub fn position_of(&self, id: RowId) -> Option<usize> {
        self.rows.position(id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn input(&self) -> &str {
        self.input.as_str()
    }

    pub fn input_mut(&mut self) -> &mut InputBuffer {
        &mut self.input
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_list(&self.rows)
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input.set(text);
    }

    pub fn execute(&mut self, command: &dyn Command) -> ScoreResult<()> {
        let mut context = CommandContext {
            rows: &mut self.rows,
            ids: &mut self.ids,
            features: &self.features,
        };
        command.execute(&mut context)
    }

    /// Appends a row from the input buffer and clears it. Blank input is
    /// ignored and left in place; returns the new row's id otherwise.
    pub fn add_row(&mut self) -> ScoreResult<Option<RowId>> {
        let Some(text) = self.input.take_label() else {
            return Ok(None);
        };
        let command = AddRow { text };
        if let Err(e) = self.execute(&command) {
            self.input.set(command.text);
            return Err(e);
        }
        Ok(self.rows.rows().last().map(Row::id))
    }

    pub fn delete_row(&mut self, id: RowId) -> ScoreResult<()> {
        self.execute(&DeleteRow { row_id: id })
    }

    pub fn adjust_score(&mut self, id: RowId, delta: ScoreDelta) -> ScoreResult<()> {
        self.execute(&AdjustScore { row_id: id, delta })
    }

    pub fn reset_all_scores(&mut self) -> ScoreResult<()> {
        self.execute(&ResetScores)
    }

    pub fn reorder(&mut self, new_order: Vec<Row>) -> ScoreResult<()> {
        self.execute(&ReorderRows { order: new_order })
    }

    /// Drag-and-drop of one row to `position` (clamped to the last slot).
    pub fn move_row(&mut self, id: RowId, position: usize) -> ScoreResult<()> {
        let from = self
            .position_of(id)
            .ok_or_else(|| ScoreError::NotFound(format!("row {}", id)))?;
        let new_order = reorder::move_row(self.rows(), from, position)
            .ok_or_else(|| ScoreError::Internal(format!("row {} vanished during move", id)))?;
        self.reorder(new_order)
    }

    pub fn reorder_by_ids(&mut self, ids: &[RowId]) -> ScoreResult<()> {
        let new_order = reorder::order_by_ids(self.rows(), ids)?;
        self.reorder(new_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn frozen_clock() -> RowId {
        1_700_000_000_000
    }

    fn controller() -> RowListController {
        RowListController::new(Features::default())
            .with_id_generator(IdGenerator::with_clock(frozen_clock))
    }

    fn add(controller: &mut RowListController, text: &str) -> RowId {
        controller.set_input(text);
        controller.add_row().unwrap().unwrap()
    }

    #[test]
    fn test_add_rows_distinct_ids() {
        let mut c = controller();
        let names = ["Alice", "Bob", "Carol", "Dave", "Eve"];
        for name in names {
            add(&mut c, name);
        }
        assert_eq!(c.len(), names.len());
        let ids: HashSet<RowId> = c.rows().iter().map(Row::id).collect();
        assert_eq!(ids.len(), names.len());
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut c = controller();
        add(&mut c, "Alice");
        let before = c.rows().to_vec();
        for blank in ["", " ", "\t"] {
            c.set_input(blank);
            assert_eq!(c.add_row().unwrap(), None);
            assert_eq!(c.rows(), before.as_slice());
            assert_eq!(c.input(), blank);
        }
    }

    #[test]
    fn test_add_stores_trimmed_text_and_clears_input() {
        let mut c = controller();
        c.set_input("  Alice  ");
        c.add_row().unwrap();
        assert_eq!(c.rows()[0].text(), "Alice");
        assert_eq!(c.rows()[0].score(), 0);
        assert_eq!(c.input(), "");
    }

    #[test]
    fn test_adjust_inverse_and_isolation() {
        let mut c = controller();
        let alice = add(&mut c, "Alice");
        let bob = add(&mut c, "Bob");
        c.adjust_score(bob, ScoreDelta::PlusOne).unwrap();

        for delta in ScoreDelta::ALL {
            let before_alice = c.get_row(alice).unwrap().score();
            let before_bob = c.get_row(bob).unwrap().score();
            c.adjust_score(alice, delta).unwrap();
            assert_eq!(c.get_row(bob).unwrap().score(), before_bob);
            c.adjust_score(alice, delta.inverse()).unwrap();
            assert_eq!(c.get_row(alice).unwrap().score(), before_alice);
        }
    }

    #[test]
    fn test_adjust_missing_row() {
        let mut c = controller();
        add(&mut c, "Alice");
        let before = c.rows().to_vec();
        assert!(matches!(
            c.adjust_score(404, ScoreDelta::PlusTen),
            Err(ScoreError::NotFound(_))
        ));
        assert_eq!(c.rows(), before.as_slice());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut c = controller();
        let a = add(&mut c, "A");
        let b = add(&mut c, "B");
        let d = add(&mut c, "D");
        c.delete_row(b).unwrap();
        assert_eq!(c.rows().iter().map(Row::id).collect::<Vec<_>>(), vec![a, d]);
        assert!(matches!(c.delete_row(b), Err(ScoreError::NotFound(_))));
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_reset_all_scores() {
        let mut c = controller();
        let a = add(&mut c, "A");
        let b = add(&mut c, "B");
        c.adjust_score(a, ScoreDelta::MinusTen).unwrap();
        c.adjust_score(b, ScoreDelta::PlusTen).unwrap();
        c.reset_all_scores().unwrap();
        assert!(c.rows().iter().all(|row| row.score() == 0));
        assert_eq!(c.rows()[0].text(), "A");
        assert_eq!(c.rows()[1].text(), "B");
    }

    #[test]
    fn test_reorder_rejects_foreign_ids() {
        let mut c = controller();
        add(&mut c, "A");
        add(&mut c, "B");
        let before = c.rows().to_vec();
        let forged = vec![before[0].clone(), Row::new(1, "X".to_string())];
        assert!(matches!(
            c.reorder(forged),
            Err(ScoreError::InvalidReorder(_))
        ));
        assert_eq!(c.rows(), before.as_slice());
    }

    #[test]
    fn test_restore_seeds_ids_and_dedupes() {
        let saved = vec![
            Row::with_score(frozen_clock() + 500, "Alice".to_string(), 4),
            Row::new(frozen_clock() + 500, "Ghost".to_string()),
        ];
        let (c, dropped) = RowListController::restore(saved, Features::default());
        let mut c = c.with_id_generator(IdGenerator::with_clock(frozen_clock));
        assert_eq!(dropped, 1);
        let id = add(&mut c, "Bob");
        assert_eq!(id, frozen_clock() + 501);
    }

    #[test]
    fn test_scoring_disabled_keeps_scores() {
        let mut c = RowListController::new(Features::list_only());
        c.set_input("Alice");
        let id = c.add_row().unwrap().unwrap();
        assert!(c.adjust_score(id, ScoreDelta::PlusOne).is_err());
        assert!(c.reset_all_scores().is_err());
        assert_eq!(c.get_row(id).unwrap().score(), 0);
    }

    #[test]
    fn test_move_row() {
        let mut c = controller();
        let a = add(&mut c, "A");
        let b = add(&mut c, "B");
        let d = add(&mut c, "D");
        c.move_row(d, 0).unwrap();
        assert_eq!(c.rows().iter().map(Row::id).collect::<Vec<_>>(), vec![d, a, b]);
        c.move_row(d, 99).unwrap();
        assert_eq!(c.rows().iter().map(Row::id).collect::<Vec<_>>(), vec![a, b, d]);
        assert!(matches!(c.move_row(12, 0), Err(ScoreError::NotFound(_))));
    }

    #[test]
    fn test_reorder_by_ids() {
        let mut c = controller();
        let a = add(&mut c, "A");
        let b = add(&mut c, "B");
        c.reorder_by_ids(&[b, a]).unwrap();
        assert_eq!(c.rows()[0].id(), b);
        assert!(matches!(
            c.reorder_by_ids(&[b]),
            Err(ScoreError::InvalidReorder(_))
        ));
        assert_eq!(c.rows()[0].id(), b);
    }

    #[test]
    fn test_scenario() {
        let mut c = controller();
        let alice = add(&mut c, "Alice");
        assert_eq!(c.len(), 1);
        assert_eq!(c.rows()[0].text(), "Alice");
        assert_eq!(c.rows()[0].score(), 0);

        let bob = add(&mut c, "Bob");
        assert_eq!(c.rows()[0].id(), alice);
        assert_eq!(c.rows()[1].id(), bob);

        c.adjust_score(bob, ScoreDelta::PlusTen).unwrap();
        assert_eq!(c.get_row(bob).unwrap().score(), 10);
        assert_eq!(c.get_row(alice).unwrap().score(), 0);

        let swapped = reorder::move_row(c.rows(), 1, 0).unwrap();
        c.reorder(swapped).unwrap();
        assert_eq!(c.rows()[0].id(), bob);
        assert_eq!(c.rows()[1].id(), alice);
        assert_eq!(c.get_row(bob).unwrap().score(), 10);

        c.delete_row(alice).unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c.rows()[0].id(), bob);

        c.reset_all_scores().unwrap();
        assert_eq!(c.rows()[0].score(), 0);
    }
}
