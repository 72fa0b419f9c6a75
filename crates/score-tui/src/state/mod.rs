use score_core::{InputBuffer, ScoreError, ScoreResult};
use score_domain::commands::{AdjustScore, Command, DeleteRow, ReorderRows, ResetScores};
use score_domain::{
    reorder, Features, Row, RowId, RowListController, ScoreDelta, ScoreOperations,
};
use score_persistence::{RowRepository, SaveStats, SaveWorker};

/// Wraps the controller with persistence.
///
/// # Save Behavior
///
/// Every successful mutation queues a snapshot on the save worker:
/// - Queuing never blocks the UI
/// - Snapshots queued during an in-flight write collapse into the newest one
/// - A failed load or save leaves the session running in memory only
///
/// The initial load finishes inside [`StateManager::load`], so no key press
/// can be applied to a list that is about to be replaced.
pub struct StateManager {
    controller: RowListController,
    saver: Option<SaveWorker>,
}

impl StateManager {
    pub fn in_memory(features: Features) -> Self {
        Self {
            controller: RowListController::new(features),
            saver: None,
        }
    }

    /// Loads the saved rows and starts the save worker.
    /// Must be called from within a tokio runtime.
    pub async fn load(repository: Option<RowRepository>, features: Features) -> Self {
        let repository = match repository {
            Some(repository) if features.persistence => repository,
            _ => {
                tracing::info!("Persistence disabled - rows live in memory only");
                return Self::in_memory(features);
            }
        };

        let controller = match repository.load().await {
            Ok(Some(snapshot)) => {
                let (controller, dropped) = RowListController::restore(snapshot.rows, features);
                if dropped > 0 {
                    tracing::warn!("Dropped {} saved rows with duplicate ids", dropped);
                }
                controller
            }
            Ok(None) => RowListController::new(features),
            Err(e) => {
                let err = ScoreError::PersistenceUnavailable(format!(
                    "could not load {}: {}",
                    repository.location(),
                    e
                ));
                tracing::warn!("{} - continuing in memory only", err);
                return Self::in_memory(features);
            }
        };

        Self {
            controller,
            saver: Some(SaveWorker::spawn(repository)),
        }
    }

    pub fn controller(&self) -> &RowListController {
        &self.controller
    }

    pub fn rows(&self) -> &[Row] {
        self.controller.rows()
    }

    pub fn features(&self) -> Features {
        self.controller.features()
    }

    /// The input buffer is not persisted, so edits go straight through.
    pub fn input_mut(&mut self) -> &mut InputBuffer {
        self.controller.input_mut()
    }

    /// Whether changes are still being written out
    pub fn is_persistent(&self) -> bool {
        self.saver.as_ref().is_some_and(SaveWorker::is_running)
    }

    /// Execute a command and queue a save. Absorbed errors leave the state
    /// untouched and skip the save.
    pub fn execute(&mut self, command: &dyn Command) -> ScoreResult<bool> {
        let description = command.description();
        tracing::debug!("Executing: {}", description);

        match self.controller.execute(command) {
            Ok(()) => {
                self.queue_save();
                Ok(true)
            }
            Err(e) if e.is_absorbed() => {
                tracing::debug!("Ignored '{}': {}", description, e);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Adds a row from the input buffer. Blank input is a silent no-op.
    pub fn add_from_input(&mut self) -> ScoreResult<Option<RowId>> {
        let id = self.controller.add_row()?;
        if let Some(id) = id {
            tracing::debug!("Added row {}", id);
            self.queue_save();
        }
        Ok(id)
    }

    /// Drag end: replace the list with `new_order` if it is a permutation.
    pub fn reorder(&mut self, new_order: Vec<Row>) -> ScoreResult<bool> {
        if new_order.as_slice() == self.controller.rows() {
            return Ok(false);
        }
        self.execute(&ReorderRows { order: new_order })
    }

    fn queue_save(&self) {
        if let Some(ref saver) = self.saver {
            tracing::debug!("Queueing snapshot for async save");
            if !saver.queue(self.controller.snapshot()) {
                tracing::debug!("Save worker stopped - change kept in memory only");
            }
        } else {
            tracing::debug!("No save worker - skipping save");
        }
    }

    /// Flush pending writes and stop the worker.
    pub async fn shutdown(&mut self) -> SaveStats {
        match self.saver.take() {
            Some(saver) => saver.shutdown().await,
            None => SaveStats::default(),
        }
    }
}

impl ScoreOperations for StateManager {
    fn add_row(&mut self, text: String) -> ScoreResult<Option<Row>> {
        self.controller.set_input(text);
        let id = self.add_from_input()?;
        Ok(id.and_then(|id| self.controller.get_row(id).cloned()))
    }

    fn list_rows(&self) -> ScoreResult<Vec<Row>> {
        Ok(self.controller.rows().to_vec())
    }

    fn get_row(&self, id: RowId) -> ScoreResult<Option<Row>> {
        Ok(self.controller.get_row(id).cloned())
    }

    fn delete_row(&mut self, id: RowId) -> ScoreResult<bool> {
        self.execute(&DeleteRow { row_id: id })
    }

    fn adjust_score(&mut self, id: RowId, delta: ScoreDelta) -> ScoreResult<Option<Row>> {
        let changed = self.execute(&AdjustScore { row_id: id, delta })?;
        Ok(changed
            .then(|| self.controller.get_row(id).cloned())
            .flatten())
    }

    fn reset_scores(&mut self) -> ScoreResult<bool> {
        self.execute(&ResetScores)
    }

    fn reorder_rows(&mut self, order: Vec<RowId>) -> ScoreResult<()> {
        let new_order = reorder::order_by_ids(self.controller.rows(), &order)?;
        self.reorder(new_order).map(|_| ())
    }

    fn move_row(&mut self, id: RowId, position: usize) -> ScoreResult<Option<Row>> {
        let moved = self
            .controller
            .position_of(id)
            .and_then(|from| reorder::move_row(self.controller.rows(), from, position));
        let Some(new_order) = moved else {
            tracing::debug!("Ignored move of missing row {}", id);
            return Ok(None);
        };
        self.reorder(new_order)?;
        Ok(self.controller.get_row(id).cloned())
    }
}
