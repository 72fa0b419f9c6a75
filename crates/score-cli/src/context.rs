use score_core::{ScoreError, ScoreResult};
use score_domain::{
    absorb_missing, Features, Row, RowId, RowListController, ScoreDelta, ScoreOperations,
};
use score_persistence::RowRepository;

/// One command's view of the saved rows: load, apply, save.
pub struct CliContext {
    controller: RowListController,
    repository: Option<RowRepository>,
}

impl CliContext {
    /// Unlike the TUI, a payload that cannot be read is an error here: the
    /// command stops before anything can overwrite it.
    pub async fn load(repository: Option<RowRepository>, features: Features) -> ScoreResult<Self> {
        let Some(repository) = repository else {
            return Ok(Self {
                controller: RowListController::new(features),
                repository: None,
            });
        };

        let snapshot = repository.load().await.map_err(|e| {
            ScoreError::PersistenceUnavailable(format!(
                "could not load {}: {}",
                repository.location(),
                e
            ))
        })?;

        let controller = match snapshot {
            Some(snapshot) => {
                let (controller, dropped) = RowListController::restore(snapshot.rows, features);
                if dropped > 0 {
                    tracing::warn!("Dropped {} saved rows with duplicate ids", dropped);
                }
                controller
            }
            None => RowListController::new(features),
        };

        Ok(Self {
            controller,
            repository: Some(repository),
        })
    }

    pub async fn save(&self) -> ScoreResult<()> {
        match self.repository {
            Some(ref repository) => {
                repository.save(&self.controller.snapshot()).await?;
            }
            None => tracing::debug!("Persistence disabled - skipping save"),
        }
        Ok(())
    }
}

impl ScoreOperations for CliContext {
    fn add_row(&mut self, text: String) -> ScoreResult<Option<Row>> {
        self.controller.set_input(text);
        let id = self.controller.add_row()?;
        Ok(id.and_then(|id| self.controller.get_row(id).cloned()))
    }

    fn list_rows(&self) -> ScoreResult<Vec<Row>> {
        Ok(self.controller.rows().to_vec())
    }

    fn get_row(&self, id: RowId) -> ScoreResult<Option<Row>> {
        Ok(self.controller.get_row(id).cloned())
    }

    fn delete_row(&mut self, id: RowId) -> ScoreResult<bool> {
        Ok(absorb_missing(self.controller.delete_row(id))?.is_some())
    }

    fn adjust_score(&mut self, id: RowId, delta: ScoreDelta) -> ScoreResult<Option<Row>> {
        Ok(absorb_missing(self.controller.adjust_score(id, delta))?
            .and_then(|()| self.controller.get_row(id).cloned()))
    }

    fn reset_scores(&mut self) -> ScoreResult<bool> {
        Ok(absorb_missing(self.controller.reset_all_scores())?.is_some())
    }

    fn reorder_rows(&mut self, order: Vec<RowId>) -> ScoreResult<()> {
        self.controller.reorder_by_ids(&order)
    }

    fn move_row(&mut self, id: RowId, position: usize) -> ScoreResult<Option<Row>> {
        Ok(absorb_missing(self.controller.move_row(id, position))?
            .and_then(|()| self.controller.get_row(id).cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use score_persistence::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_changes_saved_explicitly() {
        let store = Arc::new(MemoryStore::new());
        let repo = RowRepository::new(store.clone(), "scoreRows");

        let mut ctx = CliContext::load(Some(repo.clone()), Features::default())
            .await
            .unwrap();
        let alice = ctx.add_row("Alice".to_string()).unwrap().unwrap();
        ctx.adjust_score(alice.id(), ScoreDelta::PlusOne).unwrap();
        assert_eq!(store.write_count(), 0);
        ctx.save().await.unwrap();

        let ctx = CliContext::load(Some(repo), Features::default())
            .await
            .unwrap();
        let rows = ctx.list_rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].score(), 1);
    }

    #[tokio::test]
    async fn test_unreadable_payload_is_error() {
        let store = Arc::new(MemoryStore::with_value("scoreRows", "not json"));
        let repo = RowRepository::new(store, "scoreRows");
        assert!(matches!(
            CliContext::load(Some(repo), Features::default()).await,
            Err(ScoreError::PersistenceUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_ids_are_no_ops() {
        let mut ctx = CliContext::load(None, Features::default()).await.unwrap();
        assert!(!ctx.delete_row(1).unwrap());
        assert!(ctx.adjust_score(1, ScoreDelta::PlusTen).unwrap().is_none());
        assert!(ctx.move_row(1, 0).unwrap().is_none());
        assert!(matches!(
            ctx.reorder_rows(vec![1]),
            Err(ScoreError::InvalidReorder(_))
        ));
    }
}
