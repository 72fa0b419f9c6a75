use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use score_core::{ScoreError, ScoreResult};
use score_domain::{Features, Row, ScoreDelta, ScoreOperations};
use score_persistence::{JsonFileStore, KeyValueStore, MemoryStore, RowRepository};
use score_tui::{App, StateManager};
use std::sync::Arc;
use tempfile::tempdir;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn add_player(app: &mut App, name: &str) {
    press(app, KeyCode::Char('a'));
    for c in name.chars() {
        press(app, KeyCode::Char(c));
    }
    press(app, KeyCode::Enter);
    press(app, KeyCode::Esc);
}

#[tokio::test]
async fn test_session_survives_restart() {
    let dir = tempdir().unwrap();
    let repository = || RowRepository::new(Arc::new(JsonFileStore::new(dir.path())), "scoreRows");

    let state = StateManager::load(Some(repository()), Features::default()).await;
    let mut app = App::new(state);
    add_player(&mut app, "Alice");
    add_player(&mut app, "Bob");
    press(&mut app, KeyCode::Char(']'));
    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Char('k'));
    press(&mut app, KeyCode::Enter);
    let stats = app.state.shutdown().await;
    assert!(!stats.failed);
    assert!(dir.path().join("scoreRows.json").exists());

    let state = StateManager::load(Some(repository()), Features::default()).await;
    let app = App::new(state);
    let rows: Vec<(&str, i64)> = app
        .visible_rows()
        .iter()
        .map(|row| (row.text(), row.score()))
        .collect();
    assert_eq!(rows, vec![("Bob", 10), ("Alice", 0)]);
    assert_eq!(app.selection.get(), Some(0));
}

#[tokio::test]
async fn test_new_ids_follow_loaded_ids() {
    let far_future = 9_000_000_000_000u64;
    let legacy = serde_json::json!([{"id": far_future, "text": "Alice", "score": 3}]);
    let store = Arc::new(MemoryStore::with_value("scoreRows", legacy.to_string()));

    let mut state = StateManager::load(
        Some(RowRepository::new(store.clone(), "scoreRows")),
        Features::default(),
    )
    .await;
    let bob = state.add_row("Bob".to_string()).unwrap().unwrap();
    assert!(bob.id() > far_future);
    state.shutdown().await;
}

#[tokio::test]
async fn test_corrupt_payload_disables_saving() {
    let store = Arc::new(MemoryStore::with_value("scoreRows", "[{\"id\": "));
    let mut state = StateManager::load(
        Some(RowRepository::new(store.clone(), "scoreRows")),
        Features::default(),
    )
    .await;

    assert!(state.rows().is_empty());
    assert!(!state.is_persistent());

    let alice = state.add_row("Alice".to_string()).unwrap().unwrap();
    state.adjust_score(alice.id(), ScoreDelta::PlusOne).unwrap();
    state.shutdown().await;

    assert_eq!(store.peek("scoreRows").as_deref(), Some("[{\"id\": "));
    assert_eq!(store.write_count(), 0);
}

struct ReadOnlyStore {
    inner: MemoryStore,
}

#[async_trait::async_trait]
impl KeyValueStore for ReadOnlyStore {
    async fn get(&self, key: &str) -> ScoreResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, _key: &str, _value: String) -> ScoreResult<()> {
        Err(ScoreError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        )))
    }

    async fn remove(&self, _key: &str) -> ScoreResult<()> {
        Ok(())
    }

    fn location(&self) -> String {
        "read-only".to_string()
    }
}

#[tokio::test]
async fn test_failed_save_keeps_session_in_memory() {
    let store = Arc::new(ReadOnlyStore {
        inner: MemoryStore::new(),
    });
    let mut state = StateManager::load(
        Some(RowRepository::new(store, "scoreRows")),
        Features::default(),
    )
    .await;

    state.add_row("Alice".to_string()).unwrap();
    state.add_row("Bob".to_string()).unwrap();

    let texts: Vec<&str> = state.rows().iter().map(Row::text).collect();
    assert_eq!(texts, vec!["Alice", "Bob"]);

    let stats = state.shutdown().await;
    assert!(stats.failed);
    assert_eq!(stats.saved, 0);
}
