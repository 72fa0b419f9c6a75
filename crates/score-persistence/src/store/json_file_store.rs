use crate::store::atomic_writer::AtomicWriter;
use crate::traits::KeyValueStore;
use score_core::{ScoreError, ScoreResult};
use std::path::{Path, PathBuf};

/// Directory-backed key-value store.
/// Each key is kept in its own `<dir>/<key>.json` file, written atomically.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// File backing `key`. Keys may not name other directories.
    pub fn path_for(&self, key: &str) -> ScoreResult<PathBuf> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\'])
            && !key.starts_with('.');
        if !valid {
            return Err(ScoreError::Validation(format!("invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait::async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> ScoreResult<Option<String>> {
        let path = self.path_for(key)?;
        AtomicWriter::read_optional(&path).await
    }

    async fn set(&self, key: &str, value: String) -> ScoreResult<()> {
        let path = self.path_for(key)?;
        AtomicWriter::write_atomic(&path, value.as_bytes()).await
    }

    async fn remove(&self, key: &str) -> ScoreResult<()> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn location(&self) -> String {
        self.dir.display().to_string()
    }
}
