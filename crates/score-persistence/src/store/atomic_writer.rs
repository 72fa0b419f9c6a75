use score_core::{ScoreError, ScoreResult};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes whole files so readers only ever see the old or the new content.
///
/// Data goes to a temp file in the target directory, is synced, then renamed
/// over the target.
pub struct AtomicWriter;

impl AtomicWriter {
    pub async fn write_atomic(path: &Path, data: &[u8]) -> ScoreResult<()> {
        let path: PathBuf = path.to_path_buf();
        let data = data.to_vec();
        let len = data.len();

        let target = path.clone();
        tokio::task::spawn_blocking(move || -> ScoreResult<()> {
            let parent = match target.parent() {
                Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
                _ => PathBuf::from("."),
            };
            std::fs::create_dir_all(&parent)?;
            let mut temp_file = tempfile::NamedTempFile::new_in(&parent)?;
            temp_file.write_all(&data)?;
            temp_file.as_file().sync_all()?;
            temp_file.persist(&target).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| ScoreError::Internal(format!("atomic write task failed: {}", e)))??;

        tracing::debug!("Atomically wrote {} bytes to {}", len, path.display());
        Ok(())
    }

    /// Reads a whole file as UTF-8; a missing file is `None`.
    pub async fn read_optional(path: &Path) -> ScoreResult<Option<String>> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => {
                tracing::debug!("Read {} bytes from {}", content.len(), path.display());
                Ok(Some(content))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
