use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid reorder: {0}")]
    InvalidReorder(String),

    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ScoreError {
    /// Conditions the controller resolves as a silent no-op.
    pub fn is_absorbed(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::InvalidReorder(_) | Self::Validation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absorbed_variants() {
        assert!(ScoreError::NotFound("row 1".into()).is_absorbed());
        assert!(ScoreError::InvalidReorder("missing ids".into()).is_absorbed());
        assert!(ScoreError::Validation("scoring disabled".into()).is_absorbed());
        assert!(!ScoreError::Serialization("bad json".into()).is_absorbed());
        assert!(!ScoreError::PersistenceUnavailable("disk".into()).is_absorbed());
    }

    #[test]
    fn test_display_messages() {
        let err = ScoreError::InvalidReorder("expected 2 rows, got 1".into());
        assert_eq!(err.to_string(), "Invalid reorder: expected 2 rows, got 1");
    }
}
