use crate::error::ScoreError;

pub type ScoreResult<T> = Result<T, ScoreError>;
