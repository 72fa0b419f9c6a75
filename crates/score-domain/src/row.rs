use score_core::ScoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type RowId = u64;

/// One named, scorable entry in the list.
///
/// `id` and `text` are fixed at creation; only `score` changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    id: RowId,
    text: String,
    #[serde(default)]
    score: i64,
}

impl Row {
    pub fn new(id: RowId, text: String) -> Self {
        Self { id, text, score: 0 }
    }

    pub fn with_score(id: RowId, text: String, score: i64) -> Self {
        Self { id, text, score }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn adjust(&mut self, delta: ScoreDelta) {
        self.score = self.score.saturating_add(delta.value());
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}

/// The four score steps a row offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreDelta {
    PlusOne,
    PlusTen,
    MinusOne,
    MinusTen,
}

impl ScoreDelta {
    pub const ALL: [ScoreDelta; 4] = [
        ScoreDelta::MinusTen,
        ScoreDelta::MinusOne,
        ScoreDelta::PlusTen,
        ScoreDelta::PlusOne,
    ];

    pub fn value(self) -> i64 {
        match self {
            Self::PlusOne => 1,
            Self::PlusTen => 10,
            Self::MinusOne => -1,
            Self::MinusTen => -10,
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            Self::PlusOne => Self::MinusOne,
            Self::PlusTen => Self::MinusTen,
            Self::MinusOne => Self::PlusOne,
            Self::MinusTen => Self::PlusTen,
        }
    }
}

impl TryFrom<i64> for ScoreDelta {
    type Error = ScoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::PlusOne),
            10 => Ok(Self::PlusTen),
            -1 => Ok(Self::MinusOne),
            -10 => Ok(Self::MinusTen),
            other => Err(ScoreError::Validation(format!(
                "score delta must be one of +1, +10, -1, -10 (got {})",
                other
            ))),
        }
    }
}

impl FromStr for ScoreDelta {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // i64 parsing already accepts a single leading sign
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| ScoreError::Validation(format!("invalid score delta: {}", s)))?;
        Self::try_from(value)
    }
}

impl fmt::Display for ScoreDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.value())
    }
}
