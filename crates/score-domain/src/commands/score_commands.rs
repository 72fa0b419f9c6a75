use super::{Command, CommandContext};
use crate::{RowId, ScoreDelta};
use score_core::{ScoreError, ScoreResult};

fn require_scoring(context: &CommandContext) -> ScoreResult<()> {
    if context.features.scoring {
        Ok(())
    } else {
        Err(ScoreError::Validation("scoring is disabled".to_string()))
    }
}

/// Step one row's score by ±1 or ±10.
pub struct AdjustScore {
    pub row_id: RowId,
    pub delta: ScoreDelta,
}

impl Command for AdjustScore {
    fn execute(&self, context: &mut CommandContext) -> ScoreResult<()> {
        require_scoring(context)?;
        context.rows.adjust(self.row_id, self.delta).map(|_| ())
    }

    fn description(&self) -> String {
        format!("Adjust row {} by {}", self.row_id, self.delta)
    }
}

/// Zero every score.
pub struct ResetScores;

impl Command for ResetScores {
    fn execute(&self, context: &mut CommandContext) -> ScoreResult<()> {
        require_scoring(context)?;
        context.rows.reset_scores();
        Ok(())
    }

    fn description(&self) -> String {
        "Reset all scores".to_string()
    }
}
