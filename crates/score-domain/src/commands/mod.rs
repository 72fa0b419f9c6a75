use crate::{Features, IdGenerator, RowList};
use score_core::ScoreResult;

pub mod row_commands;
pub mod score_commands;

pub use row_commands::*;
pub use score_commands::*;

/// A single mutation of the row list.
///
/// Commands are strict: a missing row or a bad permutation comes back as an
/// error and leaves the list untouched. Callers decide whether to absorb it.
pub trait Command: Send + Sync {
    fn execute(&self, context: &mut CommandContext) -> ScoreResult<()>;

    /// Human-readable description used in logs.
    fn description(&self) -> String;
}

/// Everything a command may touch.
pub struct CommandContext<'a> {
    pub rows: &'a mut RowList,
    pub ids: &'a mut IdGenerator,
    pub features: &'a Features,
}
