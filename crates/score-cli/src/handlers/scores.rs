use crate::context::CliContext;
use crate::output;
use score_domain::{RowId, ScoreDelta, ScoreOperations};

pub async fn handle_adjust(ctx: &mut CliContext, id: RowId, delta: ScoreDelta) -> anyhow::Result<()> {
    match ctx.adjust_score(id, delta)? {
        Some(row) => {
            ctx.save().await?;
            output::output_success(&row);
        }
        None => {
            tracing::debug!("Adjust {} by {} changed nothing", id, delta);
            output::output_changed(false);
        }
    }
    Ok(())
}

pub async fn handle_reset(ctx: &mut CliContext) -> anyhow::Result<()> {
    let changed = ctx.reset_scores()?;
    if changed {
        ctx.save().await?;
    }
    output::output_changed(changed);
    Ok(())
}
