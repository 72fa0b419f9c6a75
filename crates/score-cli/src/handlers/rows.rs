use crate::context::CliContext;
use crate::output;
use score_domain::{RowId, ScoreOperations};

pub async fn handle_add(ctx: &mut CliContext, text: String) -> anyhow::Result<()> {
    match ctx.add_row(text)? {
        Some(row) => {
            ctx.save().await?;
            output::output_success(&row);
        }
        None => output::output_changed(false),
    }
    Ok(())
}

pub fn handle_list(ctx: &CliContext) -> anyhow::Result<()> {
    output::output_list(ctx.list_rows()?);
    Ok(())
}

pub fn handle_get(ctx: &CliContext, id: RowId) -> anyhow::Result<()> {
    match ctx.get_row(id)? {
        Some(row) => output::output_success(&row),
        None => output::output_error(&format!("Row not found: {}", id)),
    }
    Ok(())
}

pub async fn handle_delete(ctx: &mut CliContext, id: RowId) -> anyhow::Result<()> {
    let changed = ctx.delete_row(id)?;
    if changed {
        ctx.save().await?;
    }
    output::output_success(serde_json::json!({"deleted": id, "changed": changed}));
    Ok(())
}

pub async fn handle_move(ctx: &mut CliContext, id: RowId, position: usize) -> anyhow::Result<()> {
    match ctx.move_row(id, position)? {
        Some(_) => {
            ctx.save().await?;
            output::output_list(ctx.list_rows()?);
        }
        None => output::output_changed(false),
    }
    Ok(())
}

pub async fn handle_reorder(ctx: &mut CliContext, ids: Vec<RowId>) -> anyhow::Result<()> {
    ctx.reorder_rows(ids)?;
    ctx.save().await?;
    output::output_list(ctx.list_rows()?);
    Ok(())
}
