mod ask;
mod topics;

use crate::state::Context;

/// SuperLee - Story Protocol documentation assistant
#[poise::command(slash_command, subcommands("ask::ask", "topics::topics"))]
pub async fn superlee(_ctx: Context<'_>) -> Result<(), anyhow::Error> {
    Ok(())
}
