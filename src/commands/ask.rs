use crate::state::Context;
use tracing::info;

/// Ask a question about Story Protocol
#[poise::command(slash_command, guild_only)]
pub async fn ask(
    ctx: Context<'_>,
    #[description = "Your question"] question: String,
    #[description = "Show which pipeline path answered (admin only)"] debug: Option<bool>,
) -> Result<(), anyhow::Error> {
    // Acknowledge before the backend round-trip so the interaction
    // doesn't time out.
    ctx.defer().await?;

    let is_admin = ctx.data().is_admin(ctx.author().id.get());
    let show_debug = debug.unwrap_or(false) && is_admin;

    info!(user = %ctx.author().name, question, "Question received");

    let answer = ctx.data().agent.answer_question(&question).await;

    info!(
        origin = answer.origin.label(),
        answer_len = answer.text.len(),
        "Question answered"
    );

    let mut full = answer.text;
    if show_debug {
        full.push_str(&format!(
            "\n\n---\n**[Debug]** answered via `{}`",
            answer.origin.label()
        ));
    }

    send_chunked(&ctx, &full).await
}

/// Send a message in Discord-safe chunks (max 1990 chars). Uses ctx.say()
/// for every chunk so follow-ups go through the interaction webhook, which
/// doesn't require Send Messages channel permission.
async fn send_chunked(ctx: &Context<'_>, text: &str) -> Result<(), anyhow::Error> {
    let mut remaining = text;
    while !remaining.is_empty() {
        let chunk_len = remaining.len().min(1990);
        let split_at = if chunk_len < remaining.len() {
            remaining[..chunk_len]
                .rfind('\n')
                .or_else(|| remaining[..chunk_len].rfind(' '))
                .map(|i| i + 1)
                .unwrap_or(chunk_len)
        } else {
            chunk_len
        };
        let chunk = &remaining[..split_at];
        remaining = &remaining[split_at..];

        ctx.say(chunk).await?;
    }
    Ok(())
}
