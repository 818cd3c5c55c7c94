mod agent;
mod api;
mod commands;
mod corpus;
mod llm;
mod state;

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use poise::serenity_prelude as serenity;
use poise::{Framework, FrameworkOptions};
use tracing::{error, info, Level};

use agent::SuperLeeAgent;
use corpus::{CorpusStore, Knowledge};
use llm::{CompletionBackend, LlmClient};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    // Load env
    let _ = dotenv::dotenv();
    let token = dotenv::var("DISCORD_TOKEN").expect("DISCORD_TOKEN required");
    let guild_id: Option<serenity::GuildId> = dotenv::var("DISCORD_GUILD_ID")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(serenity::GuildId::new);

    // Corpus and knowledge base
    let corpus = CorpusStore::new();
    info!(sections = corpus.sections().len(), "Corpus loaded");

    let kb_path = dotenv::var("KNOWLEDGE_BASE_PATH")
        .unwrap_or_else(|_| "docs/combined.md".to_string());
    let knowledge = Knowledge::load(&PathBuf::from(kb_path), &corpus);
    info!(
        knowledge_chars = knowledge.text().chars().count(),
        "Knowledge base ready"
    );

    // Completion backend is optional; without one the agent answers from
    // documentation alone.
    let backend: Option<Arc<dyn CompletionBackend>> = match LlmClient::from_env()? {
        Some(client) => {
            info!("LLM backend configured");
            Some(Arc::new(client))
        }
        None => {
            info!("No LLM backend configured, answering from documentation only");
            None
        }
    };

    let agent = Arc::new(SuperLeeAgent::new(corpus, knowledge, backend));

    // Parse admin user IDs from env
    let admin_ids: HashSet<u64> = dotenv::var("ADMIN_USER_IDS")
        .unwrap_or_default()
        .split(',')
        .filter_map(|s| s.trim().parse::<u64>().ok())
        .collect();
    if !admin_ids.is_empty() {
        info!(count = admin_ids.len(), "Admin users configured");
    }

    let app_state = AppState { agent, admin_ids };

    let intents =
        serenity::GatewayIntents::GUILDS | serenity::GatewayIntents::GUILD_MESSAGES;

    let framework = Framework::builder()
        .options(FrameworkOptions {
            commands: vec![commands::superlee()],
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Bot connected as: {} ({})", ready.user.name, ready.user.id);

                let commands = &framework.options().commands;
                info!("Registering {} top-level command(s):", commands.len());
                for cmd in commands {
                    info!("  /{} ({} subcommands)", cmd.name, cmd.subcommands.len());
                    for sub in &cmd.subcommands {
                        info!("    /{} {}", cmd.name, sub.name);
                    }
                }

                if let Some(gid) = guild_id {
                    info!("Registering to guild {} (instant)", gid);
                    poise::builtins::register_in_guild(
                        ctx,
                        &framework.options().commands,
                        gid,
                    )
                    .await?;
                } else {
                    info!("Registering globally (up to 1 hour delay)");
                    poise::builtins::register_globally(
                        ctx,
                        &framework.options().commands,
                    )
                    .await?;
                }

                Ok(app_state)
            })
        })
        .build();

    info!("Starting SuperLee Discord bot...");

    let mut client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create client: {}", e))?;

    if let Err(e) = client.start().await {
        error!("Client error: {}", e);
    }

    Ok(())
}
