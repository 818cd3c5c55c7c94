use std::collections::BTreeMap;

use crate::state::Context;

/// List the documentation topics SuperLee can answer about
#[poise::command(slash_command, guild_only)]
pub async fn topics(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    let corpus = ctx.data().agent.corpus();

    // Group section titles by category
    let mut by_category: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for category in corpus.categories() {
        let titles = corpus
            .by_category(category)
            .into_iter()
            .map(|s| s.title)
            .collect();
        by_category.insert(category, titles);
    }

    let mut output = String::from("**Documentation Topics**\n\n");
    for (category, titles) in &by_category {
        output.push_str(&format!("**{}**\n", category));
        for title in titles {
            output.push_str(&format!("  - {}\n", title));
        }
        output.push('\n');
    }
    output.push_str("Ask away with `/superlee ask`!");

    ctx.say(output).await?;
    Ok(())
}
