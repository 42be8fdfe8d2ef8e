use anyhow::Context as _;
use tracing::info;

use crate::utility::messages::usage_message;
use crate::{CommandMeta, Reply};
use almanac_core::{Context, Error};
use almanac_store::impls::settings::set_system_prompt;
use almanac_utils::parse::unescape_newlines;

pub const META: CommandMeta = CommandMeta {
    name: "prompt",
    desc: "Replace the system prompt. Write \\n for a line break.",
    category: "settings",
    usage: "/prompt <text>",
};

pub const RESET_META: CommandMeta = CommandMeta {
    name: "reset-prompt",
    desc: "Go back to the built-in system prompt.",
    category: "settings",
    usage: "/reset-prompt",
};

pub async fn prompt(ctx: &mut Context<'_>, args: &str) -> Result<Reply, Error> {
    if args.trim().is_empty() {
        return Ok(Reply::Text(format!(
            "{}\nUse {} to go back to the default.",
            usage_message(META.usage),
            RESET_META.usage
        )));
    }

    let system_prompt = unescape_newlines(args);
    set_system_prompt(ctx.data.store.as_ref(), &system_prompt)
        .await
        .context("failed to save system prompt")?;
    info!(prompt_len = system_prompt.len(), "system prompt updated");

    Ok(Reply::Text("System prompt saved.".to_owned()))
}

pub async fn reset_prompt(ctx: &mut Context<'_>) -> Result<Reply, Error> {
    set_system_prompt(ctx.data.store.as_ref(), "")
        .await
        .context("failed to reset system prompt")?;
    info!("system prompt reset to default");

    Ok(Reply::Text("System prompt reset to the default.".to_owned()))
}
