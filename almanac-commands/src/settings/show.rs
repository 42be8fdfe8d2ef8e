use anyhow::Context as _;

use crate::{CommandMeta, Reply};
use almanac_core::{Context, Error};
use almanac_llm::prompt::{is_custom_system_prompt, resolve_system_prompt};
use almanac_store::impls::settings::{get_api_key, get_system_prompt};
use almanac_utils::formatting::{indent_block, mask_secret};

pub const META: CommandMeta = CommandMeta {
    name: "settings",
    desc: "Show the saved API key (masked) and the active system prompt.",
    category: "settings",
    usage: "/settings",
};

pub async fn settings(ctx: &mut Context<'_>) -> Result<Reply, Error> {
    let store = ctx.data.store.as_ref();
    let api_key = get_api_key(store)
        .await
        .context("failed to read API key")?;
    let custom_prompt = get_system_prompt(store)
        .await
        .context("failed to read system prompt")?;

    let source = if is_custom_system_prompt(custom_prompt.as_deref()) {
        "custom"
    } else {
        "default"
    };

    Ok(Reply::Text(format!(
        "API key: {}\nSystem prompt ({source}):\n{}",
        mask_secret(api_key.as_deref().unwrap_or_default()),
        indent_block(resolve_system_prompt(custom_prompt.as_deref()), "  ")
    )))
}
