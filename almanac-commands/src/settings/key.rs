use anyhow::Context as _;
use tracing::info;

use crate::utility::messages::usage_message;
use crate::{CommandMeta, Reply};
use almanac_core::{Context, Error};
use almanac_store::impls::settings::set_api_key;

pub const META: CommandMeta = CommandMeta {
    name: "key",
    desc: "Save your Zhipu API key.",
    category: "settings",
    usage: "/key <api-key>",
};

pub async fn key(ctx: &mut Context<'_>, args: &str) -> Result<Reply, Error> {
    let api_key = args.trim();
    if api_key.is_empty() {
        return Ok(Reply::Text(usage_message(META.usage)));
    }

    set_api_key(ctx.data.store.as_ref(), api_key)
        .await
        .context("failed to save API key")?;
    info!("API key updated");

    Ok(Reply::Text("API key saved.".to_owned()))
}
