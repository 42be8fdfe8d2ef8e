use crate::{CommandMeta, Reply};
use almanac_core::{Context, Error};
use almanac_utils::formatting::{indent_block, preview};
use almanac_utils::time::format_local_timestamp;

pub const META: CommandMeta = CommandMeta {
    name: "history",
    desc: "Show answers from this run, newest first.",
    category: "prompt",
    usage: "/history",
};

pub const CLEAR_META: CommandMeta = CommandMeta {
    name: "clear",
    desc: "Forget the answers from this run.",
    category: "prompt",
    usage: "/clear",
};

const PROMPT_PREVIEW_CHARS: usize = 80;

pub fn history(ctx: &mut Context<'_>) -> Result<Reply, Error> {
    if ctx.session.history().len() == 0 {
        return Ok(Reply::Text("No answers yet.".to_owned()));
    }

    let entries = ctx
        .session
        .history()
        .enumerate()
        .map(|(idx, item)| {
            format!(
                "[{}] {}\nQ: {}\nA:\n{}",
                idx + 1,
                format_local_timestamp(item.timestamp),
                preview(&item.prompt, PROMPT_PREVIEW_CHARS),
                indent_block(&item.response, "  ")
            )
        })
        .collect::<Vec<_>>();

    Ok(Reply::Text(entries.join("\n\n")))
}

pub fn clear(ctx: &mut Context<'_>) -> Result<Reply, Error> {
    let removed = ctx.session.history().len();
    ctx.session.clear_history();
    Ok(Reply::Text(format!("Cleared {removed} answer(s).")))
}
