use crate::utility::messages::unknown_category_message;
use crate::{COMMANDS, CommandMeta, Reply};
use almanac_core::Error;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "/help [category]",
};

pub fn help(query: &str) -> Result<Reply, Error> {
    let category = Some(query.trim()).filter(|raw| !raw.is_empty());

    let mut categories: Vec<&str> = COMMANDS.iter().map(|c| c.category).collect();
    categories.sort_unstable();
    categories.dedup();

    if let Some(wanted_category) = category
        && !categories.contains(&wanted_category)
    {
        return Ok(Reply::Text(unknown_category_message(
            wanted_category,
            &categories,
        )));
    }

    let commands = sorted_commands(category);
    let mut out = String::from("Type a question to ask it. Commands:");
    let mut current_category = "";
    for command in commands {
        if command.category != current_category {
            current_category = command.category;
            out.push_str(&format!("\n\n{current_category}"));
        }
        out.push_str(&format!("\n  {:<22} {}", command.usage, command.desc));
    }

    Ok(Reply::Text(out))
}

fn sorted_commands(category: Option<&str>) -> Vec<&'static CommandMeta> {
    let mut filtered: Vec<&'static CommandMeta> = COMMANDS
        .iter()
        .filter(|cmd| match category {
            Some(wanted) => cmd.category == wanted,
            None => true,
        })
        .collect();

    filtered.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    filtered
}
