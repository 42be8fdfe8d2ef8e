pub mod prompt;
pub mod settings;
pub mod utility;

use almanac_core::{Context, Error};
use almanac_utils::parse::parse_command;

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::help::META,
    utility::quit::META,
    prompt::history::META,
    prompt::history::CLEAR_META,
    settings::show::META,
    settings::key::META,
    settings::system_prompt::META,
    settings::system_prompt::RESET_META,
];

/// What the front end should do after a line was handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Silent,
    Quit,
}

/// Route one input line: `/name args` runs a command, anything else is a prompt.
pub async fn dispatch(ctx: &mut Context<'_>, line: &str) -> Result<Reply, Error> {
    let Some((name, args)) = parse_command(line) else {
        return prompt::ask::ask(ctx, line).await;
    };

    match name {
        "help" => utility::help::help(args),
        "quit" | "exit" => Ok(utility::quit::quit()),
        "history" => prompt::history::history(ctx),
        "clear" => prompt::history::clear(ctx),
        "settings" => settings::show::settings(ctx).await,
        "key" => settings::key::key(ctx, args).await,
        "prompt" => settings::system_prompt::prompt(ctx, args).await,
        "reset-prompt" => settings::system_prompt::reset_prompt(ctx).await,
        other => Ok(Reply::Text(utility::messages::unknown_command_message(other))),
    }
}


#[cfg(test)]
mod tests {
    use almanac_core::Context;

    use super::{COMMANDS, Reply, dispatch};
    use crate::test_support::{memory_data, session_for};

    #[test]
    fn command_names_are_unique() {
        let mut names: Vec<_> = COMMANDS.iter().map(|meta| meta.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), COMMANDS.len());
    }

    #[tokio::test]
    async fn unknown_commands_are_reported() {
        let data = memory_data();
        let mut session = session_for(&data);
        let mut ctx = Context {
            data: &data,
            session: &mut session,
        };

        let Reply::Text(text) = dispatch(&mut ctx, "/nope").await.unwrap() else {
            panic!("expected text reply");
        };
        assert!(text.contains("/nope"));
    }

    #[tokio::test]
    async fn quit_ends_the_loop() {
        let data = memory_data();
        let mut session = session_for(&data);
        let mut ctx = Context {
            data: &data,
            session: &mut session,
        };

        assert_eq!(dispatch(&mut ctx, "/quit").await.unwrap(), Reply::Quit);
        assert_eq!(dispatch(&mut ctx, "/exit").await.unwrap(), Reply::Quit);
    }
}
