use crate::{CommandMeta, Reply};

pub const META: CommandMeta = CommandMeta {
    name: "quit",
    desc: "Leave Almanac. History is not kept between runs.",
    category: "utility",
    usage: "/quit",
};

pub fn quit() -> Reply {
    Reply::Quit
}
