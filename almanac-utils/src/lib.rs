/// Shared formatting helpers (masking, previews).
pub mod formatting;
/// Single source of truth for the command prefix typed in the terminal.
pub const COMMAND_PREFIX: char = '/';
/// Pure parser helpers.
pub mod parse;
/// Shared time helpers.
pub mod time;
