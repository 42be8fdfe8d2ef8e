pub mod help;
pub mod messages;
pub mod quit;
