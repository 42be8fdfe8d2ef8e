pub mod key;
pub mod show;
pub mod system_prompt;
