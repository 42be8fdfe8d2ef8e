pub mod client;
pub mod error;
pub mod prompt;
pub mod wire;

pub use client::GenerationClient;
pub use error::GenerationError;
