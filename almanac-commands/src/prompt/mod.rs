pub mod ask;
pub mod history;
