/// A completed prompt/response exchange kept in session history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationResult {
    pub prompt: String,
    pub response: String,
    /// Completion time, unix epoch milliseconds.
    pub timestamp: u64,
}
