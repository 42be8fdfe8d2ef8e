use almanac_store::StoreError;

/// Failure kinds of a single generation call.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// No API credential is stored; raised before any network I/O.
    #[error("API key not found")]
    MissingCredential,
    /// Transport-level failure (DNS, refused connection, timeout, broken body).
    #[error("failed to reach the chat completion endpoint: {0}")]
    Network(#[source] reqwest::Error),
    /// The response did not carry `choices[0].message.content`.
    #[error("invalid API response (HTTP {status}): {detail}")]
    MalformedResponse { status: u16, detail: String },
    /// Reading a preference failed.
    #[error("failed to read preferences: {0}")]
    Storage(#[from] StoreError),
}
