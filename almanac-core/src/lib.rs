pub mod history;
pub mod session;

use std::sync::Arc;

use almanac_llm::GenerationClient;
use almanac_store::PreferenceStore;

pub use history::GenerationResult;
pub use session::{Session, SessionError};

pub type Error = anyhow::Error;

/// Shared handles passed to the command layer.
#[derive(Clone, Debug)]
pub struct Data {
    pub store: Arc<dyn PreferenceStore>,
    pub client: GenerationClient,
}

impl Data {
    /// Build the handles around a store, talking to the default endpoint.
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        let client = GenerationClient::new(store.clone());
        Self { store, client }
    }

    /// Build the handles around a store and a preconfigured client.
    ///
    /// The client should read from the same store, otherwise settings edits
    /// will not reach it.
    pub fn with_client(store: Arc<dyn PreferenceStore>, client: GenerationClient) -> Self {
        Self { store, client }
    }

    /// Start a fresh session with an empty history.
    pub fn session(&self) -> Session {
        Session::new(self.client.clone())
    }
}

/// Per-command view of the running application.
#[derive(Debug)]
pub struct Context<'a> {
    pub data: &'a Data,
    pub session: &'a mut Session,
}
