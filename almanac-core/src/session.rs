use std::collections::VecDeque;

use almanac_llm::{GenerationClient, GenerationError};
use almanac_utils::time::now_unix_millis;
use tracing::{debug, info};

use crate::history::GenerationResult;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("prompt is empty")]
    EmptyPrompt,
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Prompt submission plus the in-memory result history of one run.
///
/// History is newest first and only grows on successful calls. It is owned by
/// the session and never persisted.
#[derive(Debug)]
pub struct Session {
    client: GenerationClient,
    history: VecDeque<GenerationResult>,
}

impl Session {
    pub fn new(client: GenerationClient) -> Self {
        Self {
            client,
            history: VecDeque::new(),
        }
    }

    pub async fn submit(&mut self, prompt: &str) -> Result<GenerationResult, SessionError> {
        if prompt.trim().is_empty() {
            return Err(SessionError::EmptyPrompt);
        }

        debug!(prompt_len = prompt.len(), "submitting prompt");
        let response = self.client.generate_response(prompt).await?;

        let result = GenerationResult {
            prompt: prompt.to_owned(),
            response,
            timestamp: now_unix_millis(),
        };
        self.history.push_front(result.clone());

        info!(
            response_len = result.response.len(),
            history_len = self.history.len(),
            "generation completed"
        );
        Ok(result)
    }

    pub fn history(&self) -> impl ExactSizeIterator<Item = &GenerationResult> + '_ {
        self.history.iter()
    }

    pub fn latest(&self) -> Option<&GenerationResult> {
        self.history.front()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
