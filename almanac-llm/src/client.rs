use std::sync::Arc;

use almanac_store::PreferenceStore;
use almanac_store::impls::settings::{get_api_key, get_system_prompt};
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::error::GenerationError;
use crate::prompt::resolve_system_prompt;
use crate::wire::{ChatCompletionResponse, GenerationRequest, ZHIPU_CHAT_COMPLETIONS_URL};

/// One-shot client for the Zhipu chat completion endpoint.
///
/// Credential and system prompt override are read from the injected store on
/// every call, so settings edits apply to the next request without rebuilding
/// the client.
#[derive(Clone, Debug)]
pub struct GenerationClient {
    http: reqwest::Client,
    store: Arc<dyn PreferenceStore>,
    endpoint: String,
}

impl GenerationClient {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            store,
            endpoint: ZHIPU_CHAT_COMPLETIONS_URL.to_owned(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn store(&self) -> &Arc<dyn PreferenceStore> {
        &self.store
    }

    /// Read the credential and build the request body for `user_prompt`.
    ///
    /// Fails with [`GenerationError::MissingCredential`] when no usable
    /// credential is stored.
    pub async fn compose_request(
        &self,
        user_prompt: &str,
    ) -> Result<(String, GenerationRequest), GenerationError> {
        let api_key = get_api_key(self.store.as_ref())
            .await?
            .filter(|value| !value.trim().is_empty())
            .ok_or(GenerationError::MissingCredential)?;

        let custom_prompt = get_system_prompt(self.store.as_ref()).await?;
        let request = GenerationRequest {
            system_prompt: resolve_system_prompt(custom_prompt.as_deref()).to_owned(),
            user_prompt: user_prompt.to_owned(),
        };

        Ok((api_key, request))
    }

    pub async fn generate_response(&self, user_prompt: &str) -> Result<String, GenerationError> {
        let (api_key, request) = self.compose_request(user_prompt).await?;

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(&api_key)
            .json(&request.to_wire())
            .send()
            .await
            .map_err(GenerationError::Network)?;

        let status = response.status();
        let body = response.bytes().await.map_err(GenerationError::Network)?;
        debug!(
            status = status.as_u16(),
            body_len = body.len(),
            "chat completion response received"
        );

        let parsed: ChatCompletionResponse =
            serde_json::from_slice(&body).map_err(|e| GenerationError::MalformedResponse {
                status: status.as_u16(),
                detail: format!("body is not a chat completion: {e}"),
            })?;

        parsed
            .into_content()
            .ok_or_else(|| GenerationError::MalformedResponse {
                status: status.as_u16(),
                detail: "choices[0].message.content is missing or empty".to_owned(),
            })
    }
}
