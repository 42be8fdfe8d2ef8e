use crate::store::{PreferenceStore, StoreError};

/// Preference key holding the Zhipu API credential.
pub const API_KEY_KEY: &str = "zhipu_api_key";
/// Preference key holding the system prompt override.
pub const SYSTEM_PROMPT_KEY: &str = "system_prompt";

pub async fn get_api_key(store: &dyn PreferenceStore) -> Result<Option<String>, StoreError> {
    store.get(API_KEY_KEY).await
}

pub async fn set_api_key(store: &dyn PreferenceStore, api_key: &str) -> Result<(), StoreError> {
    store.set(API_KEY_KEY, api_key).await
}

pub async fn get_system_prompt(store: &dyn PreferenceStore) -> Result<Option<String>, StoreError> {
    store.get(SYSTEM_PROMPT_KEY).await
}

/// Store a system prompt override. An empty string means "use the default".
pub async fn set_system_prompt(
    store: &dyn PreferenceStore,
    system_prompt: &str,
) -> Result<(), StoreError> {
    store.set(SYSTEM_PROMPT_KEY, system_prompt).await
}
