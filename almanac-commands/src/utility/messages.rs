use almanac_core::SessionError;
use almanac_llm::GenerationError;

pub fn usage_message(usage: &str) -> String {
    format!("Usage: {usage}")
}

pub fn unknown_command_message(name: &str) -> String {
    format!("Unknown command `/{name}`. Type /help to see what is available.")
}

pub fn unknown_category_message(category: &str, categories: &[&str]) -> String {
    format!(
        "Unknown category `{category}`. Available categories: {}",
        categories.join(", ")
    )
}

/// User-facing text for a failed prompt submission.
pub fn generation_failure_message(error: &SessionError) -> String {
    match error {
        SessionError::EmptyPrompt => "Please type a question first.".to_owned(),
        SessionError::Generation(GenerationError::MissingCredential) => {
            "No API key saved yet. Use /key <your-zhipu-api-key> to add one.".to_owned()
        }
        SessionError::Generation(GenerationError::Network(_)) => {
            "Could not reach the Zhipu API. Check your connection and try again.".to_owned()
        }
        SessionError::Generation(GenerationError::MalformedResponse { status, .. }) => format!(
            "The Zhipu API returned an unexpected response (HTTP {status}). Check your API key and try again."
        ),
        SessionError::Generation(GenerationError::Storage(_)) => {
            "Could not read your settings. Try again in a moment.".to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use almanac_core::SessionError;
    use almanac_llm::GenerationError;

    use super::{generation_failure_message, unknown_command_message};

    #[test]
    fn failure_messages_point_at_the_fix() {
        let missing = SessionError::Generation(GenerationError::MissingCredential);
        assert!(generation_failure_message(&missing).contains("/key"));

        let malformed = SessionError::Generation(GenerationError::MalformedResponse {
            status: 401,
            detail: "choices[0].message.content is missing or empty".to_owned(),
        });
        assert!(generation_failure_message(&malformed).contains("HTTP 401"));
    }

    #[test]
    fn unknown_command_mentions_help() {
        let text = unknown_command_message("frobnicate");
        assert!(text.contains("/frobnicate"));
        assert!(text.contains("/help"));
    }
}
