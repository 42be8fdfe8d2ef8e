use serde::{Deserialize, Serialize};

pub const ZHIPU_CHAT_COMPLETIONS_URL: &str =
    "https://open.bigmodel.cn/api/paas/v4/chat/completions";
pub const ZHIPU_MODEL: &str = "glm-4-flash";

/// The two prompts sent with one call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    pub system_prompt: String,
    pub user_prompt: String,
}

impl GenerationRequest {
    pub fn to_wire(&self) -> ChatCompletionRequest<'_> {
        ChatCompletionRequest {
            model: ZHIPU_MODEL,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &self.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &self.user_prompt,
                },
            ],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: Option<ChatResponseMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponseMessage {
    pub content: Option<String>,
    pub role: Option<String>,
}

impl ChatCompletionResponse {
    /// `choices[0].message.content`, if present and non-empty.
    pub fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()?
            .message?
            .content
            .filter(|content| !content.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ChatCompletionResponse, GenerationRequest};

    #[test]
    fn request_serializes_model_then_two_messages() {
        let request = GenerationRequest {
            system_prompt: "sys".to_owned(),
            user_prompt: "hello".to_owned(),
        };

        let encoded = serde_json::to_string(&request.to_wire()).unwrap();
        assert_eq!(
            encoded,
            r#"{"model":"glm-4-flash","messages":[{"role":"system","content":"sys"},{"role":"user","content":"hello"}]}"#
        );
    }

    #[test]
    fn extracts_first_choice_content() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [
                {"message": {"content": "first", "role": "assistant"}},
                {"message": {"content": "second", "role": "assistant"}}
            ]
        }))
        .unwrap();

        assert_eq!(response.into_content().as_deref(), Some("first"));
    }

    #[test]
    fn missing_paths_yield_none() {
        let cases = [
            json!({}),
            json!({"choices": []}),
            json!({"choices": [{}]}),
            json!({"choices": [{"message": {"role": "assistant"}}]}),
            json!({"choices": [{"message": {"content": "", "role": "assistant"}}]}),
        ];

        for case in cases {
            let response: ChatCompletionResponse = serde_json::from_value(case.clone()).unwrap();
            assert_eq!(response.into_content(), None, "case: {case}");
        }
    }
}
