//! Clothing classifier — formats the multimodal request and parses the
//! model's reply into a typed `ClassificationResult`.

use crate::errors::AppError;
use crate::llm_client::{ChatMessage, ContentPart, ImageUrl, LlmClient};
use crate::models::item::ClassificationResult;
use crate::wardrobe::prompts::{CLASSIFY_SYSTEM, CLASSIFY_USER_TEXT};

/// Builds the classification chat: a system prompt plus a user message
/// carrying the instruction text and the image payload (a data URL).
pub fn build_classify_messages(image_data: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(CLASSIFY_SYSTEM),
        ChatMessage::user_parts(vec![
            ContentPart::Text {
                text: CLASSIFY_USER_TEXT.to_string(),
            },
            ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: image_data.to_string(),
                },
            },
        ]),
    ]
}

/// Classifies a clothing image via the LLM. Missing fields in the reply are
/// default-filled by `ClassificationResult`'s serde defaults.
pub async fn classify_image(
    image_data: &str,
    llm: &LlmClient,
) -> Result<ClassificationResult, AppError> {
    let messages = build_classify_messages(image_data);
    llm.chat_json::<ClassificationResult>(&messages)
        .await
        .map_err(|e| AppError::Llm(format!("Clothing classification failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::MessageContent;
    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_classify_messages_carry_system_and_image() {
        let messages = build_classify_messages("data:image/png;base64,AAAA");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");

        let value = serde_json::to_value(&messages[1]).unwrap();
        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(
            value["content"][1]["image_url"]["url"],
            "data:image/png;base64,AAAA"
        );
    }

    #[test]
    fn test_system_prompt_names_the_schema_fields() {
        match &build_classify_messages("x")[0].content {
            MessageContent::Text(text) => {
                for field in ["\"type\"", "\"colors\"", "\"styles\"", "\"confidence\""] {
                    assert!(text.contains(field), "system prompt missing {field}");
                }
            }
            other => panic!("expected text system prompt, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_classify_image_parses_partial_reply_with_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": {
                    "role": "assistant",
                    "content": "{\"type\": \"jacket\", \"colors\": [\"navy\"]}"
                } }]
            })))
            .mount(&server)
            .await;

        let llm = LlmClient::new("test-key".to_string(), "http://localhost:8000".to_string())
            .with_base_url(format!("{}/chat/completions", server.uri()));

        let result = classify_image("data:image/png;base64,AAAA", &llm)
            .await
            .unwrap();
        assert_eq!(result.kind, "jacket");
        assert_eq!(result.colors, vec!["navy".to_string()]);
        // omitted fields default-filled
        assert!((result.confidence - 0.5).abs() < f32::EPSILON);
        assert_eq!(result.description, "Analysis unavailable");
    }

    #[tokio::test]
    async fn test_classify_image_surfaces_llm_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let llm = LlmClient::new("test-key".to_string(), "http://localhost:8000".to_string())
            .with_base_url(format!("{}/chat/completions", server.uri()));

        let err = classify_image("data:image/png;base64,AAAA", &llm)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
