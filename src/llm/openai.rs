// src/llm/openai.rs
use crate::llm::{ChatMessage, ChatModel};
use crate::utils::error::LlmError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Settings for an OpenAI-compatible chat endpoint (works with the hosted
/// API as well as LM Studio / vLLM style local deployments). Assembled once
/// at startup and injected; nothing here reads the environment.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
}

/// Chat-completions client behind the [`ChatModel`] seam.
///
/// Deliberately has no request timeout: report generation on a loaded model
/// can take minutes, and the pipeline has no cancellation path anyway.
pub struct OpenAiChatClient {
    http: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiChatClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        )
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[async_trait]
impl ChatModel for OpenAiChatClient {
    async fn generate(
        &self,
        system: &str,
        prior: &[ChatMessage],
        user: ChatMessage,
    ) -> Result<ChatMessage, LlmError> {
        let mut messages = Vec::with_capacity(prior.len() + 2);
        messages.push(ChatMessage::system(system));
        messages.extend(prior.iter().cloned());
        messages.push(user);

        tracing::debug!(
            "Sending {} messages to chat model {}",
            messages.len(),
            self.config.model
        );

        let request = ChatRequest {
            model: &self.config.model,
            messages: &messages,
        };

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("HTTP error status: {} from chat endpoint", status);
            return Err(LlmError::Http(status));
        }

        let body: ChatResponse = response.json().await?;
        let reply = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or(LlmError::EmptyResponse)?;

        tracing::debug!("Received assistant reply ({} bytes)", reply.content.len());

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn test_client(server: &MockServer) -> OpenAiChatClient {
        OpenAiChatClient::new(OpenAiConfig {
            api_base: server.base_url(),
            api_key: "not-needed".to_string(),
            model: "test-model".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn generate_returns_first_choice_message() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .json_body_partial(r#"{"model": "test-model"}"#);
                then.status(200).json_body(json!({
                    "choices": [
                        {"message": {"role": "assistant", "content": "## Report"}}
                    ]
                }));
            })
            .await;

        let client = test_client(&server);
        let reply = client
            .generate("be brief", &[], ChatMessage::user("hello"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(reply.role, "assistant");
        assert_eq!(reply.content, "## Report");
    }

    #[tokio::test]
    async fn empty_choices_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).json_body(json!({"choices": []}));
            })
            .await;

        let client = test_client(&server);
        let err = client
            .generate("be brief", &[], ChatMessage::user("hello"))
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::EmptyResponse));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(401);
            })
            .await;

        let client = test_client(&server);
        let err = client
            .generate("be brief", &[], ChatMessage::user("hello"))
            .await
            .unwrap_err();

        match err {
            LlmError::Http(status) => assert_eq!(status, reqwest::StatusCode::UNAUTHORIZED),
            other => panic!("expected Http error, got {other:?}"),
        }
    }
}
