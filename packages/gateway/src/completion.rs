//! Chat-completion client for an OpenAI-compatible endpoint.

use civic::{strip_markdown, ChatPrompt};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::{FailureCause, RequestFailed};

#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: [Message<'a>; 2],
    model: &'a str,
    temperature: f64,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// One request, one response: no streaming, no retry.
pub struct CompletionClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
    temperature: f64,
}

impl CompletionClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.completion.url.clone(),
            api_key: config.completion_key.clone(),
            model: config.completion.model.clone(),
            temperature: config.completion.temperature,
        }
    }

    /// Send `prompt` and return the first choice's text with markdown
    /// decoration stripped.
    pub async fn complete(&self, prompt: &ChatPrompt) -> Result<String, RequestFailed> {
        match self.request(prompt).await {
            Ok(text) => {
                info!(model = %self.model, chars = text.len(), "completion received");
                Ok(text)
            }
            Err(err) => {
                warn!(model = %self.model, cause = %err.cause(), "completion failed");
                Err(err)
            }
        }
    }

    async fn request(&self, prompt: &ChatPrompt) -> Result<String, RequestFailed> {
        let body = ChatRequest {
            messages: [
                Message {
                    role: "system",
                    content: &prompt.system,
                },
                Message {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            model: &self.model,
            temperature: self.temperature,
        };

        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FailureCause::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let raw = resp.text().await?;
        let parsed: ChatResponse = serde_json::from_str(&raw)?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .map(|content| strip_markdown(&content))
            .filter(|text| !text.is_empty())
            .ok_or(FailureCause::EmptyContent)?;

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, MockServer};
    use axum::http::StatusCode;
    use serde_json::json;

    fn client(server: &MockServer) -> CompletionClient {
        CompletionClient::new(&testing::config(&server.url, &server.url))
    }

    fn prompt() -> ChatPrompt {
        civic::prompt::awareness("fundamental-rights", "")
    }

    #[tokio::test]
    async fn sends_both_messages_and_strips_reply() {
        let server = testing::serve(|_| {
            testing::ok(json!({
                "choices": [{ "message": { "role": "assistant", "content": "**Article 14** guarantees _equality_." } }]
            }))
        })
        .await;

        let text = client(&server).complete(&prompt()).await.unwrap();
        assert_eq!(text, "Article 14 guarantees equality.");

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, "POST");
        assert_eq!(request.header("authorization"), Some("Bearer test-completion-key"));
        assert_eq!(request.body["model"], "llama-3.1-8b-instant");
        assert_eq!(request.body["temperature"], 0.7);
        assert_eq!(request.body["messages"][0]["role"], "system");
        assert_eq!(request.body["messages"][1]["role"], "user");
        assert_eq!(
            request.body["messages"][1]["content"],
            "Tell me about fundamental-rights"
        );
    }

    #[tokio::test]
    async fn server_error_fails() {
        let server =
            testing::serve(|_| (StatusCode::INTERNAL_SERVER_ERROR, "upstream down".into())).await;

        let err = client(&server).complete(&prompt()).await.unwrap_err();
        assert!(matches!(
            err.cause(),
            FailureCause::Status { status: 500, .. }
        ));
    }

    #[tokio::test]
    async fn malformed_body_fails() {
        let server = testing::serve(|_| (StatusCode::OK, "<html>not json</html>".into())).await;

        let err = client(&server).complete(&prompt()).await.unwrap_err();
        assert!(matches!(err.cause(), FailureCause::Malformed(_)));
    }

    #[tokio::test]
    async fn missing_or_blank_content_fails() {
        for body in [
            json!({ "choices": [] }),
            json!({ "choices": [{ "message": { "content": null } }] }),
            json!({ "choices": [{ "message": { "content": "   " } }] }),
            json!({ "choices": [{ "message": { "content": "** ##  `` **" } }] }),
        ] {
            let server = testing::serve(move |_| testing::ok(body.clone())).await;
            let err = client(&server).complete(&prompt()).await.unwrap_err();
            assert!(matches!(err.cause(), FailureCause::EmptyContent));
        }
    }

    #[tokio::test]
    async fn unreachable_endpoint_fails() {
        let config = testing::config("http://127.0.0.1:9", "http://127.0.0.1:9");
        let err = CompletionClient::new(&config)
            .complete(&prompt())
            .await
            .unwrap_err();
        assert!(matches!(err.cause(), FailureCause::Transport(_)));
    }
}
