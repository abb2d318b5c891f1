//! Provider-backed client on top of the `genai` crate
//!
//! The key is passed in by the caller rather than read from the provider's
//! own environment variable, so configuration stays in one place.

use super::client::LLMClient;
use super::error::BackendError;
use super::types::{ChatMessage, LLMRequest, LLMResponse, MessageRole, ResponseFormat};
use async_trait::async_trait;
use genai::adapter::AdapterKind;
use genai::chat::{
    ChatMessage as GenAIChatMessage, ChatOptions, ChatRequest as GenAIChatRequest,
    ChatResponseFormat,
};
use genai::resolver::{AuthData, Endpoint, ServiceTargetResolver};
use genai::{Client, ModelIden, ServiceTarget};
use std::time::Duration;
use tracing::{debug, error};

/// Chat client for a hosted provider (OpenAI by default)
pub struct GenAIClient {
    client: Client,
    model: String,
    provider: AdapterKind,
    /// Applied to each `chat` call as a whole
    timeout: Duration,
}

impl GenAIClient {
    /// `model` is the bare model name. `base_url` overrides the provider's
    /// endpoint, e.g. for a proxy or a compatible local server.
    pub fn new(
        provider: AdapterKind,
        model: String,
        api_key: String,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Self {
        if let Some(url) = &base_url {
            debug!("Using custom endpoint for {}: {}", provider.as_str(), url);
        }

        let resolved_model = model.clone();
        let resolver = ServiceTargetResolver::from_resolver_fn(
            move |service_target: ServiceTarget| -> Result<ServiceTarget, genai::resolver::Error> {
                let endpoint = match &base_url {
                    Some(url) => Endpoint::from_owned(url.clone()),
                    None => service_target.endpoint,
                };

                Ok(ServiceTarget {
                    endpoint,
                    auth: AuthData::from_single(api_key.clone()),
                    model: ModelIden::new(provider, &resolved_model),
                })
            },
        );

        let client = Client::builder()
            .with_service_target_resolver(resolver)
            .build();

        debug!(
            "Creating GenAI client: provider={}, model={}",
            provider.as_str(),
            model,
        );

        Self {
            client,
            model,
            provider,
            timeout,
        }
    }

    fn to_provider_message(msg: &ChatMessage) -> GenAIChatMessage {
        match msg.role {
            MessageRole::System => GenAIChatMessage::system(&msg.content),
            MessageRole::User => GenAIChatMessage::user(&msg.content),
            MessageRole::Assistant => GenAIChatMessage::assistant(&msg.content),
        }
    }

    /// Maps a provider failure onto our error taxonomy
    fn classify_error(&self, error: &genai::Error) -> BackendError {
        let message = format!("{} request failed: {}", self.provider.as_str(), error);
        let lowered = message.to_lowercase();

        if lowered.contains("401") || lowered.contains("unauthorized") {
            BackendError::AuthenticationError { message }
        } else if lowered.contains("429") || lowered.contains("rate limit") {
            BackendError::RateLimitError { retry_after: None }
        } else {
            BackendError::ApiError {
                message,
                status_code: None,
            }
        }
    }
}

#[async_trait]
impl LLMClient for GenAIClient {
    async fn chat(&self, request: LLMRequest) -> Result<LLMResponse, BackendError> {
        let started = std::time::Instant::now();

        let messages: Vec<GenAIChatMessage> = request
            .messages
            .iter()
            .map(Self::to_provider_message)
            .collect();

        let chat_request = GenAIChatRequest::new(messages);

        let mut options = ChatOptions::default();
        if let Some(temp) = request.temperature {
            options = options.with_temperature(temp as f64);
        }
        if let Some(max_tokens) = request.max_tokens {
            options = options.with_max_tokens(max_tokens);
        }
        if request.response_format == ResponseFormat::JsonObject {
            options = options.with_response_format(ChatResponseFormat::JsonMode);
        }

        let reply = match tokio::time::timeout(
            self.timeout,
            self.client
                .exec_chat(&self.model, chat_request, Some(&options)),
        )
        .await
        {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => {
                error!("{} API error: {}", self.provider.as_str(), e);
                return Err(self.classify_error(&e));
            }
            Err(_) => {
                error!(
                    "{} request timed out after {}s",
                    self.provider.as_str(),
                    self.timeout.as_secs()
                );
                return Err(BackendError::TimeoutError {
                    seconds: self.timeout.as_secs(),
                });
            }
        };

        let content = reply.first_text().unwrap_or_default().to_string();
        if content.trim().is_empty() {
            return Err(BackendError::InvalidResponse {
                message: "empty completion".to_string(),
                raw_response: None,
            });
        }

        Ok(LLMResponse::text(content, started.elapsed()))
    }

    fn name(&self) -> &str {
        self.provider.as_str()
    }

    fn model_info(&self) -> Option<String> {
        Some(self.model.clone())
    }
}

impl std::fmt::Debug for GenAIClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenAIClient")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}
