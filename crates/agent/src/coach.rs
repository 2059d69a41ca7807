//! The coaching handler.
//!
//! One registered callback: render the question into the fixed template,
//! submit it to the provider, and return the completion text verbatim.
//!
//! Error policy: anything that goes wrong while producing a completion is
//! converted to an in-band text response with a fixed prefix. The broker
//! never sees a structured failure from this handler.

use std::sync::Arc;

use async_trait::async_trait;
use fxcoach_core::handler::{HandlerManifest, RequestHandler};
use fxcoach_core::provider::{Provider, ProviderRequest};
use tracing::{debug, error};

use crate::prompt::render_prompt;

/// Literal prefix of every in-band error response.
pub const ERROR_PREFIX: &str = "Error generating trading advice: ";

/// Broker-visible contract: these must stay stable across processes.
const HANDLER_NAME: &str = "ai_forex_day_trader_coach";
const HANDLER_DESCRIPTION: &str = "Your coach for profitable Forex trend trading";
const PARAM_NAME: &str = "trading_question";
const PARAM_DESCRIPTION: &str =
    "The user's forex trading question or scenario they need coaching on";

/// The forex day-trading coach handler.
pub struct CoachingHandler {
    provider: Arc<dyn Provider>,
    model: String,
    temperature: f32,
}

impl CoachingHandler {
    /// Create a handler backed by the given provider and model.
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: 0.7,
        }
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

#[async_trait]
impl RequestHandler for CoachingHandler {
    fn manifest(&self) -> HandlerManifest {
        HandlerManifest::single_string(
            HANDLER_NAME,
            HANDLER_DESCRIPTION,
            PARAM_NAME,
            PARAM_DESCRIPTION,
        )
    }

    async fn handle(&self, question: &str) -> String {
        let request = ProviderRequest::prompt(&self.model, render_prompt(question))
            .with_temperature(self.temperature);

        match self.provider.complete(request).await {
            Ok(response) => {
                debug!(
                    provider = %self.provider.name(),
                    model = %response.model,
                    chars = response.content.len(),
                    "Generated coaching response"
                );
                response.content
            }
            Err(e) => {
                error!(provider = %self.provider.name(), error = %e, "Completion failed");
                format!("{ERROR_PREFIX}{e}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxcoach_core::error::ProviderError;
    use fxcoach_core::provider::ProviderResponse;

    /// Provider stub returning a canned result.
    struct StubProvider {
        outcome: Result<String, ProviderError>,
        last_request: std::sync::Mutex<Option<ProviderRequest>>,
    }

    impl StubProvider {
        fn ok(content: &str) -> Self {
            Self {
                outcome: Ok(content.to_string()),
                last_request: std::sync::Mutex::new(None),
            }
        }

        fn err(error: ProviderError) -> Self {
            Self {
                outcome: Err(error),
                last_request: std::sync::Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl Provider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        async fn complete(
            &self,
            request: ProviderRequest,
        ) -> Result<ProviderResponse, ProviderError> {
            *self.last_request.lock().unwrap() = Some(request);
            match &self.outcome {
                Ok(content) => Ok(ProviderResponse {
                    content: content.clone(),
                    model: "stub-model".into(),
                    usage: None,
                }),
                Err(e) => Err(e.clone()),
            }
        }
    }

    #[tokio::test]
    async fn success_returns_completion_verbatim() {
        // Odd whitespace included on purpose: no reformatting allowed.
        let text = "  1. MARKET ANALYSIS\n\n   watch EUR/USD.  \n";
        let provider = Arc::new(StubProvider::ok(text));
        let handler = CoachingHandler::new(provider, "gpt-4");

        let response = handler.handle("Is EUR/USD trending?").await;
        assert_eq!(response, text);
    }

    #[tokio::test]
    async fn failure_returns_prefixed_error_string() {
        let provider = Arc::new(StubProvider::err(ProviderError::RateLimited {
            retry_after_secs: 5,
        }));
        let handler = CoachingHandler::new(provider, "gpt-4");

        let response = handler.handle("any question").await;
        assert!(response.starts_with(ERROR_PREFIX));
        assert!(response.contains("Rate limited"));
    }

    #[tokio::test]
    async fn response_is_never_empty_for_nonempty_question() {
        for provider in [
            Arc::new(StubProvider::ok("advice")) as Arc<dyn Provider>,
            Arc::new(StubProvider::err(ProviderError::Network("down".into()))),
        ] {
            let handler = CoachingHandler::new(provider, "gpt-4");
            let response = handler.handle("a question").await;
            assert!(!response.is_empty());
        }
    }

    #[tokio::test]
    async fn request_uses_configured_model_and_rendered_prompt() {
        let provider = Arc::new(StubProvider::ok("advice"));
        let handler =
            CoachingHandler::new(Arc::clone(&provider) as Arc<dyn Provider>, "gpt-4")
                .with_temperature(0.3);

        handler.handle("How do I set a stop loss?").await;

        let request = provider.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.model, "gpt-4");
        assert!((request.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(request.messages.len(), 1);
        assert!(request.messages[0]
            .content
            .contains("User's Question/Scenario: How do I set a stop loss?"));
    }

    #[test]
    fn manifest_is_the_fixed_broker_contract() {
        let provider = Arc::new(StubProvider::ok(""));
        let handler = CoachingHandler::new(provider, "gpt-4");
        let manifest = handler.manifest();
        assert_eq!(manifest.name, "ai_forex_day_trader_coach");
        assert_eq!(
            manifest.description,
            "Your coach for profitable Forex trend trading"
        );
        assert_eq!(manifest.parameters.len(), 1);
        assert_eq!(manifest.parameters[0].name, "trading_question");
        assert!(manifest.parameters[0].required);
    }
}
