//! Agent configuration.
//!
//! Populated from the environment only — the single documented source for
//! credentials. There are no file fallbacks and no hardcoded secrets.
//!
//! Required:
//! - `OPENAI_API_KEY` — LLM provider API key
//! - `AGENT_JWT`      — broker authentication token
//!
//! Optional:
//! - `FXCOACH_BROKER_URL`   (default: ws://localhost:8080/ws/agents)
//! - `FXCOACH_MODEL`        (default: gpt-4)
//! - `FXCOACH_PROVIDER_URL` (default: https://api.openai.com/v1)

const DEFAULT_BROKER_URL: &str = "ws://localhost:8080/ws/agents";
const DEFAULT_MODEL: &str = "gpt-4";
const DEFAULT_PROVIDER_URL: &str = "https://api.openai.com/v1";

/// Runtime configuration for the agent process.
#[derive(Clone)]
pub struct AgentConfig {
    /// LLM provider API key.
    pub openai_api_key: String,
    /// Broker authentication token.
    pub agent_jwt: String,
    /// Websocket URL of the broker's agent endpoint.
    pub broker_url: String,
    /// Model identifier sent with every completion request.
    pub model: String,
    /// Base URL of the OpenAI-compatible provider.
    pub provider_url: String,
}

impl std::fmt::Debug for AgentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentConfig")
            .field("openai_api_key", &"[REDACTED]")
            .field("agent_jwt", &"[REDACTED]")
            .field("broker_url", &self.broker_url)
            .field("model", &self.model)
            .field("provider_url", &self.provider_url)
            .finish()
    }
}

impl AgentConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration via a lookup function.
    ///
    /// Unset and empty values are both treated as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let openai_api_key = get("OPENAI_API_KEY")
            .ok_or(ConfigError::MissingCredential("OPENAI_API_KEY"))?;
        let agent_jwt = get("AGENT_JWT").ok_or(ConfigError::MissingCredential("AGENT_JWT"))?;

        Ok(Self {
            openai_api_key,
            agent_jwt,
            broker_url: get("FXCOACH_BROKER_URL").unwrap_or_else(|| DEFAULT_BROKER_URL.into()),
            model: get("FXCOACH_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            provider_url: get("FXCOACH_PROVIDER_URL")
                .unwrap_or_else(|| DEFAULT_PROVIDER_URL.into()),
        })
    }

    /// Log label for the configured provider endpoint.
    pub fn provider_name(&self) -> &'static str {
        if self.provider_url.contains("api.openai.com") {
            "openai"
        } else if self.provider_url.contains("openrouter.ai") {
            "openrouter"
        } else if self.provider_url.contains("localhost:11434") {
            "ollama"
        } else {
            "openai-compat"
        }
    }
}

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("required credential {0} is not set")]
    MissingCredential(&'static str),
}
