//! RequestHandler trait — the callback the broker invokes.
//!
//! A handler is registered once with the broker under a fixed name and then
//! answers free-text questions for the lifetime of the process.
//!
//! The contract facing the broker is deliberately infallible: `handle`
//! returns a plain `String` in every case. Failures while producing an
//! answer are reported *in-band* as formatted text, never as a structured
//! error. The session loop relies on this to guarantee exactly one response
//! per request.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A declared input parameter, sent to the broker at registration so it can
/// route and validate inbound requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerParameter {
    /// Parameter name (the key under which the value arrives in an invoke)
    pub name: String,

    /// Human-readable description shown to callers
    pub description: String,

    /// Whether the broker must require this parameter
    pub required: bool,
}

/// Registration metadata for a handler.
///
/// Sent exactly once at startup. The name and description are part of the
/// broker-visible contract and must stay stable across processes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerManifest {
    /// Stable callback name the broker routes on
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Declared input parameters
    pub parameters: Vec<HandlerParameter>,
}

impl HandlerManifest {
    /// Manifest for a handler taking a single required string parameter.
    pub fn single_string(
        name: impl Into<String>,
        description: impl Into<String>,
        param_name: impl Into<String>,
        param_description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: vec![HandlerParameter {
                name: param_name.into(),
                description: param_description.into(),
                required: true,
            }],
        }
    }
}

/// The core handler trait.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Registration metadata for this handler.
    fn manifest(&self) -> HandlerManifest;

    /// Answer one question.
    ///
    /// Never fails past this boundary: errors are formatted into the
    /// returned string.
    async fn handle(&self, question: &str) -> String;
}
