//! Wire protocol for agent-broker communication.
//!
//! JSON text frames, tagged by a `type` field. The broker routes each
//! invocation by the registered handler name and matches the response to
//! the request via `invocation_id`.

use fxcoach_core::handler::HandlerParameter;
use serde::{Deserialize, Serialize};

/// Message from agent to broker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentMessage {
    /// Register a handler under a stable name. Sent exactly once.
    Register {
        name: String,
        description: String,
        parameters: Vec<HandlerParameter>,
    },
    /// The single response to an invocation.
    #[serde(rename = "result")]
    InvokeResult {
        invocation_id: String,
        output: String,
    },
    /// Keepalive response.
    Pong,
}

/// Message from broker to agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BrokerMessage {
    /// Registration acknowledged.
    Registered { agent_id: String },
    /// Invoke the registered handler.
    Invoke {
        invocation_id: String,
        input: serde_json::Value,
    },
    /// Keepalive probe.
    Ping,
    /// Broker-side error notice.
    Error { message: String },
}

/// Extract the question text from an invocation input.
///
/// The broker sends the declared parameter as an object field; a bare JSON
/// string is accepted too. Anything else is passed through as raw JSON so
/// the invocation still gets exactly one response.
pub fn extract_question(input: &serde_json::Value) -> String {
    if let Some(q) = input.get("trading_question").and_then(|v| v.as_str()) {
        return q.to_string();
    }
    if let Some(q) = input.as_str() {
        return q.to_string();
    }
    input.to_string()
}
