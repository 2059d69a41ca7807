//! Broker session client for fxcoach.
//!
//! Maintains one persistent websocket connection to the orchestration
//! broker: register a handler once, then answer invocations until the
//! process is interrupted.

pub mod client;
pub mod protocol;

pub use client::{BrokerConfig, SessionClient};
pub use protocol::{AgentMessage, BrokerMessage};
