//! # fxcoach Core
//!
//! Domain types, traits, and error definitions for the fxcoach trading
//! coach agent. This crate has **zero framework dependencies** — it defines
//! the domain model that all other crates implement against.
//!
//! The two seams of the system live here as traits:
//! - [`Provider`] — an LLM backend that turns a prompt into completion text.
//! - [`RequestHandler`] — the callback the broker invokes per request.

pub mod error;
pub mod handler;
pub mod message;
pub mod provider;

// Re-export key types at crate root for ergonomics
pub use error::{ProviderError, SessionError};
pub use handler::{HandlerManifest, HandlerParameter, RequestHandler};
pub use message::{Message, Role};
pub use provider::{Provider, ProviderRequest, ProviderResponse, Usage};
