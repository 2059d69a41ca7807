//! LLM provider implementations for fxcoach.
//!
//! One concrete backend is shipped: [`OpenAiCompatProvider`], which talks to
//! any endpoint exposing the OpenAI `/v1/chat/completions` contract.

pub mod openai_compat;

pub use openai_compat::OpenAiCompatProvider;
