//! AI Edit Adapter.
//!
//! Thin prompt-template wrapper around an OpenAI-compatible chat
//! completions endpoint: given a section's current config and a free-text
//! instruction, request a candidate replacement config; or generate a
//! fresh config from a project's brand kit. The external model's
//! compliance is best-effort, so every failure mode is surfaced as a
//! distinct [`AiError`] and callers persist nothing on failure.

pub mod client;
pub mod error;
pub mod prompt;

pub use client::{AiClient, AiConfig};
pub use error::AiError;
