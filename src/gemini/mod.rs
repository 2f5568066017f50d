//! Gemini model client.

pub mod client;

pub use client::{DEFAULT_BASE_URL, GeminiClient, MessageGenerator};
