//! LLM Provider Clients and Abstractions
//!
//! This module provides a unified interface for the text-generation
//! providers the research workflow talks to. Provider-specific
//! implementations sit behind a common trait so the pipeline can run
//! against any supported backend.
//!
//! # Architecture
//!
//! - [`LLMClient`] - The core trait all providers implement
//! - [`Provider`] - Runtime provider selection and client construction
//! - [`structured`] - Parsing structured JSON payloads out of provider text
//!
//! # Supported Providers
//!
//! - OpenAI API (and compatible endpoints) via `async-openai`
//! - Local Ollama server via `ollama-rs`

/// Core LLM client trait and provider factory.
pub mod client;
/// Ollama provider client.
pub mod ollama;
/// OpenAI provider client.
pub mod openai;
/// Structured-output extraction from provider responses.
pub mod structured;

pub use client::{LLMClient, Provider};
