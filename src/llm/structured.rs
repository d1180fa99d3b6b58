//! Structured-output extraction
//!
//! The planning and report providers are prompted to answer with a JSON
//! object. Models frequently wrap that object in a markdown code fence or
//! surround it with prose, so deserialization goes through a tolerant
//! extraction step: take the fenced block if present, otherwise the
//! outermost `{ ... }` span, then parse.

use crate::types::{AppError, Result};
use serde::de::DeserializeOwned;

/// Parse a typed value out of raw provider text.
pub fn parse_response<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let payload = extract_json(raw)
        .ok_or_else(|| AppError::LLM("No JSON object found in provider response".to_string()))?;

    serde_json::from_str(payload)
        .map_err(|e| AppError::LLM(format!("Malformed structured response: {}", e)))
}

/// Locate the JSON payload within provider text.
fn extract_json(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();

    // Fenced block first: ```json ... ``` or bare ``` ... ```
    if let Some(block) = fenced_block(trimmed) {
        if let Some(span) = brace_span(block) {
            return Some(span);
        }
    }

    // Otherwise the outermost object span
    brace_span(trimmed)
}

fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let after_fence = &text[start + 3..];
    let body_start = after_fence.find('\n').map(|i| i + 1).unwrap_or(0);
    let body = &after_fence[body_start..];
    let end = body.find("```")?;
    Some(&body[..end])
}

fn brace_span(text: &str) -> Option<&str> {
    let open = text.find('{')?;
    let close = text.rfind('}')?;
    if close > open {
        Some(&text[open..=close])
    } else {
        None
    }
}
