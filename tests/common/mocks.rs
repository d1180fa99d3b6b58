//! Mock implementations for testing.
//!
//! This module provides mock LLM clients, delivery providers, and search
//! executors that can be used across different test files without
//! duplication.

use async_trait::async_trait;
use scout::delivery::{DeliveryProvider, OutboundMessage};
use scout::llm::LLMClient;
use scout::research::SearchExecutor;
use scout::types::{AppError, Result, SearchOutcome, SearchTask};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Mock LLM client with configurable responses.
///
/// A scripted client pops responses in order, which lets one client
/// stand in for the planning, search, and report providers across a
/// whole workflow run: the planner consumes the first response, the
/// concurrently launched searches the next N, the synthesizer the last.
pub struct MockLLMClient {
    script: Mutex<VecDeque<Result<String>>>,
    fallback: Option<String>,
}

impl MockLLMClient {
    /// Create a mock client that always returns the given response.
    pub fn new(response: &str) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: Some(response.to_string()),
        }
    }

    /// Create a mock client that returns the given responses in order
    /// and fails once the script is exhausted.
    pub fn scripted(responses: Vec<Result<String>>) -> Self {
        Self {
            script: Mutex::new(responses.into()),
            fallback: None,
        }
    }

    /// Create a mock client that always returns an error.
    pub fn failing() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: None,
        }
    }

    fn next(&self) -> Result<String> {
        if let Some(next) = self.script.lock().unwrap().pop_front() {
            return next;
        }
        match &self.fallback {
            Some(response) => Ok(response.clone()),
            None => Err(AppError::LLM("Mock LLM failure".to_string())),
        }
    }
}

#[async_trait]
impl LLMClient for MockLLMClient {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        self.next()
    }

    async fn generate_with_system(&self, _system: &str, _prompt: &str) -> Result<String> {
        self.next()
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Delivery provider that records every send and answers with a fixed
/// status code.
pub struct CountingDeliveryProvider {
    status: u16,
    calls: AtomicUsize,
}

impl CountingDeliveryProvider {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DeliveryProvider for CountingDeliveryProvider {
    async fn send(&self, _message: &OutboundMessage) -> Result<u16> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.status)
    }
}

/// Delivery provider that fails at the transport level.
pub struct ErroringDeliveryProvider;

#[async_trait]
impl DeliveryProvider for ErroringDeliveryProvider {
    async fn send(&self, _message: &OutboundMessage) -> Result<u16> {
        Err(AppError::Delivery("mock transport failure".to_string()))
    }
}

/// Search executor that never completes, for exercising the batch's
/// aggregate deadline.
pub struct HangingExecutor;

#[async_trait]
impl SearchExecutor for HangingExecutor {
    async fn execute(&self, task: &SearchTask) -> Result<SearchOutcome> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(SearchOutcome {
            query: task.query.clone(),
            summary: "unreachable".to_string(),
            source_count: 1,
            relevance_score: 0.8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client_returns_fixed_response() {
        let client = MockLLMClient::new("test response");
        assert_eq!(client.generate("prompt").await.unwrap(), "test response");
        assert_eq!(client.generate("again").await.unwrap(), "test response");
    }

    #[tokio::test]
    async fn test_mock_client_scripted_pops_in_order_then_fails() {
        let client = MockLLMClient::scripted(vec![
            Ok("first".to_string()),
            Ok("second".to_string()),
        ]);
        assert_eq!(client.generate("p").await.unwrap(), "first");
        assert_eq!(client.generate("p").await.unwrap(), "second");
        assert!(client.generate("p").await.is_err());
    }

    #[tokio::test]
    async fn test_mock_client_failing() {
        let client = MockLLMClient::failing();
        assert!(client.generate_with_system("s", "p").await.is_err());
    }

    #[tokio::test]
    async fn test_counting_provider_counts_sends() {
        let provider = CountingDeliveryProvider::new(202);
        let message = OutboundMessage {
            subject: "s".to_string(),
            html_body: "<p>b</p>".to_string(),
            recipient: None,
        };
        provider.send(&message).await.unwrap();
        provider.send(&message).await.unwrap();
        assert_eq!(provider.calls(), 2);
    }
}
