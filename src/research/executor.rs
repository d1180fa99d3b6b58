use crate::llm::LLMClient;
use crate::types::{Result, SearchOutcome, SearchTask};
use async_trait::async_trait;
use std::sync::Arc;

const SEARCH_INSTRUCTIONS: &str = r#"You are an expert research assistant. Given a search term, you search the web and produce a concise summary of the results.

Your summary should:
- Be 2-3 paragraphs and under 400 words
- Capture the main points with specific data where available
- Focus on the most credible and recent sources
- Write clearly and succinctly"#;

/// Leaf unit of concurrency: executes one search task.
///
/// The trait is the seam the scheduler fans out over; tests substitute
/// scripted implementations.
#[async_trait]
pub trait SearchExecutor: Send + Sync {
    /// Run one task to completion. Errors are not retried here; the
    /// scheduler isolates them to this task.
    async fn execute(&self, task: &SearchTask) -> Result<SearchOutcome>;
}

/// Executes search tasks against the search provider.
pub struct LlmSearchExecutor {
    llm: Arc<dyn LLMClient>,
}

impl LlmSearchExecutor {
    pub fn new(llm: Arc<dyn LLMClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl SearchExecutor for LlmSearchExecutor {
    async fn execute(&self, task: &SearchTask) -> Result<SearchOutcome> {
        let input = format!(
            "Search Query: {}\nReason: {}\nPriority: {}",
            task.query, task.reason, task.priority
        );

        let summary = self.llm.generate_with_system(SEARCH_INSTRUCTIONS, &input).await?;

        // The search provider exposes neither provenance counts nor a
        // relevance signal, so both fields carry fixed placeholders.
        Ok(SearchOutcome {
            query: task.query.clone(),
            summary,
            source_count: 1,
            relevance_score: 0.8,
        })
    }
}
