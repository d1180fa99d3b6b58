use crate::llm::{LLMClient, structured};
use crate::types::{AppError, Result, SearchPlan};
use std::sync::Arc;

const PLANNER_INSTRUCTIONS: &str = r#"You are a strategic research planner. Given a research query, create an optimal search strategy that provides comprehensive coverage of the topic.

Prioritize searches by importance: 1 = critical, 2 = important, 3 = supplementary.

Respond with a single JSON object and nothing else:

{
    "tasks": [
        {"reason": "why this search matters", "query": "the search term", "priority": 1}
    ],
    "estimated_duration": "estimated time to complete all searches"
}"#;

/// Generates and validates the search plan for a research run.
pub struct ResearchPlanner {
    llm: Arc<dyn LLMClient>,
    min_searches: usize,
    max_searches: usize,
}

impl ResearchPlanner {
    pub fn new(llm: Arc<dyn LLMClient>, min_searches: usize, max_searches: usize) -> Self {
        Self {
            llm,
            min_searches,
            max_searches,
        }
    }

    /// Create a search strategy for the research query.
    ///
    /// One provider call under a structured-output contract. The returned
    /// plan is validated for cardinality; an undersized plan is accepted
    /// with a warning, never corrected.
    pub async fn plan(&self, query: &str) -> Result<SearchPlan> {
        tracing::info!("planning research strategy");

        let system = format!(
            "{}\n\nYour plan must contain between {} and {} searches.",
            PLANNER_INSTRUCTIONS, self.min_searches, self.max_searches
        );
        let prompt = format!("Research Query: {}", query);

        let response = self
            .llm
            .generate_with_system(&system, &prompt)
            .await
            .map_err(|e| AppError::Planning(e.to_string()))?;

        let plan: SearchPlan = structured::parse_response(&response)
            .map_err(|e| AppError::Planning(e.to_string()))?;

        self.validate(&plan);

        tracing::info!(
            planned = plan.tasks.len(),
            estimated = %plan.estimated_duration,
            "search plan ready"
        );

        Ok(plan)
    }

    /// Check plan cardinality. Below the minimum is a warning, not a
    /// failure; the upper bound is only ever enforced through the prompt.
    pub fn validate(&self, plan: &SearchPlan) {
        if plan.tasks.len() < self.min_searches {
            tracing::warn!(
                planned = plan.tasks.len(),
                minimum = self.min_searches,
                "search plan below minimum, proceeding as-is"
            );
        }
    }
}
