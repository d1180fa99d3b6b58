use crate::llm::{LLMClient, structured};
use crate::types::{AppError, Report, Result, SearchOutcome};
use std::sync::Arc;

const WRITER_INSTRUCTIONS: &str = r#"You are a senior research analyst and report writer. Given a research query and a set of search summaries, synthesize them into a comprehensive, professional report.

Respond with a single JSON object and nothing else:

{
    "title": "report title",
    "executive_summary": "2-3 sentence executive summary",
    "detailed_body": "the detailed report in markdown",
    "key_findings": ["finding"],
    "recommendations": ["actionable recommendation"],
    "follow_up_topics": ["suggested topic to research further"],
    "sources": ["source used"]
}"#;

/// Aggregates surviving search outcomes into a structured report.
pub struct ReportSynthesizer {
    llm: Arc<dyn LLMClient>,
}

impl ReportSynthesizer {
    pub fn new(llm: Arc<dyn LLMClient>) -> Self {
        Self { llm }
    }

    /// Produce the report for this run: one prompt carrying every
    /// outcome's query and summary, one provider call, no decomposition
    /// into sub-calls. Provider failure propagates; no fallback report
    /// is synthesized locally.
    pub async fn synthesize(&self, query: &str, outcomes: &[SearchOutcome]) -> Result<Report> {
        tracing::info!(outcomes = outcomes.len(), "synthesizing report");

        let summaries: Vec<String> = outcomes
            .iter()
            .map(|o| format!("Query: {}\nSummary: {}", o.query, o.summary))
            .collect();

        let prompt = format!(
            "Original Research Query: {}\n\nSearch Results:\n{}\n\nCreate a comprehensive research report based on this information.",
            query,
            summaries.join("\n\n")
        );

        let response = self
            .llm
            .generate_with_system(WRITER_INSTRUCTIONS, &prompt)
            .await
            .map_err(|e| AppError::Synthesis(e.to_string()))?;

        let report: Report = structured::parse_response(&response)
            .map_err(|e| AppError::Synthesis(e.to_string()))?;

        tracing::info!(
            title = %report.title,
            findings = report.key_findings.len(),
            "report synthesized"
        );

        Ok(report)
    }
}
