use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============= Planning Types =============

/// One planned web search, produced by the planning provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTask {
    /// Why this search matters for the research query.
    pub reason: String,
    /// The search term to run.
    pub query: String,
    /// Search priority: 1 = critical, 2 = important, 3 = supplementary.
    #[serde(default = "default_priority")]
    pub priority: u8,
}

fn default_priority() -> u8 {
    1
}

/// The full search strategy for one research run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPlan {
    pub tasks: Vec<SearchTask>,
    /// Provider's free-text estimate of how long the searches will take.
    #[serde(default)]
    pub estimated_duration: String,
}

// ============= Search Types =============

/// Result of one successfully executed search task.
///
/// Failed tasks produce no outcome; they are dropped by the scheduler,
/// not retried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// The query that was searched.
    pub query: String,
    /// The provider's raw textual summary.
    pub summary: String,
    /// Number of sources behind the summary.
    pub source_count: u32,
    /// Relevance in [0, 1].
    pub relevance_score: f32,
}

// ============= Report Types =============

/// Structured research report, produced once per workflow run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub executive_summary: String,
    /// The detailed report body in markdown.
    pub detailed_body: String,
    pub key_findings: Vec<String>,
    pub recommendations: Vec<String>,
    /// Suggested topics for follow-up research.
    #[serde(default)]
    pub follow_up_topics: Vec<String>,
    #[serde(default)]
    pub sources: Vec<String>,
    /// Stamped locally when the provider omits it.
    #[serde(default = "Utc::now")]
    pub generated_at: DateTime<Utc>,
}

// ============= Delivery Types =============

/// Outcome class of a delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Success,
    Error,
}

/// Outcome of handing a report to the delivery provider. Ephemeral;
/// recorded in the run envelope and logs, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryResult {
    pub status: DeliveryStatus,
    pub message: String,
}

impl DeliveryResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: DeliveryStatus::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: DeliveryStatus::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == DeliveryStatus::Success
    }
}

// ============= Workflow Types =============

/// Parameters for one research run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchRequest {
    pub query: String,
    /// Dispatch the finished report to the delivery channel.
    #[serde(default)]
    pub deliver: bool,
    /// Overrides the configured default recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
}

/// Envelope returned by a full workflow run: the report plus run
/// statistics and the delivery outcome, if delivery was requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchRunReport {
    pub report: Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<DeliveryResult>,
    pub searches_planned: usize,
    pub searches_completed: usize,
    pub duration_ms: u64,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("LLM error: {0}")]
    LLM(String),

    #[error("Planning failed: {0}")]
    Planning(String),

    #[error("Search batch timed out after {0:?}")]
    BatchTimeout(Duration),

    #[error("Synthesis failed: {0}")]
    Synthesis(String),

    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_plan_deserializes_provider_payload() {
        let payload = r#"{
            "tasks": [
                {"reason": "market size", "query": "ai job market 2026", "priority": 1},
                {"reason": "salaries", "query": "security engineer salary", "priority": 2}
            ],
            "estimated_duration": "2 minutes"
        }"#;

        let plan: SearchPlan = serde_json::from_str(payload).unwrap();
        assert_eq!(plan.tasks.len(), 2);
        assert_eq!(plan.tasks[0].priority, 1);
        assert_eq!(plan.estimated_duration, "2 minutes");
    }

    #[test]
    fn test_search_task_priority_defaults_to_critical() {
        let task: SearchTask =
            serde_json::from_str(r#"{"reason": "r", "query": "q"}"#).unwrap();
        assert_eq!(task.priority, 1);
    }

    #[test]
    fn test_report_timestamp_defaults_when_missing() {
        let payload = r#"{
            "title": "t",
            "executive_summary": "s",
            "detailed_body": "b",
            "key_findings": ["f"],
            "recommendations": ["r"]
        }"#;

        let report: Report = serde_json::from_str(payload).unwrap();
        assert!(report.follow_up_topics.is_empty());
        assert!(report.sources.is_empty());
        assert!(report.generated_at <= Utc::now());
    }

    #[test]
    fn test_delivery_result_constructors() {
        assert!(DeliveryResult::success("sent").is_success());
        assert!(!DeliveryResult::error("boom").is_success());
    }

    #[test]
    fn test_batch_timeout_message_names_the_stage() {
        let err = AppError::BatchTimeout(Duration::from_secs(90));
        assert!(err.to_string().contains("timed out"));
    }
}
