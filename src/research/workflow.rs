use crate::delivery::ReportDispatcher;
use crate::llm::LLMClient;
use crate::research::executor::{LlmSearchExecutor, SearchExecutor};
use crate::research::planner::ResearchPlanner;
use crate::research::scheduler::BatchScheduler;
use crate::research::synthesizer::ReportSynthesizer;
use crate::types::{Report, ResearchRequest, ResearchRunReport, Result};
use crate::utils::config::ResearchConfig;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Sequences the research stages: Planning -> Searching -> Synthesizing
/// -> optional Delivering.
///
/// Failures in any stage before a report exists abort the run and carry
/// a stage-identifying message. Delivery runs after the success
/// boundary: its outcome is recorded in the run envelope and logs but
/// never fails the workflow. Stages run strictly sequentially; the only
/// concurrency lives inside the scheduler.
pub struct ResearchWorkflow {
    planner: ResearchPlanner,
    scheduler: BatchScheduler,
    synthesizer: ReportSynthesizer,
    dispatcher: ReportDispatcher,
}

impl ResearchWorkflow {
    /// Wire the standard pipeline: every stage talks to the same LLM
    /// client, searches run through [`LlmSearchExecutor`].
    pub fn new(
        llm: Arc<dyn LLMClient>,
        dispatcher: ReportDispatcher,
        config: &ResearchConfig,
    ) -> Self {
        let executor: Arc<dyn SearchExecutor> =
            Arc::new(LlmSearchExecutor::new(Arc::clone(&llm)));

        Self {
            planner: ResearchPlanner::new(
                Arc::clone(&llm),
                config.min_searches,
                config.max_searches,
            ),
            scheduler: BatchScheduler::new(executor, config.per_task_timeout()),
            synthesizer: ReportSynthesizer::new(llm),
            dispatcher,
        }
    }

    /// Assemble a workflow from pre-built stages.
    pub fn from_parts(
        planner: ResearchPlanner,
        scheduler: BatchScheduler,
        synthesizer: ReportSynthesizer,
        dispatcher: ReportDispatcher,
    ) -> Self {
        Self {
            planner,
            scheduler,
            synthesizer,
            dispatcher,
        }
    }

    /// Run the full workflow and return the report.
    ///
    /// Raises on any stage failure before synthesis completes; never
    /// raises because of a delivery failure alone.
    pub async fn run_research(
        &self,
        query: &str,
        deliver: bool,
        recipient: Option<&str>,
    ) -> Result<Report> {
        let request = ResearchRequest {
            query: query.to_string(),
            deliver,
            recipient: recipient.map(String::from),
        };

        Ok(self.execute(&request).await?.report)
    }

    /// Run the full workflow and return the run envelope: the report
    /// plus search counts, duration, and the delivery outcome if
    /// delivery was requested.
    pub async fn execute(&self, request: &ResearchRequest) -> Result<ResearchRunReport> {
        let run_id = Uuid::new_v4();
        let started = Instant::now();

        tracing::info!(%run_id, query = %request.query, "starting research workflow");

        let plan = self.planner.plan(&request.query).await?;
        let searches_planned = plan.tasks.len();

        let outcomes = self.scheduler.execute_plan(&plan).await?;
        let searches_completed = outcomes.len();

        let report = self.synthesizer.synthesize(&request.query, &outcomes).await?;

        let delivery = if request.deliver {
            let result = self
                .dispatcher
                .dispatch(&report, request.recipient.as_deref())
                .await;

            if result.is_success() {
                tracing::info!(%run_id, "report delivery succeeded");
            } else {
                tracing::warn!(%run_id, message = %result.message, "report delivery failed");
            }

            Some(result)
        } else {
            None
        };

        let duration_ms = started.elapsed().as_millis() as u64;
        tracing::info!(
            %run_id,
            searches_planned,
            searches_completed,
            duration_ms,
            "research workflow done"
        );

        Ok(ResearchRunReport {
            report,
            delivery,
            searches_planned,
            searches_completed,
            duration_ms,
        })
    }
}
