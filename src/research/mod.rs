//! Research Workflow Orchestration
//!
//! This module is the core of the crate: it coordinates a multi-stage
//! research workflow from a free-text query to a structured report.
//!
//! # Architecture
//!
//! The pipeline runs four stages, each owning its output and handing it
//! by value to the next:
//!
//! 1. [`planner::ResearchPlanner`] - one provider call produces a
//!    prioritized [`crate::types::SearchPlan`]; plan size is validated
//!    (warn-only below the minimum)
//! 2. [`scheduler::BatchScheduler`] - fans the plan's tasks out
//!    concurrently in priority order under a single aggregate deadline,
//!    collecting whatever succeeds
//! 3. [`synthesizer::ReportSynthesizer`] - one provider call aggregates
//!    the surviving summaries into a [`crate::types::Report`]
//! 4. delivery (optional) - handled by [`crate::delivery`], never fatal
//!
//! [`workflow::ResearchWorkflow`] sequences the stages and is the
//! caller-facing entry point.
//!
//! # Failure model
//!
//! Individual search failures are absorbed by the scheduler; only an
//! aggregate batch timeout or a planning/synthesis provider failure
//! aborts a run. Once a report exists the run is a success regardless of
//! delivery outcome.

/// Search task execution against the search provider.
pub mod executor;
/// Plan generation and validation.
pub mod planner;
/// Priority-ordered concurrent batch execution.
pub mod scheduler;
/// Report synthesis from search outcomes.
pub mod synthesizer;
/// Stage sequencing and the `run_research` entry point.
pub mod workflow;

pub use executor::{LlmSearchExecutor, SearchExecutor};
pub use planner::ResearchPlanner;
pub use scheduler::BatchScheduler;
pub use synthesizer::ReportSynthesizer;
pub use workflow::ResearchWorkflow;
