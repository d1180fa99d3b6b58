//! # SCOUT - Structured Concurrent Orchestration of research Tasks
//!
//! A deep-research workflow engine: a planning stage produces prioritized
//! search tasks, an execution stage fans them out concurrently under a
//! bounded time budget while tolerating individual failures, a synthesis
//! stage aggregates surviving results into a structured report, and an
//! optional delivery stage dispatches the report by email.
//!
//! ## Overview
//!
//! SCOUT can be used in two ways:
//!
//! 1. **As a CLI** - Run the `scout-research` binary
//! 2. **As a library** - Import the workflow into your own Rust project
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use scout::{Provider, ResearchWorkflow};
//! use scout::delivery::{HttpMailProvider, ReportDispatcher};
//! use scout::utils::config::Config;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!
//!     let llm = Arc::from(config.llm.provider()?.create_client().await?);
//!     let mail = Arc::new(HttpMailProvider::new(&config.delivery));
//!     let workflow =
//!         ResearchWorkflow::new(llm, ReportDispatcher::new(mail), &config.research);
//!
//!     let report = workflow
//!         .run_research("state of rust adoption in 2026", false, None)
//!         .await?;
//!     println!("{}", report.title);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Failure model
//!
//! - An individual search failure is absorbed: the batch simply returns
//!   fewer outcomes.
//! - The whole search batch shares one aggregate deadline; exceeding it
//!   fails the run with no partial salvage.
//! - Planning and synthesis failures fail the run with a
//!   stage-identifying error.
//! - Delivery failures are reported in the run envelope and logs, never
//!   raised: the workflow is done once a report exists.
//!
//! ## Modules
//!
//! - [`research`] - Planning, concurrent search execution, synthesis,
//!   and the workflow controller
//! - [`llm`] - LLM provider clients and abstractions
//! - [`delivery`] - Report rendering and best-effort delivery
//! - [`types`] - Core types and error handling
//! - [`utils`] - Configuration
//! - [`cli`] - Command-line interface for the binary

/// Command-line interface definition.
pub mod cli;
/// Report rendering and delivery.
pub mod delivery;
/// LLM provider clients and abstractions.
pub mod llm;
/// The research workflow pipeline.
pub mod research;
/// Core types (plans, outcomes, reports, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use delivery::{DeliveryProvider, HttpMailProvider, ReportDispatcher};
pub use llm::{LLMClient, Provider};
pub use research::{BatchScheduler, ResearchPlanner, ResearchWorkflow};
pub use types::{
    AppError, DeliveryResult, Report, ResearchRequest, ResearchRunReport, Result, SearchOutcome,
    SearchPlan, SearchTask,
};
pub use utils::config::Config;
