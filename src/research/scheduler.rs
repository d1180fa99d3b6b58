use crate::research::executor::SearchExecutor;
use crate::types::{AppError, Result, SearchOutcome, SearchPlan, SearchTask};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

/// Fans a search plan's tasks out concurrently and collects whatever
/// succeeds within a single aggregate deadline.
///
/// Ordering guarantee: tasks are *launched* in priority order, but
/// results are collected first-available-first, so the output order is
/// "produced", not positional.
pub struct BatchScheduler {
    executor: Arc<dyn SearchExecutor>,
    per_task_timeout: Duration,
}

/// Stable sort ascending by priority; ties keep plan order.
pub fn order_by_priority(tasks: &[SearchTask]) -> Vec<SearchTask> {
    let mut ordered = tasks.to_vec();
    ordered.sort_by_key(|task| task.priority);
    ordered
}

impl BatchScheduler {
    pub fn new(executor: Arc<dyn SearchExecutor>, per_task_timeout: Duration) -> Self {
        Self {
            executor,
            per_task_timeout,
        }
    }

    /// Execute all of the plan's tasks concurrently.
    ///
    /// The whole batch shares one deadline of `per_task_timeout x
    /// task_count` - a coarse budget, not a per-item SLA. Within the
    /// deadline, a failed task is logged and dropped; its siblings are
    /// unaffected. If the deadline elapses first, the batch raises
    /// [`AppError::BatchTimeout`] and no partial result is salvaged;
    /// outstanding tasks are aborted.
    ///
    /// An empty result is valid: any subset of tasks, up to all of them,
    /// may fail without failing the batch.
    pub async fn execute_plan(&self, plan: &SearchPlan) -> Result<Vec<SearchOutcome>> {
        if plan.tasks.is_empty() {
            return Ok(Vec::new());
        }

        let ordered = order_by_priority(&plan.tasks);
        let total = ordered.len();
        let deadline = self.per_task_timeout * total as u32;

        let mut set = JoinSet::new();
        for (index, task) in ordered.into_iter().enumerate() {
            tracing::info!(
                index = index + 1,
                total,
                query = %task.query,
                priority = task.priority,
                "dispatching search task"
            );

            let executor = Arc::clone(&self.executor);
            set.spawn(async move { executor.execute(&task).await });
        }

        let collect = async {
            let mut outcomes = Vec::with_capacity(total);
            while let Some(joined) = set.join_next().await {
                match joined {
                    Ok(Ok(outcome)) => outcomes.push(outcome),
                    Ok(Err(e)) => {
                        tracing::warn!(error = %e, "search task failed, dropping its result");
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "search task aborted, dropping its result");
                    }
                }
            }
            outcomes
        };

        let collected = tokio::time::timeout(deadline, collect).await;
        match collected {
            Ok(outcomes) => {
                tracing::info!(
                    completed = outcomes.len(),
                    total,
                    "search batch complete"
                );
                Ok(outcomes)
            }
            Err(_) => {
                tracing::error!(?deadline, "search batch exceeded aggregate deadline");
                set.abort_all();
                Err(AppError::BatchTimeout(deadline))
            }
        }
    }
}
