//! Performance metrics persistence.
//!
//! Counters mirror the metrics file this tool has always written: one call
//! counter per built-in agent plus a running total of completed tasks.

mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::BuiltinAgent;

pub use store::MetricsStore;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceMetrics {
    pub dev_agent_calls: u64,
    pub doc_agent_calls: u64,
    pub readme_agent_calls: u64,
    pub code_review_calls: u64,
    pub total_tasks_completed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_run: Option<RunRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub agent: String,
    pub timestamp: DateTime<Utc>,
    pub duration_secs: f64,
    pub tasks_completed: u64,
}

impl PerformanceMetrics {
    /// Record one completed crew run.
    pub fn record_run(&mut self, agent: BuiltinAgent, tasks_completed: u64, duration_secs: f64) {
        match agent {
            BuiltinAgent::Developer => self.dev_agent_calls += 1,
            BuiltinAgent::DocWriter => self.doc_agent_calls += 1,
            BuiltinAgent::ReadmeWriter => self.readme_agent_calls += 1,
            BuiltinAgent::CodeReviewer => self.code_review_calls += 1,
        }
        self.total_tasks_completed += tasks_completed;
        self.last_run = Some(RunRecord {
            agent: agent.id().to_string(),
            timestamp: Utc::now(),
            duration_secs,
            tasks_completed,
        });
    }

    pub fn total_calls(&self) -> u64 {
        self.dev_agent_calls
            + self.doc_agent_calls
            + self.readme_agent_calls
            + self.code_review_calls
    }
}
