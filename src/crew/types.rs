use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One unit of work, bound to an agent by role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSpec {
    pub id: String,
    pub description: String,
    pub expected_output: String,
    /// Role of the agent that runs this task. Resolved against the crew's
    /// agent list when the crew is built.
    pub agent_role: String,
}

impl TaskSpec {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        expected_output: impl Into<String>,
        agent_role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            expected_output: expected_output.into(),
            agent_role: agent_role.into(),
        }
    }
}

/// Result of a single completed task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskOutput {
    pub task_id: String,
    pub agent_role: String,
    pub output: String,
    pub duration_secs: f64,
}

/// Everything a crew run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewReport {
    pub task_outputs: Vec<TaskOutput>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub duration_secs: f64,
}

impl CrewReport {
    /// The last task's output is the crew's final answer.
    pub fn final_output(&self) -> &str {
        self.task_outputs
            .last()
            .map(|t| t.output.as_str())
            .unwrap_or("")
    }

    pub fn tasks_completed(&self) -> usize {
        self.task_outputs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_output_is_last_task() {
        let report = CrewReport {
            task_outputs: vec![
                TaskOutput {
                    task_id: "t1".into(),
                    agent_role: "a".into(),
                    output: "first".into(),
                    duration_secs: 0.1,
                },
                TaskOutput {
                    task_id: "t2".into(),
                    agent_role: "a".into(),
                    output: "second".into(),
                    duration_secs: 0.1,
                },
            ],
            started_at: Utc::now(),
            finished_at: Utc::now(),
            duration_secs: 0.2,
        };
        assert_eq!(report.final_output(), "second");
        assert_eq!(report.tasks_completed(), 2);
    }

    #[test]
    fn test_final_output_empty_report() {
        let report = CrewReport {
            task_outputs: Vec::new(),
            started_at: Utc::now(),
            finished_at: Utc::now(),
            duration_secs: 0.0,
        };
        assert_eq!(report.final_output(), "");
    }
}
