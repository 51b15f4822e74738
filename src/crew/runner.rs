use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info};

use super::types::{CrewReport, TaskOutput, TaskSpec};
use crate::agent::{AgentSpec, LlmExecutor, PromptBuilder};
use crate::error::{CrewError, Result};

pub struct CrewBuilder {
    agents: Vec<AgentSpec>,
    tasks: Vec<TaskSpec>,
}

impl CrewBuilder {
    pub fn new() -> Self {
        Self {
            agents: Vec::new(),
            tasks: Vec::new(),
        }
    }

    pub fn agent(mut self, agent: AgentSpec) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn task(mut self, task: TaskSpec) -> Self {
        self.tasks.push(task);
        self
    }

    /// Validate agent references and produce a runnable crew.
    pub fn build(self) -> Result<Crew> {
        if self.tasks.is_empty() {
            return Err(CrewError::EmptyCrew);
        }
        for task in &self.tasks {
            if !self.agents.iter().any(|a| a.role == task.agent_role) {
                return Err(CrewError::AgentNotFound(task.agent_role.clone()));
            }
        }
        Ok(Crew {
            agents: self.agents,
            tasks: self.tasks,
            prompt_builder: PromptBuilder::default(),
        })
    }
}

impl Default for CrewBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Crew {
    agents: Vec<AgentSpec>,
    tasks: Vec<TaskSpec>,
    prompt_builder: PromptBuilder,
}

impl Crew {
    pub fn builder() -> CrewBuilder {
        CrewBuilder::new()
    }

    pub fn agents(&self) -> &[AgentSpec] {
        &self.agents
    }

    pub fn tasks(&self) -> &[TaskSpec] {
        &self.tasks
    }

    /// Run every task in order. Each completed task's output becomes context
    /// for the tasks after it. The first failure aborts the run.
    pub async fn kickoff(&self, executor: &dyn LlmExecutor) -> Result<CrewReport> {
        let started_at = Utc::now();
        let run_start = Instant::now();
        let mut outputs: Vec<TaskOutput> = Vec::with_capacity(self.tasks.len());

        for task in &self.tasks {
            let agent = self
                .agents
                .iter()
                .find(|a| a.role == task.agent_role)
                .ok_or_else(|| CrewError::AgentNotFound(task.agent_role.clone()))?;

            // Verbose agents announce each task at info; quiet ones at debug.
            if agent.verbose {
                info!(task_id = %task.id, agent = %agent.role, "executing task");
            } else {
                debug!(task_id = %task.id, agent = %agent.role, "executing task");
            }

            let system_prompt = self.prompt_builder.build_system_prompt(agent);
            let message = self.prompt_builder.build_task_message(task, &outputs);

            let task_start = Instant::now();
            let output = executor.execute(&system_prompt, &message).await?;
            let duration = task_start.elapsed();

            if agent.verbose {
                info!(
                    task_id = %task.id,
                    duration_secs = duration.as_secs_f64(),
                    output_chars = output.len(),
                    "task completed"
                );
            } else {
                debug!(
                    task_id = %task.id,
                    duration_secs = duration.as_secs_f64(),
                    output_chars = output.len(),
                    "task completed"
                );
            }

            outputs.push(TaskOutput {
                task_id: task.id.clone(),
                agent_role: agent.role.clone(),
                output,
                duration_secs: duration.as_secs_f64(),
            });
        }

        let finished_at = Utc::now();
        Ok(CrewReport {
            task_outputs: outputs,
            started_at,
            finished_at,
            duration_secs: run_start.elapsed().as_secs_f64(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(role: &str) -> AgentSpec {
        AgentSpec::new(role, "goal", "backstory")
    }

    #[test]
    fn test_build_rejects_empty_task_list() {
        let result = Crew::builder().agent(agent("Dev")).build();
        assert!(matches!(result, Err(CrewError::EmptyCrew)));
    }

    #[test]
    fn test_build_rejects_unknown_agent_role() {
        let result = Crew::builder()
            .agent(agent("Dev"))
            .task(TaskSpec::new("t1", "desc", "out", "Doc Writer"))
            .build();
        match result {
            Err(CrewError::AgentNotFound(role)) => assert_eq!(role, "Doc Writer"),
            other => panic!("unexpected: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_build_accepts_matching_roles() {
        let crew = Crew::builder()
            .agent(agent("Dev"))
            .task(TaskSpec::new("t1", "desc", "out", "Dev"))
            .build()
            .unwrap();
        assert_eq!(crew.tasks().len(), 1);
        assert_eq!(crew.agents().len(), 1);
    }
}
