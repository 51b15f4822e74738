use crate::agent::AgentSpec;
use crate::crew::{TaskOutput, TaskSpec};
use crate::utils::truncate_chars;

/// Assembles natural-language prompts from agent and task records.
///
/// Builds prompts with natural information ordering:
/// 1. Agent persona (who is working)
/// 2. Current task (what to do now)
/// 3. Expected output (what done looks like)
/// 4. Prior task outputs (what came before)
pub struct PromptBuilder {
    /// Character budget for each prior task output folded into the context.
    max_context_chars: usize,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self {
            max_context_chars: 6000,
        }
    }
}

impl PromptBuilder {
    pub fn new(max_context_chars: usize) -> Self {
        Self { max_context_chars }
    }

    /// System prompt describing the agent persona.
    pub fn build_system_prompt(&self, agent: &AgentSpec) -> String {
        format!(
            "You are {role}.\n\n\
             Your goal: {goal}\n\n\
             Backstory: {backstory}\n\n\
             Work on the task you are given and reply with the deliverable \
             itself, not a description of what you would do.",
            role = agent.role,
            goal = agent.goal,
            backstory = agent.backstory,
        )
    }

    /// User message for one task, with prior task outputs as context.
    pub fn build_task_message(&self, task: &TaskSpec, prior: &[TaskOutput]) -> String {
        let mut parts = Vec::new();

        parts.push(format!("## Task\n\n{}", task.description));
        parts.push(format!("## Expected Output\n\n{}", task.expected_output));

        if !prior.is_empty() {
            let mut context = String::from("## Context from earlier tasks\n");
            for output in prior {
                context.push_str(&format!(
                    "\n### {} ({})\n{}\n",
                    output.task_id,
                    output.agent_role,
                    truncate_chars(&output.output, self.max_context_chars)
                ));
            }
            parts.push(context);
        }

        parts.join("\n\n")
    }
}
