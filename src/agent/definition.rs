use serde::{Deserialize, Serialize};

/// Configuration record describing an agent persona.
///
/// Carries no behavior of its own; the role, goal, and backstory are folded
/// into the system prompt by `PromptBuilder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub role: String,
    pub goal: String,
    pub backstory: String,
    #[serde(default)]
    pub verbose: bool,
}

impl AgentSpec {
    pub fn new(
        role: impl Into<String>,
        goal: impl Into<String>,
        backstory: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            goal: goal.into(),
            backstory: backstory.into(),
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let agent = AgentSpec::new("Python Developer", "Write clean code", "An expert")
            .with_verbose(true);
        assert_eq!(agent.role, "Python Developer");
        assert!(agent.verbose);
    }
}
