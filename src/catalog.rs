//! Built-in agents and their preset tasks.
//!
//! Four personas ship with the tool: a Python developer, a documentation
//! writer, a README generator, and a code reviewer. Each carries a short
//! list of preset tasks; every agent also accepts a custom task typed in
//! through the interactive session.

use crate::agent::AgentSpec;
use crate::crew::{Crew, TaskSpec};
use crate::error::{CrewError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinAgent {
    Developer,
    DocWriter,
    ReadmeWriter,
    CodeReviewer,
}

impl BuiltinAgent {
    pub fn all() -> [BuiltinAgent; 4] {
        [
            Self::Developer,
            Self::DocWriter,
            Self::ReadmeWriter,
            Self::CodeReviewer,
        ]
    }

    /// Stable identifier used by the CLI and the metrics file.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Developer => "dev",
            Self::DocWriter => "doc",
            Self::ReadmeWriter => "readme",
            Self::CodeReviewer => "review",
        }
    }

    pub fn from_id(id: &str) -> Result<Self> {
        Self::all()
            .into_iter()
            .find(|a| a.id() == id)
            .ok_or_else(|| CrewError::UnknownAgent(id.to_string()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Developer => "Dev Agent (Python Development)",
            Self::DocWriter => "Doc Agent (Documentation)",
            Self::ReadmeWriter => "README Agent (Project READMEs)",
            Self::CodeReviewer => "Review Agent (Code Review)",
        }
    }

    pub fn spec(&self) -> AgentSpec {
        match self {
            Self::Developer => AgentSpec::new(
                "Python Developer",
                "Write clean Python code for any problem",
                "An expert Python programmer who follows best practices.",
            ),
            Self::DocWriter => AgentSpec::new(
                "Documentation Writer",
                "Create comprehensive and informative documentation on various topics",
                "A skilled technical writer who can explain complex topics in simple terms.",
            ),
            Self::ReadmeWriter => AgentSpec::new(
                "README Generator",
                "Produce clear, well-structured README files for software projects",
                "An open-source maintainer who has written hundreds of project READMEs.",
            ),
            Self::CodeReviewer => AgentSpec::new(
                "Code Reviewer",
                "Review code for correctness, clarity, and adherence to best practices",
                "A senior engineer who gives thorough, constructive code reviews.",
            ),
        }
    }

    pub fn presets(&self) -> &'static [TaskPreset] {
        match self {
            Self::Developer => &[
                TaskPreset {
                    id: "reverse-string",
                    label: "Function to reverse a string in Python",
                    description: "Write a Python function to reverse a string.",
                    expected_output: "Python code that takes a string and returns it reversed.",
                },
                TaskPreset {
                    id: "palindrome",
                    label: "Function to check if a number is a palindrome",
                    description: "Write a Python function to check if a number is a palindrome.",
                    expected_output: "Python code that takes a number and returns True if it's \
                                      a palindrome, False otherwise.",
                },
            ],
            Self::DocWriter => &[
                TaskPreset {
                    id: "report-computers",
                    label: "Report on computers",
                    description: "Write a comprehensive report about computers, covering their \
                                  history, components, and modern applications.",
                    expected_output: "A detailed text document explaining computers in an \
                                      informative and accessible way.",
                },
                TaskPreset {
                    id: "report-internet",
                    label: "Report on the internet",
                    description: "Write a comprehensive report about the internet, covering its \
                                  history, how it works, and its impact on society.",
                    expected_output: "A detailed text document explaining the internet in an \
                                      informative and accessible way.",
                },
            ],
            Self::ReadmeWriter => &[TaskPreset {
                id: "readme-cli",
                label: "README for a command-line tool",
                description: "Write a README for a small command-line tool, with sections for \
                              installation, usage, configuration, and contributing.",
                expected_output: "A complete README in Markdown.",
            }],
            Self::CodeReviewer => &[TaskPreset {
                id: "review-checklist",
                label: "General code review checklist",
                description: "Produce a practical code review checklist covering correctness, \
                              readability, error handling, and tests.",
                expected_output: "A checklist a reviewer can apply to any pull request.",
            }],
        }
    }

    pub fn preset(&self, preset_id: &str) -> Result<&'static TaskPreset> {
        self.presets()
            .iter()
            .find(|p| p.id == preset_id)
            .ok_or_else(|| CrewError::UnknownPreset(preset_id.to_string()))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TaskPreset {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub expected_output: &'static str,
}

/// Default expected-output line for custom tasks left without one.
pub const DEFAULT_EXPECTED_OUTPUT: &str =
    "A complete, ready-to-use answer to the task as plain text.";

/// Assemble a single-agent, single-task crew. `verbose` controls whether the
/// crew reports per-task progress while it runs.
pub fn single_task_crew(
    agent: BuiltinAgent,
    description: impl Into<String>,
    expected_output: impl Into<String>,
    verbose: bool,
) -> Result<Crew> {
    let description = description.into();
    if description.trim().is_empty() {
        return Err(CrewError::EmptyTask);
    }

    let mut expected = expected_output.into();
    if expected.trim().is_empty() {
        expected = DEFAULT_EXPECTED_OUTPUT.to_string();
    }

    let spec = agent.spec().with_verbose(verbose);
    let role = spec.role.clone();
    Crew::builder()
        .agent(spec)
        .task(TaskSpec::new("task-1", description, expected, role))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_agent_has_presets() {
        for agent in BuiltinAgent::all() {
            assert!(!agent.presets().is_empty(), "{} has no presets", agent.id());
        }
    }

    #[test]
    fn test_agent_ids_round_trip() {
        for agent in BuiltinAgent::all() {
            assert_eq!(BuiltinAgent::from_id(agent.id()).unwrap(), agent);
        }
    }

    #[test]
    fn test_unknown_agent_id_rejected() {
        assert!(matches!(
            BuiltinAgent::from_id("ops"),
            Err(CrewError::UnknownAgent(_))
        ));
    }

    #[test]
    fn test_unknown_preset_rejected() {
        assert!(matches!(
            BuiltinAgent::Developer.preset("sort-list"),
            Err(CrewError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_single_task_crew_wires_agent_role() {
        let crew =
            single_task_crew(BuiltinAgent::Developer, "Do a thing.", "A thing.", true).unwrap();
        assert_eq!(crew.tasks()[0].agent_role, "Python Developer");
    }

    #[test]
    fn test_single_task_crew_carries_verbose_flag() {
        let verbose =
            single_task_crew(BuiltinAgent::Developer, "Do a thing.", "A thing.", true).unwrap();
        assert!(verbose.agents()[0].verbose);

        let quiet =
            single_task_crew(BuiltinAgent::Developer, "Do a thing.", "A thing.", false).unwrap();
        assert!(!quiet.agents()[0].verbose);
    }

    #[test]
    fn test_blank_custom_task_rejected() {
        let result = single_task_crew(BuiltinAgent::Developer, "   \n", "", true);
        assert!(matches!(result, Err(CrewError::EmptyTask)));
    }

    #[test]
    fn test_blank_expected_output_defaulted() {
        let crew = single_task_crew(BuiltinAgent::DocWriter, "Write a note.", "  ", true).unwrap();
        assert_eq!(crew.tasks()[0].expected_output, DEFAULT_EXPECTED_OUTPUT);
    }
}
