pub mod agent;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod crew;
pub mod error;
pub mod metrics;
pub mod output;
pub mod utils;

pub use agent::{AgentSpec, AnthropicExecutor, LlmExecutor, PromptBuilder};
pub use catalog::{single_task_crew, BuiltinAgent, TaskPreset};
pub use config::AppConfig;
pub use crew::{Crew, CrewBuilder, CrewReport, TaskOutput, TaskSpec};
pub use error::{CrewError, ExecutorError, Result};
pub use metrics::{MetricsStore, PerformanceMetrics};
