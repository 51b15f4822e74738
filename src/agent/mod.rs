//! Agent definitions and LLM execution.
//!
//! An agent is a configuration record (role, goal, backstory); the actual
//! inference happens behind the `LlmExecutor` trait so crews can run against
//! the Anthropic API in production and a stub in tests.

mod anthropic;
mod definition;
mod executor;
mod prompt;

pub use anthropic::AnthropicExecutor;
pub use definition::AgentSpec;
pub use executor::LlmExecutor;
pub use prompt::PromptBuilder;
