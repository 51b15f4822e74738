//! Crew assembly and sequential task execution.
//!
//! A crew is a set of agents plus an ordered task list. `Crew::kickoff` runs
//! the tasks in order against an `LlmExecutor`, feeding each task's output
//! into the context of the tasks that follow.

mod runner;
mod types;

pub use runner::{Crew, CrewBuilder};
pub use types::{CrewReport, TaskOutput, TaskSpec};
