//! Command-line interface definitions.
//!
//! - `Cli`, `Commands`: argument definitions via clap
//! - `Display`: formatted terminal output with colors
//! - `InteractiveSession`: the menu-driven front-end loop

mod commands;
mod display;
mod interactive;

pub use commands::{Cli, Commands, ConfigAction, MetricsAction, OutputFormat};
pub use display::Display;
pub use interactive::{collect_multiline, InteractiveSession};
