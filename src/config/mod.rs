//! Application configuration.
//!
//! Loaded from `crewline.toml` in the working directory when present,
//! otherwise built from defaults. Every section tolerates missing keys.

mod settings;

pub use settings::{AgentConfig, AppConfig, FileConfig, MetricsConfig, UiConfig, CONFIG_FILE};
