use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{CrewError, Result};

pub const CONFIG_FILE: &str = "crewline.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub agent: AgentConfig,
    pub ui: UiConfig,
    pub files: FileConfig,
    pub metrics: MetricsConfig,
}

impl AppConfig {
    pub async fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        let config = if config_path.exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub async fn save(&self, dir: &Path) -> Result<()> {
        self.validate()?;
        let config_path = dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self).map_err(|e| CrewError::Config(e.to_string()))?;
        fs::write(&config_path, content).await?;
        Ok(())
    }

    /// Validate configuration values for consistency and safety.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.agent.model.is_empty() {
            errors.push("agent.model must not be empty");
        }
        if self.agent.max_tokens == 0 {
            errors.push("agent.max_tokens must be greater than 0");
        }
        if self.agent.timeout_secs == 0 {
            errors.push("agent.timeout_secs must be greater than 0");
        }
        if !(0.0..=1.0).contains(&self.agent.temperature) {
            errors.push("agent.temperature must be between 0.0 and 1.0");
        }

        if self.ui.menu_width == 0 {
            errors.push("ui.menu_width must be greater than 0");
        }
        if self.ui.separator_width < self.ui.menu_width {
            errors.push("ui.separator_width must be at least ui.menu_width");
        }

        if self.metrics.file.is_empty() {
            errors.push("metrics.file must not be empty");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CrewError::Config(errors.join("; ")))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Model identifier passed to the Messages API.
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub max_retries: u32,
    /// Print per-task progress while a crew runs.
    pub verbose: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 4096,
            temperature: 0.7,
            timeout_secs: 120,
            max_retries: 3,
            verbose: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub menu_width: usize,
    pub separator_width: usize,
    pub show_timestamps: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            menu_width: 60,
            separator_width: 80,
            show_timestamps: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Directory that relative save paths are resolved against.
    pub default_save_dir: String,
    /// Rename an existing file to a timestamped backup before overwriting.
    pub auto_backup: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            default_save_dir: ".".to_string(),
            auto_backup: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub save: bool,
    pub file: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            save: true,
            file: "performance_metrics.json".to_string(),
        }
    }
}
