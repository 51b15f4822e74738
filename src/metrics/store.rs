use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, warn};

use super::PerformanceMetrics;
use crate::error::Result;

/// JSON-backed metrics persistence.
///
/// Missing or corrupt files fall back to zeroed counters rather than failing
/// the run; metrics are advisory, not load-bearing.
pub struct MetricsStore {
    path: PathBuf,
}

impl MetricsStore {
    pub fn new(dir: &Path, file_name: &str) -> Self {
        Self {
            path: dir.join(file_name),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> PerformanceMetrics {
        match fs::read_to_string(&self.path).await {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(metrics) => metrics,
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "corrupt metrics file, starting fresh");
                    PerformanceMetrics::default()
                }
            },
            Err(_) => PerformanceMetrics::default(),
        }
    }

    pub async fn save(&self, metrics: &PerformanceMetrics) -> Result<()> {
        let content = serde_json::to_string_pretty(metrics)?;
        let tmp_path = self.path.with_extension("json.tmp");

        // Write-then-rename keeps a crash from leaving a half-written file.
        fs::write(&tmp_path, &content).await?;
        fs::rename(&tmp_path, &self.path).await?;

        debug!(path = %self.path.display(), "metrics saved");
        Ok(())
    }

    pub async fn reset(&self) -> Result<()> {
        self.save(&PerformanceMetrics::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BuiltinAgent;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let store = MetricsStore::new(dir.path(), "performance_metrics.json");
        let metrics = store.load().await;
        assert_eq!(metrics.total_tasks_completed, 0);
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = MetricsStore::new(dir.path(), "performance_metrics.json");

        let mut metrics = PerformanceMetrics::default();
        metrics.record_run(BuiltinAgent::Developer, 1, 1.5);
        store.save(&metrics).await.unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded.dev_agent_calls, 1);
        assert_eq!(loaded.total_tasks_completed, 1);
    }

    #[tokio::test]
    async fn test_load_corrupt_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let store = MetricsStore::new(dir.path(), "performance_metrics.json");
        fs::write(store.path(), "{not json").await.unwrap();

        let metrics = store.load().await;
        assert_eq!(metrics.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = MetricsStore::new(dir.path(), "performance_metrics.json");
        store.save(&PerformanceMetrics::default()).await.unwrap();

        assert!(store.path().exists());
        assert!(!dir.path().join("performance_metrics.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_reset_zeroes_counters() {
        let dir = TempDir::new().unwrap();
        let store = MetricsStore::new(dir.path(), "performance_metrics.json");

        let mut metrics = PerformanceMetrics::default();
        metrics.record_run(BuiltinAgent::DocWriter, 3, 2.0);
        store.save(&metrics).await.unwrap();

        store.reset().await.unwrap();
        let loaded = store.load().await;
        assert_eq!(loaded.doc_agent_calls, 0);
        assert_eq!(loaded.total_tasks_completed, 0);
    }
}
