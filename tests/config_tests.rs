use crewline::config::{AppConfig, CONFIG_FILE};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = AppConfig::default();

    assert_eq!(config.agent.model, "claude-sonnet-4-20250514");
    assert_eq!(config.agent.max_tokens, 4096);
    assert!((config.agent.temperature - 0.7).abs() < f32::EPSILON);
    assert_eq!(config.agent.timeout_secs, 120);
    assert_eq!(config.agent.max_retries, 3);
    assert!(config.agent.verbose);

    assert_eq!(config.ui.menu_width, 60);
    assert_eq!(config.ui.separator_width, 80);
    assert!(config.ui.show_timestamps);

    assert_eq!(config.files.default_save_dir, ".");
    assert!(config.files.auto_backup);

    assert!(config.metrics.enabled);
    assert!(config.metrics.save);
    assert_eq!(config.metrics.file, "performance_metrics.json");
}

#[tokio::test]
async fn test_load_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load(dir.path()).await.unwrap();
    assert_eq!(config.agent.max_retries, 3);
}

#[tokio::test]
async fn test_load_reads_overrides() {
    let dir = TempDir::new().unwrap();
    let content = "[agent]\nmodel = \"claude-3-haiku-20240307\"\nmax_retries = 1\n\n[metrics]\nenabled = false\n";
    std::fs::write(dir.path().join(CONFIG_FILE), content).unwrap();

    let config = AppConfig::load(dir.path()).await.unwrap();
    assert_eq!(config.agent.model, "claude-3-haiku-20240307");
    assert_eq!(config.agent.max_retries, 1);
    assert!(!config.metrics.enabled);
    // Untouched sections keep their defaults.
    assert_eq!(config.ui.menu_width, 60);
}

#[tokio::test]
async fn test_load_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE),
        "[agent]\ntemperature = 3.0\n",
    )
    .unwrap();

    assert!(AppConfig::load(dir.path()).await.is_err());
}

#[tokio::test]
async fn test_save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();

    let mut config = AppConfig::default();
    config.agent.temperature = 0.2;
    config.files.auto_backup = false;
    config.save(dir.path()).await.unwrap();

    let loaded = AppConfig::load(dir.path()).await.unwrap();
    assert!((loaded.agent.temperature - 0.2).abs() < f32::EPSILON);
    assert!(!loaded.files.auto_backup);
}
