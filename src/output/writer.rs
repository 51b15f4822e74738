use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::fs;
use tracing::info;

use crate::cli::OutputFormat;
use crate::config::FileConfig;
use crate::crew::CrewReport;
use crate::error::{CrewError, Result};
use crate::metrics::PerformanceMetrics;
use crate::utils::{backup_path, format_duration};

/// Output writer that handles the CLI's output formats.
///
/// - Text: human-readable formatted output (default)
/// - Json: a single JSON object
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Emit a finished crew run.
    pub fn emit_report(&self, agent_label: &str, report: &CrewReport) {
        match self.format {
            OutputFormat::Text => self.print_text_report(agent_label, report),
            OutputFormat::Json => self.write_json(&ReportOutput::new(agent_label, report)),
        }
    }

    /// Emit the metrics counters.
    pub fn emit_metrics(&self, metrics: &PerformanceMetrics) {
        match self.format {
            OutputFormat::Text => self.print_text_metrics(metrics),
            OutputFormat::Json => self.write_json(metrics),
        }
    }

    pub fn emit_message(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", message),
            OutputFormat::Json => self.write_json(&MessageOutput {
                message: message.to_string(),
            }),
        }
    }

    fn write_json<T: Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string(value) {
            let mut stdout = io::stdout().lock();
            let _ = writeln!(stdout, "{}", json);
            let _ = stdout.flush();
        }
    }

    fn print_text_report(&self, agent_label: &str, report: &CrewReport) {
        println!();
        println!("Agent: {}", agent_label);
        println!(
            "Completed {} task(s) in {}",
            report.tasks_completed(),
            format_duration(std::time::Duration::from_secs_f64(report.duration_secs))
        );
        println!();
        println!("{}", report.final_output());
    }

    fn print_text_metrics(&self, metrics: &PerformanceMetrics) {
        println!();
        println!("{:<24} {:>8}", "Counter", "Value");
        println!("{}", "-".repeat(33));
        println!("{:<24} {:>8}", "Dev agent calls", metrics.dev_agent_calls);
        println!("{:<24} {:>8}", "Doc agent calls", metrics.doc_agent_calls);
        println!(
            "{:<24} {:>8}",
            "README agent calls", metrics.readme_agent_calls
        );
        println!("{:<24} {:>8}", "Review agent calls", metrics.code_review_calls);
        println!(
            "{:<24} {:>8}",
            "Total tasks completed", metrics.total_tasks_completed
        );

        if let Some(last) = &metrics.last_run {
            println!();
            println!(
                "Last run: {} agent, {} task(s), {} ({})",
                last.agent,
                last.tasks_completed,
                format_duration(std::time::Duration::from_secs_f64(last.duration_secs)),
                last.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
            );
        }
    }
}

/// Save a report's final output to a file.
///
/// Relative paths resolve against `files.default_save_dir`. Parent
/// directories are created; an existing target is renamed to a timestamped
/// backup first when `auto_backup` is on.
pub async fn save_report(
    report: &CrewReport,
    raw_path: &str,
    files: &FileConfig,
) -> Result<PathBuf> {
    let trimmed = raw_path.trim();
    if trimmed.is_empty() {
        return Err(CrewError::InvalidSavePath("path is empty".into()));
    }

    let mut path = PathBuf::from(trimmed);
    if path.is_relative() {
        path = Path::new(&files.default_save_dir).join(path);
    }

    if path.is_dir() {
        return Err(CrewError::InvalidSavePath(format!(
            "{} is a directory",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    if path.exists() && files.auto_backup {
        let backup = backup_path(&path);
        fs::rename(&path, &backup).await?;
        info!(backup = %backup.display(), "existing file backed up");
    }

    fs::write(&path, report.final_output()).await?;
    info!(path = %path.display(), "result saved");
    Ok(path)
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportOutput {
    pub agent: String,
    pub final_output: String,
    pub tasks: Vec<TaskInfo>,
    pub duration_secs: f64,
}

impl ReportOutput {
    pub fn new(agent_label: &str, report: &CrewReport) -> Self {
        Self {
            agent: agent_label.to_string(),
            final_output: report.final_output().to_string(),
            tasks: report
                .task_outputs
                .iter()
                .map(|t| TaskInfo {
                    id: t.task_id.clone(),
                    agent_role: t.agent_role.clone(),
                    duration_secs: t.duration_secs,
                })
                .collect(),
            duration_secs: report.duration_secs,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskInfo {
    pub id: String,
    pub agent_role: String,
    pub duration_secs: f64,
}

#[derive(Debug, Clone, Serialize)]
struct MessageOutput {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crew::TaskOutput;
    use chrono::Utc;
    use tempfile::TempDir;

    fn report(text: &str) -> CrewReport {
        CrewReport {
            task_outputs: vec![TaskOutput {
                task_id: "task-1".into(),
                agent_role: "Python Developer".into(),
                output: text.to_string(),
                duration_secs: 0.5,
            }],
            started_at: Utc::now(),
            finished_at: Utc::now(),
            duration_secs: 0.5,
        }
    }

    fn files(dir: &Path, auto_backup: bool) -> FileConfig {
        FileConfig {
            default_save_dir: dir.to_string_lossy().into_owned(),
            auto_backup,
        }
    }

    #[tokio::test]
    async fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let files = files(dir.path(), true);

        let saved = save_report(&report("output"), "nested/deep/out.txt", &files)
            .await
            .unwrap();
        assert!(saved.exists());
        assert_eq!(std::fs::read_to_string(&saved).unwrap(), "output");
    }

    #[tokio::test]
    async fn test_save_backs_up_existing_file() {
        let dir = TempDir::new().unwrap();
        let files = files(dir.path(), true);

        save_report(&report("first"), "out.txt", &files).await.unwrap();
        save_report(&report("second"), "out.txt", &files).await.unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert!(names.iter().any(|n| n == "out.txt"));
        assert!(names.iter().any(|n| n.starts_with("out_backup_")));

        let current = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
        assert_eq!(current, "second");
    }

    #[tokio::test]
    async fn test_save_without_backup_overwrites() {
        let dir = TempDir::new().unwrap();
        let files = files(dir.path(), false);

        save_report(&report("first"), "out.txt", &files).await.unwrap();
        save_report(&report("second"), "out.txt", &files).await.unwrap();

        let count = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_save_rejects_empty_path() {
        let dir = TempDir::new().unwrap();
        let files = files(dir.path(), true);
        let result = save_report(&report("x"), "   ", &files).await;
        assert!(matches!(result, Err(CrewError::InvalidSavePath(_))));
    }

    #[tokio::test]
    async fn test_save_rejects_directory_target() {
        let dir = TempDir::new().unwrap();
        let files = files(dir.path(), true);
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let result = save_report(&report("x"), "sub", &files).await;
        assert!(matches!(result, Err(CrewError::InvalidSavePath(_))));
    }
}
