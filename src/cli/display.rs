use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::UiConfig;
use crate::crew::CrewReport;
use crate::utils::{format_duration, truncate_chars};

pub struct Display {
    ui: UiConfig,
}

impl Display {
    pub fn new(ui: UiConfig) -> Self {
        Self { ui }
    }

    pub fn print_welcome(&self) {
        println!();
        println!("{}", style("Welcome to the AI Agent System").bold().cyan());
        println!("{}", style("═".repeat(self.ui.menu_width)).dim());
    }

    pub fn print_header(&self, text: &str) {
        println!();
        println!("{}", style(text).bold().cyan());
        println!("{}", style("═".repeat(self.ui.menu_width)).dim());
        println!();
    }

    /// Numbered menu. The caller prompts for the selection.
    pub fn print_menu(&self, title: &str, items: &[String]) {
        println!();
        println!("{}", style(title).bold().white());
        for (i, item) in items.iter().enumerate() {
            println!(
                "  [{}] {}",
                style(i + 1).cyan().bold(),
                truncate_chars(item, self.ui.menu_width)
            );
        }
        println!();
    }

    pub fn print_agent_selected(&self, label: &str) {
        println!();
        println!("{}", style(format!("{} selected", label)).green().bold());
    }

    pub fn print_report(&self, agent_label: &str, report: &CrewReport) {
        self.print_header("Final Output");
        println!("{}", report.final_output());
        println!();
        println!("{}", style("─".repeat(self.ui.separator_width)).dim());

        let duration = format_duration(Duration::from_secs_f64(report.duration_secs));
        let mut summary = format!(
            "{} finished {} task(s) in {}",
            agent_label,
            report.tasks_completed(),
            duration
        );
        if self.ui.show_timestamps {
            summary.push_str(&format!(
                " (at {})",
                report.finished_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }
        println!("{}", style(summary).dim());
    }

    pub fn print_success(&self, message: &str) {
        println!("{} {}", style("✓").green().bold(), message);
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red().bold(), style(message).red());
    }

    pub fn print_info(&self, message: &str) {
        println!("{}", style(message).dim());
    }

    /// Spinner shown while a crew is executing.
    pub fn spinner(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::with_template("{spinner} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}
