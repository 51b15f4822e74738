//! Interactive menu-driven session.
//!
//! A read-eval-print loop keyed on integer menu choices: pick an agent, pick
//! a preset task or type a custom one, watch the crew run, then optionally
//! save the result. Invalid numeric input re-prompts instead of exiting.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use console::style;
use tracing::debug;

use super::display::Display;
use crate::agent::LlmExecutor;
use crate::catalog::{single_task_crew, BuiltinAgent};
use crate::config::AppConfig;
use crate::error::{CrewError, Result};
use crate::metrics::{MetricsStore, PerformanceMetrics};
use crate::output::save_report;

pub struct InteractiveSession {
    display: Display,
    config: AppConfig,
    store: MetricsStore,
    executor: Arc<dyn LlmExecutor>,
}

impl InteractiveSession {
    pub fn new(config: AppConfig, store: MetricsStore, executor: Arc<dyn LlmExecutor>) -> Self {
        Self {
            display: Display::new(config.ui.clone()),
            config,
            store,
            executor,
        }
    }

    /// Main loop. Returns when the user picks Exit.
    pub async fn run(&self) -> Result<()> {
        let mut metrics = if self.config.metrics.enabled {
            self.store.load().await
        } else {
            PerformanceMetrics::default()
        };

        self.display.print_welcome();

        loop {
            let agents = BuiltinAgent::all();
            let mut items: Vec<String> = agents.iter().map(|a| a.label().to_string()).collect();
            items.push("Exit".to_string());

            self.display.print_menu("Select an agent:", &items);
            let choice = self.prompt_number(1, items.len())?;
            if choice == items.len() {
                self.display.print_info("Goodbye.");
                return Ok(());
            }

            let agent = agents[choice - 1];
            if let Err(e) = self.run_agent_session(agent, &mut metrics).await {
                self.display.print_error(&e.to_string());
            }
        }
    }

    /// One pass through the task menu for a chosen agent.
    async fn run_agent_session(
        &self,
        agent: BuiltinAgent,
        metrics: &mut PerformanceMetrics,
    ) -> Result<()> {
        self.display.print_agent_selected(agent.label());

        let presets = agent.presets();
        let mut items: Vec<String> = presets.iter().map(|p| p.label.to_string()).collect();
        items.push("Custom task".to_string());
        items.push("Back".to_string());

        self.display.print_menu("Choose a task:", &items);
        let choice = self.prompt_number(1, items.len())?;
        if choice == items.len() {
            return Ok(());
        }

        let (description, expected) = if choice <= presets.len() {
            let preset = presets[choice - 1];
            (
                preset.description.to_string(),
                preset.expected_output.to_string(),
            )
        } else {
            let description = self.read_custom_task()?;
            let expected =
                self.prompt_text("Expected output (leave empty for a sensible default): ")?;
            (description, expected)
        };

        let crew = single_task_crew(agent, description, expected, self.config.agent.verbose)?;

        let spinner = self.display.spinner("Running crew...");
        let result = crew.kickoff(self.executor.as_ref()).await;
        spinner.finish_and_clear();
        let report = result?;

        self.display.print_report(agent.label(), &report);

        if self.config.metrics.enabled {
            metrics.record_run(agent, report.tasks_completed() as u64, report.duration_secs);
            if self.config.metrics.save {
                if let Err(e) = self.store.save(metrics).await {
                    // A failed metrics write never aborts the session.
                    self.display
                        .print_error(&format!("Could not save metrics: {}", e));
                }
            }
        }

        if self.prompt_yes_no("Save the result to a file?")? {
            let path = self.prompt_text("Path to save to: ")?;
            match save_report(&report, &path, &self.config.files).await {
                Ok(saved) => self
                    .display
                    .print_success(&format!("Saved to {}", saved.display())),
                Err(e) => self.display.print_error(&e.to_string()),
            }
        }

        Ok(())
    }

    /// Multi-line task entry, terminated by two consecutive blank lines.
    fn read_custom_task(&self) -> Result<String> {
        println!();
        println!(
            "{}",
            style("Describe the task (finish with two blank lines):").bold()
        );

        let stdin = io::stdin();
        let text = collect_multiline(stdin.lock())?;
        debug!(chars = text.len(), "custom task collected");

        if text.trim().is_empty() {
            return Err(CrewError::EmptyTask);
        }
        Ok(text)
    }

    fn prompt_number(&self, min: usize, max: usize) -> Result<usize> {
        loop {
            print!("{}", style(format!("Select ({}-{}): ", min, max)).cyan());
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            match input.trim().parse::<usize>() {
                Ok(n) if n >= min && n <= max => return Ok(n),
                _ => {
                    self.display.print_error(&format!(
                        "Please enter a number between {} and {}",
                        min, max
                    ));
                }
            }
        }
    }

    fn prompt_text(&self, prompt: &str) -> Result<String> {
        print!("{}", style(prompt).cyan());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        Ok(input.trim().to_string())
    }

    fn prompt_yes_no(&self, question: &str) -> Result<bool> {
        loop {
            print!("{}", style(format!("{} [y/n]: ", question)).cyan());
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            match input.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.display.print_error("Please answer y or n"),
            }
        }
    }
}

/// Collect lines until two consecutive blank lines (or EOF).
///
/// Trailing blank lines are dropped from the collected text.
pub fn collect_multiline<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut blank_streak = 0;

    loop {
        let mut line = String::new();
        let read = reader.read_line(&mut line)?;
        if read == 0 {
            break;
        }

        let line = line.trim_end_matches(['\n', '\r']).to_string();
        if line.trim().is_empty() {
            blank_streak += 1;
            if blank_streak >= 2 {
                break;
            }
        } else {
            blank_streak = 0;
        }
        lines.push(line);
    }

    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }

    Ok(lines.join("\n"))
}
