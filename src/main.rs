use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crewline::catalog::{single_task_crew, BuiltinAgent};
use crewline::cli::{Cli, Commands, ConfigAction, Display, InteractiveSession, MetricsAction};
use crewline::config::{AppConfig, CONFIG_FILE};
use crewline::error::{CrewError, Result};
use crewline::metrics::MetricsStore;
use crewline::output::{save_report, OutputWriter};
use crewline::{AnthropicExecutor, LlmExecutor};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Display::default().print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("crewline=debug")
    } else {
        EnvFilter::new("crewline=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(&cwd).await?;
    let writer = OutputWriter::new(cli.output);

    match cli.command {
        None => {
            let executor = build_executor(&config)?;
            let store = MetricsStore::new(&cwd, &config.metrics.file);
            InteractiveSession::new(config, store, executor).run().await
        }

        Some(Commands::Run {
            agent,
            preset,
            task,
            expected,
            save,
        }) => {
            let agent = BuiltinAgent::from_id(&agent)?;
            let store = MetricsStore::new(&cwd, &config.metrics.file);
            run_once(&config, &writer, &store, agent, preset, task, expected, save).await
        }

        Some(Commands::Metrics { action }) => {
            let store = MetricsStore::new(&cwd, &config.metrics.file);
            match action {
                MetricsAction::Show => {
                    let metrics = store.load().await;
                    writer.emit_metrics(&metrics);
                }
                MetricsAction::Reset => {
                    store.reset().await?;
                    writer.emit_message("Metrics reset.");
                }
            }
            Ok(())
        }

        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => {
                let content =
                    toml::to_string_pretty(&config).map_err(|e| CrewError::Config(e.to_string()))?;
                writer.emit_message(&content);
                Ok(())
            }
            ConfigAction::Init => {
                let config_path = cwd.join(CONFIG_FILE);
                if config_path.exists() {
                    return Err(CrewError::Config(format!(
                        "{} already exists",
                        config_path.display()
                    )));
                }
                AppConfig::default().save(&cwd).await?;
                writer.emit_message(&format!("Wrote {}", config_path.display()));
                Ok(())
            }
        },
    }
}

fn build_executor(config: &AppConfig) -> Result<Arc<dyn LlmExecutor>> {
    let executor = AnthropicExecutor::from_env(&config.agent)?;
    Ok(Arc::new(executor))
}

#[allow(clippy::too_many_arguments)]
async fn run_once(
    config: &AppConfig,
    writer: &OutputWriter,
    store: &MetricsStore,
    agent: BuiltinAgent,
    preset: Option<String>,
    task: Option<String>,
    expected: Option<String>,
    save: Option<PathBuf>,
) -> Result<()> {
    let (description, expected_output) = match (preset, task) {
        (Some(preset_id), _) => {
            let preset = agent.preset(&preset_id)?;
            (
                preset.description.to_string(),
                preset.expected_output.to_string(),
            )
        }
        (None, Some(description)) => (description, expected.unwrap_or_default()),
        (None, None) => return Err(CrewError::EmptyTask),
    };

    let executor = build_executor(config)?;
    let crew = single_task_crew(agent, description, expected_output, config.agent.verbose)?;
    let report = crew.kickoff(executor.as_ref()).await?;

    writer.emit_report(agent.label(), &report);

    if config.metrics.enabled {
        let mut metrics = store.load().await;
        metrics.record_run(agent, report.tasks_completed() as u64, report.duration_secs);
        if config.metrics.save {
            store.save(&metrics).await?;
        }
    }

    if let Some(path) = save {
        let saved = save_report(&report, &path.to_string_lossy(), &config.files).await?;
        writer.emit_message(&format!("Saved to {}", saved.display()));
    }

    Ok(())
}
