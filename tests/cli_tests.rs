use clap::Parser;
use crewline::catalog::BuiltinAgent;
use crewline::cli::{Cli, Commands, OutputFormat};
use crewline::error::CrewError;

#[test]
fn test_run_agent_resolves_by_id() {
    let cli =
        Cli::try_parse_from(["crewline", "run", "doc", "--preset", "report-computers"]).unwrap();

    match cli.command {
        Some(Commands::Run { agent, preset, .. }) => {
            let agent = BuiltinAgent::from_id(&agent).unwrap();
            assert_eq!(agent, BuiltinAgent::DocWriter);
            assert_eq!(preset.as_deref(), Some("report-computers"));
        }
        _ => panic!("expected the run command"),
    }
}

#[test]
fn test_run_rejects_unknown_agent_id() {
    let cli = Cli::try_parse_from(["crewline", "run", "ops", "--task", "Do a thing."]).unwrap();

    match cli.command {
        Some(Commands::Run { agent, .. }) => {
            assert!(matches!(
                BuiltinAgent::from_id(&agent),
                Err(CrewError::UnknownAgent(_))
            ));
        }
        _ => panic!("expected the run command"),
    }
}

#[test]
fn test_run_requires_preset_or_task() {
    assert!(Cli::try_parse_from(["crewline", "run", "dev"]).is_err());
}

#[test]
fn test_run_rejects_preset_combined_with_task() {
    let result = Cli::try_parse_from([
        "crewline",
        "run",
        "dev",
        "--preset",
        "reverse-string",
        "--task",
        "Do a thing.",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_no_subcommand_defaults_to_interactive() {
    let cli = Cli::try_parse_from(["crewline"]).unwrap();
    assert!(cli.command.is_none());
    assert!(!cli.verbose);
    assert_eq!(cli.output, OutputFormat::Text);
}
