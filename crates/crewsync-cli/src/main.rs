//! crewsync - crew collaboration tools over MCP stdio.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;
pub(crate) mod shared;

/// Crew sync agent - MCP server exposing crew collaboration tools.
#[derive(Debug, Parser)]
#[command(name = "crewsync", version, about)]
struct Cli {
    /// Configuration file path (TOML).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv). Overrides `logging.level`.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: plain (default) or json (for log aggregation).
    #[arg(long, global = true, default_value = "plain", value_parser = ["plain", "json"])]
    log_format: String,

    /// Maximum crew size (overrides config and MAX_CREW_SIZE).
    #[arg(long, global = true)]
    max_crew_size: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Serve MCP over stdio (default).
    Serve,
    /// Print the advertised tool list as JSON and exit.
    Tools,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Diagnosed errors are reported here and only the exit code goes back.
    let config = match shared::load_settings(cli.config.as_deref(), cli.max_crew_size) {
        Ok(config) => config,
        Err(e) => {
            output::print_diagnostic(&e);
            return Ok(ExitCode::FAILURE);
        }
    };

    // Logs go to stderr; stdout carries protocol traffic only.
    let filter = match cli.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let env_filter = EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("info"));
    match cli.log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        _ => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init(),
    };

    tracing::debug!(?config, "crewsync starting");

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            if let Err(e) = commands::serve::execute(&config).await {
                output::print_diagnostic(&e);
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Tools => commands::tools::execute(&config)?,
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["crewsync"]).expect("parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.log_format, "plain");
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["crewsync", "tools", "--max-crew-size", "3", "-vv"])
            .expect("parse");
        assert!(matches!(cli.command, Some(Commands::Tools)));
        assert_eq!(cli.max_crew_size, Some(3));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!(Cli::try_parse_from(["crewsync", "--log-format", "xml"]).is_err());
    }

    #[test]
    fn max_crew_size_override_is_validated() {
        let err = shared::load_settings(None, Some(0)).unwrap_err();
        assert!(matches!(err, crewsync_config::ConfigError::Invalid(_)));
    }
}
