//! CLI command definitions for the `ogun` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Ogun Startup Advisor: an AI business mentor for aspiring entrepreneurs.
#[derive(Parser)]
#[command(name = "ogun", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    /// Path to the TOML configuration file.
    #[arg(long, global = true, env = "OGUN_ADVISOR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat relay server and web UI.
    Serve {
        /// Port to listen on (overrides config).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config).
        #[arg(long)]
        host: Option<String>,
    },

    /// Chat with the advisor from the terminal.
    Chat {
        /// Base URL of a running relay server (defaults to the configured host and port).
        #[arg(long)]
        url: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Pick the default tracing directive for the requested verbosity.
pub fn log_directive(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info,advisor_core=debug,advisor_infra=debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from(["ogun", "serve", "--port", "8080", "--host", "0.0.0.0"]).unwrap();
        match cli.command {
            Commands::Serve { port, host } => {
                assert_eq!(port, Some(8080));
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_chat_with_global_flags() {
        let cli = Cli::try_parse_from(["ogun", "chat", "-vv", "--url", "http://localhost:3000"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Commands::Chat { url: Some(ref u) } if u == "http://localhost:3000"
        ));
    }

    #[test]
    fn test_log_directive() {
        assert_eq!(log_directive(0, true), "error");
        assert_eq!(log_directive(0, false), "warn");
        assert!(log_directive(1, false).contains("advisor_core=debug"));
        assert_eq!(log_directive(3, false), "trace");
    }
}
