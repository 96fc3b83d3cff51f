//! Ogun Startup Advisor entry point.
//!
//! Binary name: `ogun`
//!
//! Parses CLI arguments, loads configuration, then either starts the chat
//! relay server or runs the terminal chat client.

mod cli;
mod http;
mod state;

use std::path::Path;
use std::time::Duration;

use clap::Parser;
use clap_complete::generate;

use advisor_infra::config::{load_config, load_dotenv};
use advisor_observe::tracing_setup::{init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli::log_directive(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    // Shell completions don't need configuration
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "ogun", &mut std::io::stdout());
        return Ok(());
    }

    if let Some(path) = load_dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env");
    }
    let mut config = load_config(cli.config.as_deref()).await?;

    match cli.command {
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }

            let addr = format!("{}:{}", config.host, config.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!();
            println!(
                "  {} Ogun Startup Advisor listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!(
                "  {}  {}",
                console::style("Model:").bold(),
                console::style(&config.model).dim()
            );
            if Path::new(&config.web_dir).exists() {
                println!(
                    "  {}  {}",
                    console::style("Web UI:").bold(),
                    console::style(&config.web_dir).dim()
                );
            }
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let state = AppState::init(config)?;
            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::Chat { url } => {
            let base_url = url.unwrap_or_else(|| format!("http://{}:{}", config.host, config.port));
            let timeout = Duration::from_secs(config.request_timeout_secs);
            cli::chat::loop_runner::run_chat_loop(&base_url, timeout).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    shutdown_tracing();
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
