//! agentchat CLI and web server entry point.
//!
//! Binary name: `agentchat`
//!
//! Parses CLI arguments, loads configuration, wires the agent relay, then
//! dispatches to the requested command or starts the chat server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use agentchat_infra::config::{apply_env_overrides, load_config, load_config_file, resolve_config_dir};
use agentchat_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};
use agentchat_types::config::AppConfig;
use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(verbosity_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        // Neither completions nor the formatter need config or the relay
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "agentchat", &mut std::io::stdout());
        }

        Commands::Format { file, blocks } => {
            cli::format::format_input(file.as_deref(), blocks).await?;
        }

        Commands::Ask { prompt } => {
            let state = AppState::init(resolve_config(cli.config.as_deref()).await?)?;
            cli::ask::ask(&state, &prompt).await?;
        }

        Commands::Serve { port, host } => {
            let state = AppState::init(resolve_config(cli.config.as_deref()).await?)?;

            let host = host.unwrap_or_else(|| state.config.server.host.clone());
            let port = port.unwrap_or(state.config.server.port);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            tracing::info!(%addr, agent = state.chat_service.relay().base_url(), "chat server starting");
            println!(
                "  {} agentchat listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!(
                "  {} relaying to {}",
                console::style("→").dim(),
                console::style(state.chat_service.relay().base_url()).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }
    }

    Ok(())
}

/// Load the config file (explicit path or the default location), then apply
/// environment overrides.
async fn resolve_config(explicit: Option<&std::path::Path>) -> anyhow::Result<AppConfig> {
    let config = match explicit {
        Some(path) => load_config_file(path).await?,
        None => load_config(&resolve_config_dir()).await,
    };
    Ok(apply_env_overrides(config, |key| std::env::var(key).ok())?)
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
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
                tracing::error!("failed to install SIGTERM handler: {e}");
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
}
