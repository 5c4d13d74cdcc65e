use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gatehouse::config;
use gatehouse::router::{build_router, gate_state};

#[derive(Debug, Parser)]
#[command(name = "gatehouse", version, about = "Serve the app behind the login gate")]
struct Cli {
    /// Interface to bind (overrides GATEHOUSE_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides GATEHOUSE_PORT / PORT)
    #[arg(long, short)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up JWT_SECRET and friends
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gatehouse=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = config::config().clone();
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    tracing::info!("Starting gatehouse in {:?} mode", config.environment);
    if config.security.jwt_secret.is_empty() {
        tracing::warn!("JWT_SECRET is not set; every visitor will be treated as signed out");
    }
    tracing::info!(
        exclusions = ?config.gate.exclude_prefixes,
        cookie = %config.security.session_cookie,
        "gate configured"
    );

    let app = build_router(gate_state(&config), &config);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("gatehouse listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
