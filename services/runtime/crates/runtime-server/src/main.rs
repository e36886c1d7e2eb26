//! Armada runtime server entry point.
//!
//! Initialises tracing, loads configuration from environment variables
//! (prefixed with `ARMADA_RUNTIME_`), builds the deployer client, and
//! serves the runtime instance control surface over HTTP.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum_server::tls_rustls::RustlsConfig;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use armada_runtime_server::http::{ServerState, router};
use armada_runtime_server::infra::deployer::DeployerClient;

// ===================================================================
// Configuration
// ===================================================================

/// Server configuration loaded from environment variables via `envy`.
///
/// Each field maps to `ARMADA_RUNTIME_<FIELD>`:
///   - `ARMADA_RUNTIME_LISTEN_ADDR`      (default `0.0.0.0:8080`)
///   - `ARMADA_RUNTIME_DEPLOYER_URL`     (required, base URL of the daemon)
///   - `ARMADA_RUNTIME_AUDITING_ENABLED` (default `false`)
///   - `ARMADA_RUNTIME_TLS_CERT`         (optional, path to TLS cert)
///   - `ARMADA_RUNTIME_TLS_KEY`          (optional, path to TLS key)
#[derive(Debug, Deserialize)]
struct Config {
    /// Socket address to bind the HTTP server to.
    #[serde(default = "default_listen_addr")]
    listen_addr: String,

    /// Base URL of the deployer daemon's REST API.
    deployer_url: String,

    /// Whether audit-identity resolution is active.
    #[serde(default)]
    auditing_enabled: bool,

    /// Path to TLS certificate (enables HTTPS when set).
    tls_cert: Option<String>,

    /// Path to TLS private key.
    tls_key: Option<String>,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

// ===================================================================
// Entry point
// ===================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialise tracing with RUST_LOG env filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("armada-runtimed starting");

    // 2. Load configuration from ARMADA_RUNTIME_* env vars.
    let config: Config = envy::prefixed("ARMADA_RUNTIME_").from_env().context(
        "failed to load config from ARMADA_RUNTIME_* env vars \
             (ARMADA_RUNTIME_DEPLOYER_URL is required)",
    )?;

    tracing::info!(
        listen_addr = %config.listen_addr,
        deployer_url = %config.deployer_url,
        auditing_enabled = config.auditing_enabled,
        tls_enabled = config.tls_cert.is_some(),
        "configuration loaded",
    );

    // 3. Build the deployer client and shared server state.
    let deployer =
        DeployerClient::new(&config.deployer_url).context("failed to build deployer client")?;
    let state = Arc::new(ServerState {
        deployer,
        auditing_enabled: config.auditing_enabled,
    });

    // 4. Compose the router and bind (TLS or plaintext).
    let app = router(state);

    let addr: std::net::SocketAddr = config
        .listen_addr
        .parse()
        .context("invalid listen address")?;

    if let (Some(cert_path), Some(key_path)) = (&config.tls_cert, &config.tls_key) {
        tracing::info!("TLS enabled, loading cert from {}", cert_path);
        let tls_config = RustlsConfig::from_pem_file(cert_path, key_path)
            .await
            .context("failed to load TLS certificates")?;

        tracing::info!("runtime API ready at https://{}/runtime", config.listen_addr);

        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await
            .context("HTTPS server error")?;
    } else {
        tracing::info!(
            "runtime API ready at http://{}/runtime (TLS disabled)",
            config.listen_addr,
        );

        let listener = tokio::net::TcpListener::bind(&config.listen_addr)
            .await
            .context("failed to bind TCP listener")?;

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;
    }

    tracing::info!("armada-runtimed shut down");
    Ok(())
}

/// Wait for SIGINT (Ctrl-C) for graceful shutdown.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl-C handler");
    tracing::info!("received shutdown signal");
}
