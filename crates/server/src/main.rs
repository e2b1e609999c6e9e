//! Minutemart MCP server - grocery shopping tools over stdio.
//!
//! This binary speaks newline-delimited JSON-RPC on stdin/stdout and
//! proxies every tool call to the backend REST API. Logs go to stderr so
//! they never corrupt the protocol stream.

#![cfg_attr(not(test), forbid(unsafe_code))]

use minutemart_server::api::ApiClient;
use minutemart_server::config::Config;
use minutemart_server::mcp::McpServer;

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter, writing to stderr.
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "minutemart_server=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(api_base_url = %config.api_base_url, "configuration loaded");

    let api = ApiClient::new(&config).expect("Failed to build API client");

    let server = McpServer::new(api);
    if let Err(e) = server.serve().await {
        tracing::error!(error = %e, "server loop failed");
        std::process::exit(1);
    }
}
