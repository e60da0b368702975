//! echo-function: an HTTP echo function
//!
//! Serves the `echoRequest` function, which responds to every request with
//! the request body prefixed by `Echo: `.
//!
//! Features:
//! - JSON bodies echoed as compact JSON, everything else as text
//! - Mounted on `/` and `/<target>` for any HTTP method
//! - Request body size limit
//! - Graceful shutdown on Ctrl+C or SIGTERM
//! - Configuration via CLI arguments, environment (`PORT`, `FUNCTION_TARGET`)
//!   or TOML file

mod config;
mod functions;
mod server;

use config::Config;
use server::Server;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!(
        listen = %config.listen,
        target = %config.target,
        max_body_size = config.max_body_size,
        "Starting echo-function server"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(Server::new(config).run())?;
    Ok(())
}
