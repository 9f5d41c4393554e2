//! User directory entry-point: loads configuration, seeds the store, and
//! serves the HTTP routes.

mod server;

use std::env;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(env::args_os()).map_err(|err| {
        std::io::Error::other(format!("failed to load configuration: {err}"))
    })?;
    let config = ServerConfig::from_settings(&settings).map_err(std::io::Error::other)?;
    info!(
        bind_addr = %config.bind_addr(),
        seed = %config.seed(),
        "starting user directory"
    );

    create_server(config)?.await
}
