pub mod api;
pub mod calculators;
pub mod config;
pub mod intelligence;
pub mod models;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::ApiContext;
use crate::config::ServerConfig;
use crate::intelligence::ReferenceData;

pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    // Reference tables are compiled in; a parse failure is a build defect.
    let reference = match ReferenceData::load_embedded() {
        Ok(data) => Arc::new(data),
        Err(e) => {
            tracing::error!("Failed to load reference data: {e}");
            std::process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {e}");
            std::process::exit(1);
        }
    };

    let ctx = ApiContext::new(reference, &config);
    let exit_code = runtime.block_on(async move {
        let server = match api::start_server_on(ctx, config.bind_addr).await {
            Ok(server) => server,
            Err(e) => {
                tracing::error!("{e}");
                return 1;
            }
        };
        tracing::info!(
            addr = %server.session.server_addr,
            session = %server.session.session_id,
            max_batch_size = config.max_batch_size,
            "Listening"
        );

        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {e}");
        }
        server.stop().await;
        0
    });

    std::process::exit(exit_code);
}
