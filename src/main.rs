use std::sync::Arc;
use tokio::sync::Notify;

use fixture_api::config::{self, AppState, Config};
use fixture_api::handler::StaticData;
use fixture_api::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    // The document behind /data is loaded once; a bad file stops startup
    let static_data = StaticData::load(&cfg.data.path).map_err(|e| {
        logger::log_error(&e.to_string());
        e
    })?;
    logger::log_static_data_loaded(&cfg.data.path, static_data.body().len());

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg, static_data))
}

async fn async_main(
    cfg: Config,
    static_data: StaticData,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr).map_err(|e| {
        logger::log_error(&format!("Failed to bind {addr}: {e}"));
        e
    })?;
    logger::log_server_start(&addr, &cfg);

    let state = Arc::new(AppState::new(cfg, static_data));
    let shutdown = Arc::new(Notify::new());
    server::start_signal_handler(Arc::clone(&shutdown));

    server::start_server_loop(listener, state, shutdown).await?;
    Ok(())
}
