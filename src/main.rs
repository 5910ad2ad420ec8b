use std::sync::Arc;

mod api;
mod config;
mod docs;
mod handler;
mod http;
mod logger;
mod server;
mod upstream;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration errors are fatal; nothing binds without the upstream
    // URL and token.
    let cfg = config::Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;

    // Both the upstream client and the serialized OpenAPI document are
    // fixed for the process lifetime; failing to build either aborts
    // startup before the listener exists.
    let upstream = upstream::TripDataClient::new(&cfg.upstream)?;
    let docs_json = docs::openapi_json()?;

    let listener = server::create_reusable_listener(addr)?;

    logger::log_server_start(&addr, &cfg);

    let state = Arc::new(config::AppState::new(cfg, upstream, docs_json));
    server::run(listener, state).await
}
