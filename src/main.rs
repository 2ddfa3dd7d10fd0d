use std::net::SocketAddr;

use notes_server::{
    config::AppConfig, db::connection, logging::init_tracing, routes::app, state::AppState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        // Tracing may not be up yet when the config itself is broken.
        eprintln!("server failed: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env()?;
    init_tracing(&cfg.logging);

    let db = connection::connect(&cfg.database)
        .await
        .map_err(|err| err.context("DB Error"))?;

    let addr: SocketAddr = cfg
        .bind_addr()
        .parse()
        .map_err(|err| anyhow::anyhow!("invalid host/port {}: {err}", cfg.bind_addr()))?;
    let state = AppState::new(cfg, db);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server Running at http://{}/", addr);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
