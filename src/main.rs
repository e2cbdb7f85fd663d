//! Server binary: wires the JSON file store, coordinator, and router.

use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;

use conclave::{build_router, AppState, Coordinator, GameRng, JsonFileStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "conclave=info,tower_http=info".to_string()),
        )
        .init();

    let data_file =
        std::env::var("CONCLAVE_DATA_FILE").unwrap_or_else(|_| "game_data.json".to_string());
    let store = JsonFileStore::new(&data_file);

    let rng = match std::env::var("CONCLAVE_AI_SEED")
        .ok()
        .map(|raw| raw.parse::<u64>())
        .transpose()
        .context("invalid CONCLAVE_AI_SEED")?
    {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    let coordinator = Coordinator::new(store, rng);

    // Every boot begins from a clean document.
    coordinator.reset().context("failed to reset game state")?;
    info!(path = %data_file, "game state reset");

    let app = build_router(AppState::new(coordinator));

    let bind_addr = parse_bind_addr("CONCLAVE_BIND", "0.0.0.0:5000")?;
    info!(%bind_addr, "conclave listening");
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn parse_bind_addr(var_name: &str, default: &str) -> anyhow::Result<SocketAddr> {
    let value = std::env::var(var_name).unwrap_or_else(|_| default.to_string());
    value.parse().context(format!("invalid {var_name}"))
}
