//! API Gateway Library
//!
//! HTTP REST surface over the inventory services, which run in-process.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tracing::info;

use inventory_service_lib::config::InventoryServiceConfig;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Connect to the database, wire the services and serve HTTP until shutdown.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let service_config = InventoryServiceConfig::from_env()?;
    let (database, services) = inventory_service_lib::bootstrap(&service_config).await?;

    let state = AppState::new(&services, database);
    let app = create_router(state);

    let addr: SocketAddr = config.bind_addr().parse()?;
    info!("Inventory API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
