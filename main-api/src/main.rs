//! Main API entry point

use anyhow::Result;
use main_api::relay::AuxClient;
use main_api::server::{router, AppState};
use std::net::SocketAddr;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .json()
        .init();

    info!("Starting Main API");

    let aux = AuxClient::from_env()?;
    let app = router(AppState { aux });

    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    info!("Main API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
