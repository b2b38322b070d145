//! Auxiliary Service entry point

use anyhow::Result;
use aux_service::aws::{build_clients, AwsSettings};
use aux_service::server::{router, AppState};
use std::net::SocketAddr;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .json()
        .init();

    info!("Starting Auxiliary Service");

    let settings = AwsSettings::from_env();
    info!("Using AWS region: {}", settings.region);

    let (s3, ssm) = build_clients(&settings).await;
    let app = router(AppState { s3, ssm });

    let addr = SocketAddr::from(([0, 0, 0, 0], 8001));
    info!("Auxiliary Service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
