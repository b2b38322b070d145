//! HTTP surface for the main API
//!
//! Mirrors the auxiliary service's endpoints; every handler relays once
//! and re-emits the payload with both version tags.

use crate::error::RelayError;
use crate::relay::AuxClient;
use crate::MAIN_API_VERSION;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub aux: AuxClient,
}

#[derive(Debug, Serialize)]
pub struct RelayedBuckets {
    pub buckets: Vec<String>,
    pub main_version: &'static str,
    pub aux_version: String,
}

#[derive(Debug, Serialize)]
pub struct RelayedParameters {
    pub parameters: Vec<String>,
    pub main_version: &'static str,
    pub aux_version: String,
}

#[derive(Debug, Serialize)]
pub struct RelayedParameter {
    pub parameter: String,
    pub main_version: &'static str,
    pub aux_version: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/s3-buckets", get(list_s3_buckets))
        .route("/parameters", get(list_parameters))
        .route("/parameter/*name", get(get_parameter))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "main-api",
        "version": MAIN_API_VERSION
    }))
}

async fn list_s3_buckets(State(state): State<AppState>) -> Result<Json<RelayedBuckets>, RelayError> {
    let upstream = state.aux.list_buckets().await?;
    Ok(Json(RelayedBuckets {
        buckets: upstream.buckets,
        main_version: MAIN_API_VERSION,
        aux_version: upstream.version,
    }))
}

async fn list_parameters(
    State(state): State<AppState>,
) -> Result<Json<RelayedParameters>, RelayError> {
    let upstream = state.aux.list_parameters().await?;
    Ok(Json(RelayedParameters {
        parameters: upstream.parameters,
        main_version: MAIN_API_VERSION,
        aux_version: upstream.version,
    }))
}

/// The wildcard name is forwarded verbatim; normalization happens in the
/// auxiliary service.
async fn get_parameter(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RelayedParameter>, RelayError> {
    let upstream = state.aux.get_parameter(&name).await?;
    Ok(Json(RelayedParameter {
        parameter: upstream.parameter,
        main_version: MAIN_API_VERSION,
        aux_version: upstream.version,
    }))
}
