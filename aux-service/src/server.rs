//! HTTP surface for the auxiliary service
//!
//! Three read-only endpoints, each translating one HTTP request into one
//! AWS call and reshaping the result into a typed JSON body.

use crate::error::AuxError;
use crate::AUX_SERVICE_VERSION;
use anyhow::Error as AnyError;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_ssm::error::SdkError;
use aws_sdk_ssm::Client as SsmClient;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared application state: long-lived AWS clients, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    pub ssm: SsmClient,
}

#[derive(Debug, Serialize)]
pub struct BucketListing {
    pub buckets: Vec<String>,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ParameterListing {
    pub parameters: Vec<String>,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ParameterValue {
    pub parameter: String,
    pub version: &'static str,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/s3-buckets", get(list_s3_buckets))
        .route("/parameters", get(list_parameters))
        .route("/parameter/*name", get(get_parameter))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "aux-service",
        "version": AUX_SERVICE_VERSION
    }))
}

/// `GET /s3-buckets` - bucket names in the order S3 returns them.
async fn list_s3_buckets(State(state): State<AppState>) -> Result<Json<BucketListing>, AuxError> {
    let output = state
        .s3
        .list_buckets()
        .send()
        .await
        .map_err(|err| AnyError::new(err).context("S3 ListBuckets failed"))?;

    let buckets: Vec<String> = output
        .buckets()
        .iter()
        .filter_map(|bucket| bucket.name())
        .map(String::from)
        .collect();

    info!("Listed {} S3 buckets", buckets.len());
    Ok(Json(BucketListing {
        buckets,
        version: AUX_SERVICE_VERSION,
    }))
}

/// `GET /parameters` - parameter names from the first page of
/// DescribeParameters. The upstream operation paginates; only the first
/// page is returned.
async fn list_parameters(State(state): State<AppState>) -> Result<Json<ParameterListing>, AuxError> {
    let output = state
        .ssm
        .describe_parameters()
        .send()
        .await
        .map_err(|err| AnyError::new(err).context("SSM DescribeParameters failed"))?;

    let parameters: Vec<String> = output
        .parameters()
        .iter()
        .filter_map(|param| param.name())
        .map(String::from)
        .collect();

    info!("Listed {} SSM parameters", parameters.len());
    Ok(Json(ParameterListing {
        parameters,
        version: AUX_SERVICE_VERSION,
    }))
}

/// `GET /parameter/*name` - value of a single parameter. The wildcard
/// capture arrives without its leading slash, so the name is normalized
/// before querying SSM. A missing parameter is a 404, not a 502.
async fn get_parameter(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ParameterValue>, AuxError> {
    let name = normalize_parameter_name(&name);

    let output = match state.ssm.get_parameter().name(&name).send().await {
        Ok(output) => output,
        Err(err) => {
            if let SdkError::ServiceError(context) = &err {
                if context.err().is_parameter_not_found() {
                    return Err(AuxError::ParameterNotFound(name));
                }
            }
            return Err(AnyError::new(err)
                .context("SSM GetParameter failed")
                .into());
        }
    };

    let value = output
        .parameter()
        .and_then(|param| param.value())
        .ok_or_else(|| anyhow::anyhow!("SSM GetParameter returned no value for {name}"))?;

    Ok(Json(ParameterValue {
        parameter: value.to_string(),
        version: AUX_SERVICE_VERSION,
    }))
}

/// SSM parameter names are absolute paths; prefix `/` when absent.
fn normalize_parameter_name(name: &str) -> String {
    if name.starts_with('/') {
        name.to_string()
    } else {
        format!("/{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_adds_leading_slash() {
        assert_eq!(normalize_parameter_name("db-password"), "/db-password");
    }

    #[test]
    fn normalize_keeps_existing_slash() {
        assert_eq!(normalize_parameter_name("/db-password"), "/db-password");
    }

    #[test]
    fn normalize_handles_nested_paths() {
        assert_eq!(normalize_parameter_name("app/db/url"), "/app/db/url");
        assert_eq!(normalize_parameter_name("/app/db/url"), "/app/db/url");
    }
}
