//! AWS client construction
//!
//! Both SDK clients are built once at startup from a shared config and
//! reused for every request; the SDK clients are safe for concurrent use.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client as S3Client;
use aws_sdk_ssm::Client as SsmClient;
use std::env;

const REGION_ENV: &str = "AWS_DEFAULT_REGION";
const ENDPOINT_ENV: &str = "AWS_ENDPOINT_URL";
const DEFAULT_REGION: &str = "eu-central-1";

/// Environment-derived AWS settings.
#[derive(Debug, Clone)]
pub struct AwsSettings {
    pub region: String,
    pub endpoint_url: Option<String>,
}

impl AwsSettings {
    pub fn from_env() -> Self {
        Self {
            region: env::var(REGION_ENV).unwrap_or_else(|_| DEFAULT_REGION.to_string()),
            endpoint_url: env::var(ENDPOINT_ENV).ok(),
        }
    }
}

/// Build the S3 and SSM clients from one shared SDK config.
pub async fn build_clients(settings: &AwsSettings) -> (S3Client, SsmClient) {
    let shared_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(settings.region.clone()))
        .load()
        .await;

    let s3_client = {
        let mut builder = aws_sdk_s3::config::Builder::from(&shared_config);
        if let Some(endpoint) = settings.endpoint_url.as_deref() {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }
        S3Client::from_conf(builder.build())
    };

    let ssm_client = {
        let mut builder = aws_sdk_ssm::config::Builder::from(&shared_config);
        if let Some(endpoint) = settings.endpoint_url.as_deref() {
            builder = builder.endpoint_url(endpoint);
        }
        SsmClient::from_conf(builder.build())
    };

    (s3_client, ssm_client)
}
