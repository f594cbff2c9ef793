use crate::traits::{RemoteStore, StorageError, StorageResult};
use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::retry::{RetryConfig, RetryMode};
use aws_config::BehaviorVersion;
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

/// S3 remote store implementation
#[derive(Clone)]
pub struct S3RemoteStore {
    client: Client,
    bucket: String,
    region: String,
    endpoint_url: Option<String>, // Custom endpoint for S3-compatible providers
}

impl S3RemoteStore {
    /// Create a new S3RemoteStore instance
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    pub async fn new(
        bucket: String,
        region: String,
        endpoint_url: Option<String>,
    ) -> StorageResult<Self> {
        let region_provider =
            RegionProviderChain::first_try(aws_config::Region::new(region.clone()));

        let retry_config = RetryConfig::standard()
            .with_max_attempts(1)
            .with_retry_mode(RetryMode::Standard);

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .retry_config(retry_config.clone())
            .load()
            .await;

        // S3-compatible providers need a custom endpoint and path-style addressing
        let client = if let Some(ref endpoint) = endpoint_url {
            let mut s3_config_builder = aws_sdk_s3::Config::builder()
                .endpoint_url(endpoint)
                .region(config.region().cloned())
                .retry_config(retry_config);
            if let Some(provider) = config.credentials_provider().into_iter().next() {
                s3_config_builder = s3_config_builder.credentials_provider(provider);
            }
            s3_config_builder = s3_config_builder.force_path_style(true);

            Client::from_conf(s3_config_builder.build())
        } else {
            Client::new(&config)
        };

        Ok(S3RemoteStore {
            client,
            bucket,
            region,
            endpoint_url,
        })
    }

    /// Generate the public URL for an object key.
    ///
    /// For AWS S3, the standard virtual-hosted format:
    /// `https://{bucket}.s3.{region}.amazonaws.com/{key}`.
    /// For S3-compatible providers, path-style from the endpoint:
    /// `{endpoint}/{bucket}/{key}`.
    fn generate_url(&self, key: &str) -> String {
        if let Some(ref endpoint) = self.endpoint_url {
            let base_url = endpoint.trim_end_matches('/');
            format!("{}/{}/{}", base_url, self.bucket, key)
        } else {
            format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.bucket, self.region, key
            )
        }
    }

    /// Split an SdkError into unavailable (never reached the service) vs
    /// rejected (the service answered with an error).
    fn classify_error<E: std::fmt::Debug>(err: SdkError<E>) -> StorageError {
        match &err {
            SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
                StorageError::Unavailable(format!("{:?}", err))
            }
            _ => StorageError::Rejected(format!("{:?}", err)),
        }
    }

    async fn put_body(
        &self,
        key: &str,
        content_type: &str,
        body: ByteStream,
        size_hint: Option<u64>,
    ) -> StorageResult<String> {
        let start = std::time::Instant::now();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body)
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    bucket = %self.bucket,
                    key = %key,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 upload failed"
                );
                Self::classify_error(e)
            })?;

        let url = self.generate_url(key);

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            size_bytes = size_hint,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(url)
    }
}

#[async_trait]
impl RemoteStore for S3RemoteStore {
    async fn put_file(
        &self,
        key: &str,
        content_type: &str,
        file: tokio::fs::File,
    ) -> StorageResult<String> {
        let size = file.metadata().await.ok().map(|m| m.len());
        let body = ByteStream::read_from()
            .file(file)
            .build()
            .await
            .map_err(|e| StorageError::Io(std::io::Error::other(e)))?;

        self.put_body(key, content_type, body, size).await
    }

    fn object_url(&self, key: &str) -> String {
        self.generate_url(key)
    }
}
