//! AWS connection configuration (Imperative Shell).

use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Region used when neither the flag nor the environment provides one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// AWS client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsConfig {
    /// AWS region.
    pub region: String,
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
}

impl AwsConfig {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            endpoint_url: None,
        }
    }

    /// Resolves the region and reads `AWS_ENDPOINT_URL`.
    ///
    /// An explicit region wins. Otherwise the default provider chain is
    /// asked (environment, profile, then EC2 instance metadata), falling
    /// back to [`DEFAULT_REGION`].
    pub async fn resolve(explicit_region: Option<&str>) -> Self {
        let explicit = explicit_region.map(|region| Region::new(region.to_string()));
        let chain = RegionProviderChain::first_try(explicit)
            .or_default_provider()
            .or_else(Region::new(DEFAULT_REGION));

        let region = chain
            .region()
            .await
            .map(|region| region.as_ref().to_string())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let mut config = Self::new(region);
        config.endpoint_url = std::env::var("AWS_ENDPOINT_URL").ok();
        config
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }

    /// Loads the SDK configuration, optionally routing requests to `endpoint`
    /// instead of the configured endpoint.
    pub async fn load(&self, endpoint: Option<&str>) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()));

        if let Some(url) = endpoint.or(self.endpoint_url.as_deref()) {
            loader = loader.endpoint_url(url);
        }

        loader.load().await
    }
}
