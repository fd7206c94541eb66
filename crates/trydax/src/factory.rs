//! Client factory: turns validated settings into backend handles.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use trydax_core::{ClientError, ClientFactory, ItemOps, Service, Settings, TableOps};

use crate::accelerator::AcceleratorBackend;
use crate::config::AwsConfig;
use crate::dynamodb::DynamoDbBackend;

/// Builds DynamoDB or accelerator clients for one invocation.
#[derive(Debug, Clone)]
pub struct AwsClientFactory {
    service: Service,
    aws: AwsConfig,
    endpoints: Vec<String>,
}

impl AwsClientFactory {
    pub fn new(service: Service, aws: AwsConfig, endpoints: Vec<String>) -> Self {
        Self {
            service,
            aws,
            endpoints,
        }
    }

    /// Resolves the AWS configuration for `settings`.
    pub async fn from_settings(settings: &Settings) -> Self {
        let aws = AwsConfig::resolve(settings.region.as_deref()).await;
        Self::new(settings.service, aws, settings.endpoints.clone())
    }

    async fn direct(&self) -> DynamoDbBackend {
        tracing::info!(target_env = %self.aws.target_display(), "connecting to DynamoDB");
        let sdk_config = self.aws.load(None).await;
        DynamoDbBackend::new(Client::new(&sdk_config))
    }

    async fn accelerator(&self) -> Result<AcceleratorBackend, ClientError> {
        let backend = AcceleratorBackend::connect(&self.aws, &self.endpoints).await?;
        tracing::info!(
            node = backend.node_url(),
            region = %self.aws.region,
            "connected to accelerator cluster"
        );
        Ok(backend)
    }
}

#[async_trait]
impl ClientFactory for AwsClientFactory {
    async fn table_client(&self) -> Result<Box<dyn TableOps>, ClientError> {
        match self.service {
            Service::Direct => Ok(Box::new(self.direct().await)),
            Service::Cache => Err(ClientError::TableOperationsUnsupported(self.service)),
        }
    }

    async fn item_client(&self) -> Result<Box<dyn ItemOps>, ClientError> {
        match self.service {
            Service::Direct => Ok(Box::new(self.direct().await)),
            Service::Cache => Ok(Box::new(self.accelerator().await?)),
        }
    }
}
