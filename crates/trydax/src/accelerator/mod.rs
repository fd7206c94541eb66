//! Accelerator cache backend.
//!
//! The cluster answers the DynamoDB item API, so the backend is a DynamoDB
//! client routed to a discovered cluster node. It only offers the item
//! capability: there is no `TableOps` implementation here.
//!
//! Requests use the DynamoDB HTTP protocol. A node that only speaks the
//! native accelerator wire protocol rejects them at the transport level.

mod discovery;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use trydax_core::workload::{Item, ItemKey, KeyRangeQuery};
use trydax_core::{ClientError, ItemOps, OperationResult, Response};

use crate::config::AwsConfig;
use crate::dynamodb::DynamoDbBackend;

/// Client handle bound to one accelerator cluster.
#[derive(Debug, Clone)]
pub struct AcceleratorBackend {
    items: DynamoDbBackend,
    node_url: String,
}

impl AcceleratorBackend {
    /// Discovers a reachable node among `endpoints` and connects to it.
    ///
    /// The node URL takes precedence over any configured endpoint override.
    pub async fn connect(aws: &AwsConfig, endpoints: &[String]) -> Result<Self, ClientError> {
        let seed = discovery::discover(endpoints).await?;
        let node_url = seed.url();
        let sdk_config = aws.load(Some(&node_url)).await;

        tracing::warn!(
            node = %seed,
            "sending DynamoDB HTTP requests to the cluster node; nodes without HTTP API support will fail"
        );
        Ok(Self {
            items: DynamoDbBackend::new(Client::new(&sdk_config)),
            node_url,
        })
    }

    /// URL of the node requests are sent to.
    pub fn node_url(&self) -> &str {
        &self.node_url
    }
}

#[async_trait]
impl ItemOps for AcceleratorBackend {
    async fn put_item(&self, table_name: &str, item: &Item) -> OperationResult<Response> {
        self.items.put_item(table_name, item).await
    }

    async fn get_item(&self, table_name: &str, key: &ItemKey) -> OperationResult<Response> {
        self.items.get_item(table_name, key).await
    }

    async fn query(&self, table_name: &str, query: &KeyRangeQuery) -> OperationResult<Response> {
        self.items.query(table_name, query).await
    }

    async fn scan(&self, table_name: &str) -> OperationResult<Response> {
        self.items.scan(table_name).await
    }
}
