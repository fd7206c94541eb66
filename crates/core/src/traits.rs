use std::fmt;

use async_trait::async_trait;

use crate::error::{ClientError, OperationError};
use crate::workload::{Item, ItemKey, KeyRangeQuery, TableSpec};

/// Result of a single backend call.
pub type OperationResult<T> = std::result::Result<T, OperationError>;

/// Raw, human-readable rendering of one backend response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response(String);

impl Response {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Renders a response with its `Debug` representation.
    pub fn from_debug(output: &impl fmt::Debug) -> Self {
        Self(format!("{output:?}"))
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Table management capability.
#[async_trait]
pub trait TableOps: Send + Sync {
    /// Issues a table creation request. Returns once the request is
    /// acknowledged, not once the table is active.
    async fn create_table(&self, spec: &TableSpec) -> OperationResult<Response>;

    /// Issues a table deletion request.
    async fn delete_table(&self, table_name: &str) -> OperationResult<Response>;
}

/// Item read/write capability.
#[async_trait]
pub trait ItemOps: Send + Sync {
    async fn put_item(&self, table_name: &str, item: &Item) -> OperationResult<Response>;

    async fn get_item(&self, table_name: &str, key: &ItemKey) -> OperationResult<Response>;

    async fn query(&self, table_name: &str, query: &KeyRangeQuery) -> OperationResult<Response>;

    async fn scan(&self, table_name: &str) -> OperationResult<Response>;
}

/// Builds client handles for the selected backend.
#[async_trait]
pub trait ClientFactory: Send + Sync {
    /// Returns a table-capable client, or fails if the backend has none.
    async fn table_client(&self) -> Result<Box<dyn TableOps>, ClientError>;

    /// Returns an item-capable client.
    async fn item_client(&self) -> Result<Box<dyn ItemOps>, ClientError>;
}
