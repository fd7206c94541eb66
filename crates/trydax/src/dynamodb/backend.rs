//! DynamoDB backend.
//!
//! Implements both capability traits from `trydax_core` with `aws-sdk-dynamodb`.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use trydax_core::workload::{Item, ItemKey, KeyRangeQuery, TableSpec};
use trydax_core::{ItemOps, OperationResult, Response, TableOps};

use super::conversions::{
    attribute_definitions, item_to_attributes, key_schema, key_to_attributes,
    provisioned_throughput, query_values,
};
use super::error::{
    map_create_table_error, map_delete_table_error, map_get_item_error, map_put_item_error,
    map_query_error, map_scan_error,
};

/// Client handle bound to one DynamoDB endpoint.
#[derive(Debug, Clone)]
pub struct DynamoDbBackend {
    client: Client,
}

impl DynamoDbBackend {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TableOps for DynamoDbBackend {
    async fn create_table(&self, spec: &TableSpec) -> OperationResult<Response> {
        let output = self
            .client
            .create_table()
            .table_name(&spec.table_name)
            .set_key_schema(Some(key_schema(spec)?))
            .set_attribute_definitions(Some(attribute_definitions(spec)?))
            .provisioned_throughput(provisioned_throughput(spec)?)
            .send()
            .await
            .map_err(map_create_table_error)?;

        tracing::info!(table = %spec.table_name, "table creation acknowledged");
        Ok(Response::from_debug(&output))
    }

    async fn delete_table(&self, table_name: &str) -> OperationResult<Response> {
        let output = self
            .client
            .delete_table()
            .table_name(table_name)
            .send()
            .await
            .map_err(map_delete_table_error)?;

        tracing::info!(table = table_name, "table deletion acknowledged");
        Ok(Response::from_debug(&output))
    }
}

#[async_trait]
impl ItemOps for DynamoDbBackend {
    async fn put_item(&self, table_name: &str, item: &Item) -> OperationResult<Response> {
        let output = self
            .client
            .put_item()
            .table_name(table_name)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        tracing::trace!(pk = %item.key.pk, sk = item.key.sk, "put item");
        Ok(Response::from_debug(&output))
    }

    async fn get_item(&self, table_name: &str, key: &ItemKey) -> OperationResult<Response> {
        let output = self
            .client
            .get_item()
            .table_name(table_name)
            .set_key(Some(key_to_attributes(key)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        tracing::trace!(pk = %key.pk, sk = key.sk, found = output.item.is_some(), "get item");
        Ok(Response::from_debug(&output))
    }

    async fn query(&self, table_name: &str, query: &KeyRangeQuery) -> OperationResult<Response> {
        let output = self
            .client
            .query()
            .table_name(table_name)
            .key_condition_expression(query.key_condition_expression())
            .set_expression_attribute_values(Some(query_values(query)))
            .send()
            .await
            .map_err(map_query_error)?;

        tracing::trace!(pk = %query.partition_key, count = output.count, "query");
        Ok(Response::from_debug(&output))
    }

    async fn scan(&self, table_name: &str) -> OperationResult<Response> {
        let output = self
            .client
            .scan()
            .table_name(table_name)
            .send()
            .await
            .map_err(map_scan_error)?;

        tracing::trace!(count = output.count, "scan");
        Ok(Response::from_debug(&output))
    }
}
