//! Conversions from workload descriptors to DynamoDB request parts.
//!
//! Pure functions, testable without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, KeySchemaElement, KeyType, ProvisionedThroughput,
    ScalarAttributeType,
};
use trydax_core::workload::{
    AttributeType, Item, ItemKey, KeyAttribute, KeyRangeQuery, TableSpec,
    PARTITION_KEY_ATTRIBUTE, SORT_KEY_ATTRIBUTE, VALUE_ATTRIBUTE,
};
use trydax_core::{OperationError, OperationResult};

/// Convert a key to its DynamoDB attribute map.
pub fn key_to_attributes(key: &ItemKey) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            PARTITION_KEY_ATTRIBUTE.to_string(),
            AttributeValue::S(key.pk.clone()),
        ),
        (
            SORT_KEY_ATTRIBUTE.to_string(),
            AttributeValue::N(key.sk.to_string()),
        ),
    ])
}

/// Convert an item to a DynamoDB item.
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    let mut attributes = key_to_attributes(&item.key);
    attributes.insert(
        VALUE_ATTRIBUTE.to_string(),
        AttributeValue::S(item.value.clone()),
    );
    attributes
}

/// Expression attribute values bound by the query's key condition.
pub fn query_values(query: &KeyRangeQuery) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            KeyRangeQuery::PARTITION_PLACEHOLDER.to_string(),
            AttributeValue::S(query.partition_key.clone()),
        ),
        (
            KeyRangeQuery::LOWER_PLACEHOLDER.to_string(),
            AttributeValue::N(query.sort_keys.start().to_string()),
        ),
        (
            KeyRangeQuery::UPPER_PLACEHOLDER.to_string(),
            AttributeValue::N(query.sort_keys.end().to_string()),
        ),
    ])
}

pub fn key_schema(spec: &TableSpec) -> OperationResult<Vec<KeySchemaElement>> {
    Ok(vec![
        key_schema_element(&spec.partition_key, KeyType::Hash)?,
        key_schema_element(&spec.sort_key, KeyType::Range)?,
    ])
}

pub fn attribute_definitions(spec: &TableSpec) -> OperationResult<Vec<AttributeDefinition>> {
    [&spec.partition_key, &spec.sort_key]
        .into_iter()
        .map(|key| {
            AttributeDefinition::builder()
                .attribute_name(&key.name)
                .attribute_type(to_scalar_type(key.attribute_type))
                .build()
                .map_err(invalid_request)
        })
        .collect()
}

pub fn provisioned_throughput(spec: &TableSpec) -> OperationResult<ProvisionedThroughput> {
    ProvisionedThroughput::builder()
        .read_capacity_units(spec.throughput.read_capacity_units)
        .write_capacity_units(spec.throughput.write_capacity_units)
        .build()
        .map_err(invalid_request)
}

fn key_schema_element(key: &KeyAttribute, key_type: KeyType) -> OperationResult<KeySchemaElement> {
    KeySchemaElement::builder()
        .attribute_name(&key.name)
        .key_type(key_type)
        .build()
        .map_err(invalid_request)
}

fn to_scalar_type(attribute_type: AttributeType) -> ScalarAttributeType {
    match attribute_type {
        AttributeType::String => ScalarAttributeType::S,
        AttributeType::Number => ScalarAttributeType::N,
    }
}

fn invalid_request(err: impl std::fmt::Display) -> OperationError {
    OperationError::InvalidRequest(err.to_string())
}
