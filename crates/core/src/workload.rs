//! The fixed benchmark workload (Functional Core - pure data).
//!
//! Every request the tool issues is derived from the constants below, so two
//! runs against the same backend always perform the same work.

use std::ops::RangeInclusive;

/// Name of the benchmark table.
pub const TABLE_NAME: &str = "TryDaxTable";
pub const KEY_PREFIX: &str = "key";
pub const VALUE_PREFIX: &str = "val";
/// Number of distinct partition keys.
pub const PK_MAX: u32 = 10;
/// Number of sort keys per partition.
pub const SK_MAX: u32 = 10;
/// Repetitions of every timed read workload.
pub const ITERATIONS: u32 = 25;

pub const QUERY_PARTITION: u32 = 5;
pub const QUERY_SORT_RANGE: RangeInclusive<u32> = 2..=9;

pub const PARTITION_KEY_ATTRIBUTE: &str = "pk";
pub const SORT_KEY_ATTRIBUTE: &str = "sk";
pub const VALUE_ATTRIBUTE: &str = "value";

/// Primary key of one item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub pk: String,
    pub sk: u32,
}

impl ItemKey {
    /// Key of grid cell `(i, j)`.
    pub fn for_cell(i: u32, j: u32) -> Self {
        Self {
            pk: partition_key(i),
            sk: j,
        }
    }
}

/// A benchmark record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub key: ItemKey,
    pub value: String,
}

impl Item {
    /// Item stored in grid cell `(i, j)`.
    pub fn for_cell(i: u32, j: u32) -> Self {
        Self {
            key: ItemKey::for_cell(i, j),
            value: format!("{VALUE_PREFIX}_{i}_{j}"),
        }
    }
}

/// Pattern: `key_<i>`
pub fn partition_key(i: u32) -> String {
    format!("{KEY_PREFIX}_{i}")
}

/// Every grid cell in row-major order.
pub fn grid() -> impl Iterator<Item = (u32, u32)> {
    (0..PK_MAX).flat_map(|i| (0..SK_MAX).map(move |j| (i, j)))
}

/// A range read within one partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRangeQuery {
    pub partition_key: String,
    pub sort_keys: RangeInclusive<u32>,
}

impl KeyRangeQuery {
    pub const PARTITION_PLACEHOLDER: &'static str = ":pkval";
    pub const LOWER_PLACEHOLDER: &'static str = ":skval1";
    pub const UPPER_PLACEHOLDER: &'static str = ":skval2";

    /// Key condition expression using the placeholders above.
    pub fn key_condition_expression(&self) -> String {
        format!(
            "{PARTITION_KEY_ATTRIBUTE} = {} and {SORT_KEY_ATTRIBUTE} between {} and {}",
            Self::PARTITION_PLACEHOLDER,
            Self::LOWER_PLACEHOLDER,
            Self::UPPER_PLACEHOLDER
        )
    }
}

/// The query repeated by the `query` command.
pub fn benchmark_query() -> KeyRangeQuery {
    KeyRangeQuery {
        partition_key: partition_key(QUERY_PARTITION),
        sort_keys: QUERY_SORT_RANGE,
    }
}

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: KeyAttribute,
    pub throughput: ProvisionedThroughput,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// Scalar attribute types used by the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
    Number,
}

/// Provisioned capacity units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvisionedThroughput {
    pub read_capacity_units: i64,
    pub write_capacity_units: i64,
}

/// Returns the canonical benchmark table schema.
pub fn benchmark_table_spec() -> TableSpec {
    TableSpec {
        table_name: TABLE_NAME.to_string(),
        partition_key: KeyAttribute {
            name: PARTITION_KEY_ATTRIBUTE.to_string(),
            attribute_type: AttributeType::String,
        },
        sort_key: KeyAttribute {
            name: SORT_KEY_ATTRIBUTE.to_string(),
            attribute_type: AttributeType::Number,
        },
        throughput: ProvisionedThroughput {
            read_capacity_units: 100,
            write_capacity_units: 100,
        },
    }
}
