//! DynamoDB backend implementation.
//!
//! Provides the table and item capabilities on top of `aws-sdk-dynamodb`.
//! The accelerator backend reuses the item half against a cluster endpoint.

mod backend;
mod conversions;
mod error;

pub use backend::DynamoDbBackend;
