//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `OperationError` from `trydax_core`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::operation::delete_table::DeleteTableError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use trydax_core::OperationError;

const TABLE_NOT_FOUND: &str = "Table not found";
const THROUGHPUT_EXCEEDED: &str = "Throughput exceeded";
const REQUEST_LIMIT_EXCEEDED: &str = "Request limit exceeded";
const INTERNAL_SERVER_ERROR: &str = "DynamoDB internal server error";

/// Map a CreateTable SDK error to OperationError.
pub fn map_create_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<CreateTableError, R>,
) -> OperationError {
    const OP: &str = "CreateTable";
    match err.into_service_error() {
        CreateTableError::ResourceInUseException(_) => {
            OperationError::remote(OP, "Table already exists")
        }
        CreateTableError::LimitExceededException(_) => {
            OperationError::remote(OP, "Too many table operations in progress")
        }
        CreateTableError::InternalServerError(_) => {
            OperationError::remote(OP, INTERNAL_SERVER_ERROR)
        }
        err => OperationError::remote(OP, DisplayErrorContext(&err).to_string()),
    }
}

/// Map a DeleteTable SDK error to OperationError.
pub fn map_delete_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteTableError, R>,
) -> OperationError {
    const OP: &str = "DeleteTable";
    match err.into_service_error() {
        DeleteTableError::ResourceNotFoundException(_) => {
            OperationError::remote(OP, TABLE_NOT_FOUND)
        }
        DeleteTableError::ResourceInUseException(_) => {
            OperationError::remote(OP, "Table is being created or updated")
        }
        DeleteTableError::LimitExceededException(_) => {
            OperationError::remote(OP, "Too many table operations in progress")
        }
        DeleteTableError::InternalServerError(_) => {
            OperationError::remote(OP, INTERNAL_SERVER_ERROR)
        }
        err => OperationError::remote(OP, DisplayErrorContext(&err).to_string()),
    }
}

/// Map a PutItem SDK error to OperationError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> OperationError {
    const OP: &str = "PutItem";
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => OperationError::remote(OP, TABLE_NOT_FOUND),
        PutItemError::ProvisionedThroughputExceededException(_) => {
            OperationError::remote(OP, THROUGHPUT_EXCEEDED)
        }
        PutItemError::RequestLimitExceeded(_) => OperationError::remote(OP, REQUEST_LIMIT_EXCEEDED),
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            OperationError::remote(OP, "Item collection size limit exceeded")
        }
        PutItemError::TransactionConflictException(_) => {
            OperationError::remote(OP, "Transaction conflict")
        }
        PutItemError::InternalServerError(_) => OperationError::remote(OP, INTERNAL_SERVER_ERROR),
        err => OperationError::remote(OP, DisplayErrorContext(&err).to_string()),
    }
}

/// Map a GetItem SDK error to OperationError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> OperationError {
    const OP: &str = "GetItem";
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => OperationError::remote(OP, TABLE_NOT_FOUND),
        GetItemError::ProvisionedThroughputExceededException(_) => {
            OperationError::remote(OP, THROUGHPUT_EXCEEDED)
        }
        GetItemError::RequestLimitExceeded(_) => OperationError::remote(OP, REQUEST_LIMIT_EXCEEDED),
        GetItemError::InternalServerError(_) => OperationError::remote(OP, INTERNAL_SERVER_ERROR),
        err => OperationError::remote(OP, DisplayErrorContext(&err).to_string()),
    }
}

/// Map a Query SDK error to OperationError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> OperationError {
    const OP: &str = "Query";
    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => OperationError::remote(OP, TABLE_NOT_FOUND),
        QueryError::ProvisionedThroughputExceededException(_) => {
            OperationError::remote(OP, THROUGHPUT_EXCEEDED)
        }
        QueryError::RequestLimitExceeded(_) => OperationError::remote(OP, REQUEST_LIMIT_EXCEEDED),
        QueryError::InternalServerError(_) => OperationError::remote(OP, INTERNAL_SERVER_ERROR),
        err => OperationError::remote(OP, DisplayErrorContext(&err).to_string()),
    }
}

/// Map a Scan SDK error to OperationError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> OperationError {
    const OP: &str = "Scan";
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => OperationError::remote(OP, TABLE_NOT_FOUND),
        ScanError::ProvisionedThroughputExceededException(_) => {
            OperationError::remote(OP, THROUGHPUT_EXCEEDED)
        }
        ScanError::RequestLimitExceeded(_) => OperationError::remote(OP, REQUEST_LIMIT_EXCEEDED),
        ScanError::InternalServerError(_) => OperationError::remote(OP, INTERNAL_SERVER_ERROR),
        err => OperationError::remote(OP, DisplayErrorContext(&err).to_string()),
    }
}
