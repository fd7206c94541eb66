//! In-memory backend that records every call, for executor tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{ClientError, OperationError};
use crate::options::{Command, Service, Settings};
use crate::traits::{ClientFactory, ItemOps, OperationResult, Response, TableOps};
use crate::workload::{Item, ItemKey, KeyRangeQuery, TableSpec};

impl Settings {
    /// Settings for the direct backend with auto-detected region.
    pub fn direct(command: Command) -> Self {
        Self {
            service: Service::Direct,
            command,
            region: None,
            endpoints: Vec::new(),
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateTable(TableSpec),
    DeleteTable(String),
    PutItem(String, Item),
    GetItem(String, ItemKey),
    Query(String, KeyRangeQuery),
    Scan(String),
}

impl Call {
    fn operation(&self) -> &'static str {
        match self {
            Call::CreateTable(_) => "CreateTable",
            Call::DeleteTable(_) => "DeleteTable",
            Call::PutItem(..) => "PutItem",
            Call::GetItem(..) => "GetItem",
            Call::Query(..) => "Query",
            Call::Scan(_) => "Scan",
        }
    }
}

/// Records calls and optionally fails the n-th one (1-based).
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    calls: Arc<Mutex<Vec<Call>>>,
    fail_on: Option<usize>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(call_number: usize) -> Self {
        Self {
            calls: Arc::default(),
            fail_on: Some(call_number),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: Call) -> OperationResult<Response> {
        let mut calls = self.calls.lock().unwrap();
        let operation = call.operation();
        let response = Response::new(format!("{call:?}"));
        calls.push(call);
        if Some(calls.len()) == self.fail_on {
            return Err(OperationError::remote(
                operation,
                format!("injected failure on call {}", calls.len()),
            ));
        }
        Ok(response)
    }
}

#[async_trait]
impl TableOps for RecordingBackend {
    async fn create_table(&self, spec: &TableSpec) -> OperationResult<Response> {
        self.record(Call::CreateTable(spec.clone()))
    }

    async fn delete_table(&self, table_name: &str) -> OperationResult<Response> {
        self.record(Call::DeleteTable(table_name.to_string()))
    }
}

#[async_trait]
impl ItemOps for RecordingBackend {
    async fn put_item(&self, table_name: &str, item: &Item) -> OperationResult<Response> {
        self.record(Call::PutItem(table_name.to_string(), item.clone()))
    }

    async fn get_item(&self, table_name: &str, key: &ItemKey) -> OperationResult<Response> {
        self.record(Call::GetItem(table_name.to_string(), key.clone()))
    }

    async fn query(&self, table_name: &str, query: &KeyRangeQuery) -> OperationResult<Response> {
        self.record(Call::Query(table_name.to_string(), query.clone()))
    }

    async fn scan(&self, table_name: &str) -> OperationResult<Response> {
        self.record(Call::Scan(table_name.to_string()))
    }
}

/// Hands out clients sharing one [`RecordingBackend`], refusing table
/// clients for backends without that capability.
pub struct RecordingFactory {
    pub service: Service,
    pub backend: RecordingBackend,
}

#[async_trait]
impl ClientFactory for RecordingFactory {
    async fn table_client(&self) -> Result<Box<dyn TableOps>, ClientError> {
        if !self.service.supports_table_operations() {
            return Err(ClientError::TableOperationsUnsupported(self.service));
        }
        Ok(Box::new(self.backend.clone()))
    }

    async fn item_client(&self) -> Result<Box<dyn ItemOps>, ClientError> {
        Ok(Box::new(self.backend.clone()))
    }
}
