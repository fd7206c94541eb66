use thiserror::Error;

use crate::options::{Command, Service, COMMAND_CHOICES, SERVICE_CHOICES};

/// Errors detected while validating the invocation, before any network call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("service should be one of [{choices}], got '{0}'", choices = SERVICE_CHOICES)]
    InvalidService(String),
    #[error("command should be one of [{choices}], got '{0}'", choices = COMMAND_CHOICES)]
    InvalidCommand(String),
    #[error("endpoint should be set for '{0}' service")]
    EndpointRequired(Service),
    #[error("command '{command}' is not supported by the '{service}' service, use service 'direct'")]
    UnsupportedCommand { service: Service, command: Command },
}

/// Errors that can occur while building a client handle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("table operations unsupported on the '{0}' backend, use service 'direct'")]
    TableOperationsUnsupported(Service),
    #[error("endpoint should be set for '{0}' service")]
    MissingEndpoint(Service),
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("Cluster discovery failed, no reachable node among [{0}]")]
    Discovery(String),
}

/// Errors returned while an executor is running.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("{operation} failed: {message}")]
    Remote {
        operation: &'static str,
        message: String,
    },
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl OperationError {
    /// Shorthand for a failure reported by the backend.
    pub fn remote(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Remote {
            operation,
            message: message.into(),
        }
    }
}

/// Top level error of one invocation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to initialize client: {0}")]
    Client(#[from] ClientError),
    #[error("failed to execute command: {0}")]
    Operation(#[from] OperationError),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;
