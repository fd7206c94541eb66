//! Invocation options and their validation (Functional Core - no I/O).
//!
//! The CLI hands over the flags as plain strings in [`RawOptions`];
//! [`validate`] turns them into [`Settings`], the only configuration value
//! the factory and the executors ever see.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Accepted service names, as shown in diagnostics.
pub const SERVICE_CHOICES: &str = "direct | cache";

/// Accepted command names, as shown in diagnostics.
pub const COMMAND_CHOICES: &str = "create-table | put-item | get-item | query | scan | delete-table";

/// Backend selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// The database service itself.
    Direct,
    /// The accelerator cache cluster in front of the database.
    Cache,
}

impl Service {
    pub const ALL: [Service; 2] = [Service::Direct, Service::Cache];

    pub fn name(self) -> &'static str {
        match self {
            Service::Direct => "direct",
            Service::Cache => "cache",
        }
    }

    /// Whether this backend can create and delete tables.
    pub fn supports_table_operations(self) -> bool {
        matches!(self, Service::Direct)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Service {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct" | "dynamodb" => Ok(Service::Direct),
            "cache" | "dax" => Ok(Service::Cache),
            other => Err(ConfigError::InvalidService(other.to_string())),
        }
    }
}

/// The capability a command needs from its client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Table,
    Item,
}

/// Supported commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    CreateTable,
    PutItem,
    GetItem,
    Query,
    Scan,
    DeleteTable,
}

impl Command {
    /// Every command, in the order they are listed to users.
    pub const ALL: [Command; 6] = [
        Command::CreateTable,
        Command::PutItem,
        Command::GetItem,
        Command::Query,
        Command::Scan,
        Command::DeleteTable,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::CreateTable => "create-table",
            Command::PutItem => "put-item",
            Command::GetItem => "get-item",
            Command::Query => "query",
            Command::Scan => "scan",
            Command::DeleteTable => "delete-table",
        }
    }

    pub fn capability(self) -> Capability {
        match self {
            Command::CreateTable | Command::DeleteTable => Capability::Table,
            Command::PutItem | Command::GetItem | Command::Query | Command::Scan => {
                Capability::Item
            }
        }
    }

    /// Whether the command is reported with a timing summary.
    pub fn is_timed(self) -> bool {
        matches!(self, Command::GetItem | Command::Query | Command::Scan)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| ConfigError::InvalidCommand(s.to_string()))
    }
}

/// Flags exactly as they were given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOptions {
    pub service: String,
    pub region: Option<String>,
    pub endpoint: String,
    pub command: String,
    pub verbose: bool,
}

/// A validated invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub service: Service,
    pub command: Command,
    /// Explicit region; `None` means auto-detect.
    pub region: Option<String>,
    /// Accelerator cluster endpoints, in the order given.
    pub endpoints: Vec<String>,
    /// Print every raw response.
    pub verbose: bool,
}

/// Splits a comma separated endpoint list, dropping blank entries.
pub fn parse_endpoint_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|endpoint| !endpoint.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validates raw flags. Rules are checked in order: service, command,
/// endpoint, then backend capability.
pub fn validate(raw: &RawOptions) -> Result<Settings, ConfigError> {
    let service: Service = raw.service.parse()?;
    let command: Command = raw.command.parse()?;
    let endpoints = parse_endpoint_list(&raw.endpoint);

    if service == Service::Cache {
        if endpoints.is_empty() {
            return Err(ConfigError::EndpointRequired(service));
        }
        if command.capability() == Capability::Table {
            return Err(ConfigError::UnsupportedCommand { service, command });
        }
    }

    let region = raw
        .region
        .as_deref()
        .map(str::trim)
        .filter(|region| !region.is_empty())
        .map(str::to_string);

    Ok(Settings {
        service,
        command,
        region,
        endpoints,
        verbose: raw.verbose,
    })
}
