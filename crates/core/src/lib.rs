//! Pure core of the trydax benchmark.
//!
//! Nothing in this crate talks to the network: backends are reached through
//! the [`TableOps`] and [`ItemOps`] capability traits, which the binary
//! implements on top of the AWS SDK.

mod error;
pub mod executors;
mod options;
mod timing;
mod traits;
pub mod workload;

#[cfg(test)]
mod testing;

pub use error::{ClientError, ConfigError, Error, OperationError, Result};
pub use executors::{dispatch, ExecutionReport};
pub use options::{
    parse_endpoint_list, validate, Capability, Command, RawOptions, Service, Settings,
    COMMAND_CHOICES, SERVICE_CHOICES,
};
pub use timing::{measure, Timing};
pub use traits::{ClientFactory, ItemOps, OperationResult, Response, TableOps};
