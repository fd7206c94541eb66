//! trydax - exercise basic DynamoDB operations directly or through an
//! accelerator cluster, and time the read workloads.

mod accelerator;
mod config;
mod dynamodb;
mod factory;
mod prelude;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trydax_core::{ExecutionReport, RawOptions};

use crate::factory::AwsClientFactory;
use crate::prelude::*;

/// Benchmark create-table, put-item, get-item, query, scan and delete-table
/// against DynamoDB or a DAX cluster.
#[derive(Debug, Parser)]
#[command(name = "trydax")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Backend to use: direct | cache (cache nodes must accept the DynamoDB HTTP API)
    #[arg(long, default_value = "direct", env = "TRYDAX_SERVICE")]
    service: String,

    /// AWS region (detected from the environment or instance metadata when omitted)
    #[arg(long, env = "AWS_REGION")]
    region: Option<String>,

    /// Accelerator cluster endpoint(s), comma separated; required for the cache service
    #[arg(long, env = "TRYDAX_ENDPOINT")]
    endpoint: Option<String>,

    /// Command to run: create-table | put-item | get-item | query | scan | delete-table
    #[arg(long)]
    command: Option<String>,

    /// Print every raw response
    #[arg(long)]
    verbose: bool,
}

impl From<Cli> for RawOptions {
    fn from(cli: Cli) -> Self {
        Self {
            service: cli.service,
            region: cli.region,
            endpoint: cli.endpoint.unwrap_or_default(),
            command: cli.command.unwrap_or_default(),
            verbose: cli.verbose,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries responses and timings only.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trydax=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli.into()).await {
        Ok(report) => {
            tracing::info!(command = %report.command, calls = report.calls, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            aeprintln!("{}", p_r(&err.to_string()));
            ExitCode::FAILURE
        }
    }
}

async fn run(raw: RawOptions) -> trydax_core::Result<ExecutionReport> {
    let settings = trydax_core::validate(&raw)?;
    tracing::debug!(?settings, "validated options");

    let factory = AwsClientFactory::from_settings(&settings).await;
    let mut stdout = std::io::stdout().lock();
    trydax_core::dispatch(&factory, &settings, &mut stdout).await
}
