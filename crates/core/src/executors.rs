//! One executor per command, plus the dispatch table that picks between them.
//!
//! Executors issue their requests strictly one after another and stop at the
//! first failure; nothing is retried and no partial progress is reported.

use std::io::Write;

use crate::error::{OperationError, Result};
use crate::options::{Command, Settings};
use crate::timing::{self, Timing};
use crate::traits::{ClientFactory, ItemOps, Response, TableOps};
use crate::workload::{self, Item, ItemKey, ITERATIONS, TABLE_NAME};

/// What an executor did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionReport {
    pub command: Command,
    /// Number of backend calls issued.
    pub calls: usize,
    /// Present for timed commands.
    pub timing: Option<Timing>,
}

type ExecResult = std::result::Result<ExecutionReport, OperationError>;

fn emit<W: Write>(out: &mut W, settings: &Settings, response: &Response) -> std::io::Result<()> {
    if settings.verbose {
        writeln!(out, "{response}")?;
    }
    Ok(())
}

fn timed_report<W: Write>(
    out: &mut W,
    command: Command,
    calls: usize,
    timing: Timing,
) -> ExecResult {
    writeln!(out, "{timing}")?;
    Ok(ExecutionReport {
        command,
        calls,
        timing: Some(timing),
    })
}

pub async fn create_table<C, W>(client: &C, settings: &Settings, out: &mut W) -> ExecResult
where
    C: TableOps + ?Sized,
    W: Write,
{
    let response = client
        .create_table(&workload::benchmark_table_spec())
        .await?;
    emit(out, settings, &response)?;
    Ok(ExecutionReport {
        command: Command::CreateTable,
        calls: 1,
        timing: None,
    })
}

pub async fn delete_table<C, W>(client: &C, settings: &Settings, out: &mut W) -> ExecResult
where
    C: TableOps + ?Sized,
    W: Write,
{
    let response = client.delete_table(TABLE_NAME).await?;
    emit(out, settings, &response)?;
    Ok(ExecutionReport {
        command: Command::DeleteTable,
        calls: 1,
        timing: None,
    })
}

/// Writes one item per grid cell.
pub async fn put_items<C, W>(client: &C, settings: &Settings, out: &mut W) -> ExecResult
where
    C: ItemOps + ?Sized,
    W: Write,
{
    let mut calls = 0;
    for (i, j) in workload::grid() {
        let response = client.put_item(TABLE_NAME, &Item::for_cell(i, j)).await?;
        calls += 1;
        emit(out, settings, &response)?;
    }
    Ok(ExecutionReport {
        command: Command::PutItem,
        calls,
        timing: None,
    })
}

/// Reads every grid cell, [`ITERATIONS`] times over.
pub async fn get_items<C, W>(client: &C, settings: &Settings, out: &mut W) -> ExecResult
where
    C: ItemOps + ?Sized,
    W: Write,
{
    let (calls, timing) = timing::measure(ITERATIONS, async {
        let mut calls = 0;
        for _ in 0..ITERATIONS {
            for (i, j) in workload::grid() {
                let response = client.get_item(TABLE_NAME, &ItemKey::for_cell(i, j)).await?;
                calls += 1;
                emit(out, settings, &response)?;
            }
        }
        Ok::<_, OperationError>(calls)
    })
    .await?;
    timed_report(out, Command::GetItem, calls, timing)
}

pub async fn query<C, W>(client: &C, settings: &Settings, out: &mut W) -> ExecResult
where
    C: ItemOps + ?Sized,
    W: Write,
{
    let key_range = workload::benchmark_query();
    let (calls, timing) = timing::measure(ITERATIONS, async {
        let mut calls = 0;
        for _ in 0..ITERATIONS {
            let response = client.query(TABLE_NAME, &key_range).await?;
            calls += 1;
            emit(out, settings, &response)?;
        }
        Ok::<_, OperationError>(calls)
    })
    .await?;
    timed_report(out, Command::Query, calls, timing)
}

pub async fn scan<C, W>(client: &C, settings: &Settings, out: &mut W) -> ExecResult
where
    C: ItemOps + ?Sized,
    W: Write,
{
    let (calls, timing) = timing::measure(ITERATIONS, async {
        let mut calls = 0;
        for _ in 0..ITERATIONS {
            let response = client.scan(TABLE_NAME).await?;
            calls += 1;
            emit(out, settings, &response)?;
        }
        Ok::<_, OperationError>(calls)
    })
    .await?;
    timed_report(out, Command::Scan, calls, timing)
}

/// Builds the client the command needs and runs its executor.
pub async fn dispatch<F, W>(
    factory: &F,
    settings: &Settings,
    out: &mut W,
) -> Result<ExecutionReport>
where
    F: ClientFactory + ?Sized,
    W: Write,
{
    let report = match settings.command {
        Command::CreateTable => {
            let client = factory.table_client().await?;
            create_table(client.as_ref(), settings, out).await?
        }
        Command::DeleteTable => {
            let client = factory.table_client().await?;
            delete_table(client.as_ref(), settings, out).await?
        }
        Command::PutItem => {
            let client = factory.item_client().await?;
            put_items(client.as_ref(), settings, out).await?
        }
        Command::GetItem => {
            let client = factory.item_client().await?;
            get_items(client.as_ref(), settings, out).await?
        }
        Command::Query => {
            let client = factory.item_client().await?;
            query(client.as_ref(), settings, out).await?
        }
        Command::Scan => {
            let client = factory.item_client().await?;
            scan(client.as_ref(), settings, out).await?
        }
    };
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ClientError, Error};
    use crate::options::Service;
    use crate::testing::{Call, RecordingBackend, RecordingFactory};
    use crate::workload::{AttributeType, KeyRangeQuery};

    fn output(buffer: Vec<u8>) -> String {
        String::from_utf8(buffer).unwrap()
    }

    #[tokio::test]
    async fn test_put_items_writes_full_grid() {
        let backend = RecordingBackend::new();
        let mut out = Vec::new();

        let report = put_items(&backend, &Settings::direct(Command::PutItem), &mut out)
            .await
            .unwrap();

        assert_eq!(report.calls, 100);
        assert_eq!(report.timing, None);
        let calls = backend.calls();
        assert_eq!(calls.len(), 100);
        for (n, call) in calls.iter().enumerate() {
            let (i, j) = (n / 10, n % 10);
            let Call::PutItem(table, item) = call else {
                panic!("unexpected call {call:?}");
            };
            assert_eq!(table, TABLE_NAME);
            assert_eq!(item.key.pk, format!("key_{i}"));
            assert_eq!(item.key.sk, j as u32);
            assert_eq!(item.value, format!("val_{i}_{j}"));
        }
        assert!(out.is_empty(), "non-verbose put prints nothing");
    }

    #[tokio::test]
    async fn test_put_items_aborts_on_first_failure() {
        let backend = RecordingBackend::failing_on(37);
        let mut out = Vec::new();

        let err = put_items(&backend, &Settings::direct(Command::PutItem), &mut out)
            .await
            .unwrap_err();

        assert_eq!(backend.call_count(), 37);
        assert_eq!(
            err.to_string(),
            "PutItem failed: injected failure on call 37"
        );
    }

    #[tokio::test]
    async fn test_get_items_reads_grid_each_iteration() {
        let backend = RecordingBackend::new();
        let mut out = Vec::new();

        let report = get_items(&backend, &Settings::direct(Command::GetItem), &mut out)
            .await
            .unwrap();

        assert_eq!(report.calls, 2500);
        assert_eq!(backend.call_count(), 2500);
        let timing = report.timing.unwrap();
        assert_eq!(timing.iterations, 25);
        assert_eq!(timing.average, timing.total / 25);

        let calls = backend.calls();
        assert_eq!(
            calls[0],
            Call::GetItem(TABLE_NAME.to_string(), ItemKey::for_cell(0, 0))
        );
        assert_eq!(
            calls[100],
            Call::GetItem(TABLE_NAME.to_string(), ItemKey::for_cell(0, 0))
        );
        assert_eq!(
            calls[2499],
            Call::GetItem(TABLE_NAME.to_string(), ItemKey::for_cell(9, 9))
        );

        let printed = output(out);
        assert_eq!(printed.lines().count(), 1);
        assert!(printed.starts_with("Total Time: "));
        assert!(printed.contains(", Avg Time: "));
    }

    #[tokio::test]
    async fn test_get_items_failure_prints_no_timing() {
        let backend = RecordingBackend::failing_on(150);
        let mut out = Vec::new();

        let result = get_items(&backend, &Settings::direct(Command::GetItem), &mut out).await;

        assert!(result.is_err());
        assert_eq!(backend.call_count(), 150);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_query_repeats_range_query() {
        let backend = RecordingBackend::new();
        let mut out = Vec::new();

        let report = query(&backend, &Settings::direct(Command::Query), &mut out)
            .await
            .unwrap();

        assert_eq!(report.calls, 25);
        let expected = KeyRangeQuery {
            partition_key: "key_5".to_string(),
            sort_keys: 2..=9,
        };
        let calls = backend.calls();
        assert_eq!(calls.len(), 25);
        assert!(calls
            .iter()
            .all(|call| *call == Call::Query(TABLE_NAME.to_string(), expected.clone())));
    }

    #[tokio::test]
    async fn test_scan_repeats_full_scan() {
        let backend = RecordingBackend::new();
        let mut out = Vec::new();

        let report = scan(&backend, &Settings::direct(Command::Scan), &mut out)
            .await
            .unwrap();

        assert_eq!(report.calls, 25);
        assert!(backend
            .calls()
            .iter()
            .all(|call| *call == Call::Scan(TABLE_NAME.to_string())));
    }

    #[tokio::test]
    async fn test_verbose_prints_every_response() {
        let backend = RecordingBackend::new();
        let settings = Settings::direct(Command::Scan).with_verbose(true);
        let mut out = Vec::new();

        scan(&backend, &settings, &mut out).await.unwrap();

        let printed = output(out);
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines.len(), 26);
        assert!(lines[..25].iter().all(|line| line.starts_with("Scan(")));
        assert!(lines[25].starts_with("Total Time: "));
    }

    #[tokio::test]
    async fn test_create_table_uses_fixed_schema() {
        let backend = RecordingBackend::new();
        let mut out = Vec::new();

        let report = create_table(&backend, &Settings::direct(Command::CreateTable), &mut out)
            .await
            .unwrap();

        assert_eq!(report.calls, 1);
        let calls = backend.calls();
        let [Call::CreateTable(spec)] = calls.as_slice() else {
            panic!("unexpected calls {calls:?}");
        };
        assert_eq!(spec.table_name, TABLE_NAME);
        assert_eq!(spec.partition_key.name, "pk");
        assert_eq!(spec.partition_key.attribute_type, AttributeType::String);
        assert_eq!(spec.sort_key.name, "sk");
        assert_eq!(spec.sort_key.attribute_type, AttributeType::Number);
        assert_eq!(spec.throughput.read_capacity_units, 100);
        assert_eq!(spec.throughput.write_capacity_units, 100);
    }

    #[tokio::test]
    async fn test_delete_table_issues_single_request() {
        let backend = RecordingBackend::new();
        let settings = Settings::direct(Command::DeleteTable).with_verbose(true);
        let mut out = Vec::new();

        delete_table(&backend, &settings, &mut out).await.unwrap();

        assert_eq!(
            backend.calls(),
            vec![Call::DeleteTable(TABLE_NAME.to_string())]
        );
        assert_eq!(output(out).lines().count(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_reaches_matching_executor() {
        for command in Command::ALL {
            let factory = RecordingFactory {
                service: Service::Direct,
                backend: RecordingBackend::new(),
            };
            let mut out = Vec::new();

            let report = dispatch(&factory, &Settings::direct(command), &mut out)
                .await
                .unwrap();

            assert_eq!(report.command, command);
            assert_eq!(report.timing.is_some(), command.is_timed());
            let expected_calls = match command {
                Command::CreateTable | Command::DeleteTable => 1,
                Command::PutItem => 100,
                Command::GetItem => 2500,
                Command::Query | Command::Scan => 25,
            };
            assert_eq!(report.calls, expected_calls);
            assert_eq!(factory.backend.call_count(), expected_calls);
        }
    }

    #[tokio::test]
    async fn test_dispatch_refuses_table_client_from_cache() {
        let factory = RecordingFactory {
            service: Service::Cache,
            backend: RecordingBackend::new(),
        };
        let mut settings = Settings::direct(Command::CreateTable);
        settings.service = Service::Cache;
        let mut out = Vec::new();

        let err = dispatch(&factory, &settings, &mut out).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Client(ClientError::TableOperationsUnsupported(Service::Cache))
        ));
        assert_eq!(factory.backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_dispatch_surfaces_remote_failure() {
        let factory = RecordingFactory {
            service: Service::Cache,
            backend: RecordingBackend::failing_on(1),
        };
        let mut out = Vec::new();

        let err = dispatch(&factory, &Settings::direct(Command::Query), &mut out)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "failed to execute command: Query failed: injected failure on call 1"
        );
        assert_eq!(factory.backend.call_count(), 1);
    }
}
