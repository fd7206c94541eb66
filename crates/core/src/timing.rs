//! Wall-clock measurement of repeated workloads.

use std::fmt;
use std::future::Future;
use std::time::{Duration, Instant};

/// Total and per-iteration duration of a timed workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub total: Duration,
    pub average: Duration,
    pub iterations: u32,
}

impl Timing {
    /// Pure: derives the average from a measured total.
    pub fn from_elapsed(total: Duration, iterations: u32) -> Self {
        let average = if iterations == 0 {
            Duration::ZERO
        } else {
            total / iterations
        };
        Self {
            total,
            average,
            iterations,
        }
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total Time: {:?}, Avg Time: {:?}", self.total, self.average)
    }
}

/// Runs `workload` and measures it as `iterations` repetitions.
///
/// An error from the workload is returned as is and no timing is produced.
pub async fn measure<T, E, F>(iterations: u32, workload: F) -> Result<(T, Timing), E>
where
    F: Future<Output = Result<T, E>>,
{
    let start = Instant::now();
    let value = workload.await?;
    Ok((value, Timing::from_elapsed(start.elapsed(), iterations)))
}
