//! Sequential scenario execution.

use std::time::{Duration, Instant};

use caliper_scenarios::{Registry, ScenarioTags};
use thiserror::Error;
use tracing::info;

/// What to execute, derived from the external selection integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Every scenario from index 1 up, except those tagged out of the
    /// batch.
    DefaultBatch,
    /// Exactly one scenario, addressed by its table index.
    Single(usize),
}

impl Selection {
    /// Map the external integer: 0 means the batch, anything else one
    /// scenario.
    pub fn from_index(index: usize) -> Self {
        if index == 0 {
            Self::DefaultBatch
        } else {
            Self::Single(index)
        }
    }
}

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("scenario index {index} is out of range, the table holds indices 1..={max}")]
    IndexOutOfRange { index: usize, max: usize },
}

/// Wall-clock record of one executed scenario.
#[derive(Debug, Clone)]
pub struct ScenarioRun {
    pub index: usize,
    pub name: &'static str,
    pub elapsed: Duration,
}

/// Everything a run executed, in execution order.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub executed: Vec<ScenarioRun>,
}

impl RunSummary {
    pub fn indices(&self) -> Vec<usize> {
        self.executed.iter().map(|run| run.index).collect()
    }

    pub fn total_elapsed(&self) -> Duration {
        self.executed.iter().map(|run| run.elapsed).sum()
    }
}

/// Executes scenarios from a registry, one at a time, on the calling
/// thread.
///
/// Selection errors are reported before anything runs. A scenario that
/// panics takes the run down with it; that is deliberate, since a
/// failed in-scenario assertion means the suite itself is broken.
pub struct Runner {
    registry: Registry,
}

impl Runner {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn run(&self, selection: Selection) -> Result<RunSummary, HarnessError> {
        let mut summary = RunSummary::default();
        match selection {
            Selection::DefaultBatch => {
                for index in 1..self.registry.len() {
                    let descriptor = self.registry.get(index).expect("index bounded by len");
                    if descriptor
                        .tags
                        .contains(ScenarioTags::EXCLUDE_FROM_DEFAULT_BATCH)
                    {
                        continue;
                    }
                    summary.executed.push(self.execute(index));
                }
            }
            Selection::Single(index) => {
                if index == 0 || index >= self.registry.len() {
                    return Err(HarnessError::IndexOutOfRange {
                        index,
                        max: self.registry.len().saturating_sub(1),
                    });
                }
                summary.executed.push(self.execute(index));
            }
        }
        Ok(summary)
    }

    fn execute(&self, index: usize) -> ScenarioRun {
        let descriptor = self.registry.get(index).expect("caller validated index");
        let span = caliper_core::logging::scenario_span(index, descriptor.name);
        let _entered = span.enter();
        info!(verdict = ?descriptor.verdict, "scenario starting");
        let started = Instant::now();
        (descriptor.entry)();
        let elapsed = started.elapsed();
        info!(?elapsed, "scenario finished");
        ScenarioRun {
            index,
            name: descriptor.name,
            elapsed,
        }
    }
}
