//! Session observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at workflow stage boundaries without
//! coupling to stage logic. Use cases include timing stages and emitting
//! structured telemetry. Pass [`NoopObserver`] for zero-overhead execution.

use std::time::{Duration, Instant};

use serde::Serialize;

/// Stage name: loading the stop-word list.
pub const STAGE_STOPWORDS: &str = "load_stopwords";
/// Stage name: reading the input file.
pub const STAGE_READ: &str = "read_input";
/// Stage name: counting tag frequencies.
pub const STAGE_COUNT: &str = "count";

/// Wall-clock timer for one stage.
#[derive(Debug)]
pub struct StageClock {
    start: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Metrics reported at the end of a stage.
#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    /// Stage wall-clock time.
    pub elapsed: Duration,
    /// Items the stage produced: stop words loaded, bytes read, tags
    /// counted. `None` for stages with no meaningful count.
    pub items: Option<u64>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    pub fn with_items(elapsed: Duration, items: u64) -> Self {
        Self {
            elapsed,
            items: Some(items),
        }
    }
}

/// Stage-boundary callbacks for the extraction workflow.
///
/// Default methods are empty, so implementors override only what they need.
pub trait SessionObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}

/// Observer that records every stage report in completion order.
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports collected so far, in completion order.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }
}

impl SessionObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}
