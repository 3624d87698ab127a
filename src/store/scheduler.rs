//! Deferred jobs on an owned clock
//!
//! The scheduler never reads the wall clock. Time moves only when the owner
//! calls [`DeferredScheduler::advance`], so tests step simulated time and
//! the binary drives it from a tokio interval. A submitted job belongs to the
//! scheduler, not to whatever view submitted it, and runs even after that
//! view is gone unless someone cancels it.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Identifies a submitted job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobHandle(u64);

impl JobHandle {
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for JobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "job-{}", self.0)
    }
}

struct ScheduledJob {
    label: String,
    job: Job,
}

/// Runs jobs once their delay has elapsed on the scheduler's clock
#[derive(Default)]
pub struct DeferredScheduler {
    now: Duration,
    next_id: u64,
    /// Jobs ordered by due time, then submission order
    queue: BTreeMap<(Duration, u64), ScheduledJob>,
    due_at: FxHashMap<JobHandle, Duration>,
}

impl DeferredScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the scheduler's clock
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Handle the next submitted job will receive
    #[must_use]
    pub const fn next_handle(&self) -> JobHandle {
        JobHandle(self.next_id)
    }

    /// Number of jobs waiting to run
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Clock time at which the earliest pending job is due
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Submit a job to run `delay` after the current clock time.
    ///
    /// Due times saturate at `Duration::MAX`, so an oversized delay means
    /// "never" rather than a panic.
    pub fn schedule<F>(&mut self, label: impl Into<String>, delay: Duration, job: F) -> JobHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = JobHandle(self.next_id);
        self.next_id += 1;
        let due = self.now.saturating_add(delay);
        let label = label.into();
        log::debug!("Scheduled {label} as {handle}, due in {delay:?}");

        self.queue.insert(
            (due, handle.0),
            ScheduledJob {
                label,
                job: Box::new(job),
            },
        );
        self.due_at.insert(handle, due);
        handle
    }

    /// Cancel a pending job
    ///
    /// # Errors
    /// Returns a scheduler error if the job already ran, was cancelled, or
    /// never existed
    pub fn cancel(&mut self, handle: JobHandle) -> Result<()> {
        let due = self
            .due_at
            .remove(&handle)
            .ok_or_else(|| Error::Scheduler(format!("{handle} is not pending")))?;
        if let Some(job) = self.queue.remove(&(due, handle.0)) {
            log::debug!("Cancelled {} ({handle})", job.label);
        }
        Ok(())
    }

    /// Move the clock forward and run every job that has come due, in due
    /// order. Returns the number of jobs run.
    pub fn advance(&mut self, by: Duration) -> usize {
        self.now = self.now.saturating_add(by);
        let mut ran = 0;

        while let Some(entry) = self.queue.first_entry() {
            if entry.key().0 > self.now {
                break;
            }
            let ((_, id), scheduled) = entry.remove_entry();
            self.due_at.remove(&JobHandle(id));
            log::debug!("Running {} (job-{id})", scheduled.label);
            (scheduled.job)();
            ran += 1;
        }

        ran
    }

    /// Advance straight to the last pending job, running everything
    pub fn run_until_idle(&mut self) -> usize {
        let Some(last) = self.queue.keys().next_back().map(|(due, _)| *due) else {
            return 0;
        };
        let by = last.saturating_sub(self.now);
        self.advance(by)
    }
}

impl fmt::Debug for DeferredScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredScheduler")
            .field("now", &self.now)
            .field("pending", &self.queue.len())
            .finish()
    }
}
