//! Asynchronous load jobs polled from the frame loop.
//!
//! A job runs somewhere else (usually a worker thread) and publishes its
//! outcome exactly once. The GUI side only ever polls; it never blocks.

use std::sync::{Arc, OnceLock};
use std::thread;

use thiserror::Error;

use crate::error::Result;

/// Why a load job faulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Job ended without reporting a result")]
    Abandoned,
}

/// Final state of a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    Succeeded,
    Faulted(LoadError),
}

/// Non-blocking completion query for an external operation.
pub trait LoadJob {
    /// The job has finished, successfully or not.
    fn is_complete(&self) -> bool;
    /// The job has finished with an error.
    fn is_faulted(&self) -> bool;
}

/// Read side of a job. Cheap to clone.
#[derive(Debug, Clone)]
pub struct JobHandle {
    outcome: Arc<OnceLock<JobOutcome>>,
}

/// Write side of a job. Dropping it without completing faults the job.
#[derive(Debug)]
pub struct JobCompleter {
    outcome: Arc<OnceLock<JobOutcome>>,
}

impl JobHandle {
    /// Create a pending job and the completer that finishes it.
    pub fn pair() -> (JobHandle, JobCompleter) {
        let outcome = Arc::new(OnceLock::new());
        (
            JobHandle {
                outcome: outcome.clone(),
            },
            JobCompleter { outcome },
        )
    }

    /// A job that is already finished.
    pub fn finished(result: std::result::Result<(), LoadError>) -> JobHandle {
        let (handle, completer) = Self::pair();
        completer.complete(result);
        handle
    }

    /// The published outcome, if any.
    pub fn outcome(&self) -> Option<&JobOutcome> {
        self.outcome.get()
    }
}

impl LoadJob for JobHandle {
    fn is_complete(&self) -> bool {
        self.outcome.get().is_some()
    }

    fn is_faulted(&self) -> bool {
        matches!(self.outcome.get(), Some(JobOutcome::Faulted(_)))
    }
}

impl JobCompleter {
    /// Publish the result. Later attempts are ignored.
    pub fn complete(self, result: std::result::Result<(), LoadError>) {
        let outcome = match result {
            Ok(()) => JobOutcome::Succeeded,
            Err(e) => JobOutcome::Faulted(e),
        };
        let _ = self.outcome.set(outcome);
    }
}

impl Drop for JobCompleter {
    fn drop(&mut self) {
        // No-op when the outcome was already published.
        let _ = self.outcome.set(JobOutcome::Faulted(LoadError::Abandoned));
    }
}

/// Run `work` on a named worker thread and return its handle.
///
/// A panic inside `work` drops the completer during unwinding, which faults
/// the job with [`LoadError::Abandoned`].
pub fn spawn_job<F>(name: &str, work: F) -> Result<JobHandle>
where
    F: FnOnce() -> std::result::Result<(), LoadError> + Send + 'static,
{
    let (handle, completer) = JobHandle::pair();
    thread::Builder::new()
        .name(name.to_string())
        .spawn(move || {
            let result = work();
            if let Err(e) = &result {
                log::warn!("Load job failed: {}", e);
            }
            completer.complete(result);
        })?;
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn wait_for(handle: &JobHandle) {
        let start = Instant::now();
        while !handle.is_complete() {
            assert!(start.elapsed() < Duration::from_secs(5), "job never completed");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_pending_job() {
        let (handle, _completer) = JobHandle::pair();
        assert!(!handle.is_complete());
        assert!(!handle.is_faulted());
    }

    #[test]
    fn test_complete_ok() {
        let (handle, completer) = JobHandle::pair();
        completer.complete(Ok(()));
        assert!(handle.is_complete());
        assert!(!handle.is_faulted());
        assert_eq!(handle.outcome(), Some(&JobOutcome::Succeeded));
    }

    #[test]
    fn test_complete_faulted() {
        let handle = JobHandle::finished(Err(LoadError::Decode("bad header".into())));
        assert!(handle.is_complete());
        assert!(handle.is_faulted());
    }

    #[test]
    fn test_dropped_completer_faults() {
        let (handle, completer) = JobHandle::pair();
        drop(completer);
        assert!(handle.is_faulted());
        assert_eq!(
            handle.outcome(),
            Some(&JobOutcome::Faulted(LoadError::Abandoned))
        );
    }

    #[test]
    fn test_spawned_job_completes() {
        let handle = spawn_job("test-ok", || Ok(())).unwrap();
        wait_for(&handle);
        assert!(!handle.is_faulted());
    }

    #[test]
    fn test_spawned_job_fault() {
        let handle = spawn_job("test-err", || Err(LoadError::Io("missing".into()))).unwrap();
        wait_for(&handle);
        assert!(handle.is_faulted());
    }

    #[test]
    fn test_spawned_job_panic_faults() {
        let handle = spawn_job("test-panic", || panic!("loader crashed")).unwrap();
        wait_for(&handle);
        assert_eq!(
            handle.outcome(),
            Some(&JobOutcome::Faulted(LoadError::Abandoned))
        );
    }
}
