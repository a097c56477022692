// src/analysis/job.rs

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;
use std::time::Duration;
use uuid::Uuid;

use super::simulator::LogAnalyzer;
use super::threat::AnalysisResult;

/// Called from the worker thread once a result is ready to be picked up.
pub type FinishHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug)]
pub enum JobPoll {
    Pending,
    Finished(AnalysisResult),
    // Worker went away without producing anything
    Lost,
}

/// One simulated analysis running on a background thread.
///
/// The worker sleeps on the cancel channel for the simulated latency. A
/// timeout means the run completed; a cancel message or a dropped sender
/// means nobody wants the result anymore and the worker exits without
/// producing one.
pub struct AnalysisJob {
    run_id: Uuid,
    cancel_tx: Sender<()>,
    result_rx: Receiver<AnalysisResult>,
}

impl AnalysisJob {
    pub fn spawn(
        run_id: Uuid,
        logs: String,
        analyzer: Arc<dyn LogAnalyzer>,
        latency: Duration,
        on_finish: Option<FinishHook>,
    ) -> std::io::Result<Self> {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let (result_tx, result_rx) = mpsc::channel();

        thread::Builder::new()
            .name(format!("analysis-{}", run_id))
            .spawn(move || {
                match cancel_rx.recv_timeout(latency) {
                    Err(RecvTimeoutError::Timeout) => {
                        let result = analyzer.analyze(&logs);
                        if result_tx.send(result).is_ok() {
                            if let Some(hook) = on_finish {
                                hook();
                            }
                        }
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                        log::debug!("Analysis run {} cancelled before completion", run_id);
                    }
                }
            })?;

        Ok(Self { run_id, cancel_tx, result_rx })
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn poll(&self) -> JobPoll {
        match self.result_rx.try_recv() {
            Ok(result) => JobPoll::Finished(result),
            Err(TryRecvError::Empty) => JobPoll::Pending,
            Err(TryRecvError::Disconnected) => JobPoll::Lost,
        }
    }

    pub fn cancel(self) {
        // Worker may already be done; nothing to do then
        let _ = self.cancel_tx.send(());
    }
}

impl std::fmt::Debug for AnalysisJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisJob")
            .field("run_id", &self.run_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SimulatedAnalyzer;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Instant;

    fn spawn_job(latency_ms: u64, hook: Option<FinishHook>) -> AnalysisJob {
        AnalysisJob::spawn(
            Uuid::new_v4(),
            "test log line".to_string(),
            Arc::new(SimulatedAnalyzer::new()),
            Duration::from_millis(latency_ms),
            hook,
        ).unwrap()
    }

    fn wait_for(job: &AnalysisJob, timeout: Duration) -> JobPoll {
        let start = Instant::now();
        loop {
            match job.poll() {
                JobPoll::Pending if start.elapsed() < timeout => {
                    thread::sleep(Duration::from_millis(5));
                }
                other => return other,
            }
        }
    }

    #[test]
    fn test_job_finishes_after_latency() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();
        let job = spawn_job(20, Some(Arc::new(move || flag.store(true, Ordering::SeqCst))));

        assert!(matches!(job.poll(), JobPoll::Pending));
        match wait_for(&job, Duration::from_secs(5)) {
            JobPoll::Finished(result) => assert_eq!(result.threats.len(), 4),
            other => panic!("expected finished job, got {:?}", other),
        }
        assert!(finished.load(Ordering::SeqCst));
    }

    #[test]
    fn test_cancelled_job_never_finishes() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();
        let job = spawn_job(50, Some(Arc::new(move || flag.store(true, Ordering::SeqCst))));

        job.cancel();
        thread::sleep(Duration::from_millis(150));
        assert!(!finished.load(Ordering::SeqCst));
    }

    #[test]
    fn test_dropped_job_never_finishes() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();
        let job = spawn_job(50, Some(Arc::new(move || flag.store(true, Ordering::SeqCst))));

        drop(job);
        thread::sleep(Duration::from_millis(150));
        assert!(!finished.load(Ordering::SeqCst));
    }
}
