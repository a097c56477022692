// src/state/analyzer_state.rs
use std::sync::Arc;
use std::time::Duration;
use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::analysis::{
    AnalysisJob, AnalysisRecord, FinishHook, JobPoll, LogAnalyzer, SeverityCounts, ThreatLevel,
};

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Please enter some logs to analyze")]
    EmptyInput,

    #[error("Failed to start analysis: {0}")]
    Spawn(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerPhase {
    Idle,
    Analyzing { run_id: Uuid },
    Done,
}

/// Snapshot of what the analyzer has produced. Every transition builds a new
/// one instead of poking at fields.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerState {
    pub phase: AnalyzerPhase,
    pub result: Option<AnalysisRecord>,
}

impl AnalyzerState {
    pub fn initial() -> Self {
        Self {
            phase: AnalyzerPhase::Idle,
            result: None,
        }
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.phase, AnalyzerPhase::Analyzing { .. })
    }

    pub fn pending_run(&self) -> Option<Uuid> {
        match self.phase {
            AnalyzerPhase::Analyzing { run_id } => Some(run_id),
            _ => None,
        }
    }

    fn started(&self, run_id: Uuid) -> Self {
        Self {
            phase: AnalyzerPhase::Analyzing { run_id },
            result: self.result.clone(),
        }
    }

    fn completed(&self, record: AnalysisRecord) -> Self {
        Self {
            phase: AnalyzerPhase::Done,
            result: Some(record),
        }
    }

    // Back to wherever we were before the run started
    fn stopped(&self) -> Self {
        Self {
            phase: if self.result.is_some() { AnalyzerPhase::Done } else { AnalyzerPhase::Idle },
            result: self.result.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzerEvent {
    Completed { run_id: Uuid },
    // Worker disappeared without a result
    Failed { run_id: Uuid },
}

/// Owns the log text, the run in flight and the latest result.
pub struct Analyzer {
    pub raw_log_text: String,
    state: AnalyzerState,
    job: Option<AnalysisJob>,
    analyzer: Arc<dyn LogAnalyzer>,
    latency: Duration,
    finish_hook: Option<FinishHook>,
}

impl Analyzer {
    pub fn new(analyzer: Arc<dyn LogAnalyzer>, latency: Duration) -> Self {
        Self {
            raw_log_text: String::new(),
            state: AnalyzerState::initial(),
            job: None,
            analyzer,
            latency,
            finish_hook: None,
        }
    }

    /// Hook the worker calls when a result is ready, e.g. to wake the UI.
    pub fn set_finish_hook(&mut self, hook: FinishHook) {
        self.finish_hook = Some(hook);
    }

    pub fn state(&self) -> &AnalyzerState {
        &self.state
    }

    pub fn result(&self) -> Option<&AnalysisRecord> {
        self.state.result.as_ref()
    }

    pub fn is_analyzing(&self) -> bool {
        self.state.is_analyzing()
    }

    /// Runs the analysis over whatever is in the input box.
    pub fn submit(&mut self) -> Result<Uuid, AnalyzeError> {
        let input = self.raw_log_text.clone();
        self.analyze(&input)
    }

    pub fn analyze(&mut self, input: &str) -> Result<Uuid, AnalyzeError> {
        if input.trim().is_empty() {
            log::warn!("Analysis requested with empty input");
            return Err(AnalyzeError::EmptyInput);
        }

        let run_id = Uuid::new_v4();
        let job = AnalysisJob::spawn(
            run_id,
            input.to_string(),
            self.analyzer.clone(),
            self.latency,
            self.finish_hook.clone(),
        )?;

        if let Some(previous) = self.job.replace(job) {
            log::info!("Run {} superseded by {}", previous.run_id(), run_id);
            previous.cancel();
        }

        log::info!("Started analysis run {} ({} bytes of logs)", run_id, input.len());
        self.state = self.state.started(run_id);
        Ok(run_id)
    }

    /// Picks up the result of the current run if it has landed.
    pub fn poll(&mut self) -> Option<AnalyzerEvent> {
        let outcome = self.job.as_ref()?.poll();
        let job = match outcome {
            JobPoll::Pending => return None,
            _ => self.job.take()?,
        };
        let run_id = job.run_id();

        // Only the run we are waiting on may write a result
        if self.state.pending_run() != Some(run_id) {
            log::debug!("Discarding output of stale run {}", run_id);
            return None;
        }

        match outcome {
            JobPoll::Finished(result) => {
                log::info!(
                    "Analysis run {} complete: {} threats, level {}",
                    run_id,
                    result.threats.len(),
                    result.overall_level().label()
                );
                self.state = self.state.completed(AnalysisRecord {
                    run_id,
                    completed_at: Utc::now(),
                    result,
                });
                Some(AnalyzerEvent::Completed { run_id })
            }
            _ => {
                log::warn!("Analysis run {} ended without a result", run_id);
                self.state = self.state.stopped();
                Some(AnalyzerEvent::Failed { run_id })
            }
        }
    }

    pub fn cancel(&mut self) {
        if let Some(job) = self.job.take() {
            log::info!("Cancelled analysis run {}", job.run_id());
            job.cancel();
        }
        self.state = self.state.stopped();
    }

    /// Drops any run in flight and forgets the result and the input.
    pub fn reset(&mut self) {
        self.cancel();
        self.raw_log_text.clear();
        self.state = AnalyzerState::initial();
    }

    pub fn overall_level(&self) -> ThreatLevel {
        self.result()
            .map(|record| record.result.overall_level())
            .unwrap_or(ThreatLevel::Secure)
    }

    pub fn severity_counts(&self) -> SeverityCounts {
        self.result()
            .map(|record| record.result.severity_counts())
            .unwrap_or_default()
    }
}

impl Drop for Analyzer {
    fn drop(&mut self) {
        if let Some(job) = self.job.take() {
            job.cancel();
        }
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("state", &self.state)
            .field("job", &self.job)
            .field("latency", &self.latency)
            .finish()
    }
}
