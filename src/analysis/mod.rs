// src/analysis/mod.rs
pub mod threat;
pub mod simulator;
pub mod job;

// Re-export commonly used types
pub use threat::{
    Severity,
    Threat,
    AnalysisResult,
    AnalysisRecord,
    SeverityCounts,
    ThreatLevel
};
pub use simulator::{LogAnalyzer, SimulatedAnalyzer};
pub use job::{AnalysisJob, FinishHook, JobPoll};
