// src/state/mod.rs
use std::sync::Arc;

use crate::analysis::SimulatedAnalyzer;
use crate::config::Settings;

pub mod analyzer_state;
pub mod notification;

pub use analyzer_state::{Analyzer, AnalyzerEvent, AnalyzerPhase};
pub use notification::{NotificationKind, Notifications};

pub const COMPLETION_MESSAGE: &str = "Analysis complete - threats detected!";

// Results view tabs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultsTab {
    Threats,
    StructuredOutput,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DumpFormat {
    Json,
    Ron,
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    pub analyzer: Analyzer,
    pub notifications: Notifications,

    // Minimal UI state
    pub results_tab: ResultsTab,
    pub dump_format: DumpFormat,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            analyzer: Analyzer::new(Arc::new(SimulatedAnalyzer::new()), settings.analysis_latency()),
            notifications: Notifications::new(settings.notification_lifetime()),
            results_tab: ResultsTab::Threats,
            dump_format: DumpFormat::Json,
        }
    }

    /// Kicks off a run from the input box, reporting bad input as a notification.
    pub fn request_analysis(&mut self) {
        if let Err(e) = self.analyzer.submit() {
            self.notifications.error(e.to_string());
        }
    }

    /// Called once per frame.
    pub fn tick(&mut self) {
        match self.analyzer.poll() {
            Some(AnalyzerEvent::Completed { .. }) => {
                self.notifications.success(COMPLETION_MESSAGE);
            }
            Some(AnalyzerEvent::Failed { .. }) => {
                self.notifications.error("Analysis stopped unexpectedly");
            }
            None => {}
        }
        self.notifications.expire(std::time::Instant::now());
    }

    pub fn new_session(&mut self) {
        self.analyzer.reset();
        self.results_tab = ResultsTab::Threats;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn fast_state() -> AppState {
        AppState::new(Settings {
            analysis_latency_ms: 10,
            ..Settings::default()
        })
    }

    #[test]
    fn test_empty_request_notifies_error() {
        let mut state = fast_state();
        state.request_analysis();

        assert!(!state.analyzer.is_analyzing());
        let notes = state.notifications.active();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Error);
        assert_eq!(notes[0].message, "Please enter some logs to analyze");
    }

    #[test]
    fn test_tick_notifies_completion() {
        let mut state = fast_state();
        state.analyzer.raw_log_text = "test log line".to_string();
        state.request_analysis();
        assert!(state.analyzer.is_analyzing());

        let start = Instant::now();
        while state.analyzer.is_analyzing() && start.elapsed() < Duration::from_secs(5) {
            std::thread::sleep(Duration::from_millis(5));
            state.tick();
        }

        assert!(state.analyzer.result().is_some());
        assert!(state.notifications.active().iter()
            .any(|n| n.kind == NotificationKind::Success && n.message == COMPLETION_MESSAGE));
    }

    #[test]
    fn test_input_stays_editable_while_analyzing() {
        let mut state = AppState::new(Settings {
            analysis_latency_ms: 200,
            ..Settings::default()
        });
        state.analyzer.raw_log_text = "first batch".to_string();
        state.request_analysis();
        let first = state.analyzer.state().phase;

        state.analyzer.raw_log_text.push_str("\nsecond batch");
        assert_eq!(state.analyzer.raw_log_text, "first batch\nsecond batch");
        assert!(state.analyzer.is_analyzing());

        // Resubmitting the edited text starts a fresh run
        state.request_analysis();
        let second = state.analyzer.state().phase;
        assert!(matches!(second, AnalyzerPhase::Analyzing { .. }));
        assert_ne!(first, second);
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_new_session_resets() {
        let mut state = fast_state();
        state.analyzer.raw_log_text = "logs".to_string();
        state.request_analysis();
        state.results_tab = ResultsTab::StructuredOutput;

        state.new_session();
        assert!(!state.analyzer.is_analyzing());
        assert!(state.analyzer.raw_log_text.is_empty());
        assert_eq!(state.results_tab, ResultsTab::Threats);
    }
}
