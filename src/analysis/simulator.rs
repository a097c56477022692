// src/analysis/simulator.rs

use super::threat::{AnalysisResult, Severity, Threat};

pub const CANNED_SUMMARY: &str = "Analysis complete: Detected 4 security events including 2 high-risk \
incidents requiring immediate attention. Failed login attempts and privilege escalation detected \
from multiple sources.";

// Seam for whatever turns raw log text into findings
pub trait LogAnalyzer: Send + Sync {
    fn analyze(&self, logs: &str) -> AnalysisResult;
}

/// Stand-in analyzer. Always reports the same four findings and never looks
/// at the logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedAnalyzer;

impl SimulatedAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl LogAnalyzer for SimulatedAnalyzer {
    fn analyze(&self, _logs: &str) -> AnalysisResult {
        AnalysisResult {
            threats: canned_threats(),
            summary: CANNED_SUMMARY.to_string(),
        }
    }
}

fn canned_threats() -> Vec<Threat> {
    vec![
        Threat::new(
            "Failed login attempt",
            "Multiple failed SSH login attempts detected from external source",
            "192.168.1.150",
            Severity::High,
            "Block IP immediately and review authentication logs",
        ),
        Threat::new(
            "Privilege escalation",
            "User attempted to access root privileges without authorization",
            "user123",
            Severity::High,
            "Investigate user account and review sudo access logs",
        ),
        Threat::new(
            "Suspicious file access",
            "Unusual access pattern to sensitive configuration files",
            "admin_service",
            Severity::Medium,
            "Monitor file access patterns and verify service legitimacy",
        ),
        Threat::new(
            "Network anomaly",
            "Unexpected outbound connections to unknown hosts",
            "10.0.0.25",
            Severity::Medium,
            "Analyze network traffic and check for malware",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ThreatLevel;

    #[test]
    fn test_canned_result_shape() {
        let result = SimulatedAnalyzer::new().analyze("test log line");
        assert_eq!(result.threats.len(), 4);
        assert_eq!(result.count(Severity::High), 2);
        assert_eq!(result.count(Severity::Medium), 2);
        assert_eq!(result.count(Severity::Low), 0);
        assert_eq!(result.overall_level(), ThreatLevel::Critical);
        assert_eq!(result.summary, CANNED_SUMMARY);
    }

    #[test]
    fn test_high_threats_in_order() {
        let result = SimulatedAnalyzer::new().analyze("anything");
        let high: Vec<&str> = result.threats.iter()
            .filter(|t| t.severity == Severity::High)
            .map(|t| t.category.as_str())
            .collect();
        assert_eq!(high, vec!["Failed login attempt", "Privilege escalation"]);
    }

    #[test]
    fn test_input_is_ignored() {
        let analyzer = SimulatedAnalyzer::new();
        assert_eq!(
            analyzer.analyze("Jan 1 sshd[42]: Failed password for root"),
            analyzer.analyze("x"),
        );
    }
}
