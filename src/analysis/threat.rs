// src/analysis/threat.rs

use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    // Anything we don't recognize when reading a result back in
    #[serde(other)]
    Unknown,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Threat {
    #[serde(rename = "type_of_threat")]
    pub category: String,
    pub description: String,
    #[serde(rename = "affected_user_or_ip")]
    pub subject: String,
    pub severity: Severity,
    pub recommended_action: String,
}

impl Threat {
    pub fn new(
        category: &str,
        description: &str,
        subject: &str,
        severity: Severity,
        recommended_action: &str,
    ) -> Self {
        Self {
            category: category.to_string(),
            description: description.to_string(),
            subject: subject.to_string(),
            severity,
            recommended_action: recommended_action.to_string(),
        }
    }
}

/// Output of one analysis run, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub threats: Vec<Threat>,
    pub summary: String,
}

impl AnalysisResult {
    pub fn count(&self, severity: Severity) -> usize {
        self.threats.iter()
            .filter(|t| t.severity == severity)
            .count()
    }

    pub fn severity_counts(&self) -> SeverityCounts {
        SeverityCounts {
            high: self.count(Severity::High),
            medium: self.count(Severity::Medium),
            low: self.count(Severity::Low),
            unknown: self.count(Severity::Unknown),
        }
    }

    pub fn overall_level(&self) -> ThreatLevel {
        if self.count(Severity::High) > 0 {
            return ThreatLevel::Critical;
        }
        if self.count(Severity::Medium) > 0 {
            return ThreatLevel::Elevated;
        }
        ThreatLevel::Low
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub unknown: usize,
}

impl SeverityCounts {
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low + self.unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ThreatLevel {
    Secure,
    Low,
    Elevated,
    Critical,
}

impl ThreatLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ThreatLevel::Secure => "SECURE",
            ThreatLevel::Low => "LOW",
            ThreatLevel::Elevated => "ELEVATED",
            ThreatLevel::Critical => "CRITICAL",
        }
    }
}

/// A finished run: the result plus when and under which run id it landed.
/// Only `result` goes into the structured output.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRecord {
    pub run_id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub result: AnalysisResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(severities: &[Severity]) -> AnalysisResult {
        AnalysisResult {
            threats: severities.iter()
                .map(|s| Threat::new("cat", "desc", "host", *s, "act"))
                .collect(),
            summary: String::new(),
        }
    }

    #[test]
    fn test_overall_level_precedence() {
        use Severity::*;
        assert_eq!(result_with(&[Low, Medium, High]).overall_level(), ThreatLevel::Critical);
        assert_eq!(result_with(&[High]).overall_level(), ThreatLevel::Critical);
        assert_eq!(result_with(&[Low, Medium, Low]).overall_level(), ThreatLevel::Elevated);
        assert_eq!(result_with(&[Low, Low]).overall_level(), ThreatLevel::Low);
        assert_eq!(result_with(&[]).overall_level(), ThreatLevel::Low);
    }

    #[test]
    fn test_unknown_severity_does_not_raise_level() {
        let result = result_with(&[Severity::Unknown, Severity::Low]);
        assert_eq!(result.overall_level(), ThreatLevel::Low);
    }

    #[test]
    fn test_severity_counts() {
        use Severity::*;
        let counts = result_with(&[High, Medium, Medium, Unknown]).severity_counts();
        assert_eq!(counts, SeverityCounts { high: 1, medium: 2, low: 0, unknown: 1 });
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_threat_serializes_with_wire_field_names() {
        let threat = Threat::new("Network anomaly", "d", "10.0.0.25", Severity::Medium, "a");
        let json = serde_json::to_value(&threat).unwrap();
        assert_eq!(json["type_of_threat"], "Network anomaly");
        assert_eq!(json["affected_user_or_ip"], "10.0.0.25");
        assert_eq!(json["severity"], "medium");
        assert_eq!(json["recommended_action"], "a");
    }

    #[test]
    fn test_unrecognized_severity_reads_as_unknown() {
        let json = r#"{
            "type_of_threat": "Odd",
            "description": "d",
            "affected_user_or_ip": "x",
            "severity": "catastrophic",
            "recommended_action": "a"
        }"#;
        let threat: Threat = serde_json::from_str(json).unwrap();
        assert_eq!(threat.severity, Severity::Unknown);
    }
}
