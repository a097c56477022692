// src/ui/threat_card.rs
use eframe::egui;
use egui::Color32;
use crate::analysis::{Severity, Threat, ThreatLevel};
use crate::ui::widgets::{self, THREAT_HIGH, THREAT_MEDIUM, THREAT_LOW, SUCCESS, MUTED, PRIMARY};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityStyle {
    pub icon: &'static str,
    pub color: Color32,
    pub highlight: bool,
}

pub fn severity_style(severity: Severity) -> SeverityStyle {
    match severity {
        Severity::High => SeverityStyle { icon: "⚠", color: THREAT_HIGH, highlight: true },
        Severity::Medium => SeverityStyle { icon: "⚡", color: THREAT_MEDIUM, highlight: false },
        Severity::Low => SeverityStyle { icon: "🛡", color: THREAT_LOW, highlight: false },
        Severity::Unknown => SeverityStyle { icon: "🛡", color: MUTED, highlight: false },
    }
}

pub fn level_color(level: ThreatLevel) -> Color32 {
    match level {
        ThreatLevel::Critical => THREAT_HIGH,
        ThreatLevel::Elevated => THREAT_MEDIUM,
        ThreatLevel::Low | ThreatLevel::Secure => SUCCESS,
    }
}

pub fn show_threat_card(ui: &mut egui::Ui, threat: &Threat) {
    let style = severity_style(threat.severity);

    let mut frame = egui::Frame::group(ui.style());
    if style.highlight {
        frame = frame.stroke(egui::Stroke::new(1.5, style.color.gamma_multiply(0.6)));
    }

    frame.show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(style.icon).color(style.color).size(18.0));
            ui.label(egui::RichText::new(&threat.category).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                widgets::badge(ui, threat.severity.label(), style.color);
            });
        });
        ui.add_space(4.0);

        ui.label(egui::RichText::new(&threat.description).weak());
        ui.add_space(4.0);
        ui.label(egui::RichText::new(&threat.subject).monospace().small());
        ui.add_space(6.0);

        widgets::callout(ui, PRIMARY, |ui| {
            ui.label(egui::RichText::new("Recommended Action:").color(PRIMARY).strong());
            ui.label(&threat.recommended_action);
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_severities() {
        let high = severity_style(Severity::High);
        assert_eq!(high.icon, "⚠");
        assert_eq!(high.color, THREAT_HIGH);
        assert!(high.highlight);

        assert_eq!(severity_style(Severity::Medium).icon, "⚡");
        assert_eq!(severity_style(Severity::Medium).color, THREAT_MEDIUM);
        assert_eq!(severity_style(Severity::Low).color, THREAT_LOW);
        assert!(!severity_style(Severity::Low).highlight);
    }

    #[test]
    fn test_unknown_severity_falls_back() {
        let json = r#"{
            "type_of_threat": "Odd",
            "description": "d",
            "affected_user_or_ip": "x",
            "severity": "extreme",
            "recommended_action": "a"
        }"#;
        let threat: Threat = serde_json::from_str(json).unwrap();
        let style = severity_style(threat.severity);
        assert_eq!(style, SeverityStyle { icon: "🛡", color: MUTED, highlight: false });
    }

    #[test]
    fn test_level_palette() {
        assert_eq!(level_color(ThreatLevel::Critical), THREAT_HIGH);
        assert_eq!(level_color(ThreatLevel::Elevated), THREAT_MEDIUM);
        assert_eq!(level_color(ThreatLevel::Low), SUCCESS);
        assert_eq!(level_color(ThreatLevel::Secure), SUCCESS);
    }
}
