// src/ui/results.rs
use eframe::egui;
use anyhow::Result;
use crate::analysis::AnalysisResult;
use crate::state::{AppState, DumpFormat, ResultsTab};
use crate::ui::threat_card::show_threat_card;

pub fn show_results(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(record) = state.analyzer.result() else {
        return;
    };

    ui.horizontal(|ui| {
        for (tab, label) in [
            (ResultsTab::Threats, "Threat Analysis"),
            (ResultsTab::StructuredOutput, "Structured Output"),
        ] {
            if ui.selectable_label(state.results_tab == tab, label).clicked() {
                state.results_tab = tab;
            }
        }
    });
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    match state.results_tab {
        ResultsTab::Threats => {
            for threat in &record.result.threats {
                show_threat_card(ui, threat);
                ui.add_space(8.0);
            }
        }
        ResultsTab::StructuredOutput => {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.heading("Analysis Output");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.selectable_value(&mut state.dump_format, DumpFormat::Ron, "RON");
                        ui.selectable_value(&mut state.dump_format, DumpFormat::Json, "JSON");
                    });
                });
                ui.add_space(8.0);

                match structured_dump(&record.result, state.dump_format) {
                    Ok(text) => {
                        egui::ScrollArea::vertical()
                            .id_source("structured_output_scroll")
                            .max_height(384.0)
                            .show(ui, |ui| {
                                ui.add(
                                    egui::TextEdit::multiline(&mut text.as_str())
                                        .font(egui::TextStyle::Monospace)
                                        .desired_width(f32::INFINITY)
                                );
                            });
                    }
                    Err(e) => {
                        ui.colored_label(egui::Color32::RED, format!("Failed to render output: {}", e));
                    }
                }
            });
        }
    }
}

/// Pretty-printed `{threats, summary}` exactly as stored.
pub fn structured_dump(result: &AnalysisResult, format: DumpFormat) -> Result<String> {
    let text = match format {
        DumpFormat::Json => serde_json::to_string_pretty(result)?,
        DumpFormat::Ron => ron::ser::to_string_pretty(
            result,
            ron::ser::PrettyConfig::new()
                .new_line("\n".to_string())
                .depth_limit(4)
        )?,
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{LogAnalyzer, SimulatedAnalyzer};

    #[test]
    fn test_json_dump_matches_result() {
        let result = SimulatedAnalyzer::new().analyze("test log line");
        let text = structured_dump(&result, DumpFormat::Json).unwrap();

        assert!(text.contains("\"type_of_threat\": \"Failed login attempt\""));
        assert!(text.contains("\"severity\": \"high\""));
        let back: AnalysisResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_ron_dump_reads_back() {
        let result = SimulatedAnalyzer::new().analyze("test log line");
        let text = structured_dump(&result, DumpFormat::Ron).unwrap();
        let back: AnalysisResult = ron::from_str(&text).unwrap();
        assert_eq!(back.threats.len(), 4);
        assert_eq!(back.summary, result.summary);
    }
}
