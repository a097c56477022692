// src/ui/analyzer.rs
use eframe::egui;
use crate::state::AppState;
use crate::ui::widgets::PRIMARY;

pub fn show_analyzer_view(ui: &mut egui::Ui, state: &mut AppState) {
    show_header(ui);
    ui.add_space(16.0);
    show_input_panel(ui, state);

    if state.analyzer.result().is_some() {
        ui.add_space(16.0);
        crate::ui::overview::show_overview(ui, state);
        ui.add_space(16.0);
        crate::ui::results::show_results(ui, state);
    }
}

fn show_header(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("🛡").size(32.0).color(PRIMARY));
        ui.heading(egui::RichText::new("CyberGuard AI Assistant").size(28.0).strong().color(PRIMARY));
        ui.label(
            egui::RichText::new("Advanced threat detection and security analysis for your systems")
                .size(16.0)
                .weak()
        );
    });
}

fn show_input_panel(ui: &mut egui::Ui, state: &mut AppState) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("📄 System Logs Input");
        ui.add_space(8.0);

        let busy = state.analyzer.is_analyzing();

        ui.add(
            egui::TextEdit::multiline(&mut state.analyzer.raw_log_text)
                .hint_text("Paste your system logs here for analysis...")
                .font(egui::TextStyle::Monospace)
                .desired_rows(10)
                .desired_width(f32::INFINITY)
        );
        ui.add_space(8.0);

        if busy {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Analyzing...");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✖ Cancel").clicked() {
                        state.analyzer.cancel();
                    }
                });
            });
        } else {
            let button = egui::Button::new(egui::RichText::new("🔍 Analyze Threats").strong())
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                state.request_analysis();
            }
        }
    });
}
