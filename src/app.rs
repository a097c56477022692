// src/app.rs
use std::sync::Arc;
use eframe::egui;

use crate::config::Settings;
use crate::state::{AnalyzerPhase, AppState};

pub struct CyberGuardApp {
    state: AppState,
}

impl CyberGuardApp {
    pub fn new(ctx: &egui::Context, settings: Settings) -> Self {
        let mut state = AppState::new(settings);

        // Wake the UI as soon as a background run finishes
        let repaint_ctx = ctx.clone();
        state.analyzer.set_finish_hook(Arc::new(move || repaint_ctx.request_repaint()));

        Self { state }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New Session").clicked() {
                    log::info!("Starting new session");
                    self.state.new_session();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    ui.close_menu();
                }
            });

            ui.separator();

            let status = match self.state.analyzer.state().phase {
                AnalyzerPhase::Idle => "Idle",
                AnalyzerPhase::Analyzing { .. } => "Analyzing",
                AnalyzerPhase::Done => "Done",
            };
            ui.label(status);
            ui.separator();

            let level = self.state.analyzer.overall_level();
            ui.label(format!("Threat level: {}", level.label()));
        });
    }
}

impl eframe::App for CyberGuardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.tick();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("main_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    crate::ui::analyzer::show_analyzer_view(ui, &mut self.state);
                });
        });

        crate::ui::notifications::show_notifications(ctx, &mut self.state);
    }
}
