// src/ui/overview.rs
use eframe::egui;
use egui::Color32;
use egui_plot::{Bar, BarChart, Plot};
use crate::analysis::SeverityCounts;
use crate::state::AppState;
use crate::ui::threat_card::level_color;
use crate::ui::widgets::{self, THREAT_HIGH, THREAT_MEDIUM, THREAT_LOW, PRIMARY};

pub fn show_overview(ui: &mut egui::Ui, state: &AppState) {
    let Some(record) = state.analyzer.result() else {
        return;
    };
    let level = state.analyzer.overall_level();
    let counts = state.analyzer.severity_counts();

    ui.group(|ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.heading("⚠ Threat Overview");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                widgets::badge(ui, level.label(), level_color(level));
            });
        });
        ui.label(
            egui::RichText::new(format!(
                "Run {} · completed {}",
                record.run_id,
                record.completed_at.format("%Y-%m-%d %H:%M:%S UTC")
            ))
            .small()
            .weak()
        );
        ui.add_space(8.0);

        ui.columns(3, |columns| {
            count_tile(&mut columns[0], counts.high, "High Risk", THREAT_HIGH);
            count_tile(&mut columns[1], counts.medium, "Medium Risk", THREAT_MEDIUM);
            count_tile(&mut columns[2], counts.low, "Low Risk", THREAT_LOW);
        });
        ui.add_space(4.0);

        let mut tally = format!("{} findings", counts.total());
        if counts.unknown > 0 {
            tally.push_str(&format!(", {} with unrecognized severity", counts.unknown));
        }
        ui.label(egui::RichText::new(tally).small().weak());
        ui.add_space(8.0);

        severity_chart(ui, &counts);
        ui.add_space(8.0);

        widgets::callout(ui, PRIMARY, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new("Executive Summary:").strong());
                ui.label(&record.result.summary);
            });
        });
    });
}

fn count_tile(ui: &mut egui::Ui, count: usize, label: &str, color: Color32) {
    egui::Frame::none()
        .fill(color.gamma_multiply(0.1))
        .stroke(egui::Stroke::new(1.0, color.gamma_multiply(0.2)))
        .rounding(8.0)
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(count.to_string()).size(24.0).strong().color(color));
                ui.label(egui::RichText::new(label).small().weak());
            });
        });
}

fn severity_chart(ui: &mut egui::Ui, counts: &SeverityCounts) {
    let bars = vec![
        Bar::new(0.0, counts.high as f64).name("High").fill(THREAT_HIGH).width(0.6),
        Bar::new(1.0, counts.medium as f64).name("Medium").fill(THREAT_MEDIUM).width(0.6),
        Bar::new(2.0, counts.low as f64).name("Low").fill(THREAT_LOW).width(0.6),
    ];

    Plot::new("severity_chart")
        .height(120.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
