// src/ui/widgets.rs
use eframe::egui;
use egui::Color32;

pub const THREAT_HIGH: Color32 = Color32::from_rgb(239, 68, 68);
pub const THREAT_MEDIUM: Color32 = Color32::from_rgb(249, 115, 22);
pub const THREAT_LOW: Color32 = Color32::from_rgb(234, 179, 8);
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const PRIMARY: Color32 = Color32::from_rgb(56, 189, 248);
pub const MUTED: Color32 = Color32::GRAY;

/// Outlined pill with a tinted background.
pub fn badge(ui: &mut egui::Ui, text: &str, color: Color32) -> egui::Response {
    egui::Frame::none()
        .fill(color.gamma_multiply(0.2))
        .stroke(egui::Stroke::new(1.0, color.gamma_multiply(0.5)))
        .rounding(8.0)
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).color(color).strong().small());
        })
        .response
}

/// Tinted box used for the summary and recommended action callouts.
pub fn callout(ui: &mut egui::Ui, color: Color32, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(color.gamma_multiply(0.05))
        .stroke(egui::Stroke::new(1.0, color.gamma_multiply(0.2)))
        .rounding(6.0)
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}
