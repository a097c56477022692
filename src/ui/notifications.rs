// src/ui/notifications.rs
use eframe::egui;
use crate::state::{AppState, NotificationKind};
use crate::ui::widgets::{SUCCESS, THREAT_HIGH};

pub fn show_notifications(ctx: &egui::Context, state: &mut AppState) {
    let mut dismissed = None;

    for (slot, note) in state.notifications.active().iter().enumerate() {
        let (icon, color) = match note.kind {
            NotificationKind::Success => ("✔", SUCCESS),
            NotificationKind::Error => ("✖", THREAT_HIGH),
        };

        egui::Window::new("notification")
            .id(egui::Id::new(("notification", note.id)))
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -12.0 - 48.0 * slot as f32])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(icon).color(color));
                    ui.label(&note.message);
                    if ui.small_button("OK").clicked() {
                        dismissed = Some(note.id);
                    }
                });
            });
    }

    if let Some(id) = dismissed {
        state.notifications.dismiss(id);
    }

    // Keep frames coming so notifications expire on time
    if !state.notifications.is_empty() {
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}
