// src/main.rs
use eframe::egui;
use anyhow::{Context, Result};

mod analysis;
mod app;
mod config;
mod state;
mod ui;

use app::CyberGuardApp;
use config::Settings;

fn main() -> Result<()> {
    let settings = Settings::load()?;

    simplelog::SimpleLogger::init(settings.log_level_filter()?, simplelog::Config::default())
        .context("Failed to initialize logger")?;
    log::info!("Starting CyberGuard with settings {:?}", settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title("CyberGuard AI Assistant"),
        ..Default::default()
    };

    eframe::run_native(
        "CyberGuard",
        options,
        Box::new(move |cc| {
            Box::new(CyberGuardApp::new(&cc.egui_ctx, settings))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
