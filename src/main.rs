use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::ui::app::PdfTextApp;
use crate::ui::icons::create_app_icon;

mod config;
mod pdf;
mod theme;
mod ui;

// Logo embedded as a resource
const LOGO_BYTES: &[u8] = include_bytes!("../img/logo.png");

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::default();
    tracing::debug!("Starting with {:?}", config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.compact_size)
            .with_resizable(false)
            .with_icon(create_app_icon(LOGO_BYTES)),
        centered: true,
        default_theme: eframe::Theme::Light,
        follow_system_theme: false,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        vsync: true,
        ..Default::default()
    };

    let app_name = config.window_title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| Box::new(PdfTextApp::new(cc, config, LOGO_BYTES))),
    )
}
