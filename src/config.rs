// Layout and startup settings. Fixed at build time; nothing is read from disk.

use eframe::egui::{vec2, Vec2};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub window_title: String,
    /// Window size with no text panel.
    pub compact_size: Vec2,
    /// Window size once extracted text is shown.
    pub expanded_size: Vec2,
    pub default_page_range: String,
    pub logo_size: Vec2,
    pub button_size: Vec2,
    pub page_range_width: f32,
    pub text_panel_width: f32,
    pub text_panel_rows: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "PDF Text Extractor".to_string(),
            compact_size: vec2(600.0, 360.0),
            expanded_size: vec2(1060.0, 420.0),
            default_page_range: "1".to_string(),
            logo_size: vec2(96.0, 96.0),
            button_size: vec2(180.0, 40.0),
            page_range_width: 90.0,
            text_panel_width: 420.0,
            text_panel_rows: 20,
        }
    }
}
