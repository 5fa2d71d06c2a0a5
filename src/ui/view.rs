//! Pure composition of the window from application state.
//!
//! [`WindowView::compose`] decides which widgets exist and how they are
//! colored; the app only paints what it returns, so the whole visual tree can
//! be checked without a live window.

use eframe::egui::{Color32, Vec2};

use crate::config::AppConfig;
use crate::theme::Palette;
use crate::ui::app::state::{AppState, BrowseStatus, Layout};

pub const THEME_TOGGLE_LABEL: &str = "🌓";
pub const INSTRUCTIONS: &str = "Select a PDF file on your computer to extract all its text";
pub const PAGE_RANGE_LABEL: &str = "Page Range (ex.: 1, 3-7):";
pub const BROWSE_LABEL: &str = "Browse";
pub const LOADING_LABEL: &str = "Loading...";
pub const CLEAR_LABEL: &str = "Clear Text";
pub const COPY_LABEL: &str = "Copy";

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub label: &'static str,
    pub fill: Color32,
    pub text_color: Color32,
    pub active_fill: Color32,
}

impl ButtonView {
    fn new(label: &'static str, palette: &Palette) -> Self {
        Self {
            label,
            fill: palette.primary,
            text_color: palette.secondary,
            active_fill: palette.button_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextPanelView {
    pub background: Color32,
    pub text_color: Color32,
    pub rows: usize,
    pub width: f32,
    pub copy: ButtonView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowView {
    pub layout: Layout,
    pub window_size: Vec2,
    pub background: Color32,
    pub text_color: Color32,
    pub theme_toggle: ButtonView,
    pub instructions: &'static str,
    pub page_range_label: &'static str,
    pub browse: ButtonView,
    pub clear: ButtonView,
    pub text_panel: Option<TextPanelView>,
}

impl WindowView {
    pub fn compose(state: &AppState, config: &AppConfig) -> Self {
        let palette = state.theme.palette();
        let layout = state.layout();

        let browse_label = match state.browse {
            BrowseStatus::Idle => BROWSE_LABEL,
            BrowseStatus::Requested | BrowseStatus::Loading => LOADING_LABEL,
        };

        let text_panel = match layout {
            Layout::Compact => None,
            Layout::Expanded => Some(TextPanelView {
                background: palette.background,
                text_color: palette.text,
                rows: config.text_panel_rows,
                width: config.text_panel_width,
                copy: ButtonView::new(COPY_LABEL, &palette),
            }),
        };

        Self {
            layout,
            window_size: match layout {
                Layout::Compact => config.compact_size,
                Layout::Expanded => config.expanded_size,
            },
            background: palette.background,
            text_color: palette.text,
            theme_toggle: ButtonView::new(THEME_TOGGLE_LABEL, &palette),
            instructions: INSTRUCTIONS,
            page_range_label: PAGE_RANGE_LABEL,
            browse: ButtonView::new(browse_label, &palette),
            clear: ButtonView::new(CLEAR_LABEL, &palette),
            text_panel,
        }
    }
}
