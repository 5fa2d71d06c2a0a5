// Application state and its transitions. Nothing here touches egui, the
// file system or the clipboard.

use crate::config::AppConfig;
use crate::theme::ThemeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Controls only.
    Compact,
    /// Controls plus the text panel, its scroll area and the Copy button.
    Expanded,
}

/// Progress of a Browse click across frames.
///
/// `Requested` lasts one frame so the "Loading..." label is painted before
/// the blocking file dialog opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowseStatus {
    #[default]
    Idle,
    Requested,
    Loading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub theme: ThemeKind,
    pub text: Option<String>,
    pub page_range_input: String,
    pub browse: BrowseStatus,
    default_page_range: String,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            theme: ThemeKind::default(),
            text: None,
            page_range_input: config.default_page_range.clone(),
            browse: BrowseStatus::Idle,
            default_page_range: config.default_page_range.clone(),
        }
    }

    pub fn layout(&self) -> Layout {
        if self.text.is_some() {
            Layout::Expanded
        } else {
            Layout::Compact
        }
    }

    /// Re-renders in the other theme. The page-range field comes back
    /// pre-filled like a fresh window; the displayed text is kept.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.page_range_input.clone_from(&self.default_page_range);
    }

    pub fn request_browse(&mut self) {
        if self.browse == BrowseStatus::Idle {
            self.browse = BrowseStatus::Requested;
        }
    }

    /// Moves `Requested` to `Loading`; call once the loading label has been shown.
    pub fn advance_browse(&mut self) {
        if self.browse == BrowseStatus::Requested {
            self.browse = BrowseStatus::Loading;
        }
    }

    /// Ends a browse. `None` means the dialog was cancelled.
    pub fn finish_browse(&mut self, text: Option<String>) {
        if let Some(text) = text {
            self.text = Some(text);
        }
        self.browse = BrowseStatus::Idle;
    }

    /// What Copy would place on the clipboard, if anything.
    pub fn copy_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn clear_text(&mut self) {
        self.text = None;
    }
}
