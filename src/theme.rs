//! Theme management for the application.
//!
//! Each [`ThemeKind`] maps to a fixed five-color [`Palette`]; the egui
//! [`Visuals`](egui::Visuals) handed to the context are derived from it.

use eframe::egui::{self, Color32};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
}

/// The five colors a theme is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color32,
    pub secondary: Color32,
    pub background: Color32,
    pub text: Color32,
    pub button_active: Color32,
}

const LIGHT: Palette = Palette {
    primary: Color32::from_rgb(0x12, 0x9B, 0xA3),
    secondary: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    background: Color32::from_rgb(0xF0, 0xF0, 0xF0),
    text: Color32::from_rgb(0x00, 0x00, 0x00),
    button_active: Color32::from_rgb(0x11, 0x7A, 0x8A),
};

const DARK: Palette = Palette {
    primary: Color32::from_rgb(0x1E, 0x1E, 0x1E),
    secondary: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    background: Color32::from_rgb(0x2E, 0x2E, 0x2E),
    text: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    button_active: Color32::from_rgb(0x33, 0x33, 0x33),
};

impl ThemeKind {
    pub fn palette(self) -> Palette {
        match self {
            ThemeKind::Light => LIGHT,
            ThemeKind::Dark => DARK,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeKind::Light => ThemeKind::Dark,
            ThemeKind::Dark => ThemeKind::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeKind::Light => "light",
            ThemeKind::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub kind: ThemeKind,
    pub palette: Palette,
    pub visuals: egui::Visuals,
}

impl Theme {
    pub fn from_kind(kind: ThemeKind) -> Self {
        let palette = kind.palette();
        Self {
            kind,
            palette,
            visuals: visuals_for(kind, &palette),
        }
    }
}

fn visuals_for(kind: ThemeKind, palette: &Palette) -> egui::Visuals {
    let mut visuals = match kind {
        ThemeKind::Light => egui::Visuals::light(),
        ThemeKind::Dark => egui::Visuals::dark(),
    };

    visuals.override_text_color = Some(palette.text);
    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.background;
    // TextEdit background
    visuals.extreme_bg_color = palette.background;

    visuals.widgets.active.bg_fill = palette.button_active;
    visuals.widgets.active.weak_bg_fill = palette.button_active;
    visuals.widgets.hovered.weak_bg_fill = palette.button_active;
    visuals.selection.bg_fill = palette.primary;

    visuals
}

pub fn initial_theme() -> Theme {
    Theme::from_kind(ThemeKind::default())
}

/// Formats a color as `#RRGGBB`, ignoring alpha.
pub fn hex(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_palette_matches_table() {
        let p = ThemeKind::Light.palette();
        assert_eq!(hex(p.primary), "#129BA3");
        assert_eq!(hex(p.secondary), "#FFFFFF");
        assert_eq!(hex(p.background), "#F0F0F0");
        assert_eq!(hex(p.text), "#000000");
        assert_eq!(hex(p.button_active), "#117A8A");
    }

    #[test]
    fn dark_palette_matches_table() {
        let p = ThemeKind::Dark.palette();
        assert_eq!(hex(p.primary), "#1E1E1E");
        assert_eq!(hex(p.background), "#2E2E2E");
        assert_eq!(hex(p.text), "#FFFFFF");
        assert_eq!(hex(p.button_active), "#333333");
    }

    #[test]
    fn toggling_twice_is_identity() {
        for kind in [ThemeKind::Light, ThemeKind::Dark] {
            assert_ne!(kind.toggled(), kind);
            assert_eq!(kind.toggled().toggled(), kind);
        }
    }

    #[test]
    fn visuals_follow_palette() {
        let theme = Theme::from_kind(ThemeKind::Dark);
        assert_eq!(theme.visuals.panel_fill, DARK.background);
        assert_eq!(theme.visuals.override_text_color, Some(DARK.text));
        assert!(theme.visuals.dark_mode);
        assert!(!initial_theme().visuals.dark_mode);
    }
}
