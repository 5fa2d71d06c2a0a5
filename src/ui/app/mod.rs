pub mod state;

use std::path::PathBuf;

use eframe::egui::{self, RichText, Vec2};
use tracing::info;

use crate::config::AppConfig;
use crate::pdf;
use crate::theme::{self, Theme};
use crate::ui::icons::load_logo_texture;
use crate::ui::util::{centered_button, themed_button};
use crate::ui::view::{TextPanelView, WindowView};

use self::state::{AppState, BrowseStatus};

const THEME_TOGGLE_SIZE: Vec2 = egui::vec2(32.0, 24.0);
const COPY_BUTTON_WIDTH: f32 = 80.0;

/// Clicks collected while painting, applied once the frame's UI is built.
#[derive(Default)]
struct Actions {
    toggle_theme: bool,
    browse: bool,
    clear: bool,
    copy: bool,
}

pub struct PdfTextApp {
    config: AppConfig,
    state: AppState,
    theme: Theme,
    logo: egui::TextureHandle,
    window_size: Vec2,
}

impl PdfTextApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, logo_bytes: &[u8]) -> Self {
        let logo = load_logo_texture(&cc.egui_ctx, logo_bytes);
        let state = AppState::new(&config);
        let window_size = config.compact_size;

        Self {
            config,
            state,
            theme: theme::initial_theme(),
            logo,
            window_size,
        }
    }

    /// Blocking: shows the file dialog, then extracts the requested pages.
    fn browse(&mut self) {
        load_picked(&mut self.state, pdf_dialog().pick_file());
    }

    fn copy(&self, ctx: &egui::Context) {
        if let Some(text) = self.state.copy_text() {
            info!("Copying {} characters to the clipboard", text.chars().count());
            ctx.output_mut(|o| o.copied_text = text.to_owned());
        }
    }

    fn sync_theme(&mut self, ctx: &egui::Context) {
        if self.theme.kind != self.state.theme {
            self.theme = Theme::from_kind(self.state.theme);
            info!(
                "Theme switched to {} (background {})",
                self.theme.kind.name(),
                theme::hex(self.theme.palette.background)
            );
        }
        ctx.set_visuals(self.theme.visuals.clone());
    }

    fn sync_window_size(&mut self, ctx: &egui::Context, view: &WindowView) {
        if self.window_size != view.window_size {
            info!("Layout {:?}, resizing window to {:?}", view.layout, view.window_size);
            self.window_size = view.window_size;
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(view.window_size));
        }
    }
}

/// Single-file picker restricted to `.pdf`.
fn pdf_dialog() -> rfd::FileDialog {
    rfd::FileDialog::new()
        .set_title("Choose a file")
        .add_filter("Pdf file", &["pdf"])
}

/// Ends a browse with the dialog's answer; `None` is a cancel.
fn load_picked(state: &mut AppState, picked: Option<PathBuf>) {
    let text = match picked {
        Some(path) => {
            info!("Selected {}", path.display());
            let result = pdf::extract_file(&path, &state.page_range_input);
            Some(pdf::display_text(result))
        }
        None => {
            info!("File selection cancelled");
            None
        }
    };
    state.finish_browse(text);
}

fn draw_controls(
    ui: &mut egui::Ui,
    view: &WindowView,
    config: &AppConfig,
    logo: &egui::TextureHandle,
    page_range_input: &mut String,
    actions: &mut Actions,
) {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
        if themed_button(ui, &view.theme_toggle, THEME_TOGGLE_SIZE)
            .on_hover_text("Toggle theme")
            .clicked()
        {
            actions.toggle_theme = true;
        }
    });

    ui.vertical_centered(|ui| {
        ui.image((logo.id(), config.logo_size));
        ui.add_space(10.0);
        ui.label(RichText::new(view.instructions).size(16.0).color(view.text_color));
    });

    ui.add_space(15.0);

    ui.horizontal(|ui| {
        ui.add_space(config.page_range_width);
        ui.label(RichText::new(view.page_range_label).color(view.text_color));
        ui.add(
            egui::TextEdit::singleline(page_range_input)
                .desired_width(config.page_range_width)
                .text_color(view.text_color),
        );
    });

    ui.add_space(10.0);

    ui.horizontal(|ui| {
        ui.add_space(config.page_range_width);
        if themed_button(ui, &view.browse, config.button_size).clicked() {
            actions.browse = true;
        }
        if themed_button(ui, &view.clear, config.button_size).clicked() {
            actions.clear = true;
        }
    });
}

fn draw_text_panel(
    ui: &mut egui::Ui,
    panel: &TextPanelView,
    max_height: f32,
    text: &mut String,
    actions: &mut Actions,
) {
    ui.vertical(|ui| {
        ui.set_width(panel.width);
        egui::Frame::none().fill(panel.background).show(ui, |ui| {
            egui::ScrollArea::vertical()
                .max_height(max_height)
                .show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(text)
                            .desired_rows(panel.rows)
                            .desired_width(panel.width)
                            .text_color(panel.text_color),
                    );
                });
        });
        ui.add_space(5.0);
        if centered_button(ui, &panel.copy, COPY_BUTTON_WIDTH).clicked() {
            actions.copy = true;
        }
    });
}

impl eframe::App for PdfTextApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The previous frame showed "Loading...", so blocking here is fine
        if self.state.browse == BrowseStatus::Loading {
            self.browse();
        }
        let browse_was_requested = self.state.browse == BrowseStatus::Requested;

        // Visuals first, the view reads the same theme
        self.sync_theme(ctx);
        let view = WindowView::compose(&self.state, &self.config);
        self.sync_window_size(ctx, &view);

        // Paint
        let mut actions = Actions::default();
        let controls_width = self.config.compact_size.x - 20.0;
        let panel_height = self.config.expanded_size.y - 60.0;
        let Self {
            config,
            state,
            logo,
            ..
        } = self;

        let frame = egui::Frame::central_panel(&ctx.style()).fill(view.background);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.horizontal_top(|ui| {
                ui.vertical(|ui| {
                    ui.set_width(controls_width);
                    draw_controls(ui, &view, config, logo, &mut state.page_range_input, &mut actions);
                });

                if let (Some(panel), Some(text)) = (&view.text_panel, state.text.as_mut()) {
                    ui.separator();
                    draw_text_panel(ui, panel, panel_height, text, &mut actions);
                }
            });
        });

        // Apply clicks
        if actions.toggle_theme {
            self.state.toggle_theme();
        }
        if actions.copy {
            self.copy(ctx);
        }
        if actions.clear {
            info!("Clearing extracted text");
            self.state.clear_text();
        }
        if actions.browse {
            self.state.request_browse();
        }

        // "Loading..." is on screen now, open the dialog next frame
        if browse_was_requested {
            self.state.advance_browse();
        }
        if self.state.browse != BrowseStatus::Idle || actions.toggle_theme || actions.clear {
            ctx.request_repaint();
        }
    }
}
