use eframe::egui::{self, RichText};

use crate::ui::view::ButtonView;

pub fn themed_button(ui: &mut egui::Ui, view: &ButtonView, min_size: egui::Vec2) -> egui::Response {
    ui.scope(|ui| {
        let widgets = &mut ui.visuals_mut().widgets;
        widgets.inactive.weak_bg_fill = view.fill;
        widgets.hovered.weak_bg_fill = view.fill;
        widgets.active.weak_bg_fill = view.active_fill;

        let button = egui::Button::new(RichText::new(view.label).color(view.text_color))
            .min_size(min_size);
        ui.add(button)
    })
    .inner
}

pub fn centered_button(
    ui: &mut egui::Ui,
    view: &ButtonView,
    button_width: f32,
) -> egui::Response {
    ui.vertical_centered(|ui| themed_button(ui, view, egui::vec2(button_width, 0.0)))
        .inner
}
