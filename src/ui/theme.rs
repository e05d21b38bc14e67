use egui::{Button, Color32, RichText, Stroke, Vec2};

use crate::foundation::core::Rgba8;

pub(crate) const PRIMARY: Color32 = Color32::from_rgb(59, 130, 246);
pub(crate) const SECONDARY: Color32 = Color32::from_rgb(147, 197, 253);
pub(crate) const TEXT_DARK: Color32 = Color32::from_rgb(17, 24, 39);
pub(crate) const BG_LIGHT: Color32 = Color32::from_rgb(249, 250, 251);
pub(crate) const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub(crate) const CARD_BORDER: Color32 = Color32::from_rgb(229, 231, 235);

pub(crate) fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = BG_LIGHT;
    visuals.selection.bg_fill = SECONDARY;
    visuals.selection.stroke = Stroke::new(1.0, PRIMARY);
    visuals.hyperlink_color = PRIMARY;
    ctx.set_visuals(visuals);
}

pub(crate) fn color32(c: Rgba8) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

pub(crate) fn primary_button(text: &str) -> Button<'static> {
    Button::new(RichText::new(text).strong().size(16.0).color(Color32::WHITE))
        .fill(PRIMARY)
        .min_size(Vec2::new(160.0, 36.0))
}

pub(crate) fn swatch_button(color: Rgba8, selected: bool) -> Button<'static> {
    let stroke = if selected {
        Stroke::new(3.0, SUCCESS)
    } else {
        Stroke::new(1.0, CARD_BORDER)
    };
    Button::new("")
        .fill(color32(color))
        .stroke(stroke)
        .min_size(Vec2::new(30.0, 30.0))
}
