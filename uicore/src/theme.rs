//! Browser theme: black on white
//!
//! No grays except the text selection highlight. 1px black outlines,
//! square corners, no soft shadows.

use egui::epaint::Shadow;
use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;

/// Black and white, plus the grey used for text selection.
pub struct Palette;

impl Palette {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
    /// Used only for highlighted text inside editable/viewer text areas.
    pub const TEXT_SELECTION: Color32 = Color32::from_rgb(160, 160, 160);
}

/// Sizes for the browser window. Colors are fixed by [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrowserTheme {
    pub text_size: f32,
    pub heading_size: f32,
    pub caption_size: f32,
    pub margin: f32,
    pub gap: f32,
}

impl Default for BrowserTheme {
    fn default() -> Self {
        Self {
            text_size: 14.0,
            heading_size: 20.0,
            caption_size: 11.0,
            margin: 8.0,
            gap: 4.0,
        }
    }
}

impl BrowserTheme {
    /// Install the style on `ctx`. Fonts stay egui's bundled ones.
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_style(self.style());
    }

    pub fn style(&self) -> Style {
        let mut style = Style {
            text_styles: self.text_styles(),
            visuals: outlined_visuals(),
            ..Style::default()
        };
        style.spacing.window_margin = egui::Margin::same(self.margin);
        style.spacing.item_spacing = egui::vec2(self.gap, self.gap);
        style.spacing.button_padding = egui::vec2(2.0 * self.gap, self.gap);
        style
    }

    fn text_styles(&self) -> BTreeMap<TextStyle, FontId> {
        let sans = |size| FontId::new(size, FontFamily::Proportional);
        BTreeMap::from([
            (TextStyle::Small, sans(self.caption_size)),
            (TextStyle::Body, sans(self.text_size)),
            (TextStyle::Button, sans(self.text_size)),
            (TextStyle::Heading, sans(self.heading_size)),
            // file content reads better a notch smaller than labels
            (TextStyle::Monospace, FontId::new(self.text_size - 1.0, FontFamily::Monospace)),
        ])
    }
}

fn outline() -> Stroke {
    Stroke::new(1.0, Palette::BLACK)
}

/// White fills, black 1px outlines, square corners, and no blurred
/// shadows (windows get a dithered one from `dither`).
fn outlined_visuals() -> Visuals {
    let mut visuals = Visuals::light();
    for fill in [
        &mut visuals.window_fill,
        &mut visuals.panel_fill,
        &mut visuals.faint_bg_color,
        &mut visuals.extreme_bg_color,
    ] {
        *fill = Palette::WHITE;
    }
    visuals.window_stroke = outline();
    visuals.window_rounding = Rounding::ZERO;
    visuals.menu_rounding = Rounding::ZERO;
    visuals.window_shadow = Shadow::NONE;
    visuals.popup_shadow = Shadow::NONE;

    let widgets = &mut visuals.widgets;
    for state in [
        &mut widgets.noninteractive,
        &mut widgets.inactive,
        &mut widgets.hovered,
        &mut widgets.active,
        &mut widgets.open,
    ] {
        state.bg_fill = Palette::WHITE;
        state.weak_bg_fill = Palette::WHITE;
        state.bg_stroke = outline();
        state.fg_stroke = outline();
        state.rounding = Rounding::ZERO;
    }

    visuals.selection.bg_fill = Palette::TEXT_SELECTION;
    visuals.selection.stroke = outline();
    visuals
}

/// Framed horizontal strip for the top menu.
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(Palette::WHITE)
        .stroke(Stroke::new(1.0, Palette::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner);
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}

/// Strip Tab and Cmd+/- before widgets see them.
/// Tab would cycle focus into the menu; Cmd+/- would zoom the whole UI.
pub fn consume_special_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| {
            !matches!(
                event,
                egui::Event::Key { key: egui::Key::Tab, .. }
            ) && !matches!(
                event,
                egui::Event::Key { key, modifiers, .. }
                    if modifiers.command
                        && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals)
            )
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_is_outlined_black_on_white() {
        let style = BrowserTheme::default().style();
        let v = &style.visuals;
        assert_eq!(v.panel_fill, Palette::WHITE);
        assert_eq!(v.window_rounding, Rounding::ZERO);
        assert_eq!(v.window_shadow, Shadow::NONE);
        assert_eq!(v.widgets.hovered.bg_fill, Palette::WHITE);
        assert_eq!(v.widgets.inactive.bg_stroke, Stroke::new(1.0, Palette::BLACK));
        assert_eq!(v.selection.bg_fill, Palette::TEXT_SELECTION);
    }

    #[test]
    fn test_text_sizes_follow_theme() {
        let theme = BrowserTheme { text_size: 16.0, ..BrowserTheme::default() };
        let style = theme.style();
        assert_eq!(style.text_styles[&TextStyle::Body].size, 16.0);
        assert_eq!(style.text_styles[&TextStyle::Monospace].size, 15.0);
        assert_eq!(style.text_styles[&TextStyle::Heading].size, 20.0);
        assert_eq!(style.spacing.button_padding, egui::vec2(8.0, 4.0));
    }
}
