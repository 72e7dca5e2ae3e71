//! Widgets for the browser window: outlined, dithered when active

use crate::dither;
use crate::theme::Palette;
use egui::{Response, Ui, Widget};

/// Width reserved for the size and modified columns of an [`EntryRow`].
pub const SIZE_COLUMN_WIDTH: f32 = 80.0;
pub const MODIFIED_COLUMN_WIDTH: f32 = 120.0;
pub const ROW_HEIGHT: f32 = 18.0;

/// Outlined action button. Dithered while pressed.
pub struct ActionButton<'a> {
    text: &'a str,
    enabled: bool,
}

impl<'a> ActionButton<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, enabled: true }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl<'a> Widget for ActionButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let font = egui::FontId::proportional(13.0);
        let galley = ui.painter().layout_no_wrap(self.text.to_string(), font.clone(), Palette::BLACK);
        let desired_size = egui::vec2(
            galley.size().x + 24.0,
            ui.spacing().interact_size.y,
        );
        let sense = if self.enabled { egui::Sense::click() } else { egui::Sense::hover() };
        let (rect, response) = ui.allocate_exact_size(desired_size, sense);

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, Palette::WHITE);
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, Palette::BLACK));

            let pressed = self.enabled && response.is_pointer_button_down_on();
            if pressed {
                dither::draw_dither_selection(painter, rect);
            } else if self.enabled && response.hovered() {
                dither::draw_dither_hover(painter, rect);
            }

            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.text,
                font,
                if pressed { Palette::WHITE } else { Palette::BLACK },
            );

            // no grays: a disabled label is faded with a white dither
            if !self.enabled {
                dither::draw_dither_rect(painter, rect.shrink(1.0), Palette::WHITE, 1);
            }
        }

        response
    }
}

/// One line of the directory listing: icon + name, size, modified.
pub struct EntryRow<'a> {
    icon: &'a str,
    name: &'a str,
    size: &'a str,
    modified: &'a str,
    selected: bool,
}

impl<'a> EntryRow<'a> {
    pub fn new(icon: &'a str, name: &'a str) -> Self {
        Self { icon, name, size: "", modified: "", selected: false }
    }

    pub fn size(mut self, size: &'a str) -> Self {
        self.size = size;
        self
    }

    pub fn modified(mut self, modified: &'a str) -> Self {
        self.modified = modified;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl<'a> Widget for EntryRow<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let total_w = ui.available_width();
        let name_w = (total_w - SIZE_COLUMN_WIDTH - MODIFIED_COLUMN_WIDTH).max(60.0);
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(total_w, ROW_HEIGHT),
            egui::Sense::click(),
        );

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, Palette::WHITE);

            let text_color = if self.selected {
                dither::draw_dither_selection(painter, rect);
                Palette::WHITE
            } else {
                if response.hovered() {
                    dither::draw_dither_hover(painter, rect);
                }
                Palette::BLACK
            };

            // clip the name so long names don't run into the size column
            let name_rect = egui::Rect::from_min_size(rect.min, egui::vec2(name_w, ROW_HEIGHT));
            painter.with_clip_rect(name_rect).text(
                egui::pos2(rect.min.x + 4.0, rect.center().y),
                egui::Align2::LEFT_CENTER,
                format!("{} {}", self.icon, self.name),
                egui::FontId::proportional(12.0),
                text_color,
            );
            painter.text(
                egui::pos2(rect.min.x + name_w + 4.0, rect.center().y),
                egui::Align2::LEFT_CENTER,
                self.size,
                egui::FontId::proportional(11.0),
                text_color,
            );
            painter.text(
                egui::pos2(rect.min.x + name_w + SIZE_COLUMN_WIDTH + 4.0, rect.center().y),
                egui::Align2::LEFT_CENTER,
                self.modified,
                egui::FontId::proportional(11.0),
                text_color,
            );
        }

        response
    }
}

/// Header row matching the columns of [`EntryRow`].
pub fn entry_header(ui: &mut Ui) {
    let total_w = ui.available_width();
    let name_w = (total_w - SIZE_COLUMN_WIDTH - MODIFIED_COLUMN_WIDTH).max(60.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(total_w, 20.0), egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    let stroke = egui::Stroke::new(1.0, Palette::BLACK);
    painter.rect_filled(rect, 0.0, Palette::WHITE);
    painter.rect_stroke(rect, 0.0, stroke);

    let columns = [
        ("name", rect.min.x, name_w),
        ("size", rect.min.x + name_w, SIZE_COLUMN_WIDTH),
        ("modified", rect.min.x + name_w + SIZE_COLUMN_WIDTH, MODIFIED_COLUMN_WIDTH),
    ];
    for (label, x, w) in columns {
        let col = egui::Rect::from_min_size(egui::pos2(x, rect.min.y), egui::vec2(w, rect.height()));
        painter.rect_stroke(col, 0.0, stroke);
        painter.text(
            egui::pos2(col.min.x + 4.0, col.center().y),
            egui::Align2::LEFT_CENTER,
            label,
            egui::FontId::proportional(12.0),
            Palette::BLACK,
        );
    }
}

/// Status bar: white bg, 1px black border
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(Palette::WHITE)
        .stroke(egui::Stroke::new(1.0, Palette::BLACK))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(text);
        });
}

/// A fixed, non-collapsible dialog window in the browser's style.
pub fn dialog<'a>(title: impl Into<egui::WidgetText>) -> egui::Window<'a> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(280.0)
}

/// "key   description" line for the shortcuts window.
pub fn shortcut_row(ui: &mut Ui, shortcut: &str, description: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(shortcut).monospace().strong());
        ui.add_space(20.0);
        ui.label(description);
    });
}
