//! Checkerboard dither overlays.
//!
//! Selections and hover states are drawn as a pixel checkerboard rather than
//! a solid fill, so the row's text stays readable underneath.

use egui::{Color32, Painter, Pos2, Rect};

/// Pixel origins of a checkerboard covering `rect`.
/// `density` 1 fills every other pixel; larger values spread the dots out.
pub fn dither_points(rect: Rect, density: u32) -> Vec<Pos2> {
    let density = density.max(1) as i32;

    // ceil the start and floor the end so every point lies inside rect
    let x0 = rect.min.x.ceil() as i32;
    let y0 = rect.min.y.ceil() as i32;
    let x1 = rect.max.x.floor() as i32;
    let y1 = rect.max.y.floor() as i32;
    if x0 >= x1 || y0 >= y1 {
        return Vec::new();
    }

    let y_step = density;
    let x_step = density * 2;

    let mut points = Vec::new();
    let mut y = y0;
    while y < y1 {
        let row_offset = if ((y - y0) / density) % 2 == 0 { 0 } else { density };
        let mut x = x0 + row_offset;
        while x < x1 {
            points.push(Pos2::new(x as f32, y as f32));
            x += x_step;
        }
        y += y_step;
    }
    points
}

pub fn draw_dither_rect(painter: &Painter, rect: Rect, color: Color32, density: u32) {
    let pixel = egui::Vec2::splat(1.0);
    for p in dither_points(rect, density) {
        painter.rect_filled(Rect::from_min_size(p, pixel), 0.0, color);
    }
}

/// Tight 1px checkerboard for the selected row.
pub fn draw_dither_selection(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::BLACK, 1);
}

/// Sparser pattern for hover.
pub fn draw_dither_hover(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::BLACK, 2);
}

/// Offset dithered drop shadow behind a dialog window.
/// Call after `egui::Window::show()` with the window's rect.
pub fn draw_window_shadow(ctx: &egui::Context, window_rect: Rect) {
    let shadow_rect = window_rect.translate(egui::vec2(4.0, 4.0));
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::PanelResizeLine,
        egui::Id::new("dither_shadows"),
    ));
    draw_dither_rect(&painter, shadow_rect, Color32::BLACK, 2);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Rect {
        Rect::from_min_max(Pos2::new(x0, y0), Pos2::new(x1, y1))
    }

    #[test]
    fn test_checkerboard_covers_half() {
        let points = dither_points(rect(0.0, 0.0, 4.0, 4.0), 1);
        assert_eq!(points.len(), 8);
        // rows alternate their starting column
        assert!(points.contains(&Pos2::new(0.0, 0.0)));
        assert!(points.contains(&Pos2::new(1.0, 1.0)));
        assert!(!points.contains(&Pos2::new(0.0, 1.0)));
    }

    #[test]
    fn test_points_stay_inside() {
        let r = rect(0.5, 0.5, 10.2, 6.7);
        for p in dither_points(r, 2) {
            assert!(r.contains(p), "{:?} escaped {:?}", p, r);
        }
    }

    #[test]
    fn test_degenerate_rect() {
        assert!(dither_points(rect(3.0, 3.0, 3.0, 9.0), 1).is_empty());
        assert!(dither_points(rect(0.2, 0.2, 0.8, 0.8), 1).is_empty());
    }
}
