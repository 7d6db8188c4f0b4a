//! Conversions between kurbo layout geometry and egui screen geometry.

use egui::{Pos2, Rect, pos2};

pub(crate) fn to_egui_rect(rect: kurbo::Rect) -> Rect {
    Rect::from_min_max(
        pos2(rect.x0 as f32, rect.y0 as f32),
        pos2(rect.x1 as f32, rect.y1 as f32),
    )
}

pub(crate) fn to_egui_pos(point: kurbo::Point) -> Pos2 {
    pos2(point.x as f32, point.y as f32)
}

pub(crate) fn to_kurbo_rect(rect: Rect) -> kurbo::Rect {
    kurbo::Rect::new(
        rect.min.x as f64,
        rect.min.y as f64,
        rect.max.x as f64,
        rect.max.y as f64,
    )
}

pub(crate) fn to_kurbo_point(pos: Pos2) -> kurbo::Point {
    kurbo::Point::new(pos.x as f64, pos.y as f64)
}
