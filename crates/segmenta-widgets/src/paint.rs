//! Painting helpers shared by the picker and the tab bar.

use std::sync::Arc;

use egui::{
    Align2, Color32, FontId, FontSelection, Galley, Painter, Rect, TextWrapMode, Ui, WidgetText,
};
use segmenta_core::badge_circle;

use crate::geometry::{to_egui_pos, to_kurbo_rect};

/// Lay out a segment label on a single line.
pub(crate) fn label_galley(ui: &Ui, text: WidgetText, font_size: f32) -> Arc<Galley> {
    text.into_galley(
        ui,
        Some(TextWrapMode::Extend),
        f32::INFINITY,
        FontSelection::FontId(FontId::proportional(font_size)),
    )
}

/// Paint a label centered in `rect`, clipped to it.
pub(crate) fn paint_label(painter: &Painter, rect: Rect, galley: Arc<Galley>, color: Color32) {
    let clip = rect.intersect(painter.clip_rect());
    if !clip.is_positive() {
        return;
    }
    let pos = Align2::CENTER_CENTER
        .align_size_within_rect(galley.size(), rect)
        .min;
    painter.with_clip_rect(clip).galley(pos, galley, color);
}

/// Paint the badge dot in the top-trailing corner of `content`.
pub(crate) fn paint_badge(painter: &Painter, content: Rect, diameter: f32, color: Color32) {
    let circle = badge_circle(to_kurbo_rect(content), diameter as f64);
    painter.circle_filled(to_egui_pos(circle.center), circle.radius as f32, color);
}
