//! Fixed-width segmented picker with a sliding highlight.

use std::fmt::Debug;
use std::hash::Hash;

use egui::epaint::Shadow;
use egui::{CornerRadius, CursorIcon, Id, Response, Sense, Ui, Widget, WidgetText, vec2};
use segmenta_core::{
    BadgeSet, HighlightTransition, OptionSet, SelectionModel, fixed_row, segment_states,
};

use crate::geometry::{to_egui_rect, to_kurbo_point};
use crate::paint::{label_galley, paint_badge, paint_label};
use crate::style::PickerStyle;

/// Per-instance state kept in egui memory between frames.
#[derive(Clone, Debug, Default)]
pub(crate) struct PickerState {
    pub(crate) highlight: HighlightTransition,
    /// Segment highlighted last frame.
    pub(crate) selected: Option<usize>,
    badges_checked: bool,
    /// Set while the track geometry is rejected, so the warning is logged once.
    pub(crate) geometry_rejected: bool,
}

/// A row of equal-width segments inside a fixed-width track.
///
/// The selected segment sits on a tinted rounded rectangle that slides to
/// the new segment when the selection changes. Eligible segments show a
/// badge dot while they are not selected.
pub struct SegmentedPicker<'a, T, F> {
    id_salt: Id,
    selection: &'a mut SelectionModel<T>,
    options: &'a OptionSet<T>,
    badges: Option<&'a BadgeSet<T>>,
    width: Option<f32>,
    style: PickerStyle,
    label: F,
}

impl<'a, T, F, L> SegmentedPicker<'a, T, F>
where
    T: Clone + PartialEq + Debug,
    F: FnMut(&T) -> L,
    L: Into<WidgetText>,
{
    /// Create a picker over `options`, rendering each label with `label`.
    pub fn new(
        id_salt: impl Hash,
        selection: &'a mut SelectionModel<T>,
        options: &'a OptionSet<T>,
        label: F,
    ) -> Self {
        Self {
            id_salt: Id::new(id_salt),
            selection,
            options,
            badges: None,
            width: None,
            style: PickerStyle::default(),
            label,
        }
    }

    /// Options that show a badge while unselected.
    pub fn badges(mut self, badges: &'a BadgeSet<T>) -> Self {
        self.badges = Some(badges);
        self
    }

    /// Width of the segment row (defaults to the available width).
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn style(mut self, style: PickerStyle) -> Self {
        self.style = style;
        self
    }

    /// Show the picker. The response is marked changed when a tap wrote the selection.
    pub fn show(mut self, ui: &mut Ui) -> Response {
        let metrics = self.style.metrics;
        let padding = metrics.track_padding as f32;
        let width = self
            .width
            .unwrap_or_else(|| ui.available_width() - 2.0 * padding);

        let outer_size = vec2(width.max(0.0) + 2.0 * padding, metrics.outer_height() as f32);
        let (outer, mut response) = ui.allocate_exact_size(outer_size, Sense::hover());
        let track = outer.shrink(padding);

        let id = ui.make_persistent_id(self.id_salt);
        let mut state = ui
            .memory(|m| m.data.get_temp::<PickerState>(id))
            .unwrap_or_default();

        let segments = match fixed_row(
            to_kurbo_point(track.min),
            width as f64,
            metrics.height,
            self.options.len(),
        ) {
            Ok(segments) => {
                state.geometry_rejected = false;
                segments
            }
            Err(err) => {
                if !state.geometry_rejected {
                    log::warn!("Segmented picker not drawn: {}", err);
                    state.geometry_rejected = true;
                }
                ui.memory_mut(|m| m.data.insert_temp(id, state));
                return response;
            }
        };

        let empty = BadgeSet::default();
        let badges = self.badges.unwrap_or(&empty);
        if !state.badges_checked {
            for option in badges.unknown_members(self.options) {
                log::debug!("Badge for {:?} ignored: not one of the picker's options", option);
            }
            state.badges_checked = true;
        }

        // Taps
        for (index, segment) in segments.iter().enumerate() {
            let segment_response = ui.interact(to_egui_rect(*segment), id.with(index), Sense::click());
            if segment_response.clicked() {
                if let Some(option) = self.options.get(index) {
                    self.selection.set(option.clone());
                    response.mark_changed();
                }
            }
            segment_response.on_hover_cursor(CursorIcon::PointingHand);
        }

        let now = ui.input(|i| i.time);
        let selected = self.options.index_of(self.selection.get());
        match selected.and_then(|index| segments.get(index).copied()) {
            Some(rect) => {
                let moved = state.selected != selected;
                state.highlight.sync(rect, moved, now, self.style.transition);
            }
            None => state.highlight.reset(),
        }
        state.selected = selected;

        if ui.is_rect_visible(outer) {
            let painter = ui.painter();

            painter.rect_filled(
                outer,
                CornerRadius::same(metrics.track_corner_radius as u8),
                self.style.background,
            );

            if let Some(rect) = state.highlight.rect_at(now) {
                let rect = to_egui_rect(rect);
                let radius = CornerRadius::same(metrics.highlight_corner_radius as u8);
                let shadow = Shadow {
                    offset: [0, 0],
                    blur: 2,
                    spread: 0,
                    color: self.style.shadow,
                };
                painter.add(shadow.as_shape(rect, radius));
                painter.rect_filled(rect, radius, self.style.tint);
            }

            let states = segment_states(self.options, badges, self.selection.get());
            for ((segment, option), segment_state) in segments.iter().zip(self.options).zip(&states) {
                let rect = to_egui_rect(*segment);
                let color = if segment_state.selected {
                    self.style.selected_text
                } else {
                    self.style.text
                };

                let galley = label_galley(ui, (self.label)(option).into(), metrics.font_size as f32);
                let label_rect = rect.shrink2(vec2(
                    metrics.label_padding_x as f32,
                    metrics.label_padding_y as f32,
                ));
                paint_label(painter, label_rect, galley, color);

                if segment_state.badge {
                    paint_badge(painter, rect, metrics.badge_diameter as f32, self.style.badge);
                }
            }
        }

        if state.highlight.is_animating(now) {
            ui.ctx().request_repaint();
        }

        ui.memory_mut(|m| m.data.insert_temp(id, state));
        response
    }
}

impl<T, F, L> Widget for SegmentedPicker<'_, T, F>
where
    T: Clone + PartialEq + Debug,
    F: FnMut(&T) -> L,
    L: Into<WidgetText>,
{
    fn ui(self, ui: &mut Ui) -> Response {
        self.show(ui)
    }
}
