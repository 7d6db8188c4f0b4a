//! Horizontally scrolling tab bar with an accent bar on the selected tab.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use egui::{CornerRadius, CursorIcon, Galley, Id, Response, Sense, Ui, Widget, WidgetText, vec2};
use segmenta_core::{
    BadgeSet, BorderPlacement, OptionSet, Overscroll, ScrollViewport, SelectionModel, TabSizing,
    Transition, accent_bar, content_area, natural_row, row_width, segment_states, tab_widths,
};

use crate::geometry::to_egui_rect;
use crate::paint::{label_galley, paint_badge, paint_label};
use crate::style::TabBarStyle;

/// Per-instance state kept in egui memory between frames.
#[derive(Clone, Debug, Default)]
pub(crate) struct TabBarState {
    pub(crate) viewport: ScrollViewport,
    /// Selection generation the viewport last scrolled for.
    pub(crate) seen_generation: Option<u64>,
    badges_checked: bool,
    /// Set while the tab widths are rejected, so the warning is logged once.
    pub(crate) geometry_rejected: bool,
}

/// A row of tabs in a horizontally scrolling viewport.
///
/// The selected tab is marked by a tinted bar on its top or bottom edge.
/// Whenever the selection is written, by a tap or by host code, the
/// viewport scrolls the selected tab into view.
pub struct SegmentedTabBar<'a, T, F> {
    id_salt: Id,
    selection: &'a mut SelectionModel<T>,
    options: &'a OptionSet<T>,
    badges: Option<&'a BadgeSet<T>>,
    sizing: TabSizing,
    style: TabBarStyle,
    label: F,
}

impl<'a, T, F, L> SegmentedTabBar<'a, T, F>
where
    T: Clone + PartialEq + Debug,
    F: FnMut(&T) -> L,
    L: Into<WidgetText>,
{
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
            sizing: TabSizing::default(),
            style: TabBarStyle::default(),
            label,
        }
    }

    /// Options that show a badge while unselected.
    pub fn badges(mut self, badges: &'a BadgeSet<T>) -> Self {
        self.badges = Some(badges);
        self
    }

    pub fn sizing(mut self, sizing: TabSizing) -> Self {
        self.sizing = sizing;
        self
    }

    /// Equal-width tabs dividing `reference_width`, without rubber-banding.
    pub fn fixed(self, reference_width: f32) -> Self {
        self.sizing(TabSizing::Fixed {
            reference_width: reference_width as f64,
        })
    }

    /// Edge of the tab that carries the accent bar.
    pub fn border(mut self, border: BorderPlacement) -> Self {
        self.style.metrics.border = border;
        self
    }

    pub fn style(mut self, style: TabBarStyle) -> Self {
        self.style = style;
        self
    }

    fn overscroll(&self) -> Overscroll {
        self.style.viewport.overscroll.unwrap_or(if self.sizing.is_fixed() {
            Overscroll::Clamped
        } else {
            Overscroll::Elastic
        })
    }

    /// Show the tab bar. The response is marked changed when a tap wrote the selection.
    pub fn show(mut self, ui: &mut Ui) -> Response {
        let metrics = self.style.metrics;
        let viewport_width = ui.available_width().max(0.0);
        let (viewport_rect, mut response) = ui.allocate_exact_size(
            vec2(viewport_width, metrics.segment_height() as f32),
            Sense::drag(),
        );

        let id = ui.make_persistent_id(self.id_salt);
        let mut state = ui
            .memory(|m| m.data.get_temp::<TabBarState>(id))
            .unwrap_or_default();
        let now = ui.input(|i| i.time);

        let font_size = metrics.font_size as f32;
        let galleys: Vec<Arc<Galley>> = self
            .options
            .iter()
            .map(|option| label_galley(ui, (self.label)(option).into(), font_size))
            .collect();
        let natural: Vec<f64> = galleys
            .iter()
            .map(|galley| metrics.natural_width(galley.size().x as f64))
            .collect();
        let widths = match tab_widths(self.sizing, &natural) {
            Ok(widths) => {
                state.geometry_rejected = false;
                widths
            }
            Err(err) => {
                if !state.geometry_rejected {
                    log::warn!("Segmented tab bar not drawn: {}", err);
                    state.geometry_rejected = true;
                }
                ui.memory_mut(|m| m.data.insert_temp(id, state));
                return response;
            }
        };

        // Segment rects in content coordinates (x from the content's leading edge).
        let segments = natural_row(kurbo::Point::ZERO, &widths, metrics.segment_height());

        let empty = BadgeSet::default();
        let badges = self.badges.unwrap_or(&empty);
        if !state.badges_checked {
            for option in badges.unknown_members(self.options) {
                log::debug!("Badge for {:?} ignored: not one of the tab bar's options", option);
            }
            state.badges_checked = true;
        }

        let overscroll = self.overscroll();
        if state.viewport.overscroll() != overscroll {
            state.viewport.set_overscroll(overscroll);
        }
        state
            .viewport
            .set_extent(row_width(&segments), viewport_width as f64);

        // Drag and wheel scrolling
        if response.dragged() {
            state
                .viewport
                .scroll_by(-response.drag_delta().x as f64, now);
        }
        if response.drag_stopped() {
            state.viewport.release(now, Transition::SETTLE);
        }
        if response.hovered() && !response.dragged() {
            let delta = ui.input(|i| i.smooth_scroll_delta);
            let mut amount = -delta.x as f64;
            let vertical = state.viewport.max_offset() > 0.0 && delta.y != 0.0;
            if vertical {
                amount -= delta.y as f64;
            }
            if amount != 0.0 {
                state.viewport.scroll_by(amount, now);
                state.viewport.release(now, Transition::SETTLE);

                // Keep the wheel from also scrolling an enclosing scroll area.
                ui.input_mut(|i| {
                    i.smooth_scroll_delta.x = 0.0;
                    if vertical {
                        i.smooth_scroll_delta.y = 0.0;
                    }
                });
            }
        }

        // Taps, hit-tested where the tabs were drawn last frame
        let shown_offset = state.viewport.offset_at(now);
        let to_screen = |offset: f64| {
            kurbo::Vec2::new(viewport_rect.min.x as f64 - offset, viewport_rect.min.y as f64)
        };
        for (index, segment) in segments.iter().enumerate() {
            let rect = to_egui_rect(*segment + to_screen(shown_offset)).intersect(viewport_rect);
            if !rect.is_positive() {
                continue;
            }
            let tab_response = ui.interact(rect, id.with(index), Sense::click());
            if tab_response.clicked() {
                if let Some(option) = self.options.get(index) {
                    self.selection.set(option.clone());
                    response.mark_changed();
                }
            }
            tab_response.on_hover_cursor(CursorIcon::PointingHand);
        }

        // Scroll the selection into view after every write
        let generation = self.selection.generation();
        if state.seen_generation != Some(generation) {
            if let Some(index) = self.options.index_of(self.selection.get()) {
                let segment = segments[index];
                let transition = state.seen_generation.map(|_| self.style.transition);
                state.viewport.reveal(segment.x0, segment.x1, now, transition);
            }
            state.seen_generation = Some(generation);
        }

        if ui.is_rect_visible(viewport_rect) {
            let painter = ui.painter_at(viewport_rect);
            painter.rect_filled(viewport_rect, CornerRadius::ZERO, self.style.viewport.background);

            let shift = to_screen(state.viewport.offset_at(now));
            let states = segment_states(self.options, badges, self.selection.get());
            for ((segment, galley), segment_state) in segments.iter().zip(galleys).zip(&states) {
                let segment = *segment + shift;
                if !to_egui_rect(segment).intersects(viewport_rect) {
                    continue;
                }

                if segment_state.selected {
                    let bar = accent_bar(segment, metrics.border, metrics.bar_thickness);
                    painter.rect_filled(to_egui_rect(bar), CornerRadius::ZERO, self.style.tint);
                }

                let content = to_egui_rect(content_area(segment, metrics.border, metrics.bar_thickness));
                let color = if segment_state.selected {
                    self.style.tint
                } else {
                    self.style.text
                };
                let label_rect = content.shrink2(vec2(
                    metrics.label_padding_x as f32,
                    metrics.label_padding_y as f32,
                ));
                paint_label(&painter, label_rect, galley, color);

                if segment_state.badge {
                    paint_badge(&painter, content, metrics.badge_diameter as f32, self.style.badge);
                }
            }
        }

        if state.viewport.is_animating(now) {
            ui.ctx().request_repaint();
        }

        ui.memory_mut(|m| m.data.insert_temp(id, state));
        response
    }
}

impl<T, F, L> Widget for SegmentedTabBar<'_, T, F>
where
    T: Clone + PartialEq + Debug,
    F: FnMut(&T) -> L,
    L: Into<WidgetText>,
{
    fn ui(self, ui: &mut Ui) -> Response {
        self.show(ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{
        Context, Event, Modifiers, MouseWheelUnit, PointerButton, Pos2, RawInput, Rect, Vec2, pos2,
    };

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Category {
        Featured,
        Weekly,
        Seasonal,
        Archive,
        Drafts,
        Shared,
        Trash,
    }

    const ALL: [Category; 7] = [
        Category::Featured,
        Category::Weekly,
        Category::Seasonal,
        Category::Archive,
        Category::Drafts,
        Category::Shared,
        Category::Trash,
    ];

    fn label(category: &Category) -> String {
        format!("{:?} category", category)
    }

    fn run_frame(ctx: &Context, time: f64, events: Vec<Event>, mut add: impl FnMut(&mut Ui)) {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(320.0, 200.0))),
            time: Some(time),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add(ui));
        });
    }

    struct Fixture {
        selection: SelectionModel<Category>,
        options: OptionSet<Category>,
        badges: BadgeSet<Category>,
        sizing: TabSizing,
    }

    impl Fixture {
        fn new(sizing: TabSizing) -> Self {
            Self {
                selection: SelectionModel::new(Category::Featured),
                options: OptionSet::new(ALL.to_vec()).unwrap(),
                badges: BadgeSet::new(vec![Category::Featured, Category::Trash]),
                sizing,
            }
        }

        fn frame(&mut self, ctx: &Context, time: f64) -> Id {
            self.frame_with(ctx, time, Vec::new()).0
        }

        /// Show the bar for one frame; returns its state id and viewport rect.
        fn frame_with(&mut self, ctx: &Context, time: f64, events: Vec<Event>) -> (Id, Rect) {
            let mut id = Id::NULL;
            let mut rect = Rect::NOTHING;
            run_frame(ctx, time, events, |ui| {
                id = ui.make_persistent_id(Id::new("categories"));
                rect = SegmentedTabBar::new("categories", &mut self.selection, &self.options, label)
                    .badges(&self.badges)
                    .sizing(self.sizing)
                    .border(BorderPlacement::Top)
                    .show(ui)
                    .rect;
            });
            (id, rect)
        }

        fn tap(&mut self, ctx: &Context, time: f64, pos: Pos2) -> Id {
            self.frame_with(ctx, time, pointer(pos, true));
            self.frame_with(ctx, time + 0.05, pointer(pos, false)).0
        }
    }

    fn pointer(pos: Pos2, pressed: bool) -> Vec<Event> {
        vec![
            Event::PointerMoved(pos),
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                modifiers: Modifiers::NONE,
            },
        ]
    }

    fn bar_state(ctx: &Context, id: Id) -> TabBarState {
        ctx.memory(|m| m.data.get_temp::<TabBarState>(id))
            .expect("tab bar state stored")
    }

    fn store_state(ctx: &Context, id: Id, state: TabBarState) {
        ctx.memory_mut(|m| m.data.insert_temp(id, state));
    }

    #[test]
    fn test_first_frame_reveals_without_animation() {
        let ctx = Context::default();
        let mut fixture = Fixture::new(TabSizing::Intrinsic);
        fixture.selection.set(Category::Trash);
        let id = fixture.frame(&ctx, 0.0);

        let state = bar_state(&ctx, id);
        assert_eq!(state.seen_generation, Some(1));
        assert!(!state.viewport.is_animating(0.0));
        assert!(state.viewport.max_offset() > 0.0);
        assert_eq!(state.viewport.offset(), state.viewport.max_offset());
    }

    #[test]
    fn test_external_selection_scrolls_into_view() {
        let ctx = Context::default();
        let mut fixture = Fixture::new(TabSizing::Intrinsic);
        let id = fixture.frame(&ctx, 0.0);
        assert_eq!(bar_state(&ctx, id).viewport.offset(), 0.0);

        fixture.selection.set(Category::Trash);
        fixture.frame(&ctx, 1.0);
        let state = bar_state(&ctx, id);
        assert!(state.viewport.is_animating(1.1));
        assert_eq!(state.seen_generation, Some(1));

        fixture.frame(&ctx, 2.0);
        let state = bar_state(&ctx, id);
        assert!((state.viewport.offset() - state.viewport.max_offset()).abs() < 1e-6);
    }

    #[test]
    fn test_same_value_write_scrolls_again() {
        let ctx = Context::default();
        let mut fixture = Fixture::new(TabSizing::Intrinsic);
        let id = fixture.frame(&ctx, 0.0);

        // The user scrolled the selected tab out of sight.
        let mut state = bar_state(&ctx, id);
        let far = state.viewport.max_offset();
        state.viewport.jump_to(far);
        store_state(&ctx, id, state);

        fixture.selection.set(Category::Featured);
        fixture.frame(&ctx, 1.0);
        assert!(bar_state(&ctx, id).viewport.is_animating(1.1));

        fixture.frame(&ctx, 2.0);
        assert_eq!(bar_state(&ctx, id).viewport.offset(), 0.0);
    }

    #[test]
    fn test_fixed_sizing_is_clamped() {
        let ctx = Context::default();
        let mut fixture = Fixture::new(TabSizing::Fixed {
            reference_width: 140.0,
        });
        let id = fixture.frame(&ctx, 0.0);

        let mut state = bar_state(&ctx, id);
        assert_eq!(state.viewport.overscroll(), Overscroll::Clamped);
        assert!((state.viewport.content_width() - 140.0).abs() < 1e-6);
        state.viewport.scroll_by(-50.0, 0.0);
        assert!(!state.viewport.is_overscrolled());
        state.viewport.scroll_by(80.0, 0.0);
        assert_eq!(state.viewport.offset(), 0.0);
    }

    #[test]
    fn test_intrinsic_sizing_is_elastic() {
        let ctx = Context::default();
        let mut fixture = Fixture::new(TabSizing::Intrinsic);
        let id = fixture.frame(&ctx, 0.0);
        assert_eq!(bar_state(&ctx, id).viewport.overscroll(), Overscroll::Elastic);
    }

    #[test]
    fn test_tap_selects_tab() {
        let ctx = Context::default();
        let mut fixture = Fixture::new(TabSizing::Fixed {
            reference_width: 280.0,
        });
        let (_, rect) = fixture.frame_with(&ctx, 0.0, Vec::new());

        // Seven tabs of 40 points each.
        let pos = pos2(rect.min.x + 60.0, rect.center().y);
        fixture.tap(&ctx, 1.0, pos);
        assert_eq!(fixture.selection.get(), &Category::Weekly);
        assert_eq!(fixture.selection.generation(), 1);

        fixture.tap(&ctx, 2.0, pos);
        assert_eq!(fixture.selection.get(), &Category::Weekly);
        assert_eq!(fixture.selection.generation(), 2);
    }

    #[test]
    fn test_tapping_partly_hidden_tab_scrolls_it_into_view() {
        let ctx = Context::default();
        let mut fixture = Fixture::new(TabSizing::Intrinsic);
        let (id, rect) = fixture.frame_with(&ctx, 0.0, Vec::new());
        let state = bar_state(&ctx, id);
        assert_eq!(state.viewport.offset(), 0.0);
        assert!(state.viewport.content_width() > 2.0 * state.viewport.viewport_width());

        // The tab under the trailing edge runs past it.
        let pos = pos2(rect.max.x - 1.0, rect.center().y);
        fixture.tap(&ctx, 1.0, pos);
        assert_ne!(fixture.selection.get(), &Category::Featured);
        assert_eq!(fixture.selection.generation(), 1);
        assert!(bar_state(&ctx, id).viewport.is_animating(1.1));

        fixture.frame(&ctx, 2.0);
        let state = bar_state(&ctx, id);
        assert!(!state.viewport.is_animating(2.0));
        assert!(state.viewport.offset() > 0.0);
        assert!(state.viewport.offset() < state.viewport.max_offset());
    }

    #[test]
    fn test_drag_over_tab_scrolls_without_selecting() {
        let ctx = Context::default();
        let mut fixture = Fixture::new(TabSizing::Intrinsic);
        let (id, rect) = fixture.frame_with(&ctx, 0.0, Vec::new());

        let start = pos2(rect.min.x + 250.0, rect.center().y);
        let end = start - vec2(180.0, 0.0);
        fixture.frame_with(&ctx, 1.0, pointer(start, true));
        fixture.frame_with(&ctx, 1.05, vec![Event::PointerMoved(start - vec2(20.0, 0.0))]);
        fixture.frame_with(&ctx, 1.1, vec![Event::PointerMoved(end)]);
        let offset = bar_state(&ctx, id).viewport.offset();
        assert!(offset > 150.0 && offset < 181.0, "offset {offset}");

        fixture.frame_with(&ctx, 1.15, pointer(end, false));
        assert_eq!(fixture.selection.get(), &Category::Featured);
        assert_eq!(fixture.selection.generation(), 0);
    }

    #[test]
    fn test_wheel_scroll_is_consumed() {
        let ctx = Context::default();
        let mut fixture = Fixture::new(TabSizing::Intrinsic);
        let (id, rect) = fixture.frame_with(&ctx, 0.0, Vec::new());

        let wheel = Event::MouseWheel {
            unit: MouseWheelUnit::Point,
            delta: vec2(-6.0, 0.0),
            modifiers: Modifiers::NONE,
        };
        let mut left_over = Vec2::ZERO;
        run_frame(
            &ctx,
            1.0,
            vec![Event::PointerMoved(rect.center()), wheel],
            |ui| {
                SegmentedTabBar::new("categories", &mut fixture.selection, &fixture.options, label)
                    .badges(&fixture.badges)
                    .border(BorderPlacement::Top)
                    .show(ui);
                left_over = ui.input(|i| i.smooth_scroll_delta);
            },
        );

        assert!((bar_state(&ctx, id).viewport.offset() - 6.0).abs() < 1e-6);
        assert_eq!(left_over, Vec2::ZERO);
    }

    #[test]
    fn test_rejected_width_is_remembered() {
        let ctx = Context::default();
        let mut fixture = Fixture::new(TabSizing::Fixed {
            reference_width: -1.0,
        });
        let id = fixture.frame(&ctx, 0.0);
        fixture.frame(&ctx, 0.1);
        let state = bar_state(&ctx, id);
        assert!(state.geometry_rejected);
        assert_eq!(state.seen_generation, None);

        fixture.sizing = TabSizing::Intrinsic;
        fixture.frame(&ctx, 0.2);
        assert!(!bar_state(&ctx, id).geometry_rejected);
    }
}
