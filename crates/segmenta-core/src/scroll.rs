//! Horizontal scroll viewport with optional rubber-banding.

use serde::{Deserialize, Serialize};

use crate::animation::{Transition, Tween};

/// How a viewport reacts to scrolling past its content edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overscroll {
    /// Movement past an edge is damped and springs back on release.
    #[default]
    Elastic,
    /// The offset never leaves `[0, max_offset]`.
    Clamped,
}

/// Fraction of the viewport width an elastic viewport may over-scroll.
const OVERSCROLL_LIMIT: f64 = 0.5;

/// Scroll state of a horizontally scrolling viewport.
///
/// Offsets are in content coordinates: 0 shows the leading edge of the
/// content, `max_offset()` shows its trailing edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollViewport {
    offset: f64,
    content_width: f64,
    viewport_width: f64,
    overscroll: Overscroll,
    animation: Option<Tween<f64>>,
}

impl Default for ScrollViewport {
    fn default() -> Self {
        Self::new(Overscroll::default())
    }
}

impl ScrollViewport {
    pub fn new(overscroll: Overscroll) -> Self {
        Self {
            offset: 0.0,
            content_width: 0.0,
            viewport_width: 0.0,
            overscroll,
            animation: None,
        }
    }

    pub fn overscroll(&self) -> Overscroll {
        self.overscroll
    }

    /// Switch overscroll behavior; a clamped viewport is pulled back in bounds.
    pub fn set_overscroll(&mut self, overscroll: Overscroll) {
        self.overscroll = overscroll;
        if overscroll == Overscroll::Clamped {
            self.animation = None;
            self.offset = self.clamp(self.offset);
        }
    }

    /// Update content and viewport sizes for this frame.
    pub fn set_extent(&mut self, content_width: f64, viewport_width: f64) {
        self.content_width = content_width.max(0.0);
        self.viewport_width = viewport_width.max(0.0);
        if self.overscroll == Overscroll::Clamped && self.animation.is_none() {
            self.offset = self.clamp(self.offset);
        }
    }

    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Largest in-bounds offset.
    pub fn max_offset(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_offset())
    }

    /// Distance past the nearest bound; negative before the leading edge.
    fn overshoot(&self, offset: f64) -> f64 {
        if offset < 0.0 {
            offset
        } else {
            (offset - self.max_offset()).max(0.0)
        }
    }

    /// Offset displayed at `now`, finishing the animation if it is over.
    pub fn offset_at(&mut self, now: f64) -> f64 {
        if let Some(tween) = self.animation {
            self.offset = tween.value_at(now);
            if tween.is_finished(now) {
                self.animation = None;
            }
        }
        self.offset
    }

    /// Last computed offset, without advancing the animation.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.animation.is_some_and(|tween| !tween.is_finished(now))
    }

    pub fn is_overscrolled(&self) -> bool {
        self.overshoot(self.offset) != 0.0
    }

    /// Move by `amount` (positive reveals content further along).
    ///
    /// Any running animation is stopped at its displayed value first.
    pub fn scroll_by(&mut self, amount: f64, now: f64) {
        let current = self.offset_at(now);
        self.animation = None;

        self.offset = match self.overscroll {
            Overscroll::Clamped => self.clamp(current + amount),
            Overscroll::Elastic => self.elastic_step(current, amount),
        };
    }

    fn elastic_step(&self, current: f64, amount: f64) -> f64 {
        let limit = (self.viewport_width * OVERSCROLL_LIMIT).max(1.0);
        let over = self.overshoot(current);
        let pushing_out = (over < 0.0 && amount < 0.0) || (over > 0.0 && amount > 0.0);

        let step = if pushing_out {
            amount * (1.0 - over.abs() / limit).max(0.0)
        } else {
            amount
        };
        (current + step).clamp(-limit, self.max_offset() + limit)
    }

    /// Spring back inside the bounds after a drag ends.
    pub fn release(&mut self, now: f64, transition: Transition) {
        let current = self.offset_at(now);
        let target = self.clamp(current);
        if (target - current).abs() > f64::EPSILON {
            self.animation = Some(Tween::new(current, target, now, transition));
        }
    }

    /// Animate to `offset`, clamped to the bounds.
    pub fn scroll_to(&mut self, offset: f64, now: f64, transition: Transition) {
        let current = self.offset_at(now);
        let target = self.clamp(offset);
        if (target - current).abs() <= f64::EPSILON {
            self.animation = None;
            self.offset = target;
            return;
        }
        self.animation = Some(Tween::new(current, target, now, transition));
    }

    /// Jump to `offset`, clamped to the bounds.
    pub fn jump_to(&mut self, offset: f64) {
        self.animation = None;
        self.offset = self.clamp(offset);
    }

    /// Offset that makes `[start, end]` visible with the least movement.
    ///
    /// When the range is wider than the viewport its leading edge wins.
    pub fn reveal_offset(&self, start: f64, end: f64) -> f64 {
        let target = self.animation.map_or(self.offset, |tween| tween.to);
        let offset = if start < target || end - start > self.viewport_width {
            start
        } else if end > target + self.viewport_width {
            end - self.viewport_width
        } else {
            target
        };
        self.clamp(offset)
    }

    /// Scroll so `[start, end]` is visible, animated when a transition is given.
    pub fn reveal(&mut self, start: f64, end: f64, now: f64, transition: Option<Transition>) {
        let offset = self.reveal_offset(start, end);
        match transition {
            Some(transition) => self.scroll_to(offset, now, transition),
            None => self.jump_to(offset),
        }
    }
}
