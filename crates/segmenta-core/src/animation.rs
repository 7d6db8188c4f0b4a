//! Easing curves, tweens and the sliding highlight transition.
//!
//! Times are seconds on the host's clock (egui's `InputState::time`).

use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// Timing curve of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// CSS-style cubic bezier with control points (x1, y1) and (x2, y2).
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Easing {
    /// Map linear progress `t` in [0, 1] to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let (x1, y1, x2, y2) = match self {
            Easing::Linear => return t,
            Easing::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => (0.42, 0.0, 0.58, 1.0),
            Easing::CubicBezier { x1, y1, x2, y2 } => (x1, y1, x2, y2),
        };
        cubic_bezier(x1, y1, x2, y2, t)
    }
}

fn bezier_coord(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Solve the curve parameter for `x` and return the matching `y`.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 || x >= 1.0 {
        return x;
    }

    let mut s = x;
    for _ in 0..8 {
        let err = bezier_coord(x1, x2, s) - x;
        if err.abs() < 1e-7 {
            return bezier_coord(y1, y2, s);
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    // Newton stalled on a flat segment; bisect instead.
    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..50 {
        let value = bezier_coord(x1, x2, s);
        if (value - x).abs() < 1e-7 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier_coord(y1, y2, s)
}

/// Duration and curve of an animated change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Seconds.
    pub duration: f64,
    pub easing: Easing,
}

impl Transition {
    /// Highlight slide of the segmented picker.
    pub const PICKER: Transition = Transition {
        duration: 0.22,
        easing: Easing::EaseInOut,
    };

    /// Platform-style default used for taps and scroll-into-view.
    pub const DEFAULT: Transition = Transition {
        duration: 0.35,
        easing: Easing::EaseInOut,
    };

    /// Spring-back after an over-scroll.
    pub const SETTLE: Transition = Transition {
        duration: 0.3,
        easing: Easing::EaseOut,
    };

    pub const fn new(duration: f64, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Values that can be interpolated.
pub trait Lerp {
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Rect {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Rect::new(
            self.x0.lerp(&other.x0, t),
            self.y0.lerp(&other.y0, t),
            self.x1.lerp(&other.x1, t),
            self.y1.lerp(&other.y1, t),
        )
    }
}

/// An interpolation from one value to another over a time window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub start: f64,
    pub transition: Transition,
}

impl<T: Lerp + Clone> Tween<T> {
    pub fn new(from: T, to: T, start: f64, transition: Transition) -> Self {
        Self {
            from,
            to,
            start,
            transition,
        }
    }

    /// Linear progress in [0, 1].
    pub fn progress(&self, now: f64) -> f64 {
        if self.transition.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.transition.duration).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: f64) -> T {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to.clone();
        }
        self.from.lerp(&self.to, self.transition.easing.apply(t))
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

/// The single highlight element that slides between segments.
///
/// The first placement is immediate; later retargets interpolate from the
/// rectangle currently on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightTransition {
    target: Option<Rect>,
    tween: Option<Tween<Rect>>,
}

impl HighlightTransition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the highlight has been placed at least once.
    pub fn is_placed(&self) -> bool {
        self.target.is_some()
    }

    /// Jump to `rect` without animating.
    pub fn place(&mut self, rect: Rect) {
        self.target = Some(rect);
        self.tween = None;
    }

    /// Animate from the displayed rectangle to `rect`.
    pub fn retarget(&mut self, rect: Rect, now: f64, transition: Transition) {
        let Some(from) = self.rect_at(now) else {
            self.place(rect);
            return;
        };
        self.target = Some(rect);
        self.tween = Some(Tween::new(from, rect, now, transition));
    }

    /// Follow the layout for this frame.
    ///
    /// `moved` is true when the highlighted segment changed since the last
    /// frame. A new rectangle for the same segment (a resize) is applied
    /// without animation, unless a slide is already running, in which case
    /// only its destination moves.
    pub fn sync(&mut self, rect: Rect, moved: bool, now: f64, transition: Transition) {
        if !self.is_placed() {
            self.place(rect);
        } else if moved {
            self.retarget(rect, now, transition);
        } else if self.target != Some(rect) {
            match self.tween.as_mut() {
                Some(tween) if !tween.is_finished(now) => {
                    tween.to = rect;
                    self.target = Some(rect);
                }
                _ => self.place(rect),
            }
        }
    }

    /// Rectangle to draw at `now`.
    pub fn rect_at(&self, now: f64) -> Option<Rect> {
        match &self.tween {
            Some(tween) => Some(tween.value_at(now)),
            None => self.target,
        }
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.tween.as_ref().is_some_and(|tween| !tween.is_finished(now))
    }

    /// Duration of the running slide, zero when the last change was a placement.
    pub fn current_duration(&self) -> f64 {
        self.tween.map_or(0.0, |tween| tween.transition.duration)
    }

    /// Forget the placement, so the next sync is immediate again.
    pub fn reset(&mut self) {
        self.target = None;
        self.tween = None;
    }
}
