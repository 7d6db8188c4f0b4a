//! Segmenta Core Library
//!
//! Toolkit-agnostic model for segmented controls: selection state with
//! change observers, option and badge sets, segment geometry, easing and
//! tweens, and a horizontally scrolling viewport.

pub mod animation;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod options;
pub mod scroll;
pub mod selection;

pub use animation::{Easing, HighlightTransition, Lerp, Transition, Tween};
pub use error::{ConfigError, ConfigResult};
pub use layout::{
    BorderPlacement, TabSizing, accent_bar, badge_circle, content_area, fixed_row, natural_row,
    row_width, tab_widths,
};
pub use metrics::{PickerMetrics, TabBarMetrics};
pub use options::{BadgeSet, OptionSet, SegmentState, segment_states};
pub use scroll::{Overscroll, ScrollViewport};
pub use selection::{ObserverId, SelectionChange, SelectionModel};
