//! Segmented selection widgets for egui.
//!
//! This crate provides two controls built on the [`segmenta_core`] model:
//!
//! - **SegmentedPicker**: fixed-width row of equal segments with a sliding highlight
//! - **SegmentedTabBar**: scrollable row of tabs with an accent bar under (or over) the selection
//!
//! Both show a badge dot on eligible segments that are not selected.

mod geometry;
mod paint;
pub mod picker;
pub mod style;
pub mod tab_bar;

pub use picker::SegmentedPicker;
pub use style::{PickerStyle, TabBarStyle, ViewportStyle};
pub use tab_bar::SegmentedTabBar;

pub use segmenta_core::{
    BadgeSet, BorderPlacement, ConfigError, OptionSet, Overscroll, PickerMetrics,
    SelectionChange, SelectionModel, TabBarMetrics, TabSizing, Transition,
};

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Track and viewport background (light gray)
    pub const SYSTEM_GRAY5: Color32 = Color32::from_rgb(229, 229, 234);
    /// Unselected segment and tab label color
    pub const SYSTEM_GRAY: Color32 = Color32::from_rgb(142, 142, 147);
    /// Accent blue, the default tint of both widgets
    pub const TINT: Color32 = Color32::from_rgb(0, 122, 255);
    pub const CYAN: Color32 = Color32::from_rgb(50, 173, 230);
    /// Badge dot color
    pub const BADGE: Color32 = Color32::from_rgb(255, 59, 48);
    /// Drop shadow under the picker highlight
    pub const HIGHLIGHT_SHADOW: Color32 = Color32::from_black_alpha(51);
}
