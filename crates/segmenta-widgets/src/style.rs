//! Style configuration for the segmented widgets.

use egui::Color32;
use segmenta_core::{BorderPlacement, Overscroll, PickerMetrics, TabBarMetrics, Transition};

use crate::theme;

/// Style configuration for [`SegmentedPicker`](crate::SegmentedPicker).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerStyle {
    /// Track background
    pub background: Color32,
    /// Fill of the sliding highlight
    pub tint: Color32,
    /// Badge dot color
    pub badge: Color32,
    /// Label color of the selected segment
    pub selected_text: Color32,
    /// Label color of unselected segments
    pub text: Color32,
    /// Soft shadow under the highlight
    pub shadow: Color32,
    pub metrics: PickerMetrics,
    /// Slide of the highlight between segments
    pub transition: Transition,
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self {
            background: theme::SYSTEM_GRAY5,
            tint: theme::TINT,
            badge: theme::BADGE,
            selected_text: Color32::WHITE,
            text: theme::SYSTEM_GRAY,
            shadow: theme::HIGHLIGHT_SHADOW,
            metrics: PickerMetrics::default(),
            transition: Transition::PICKER,
        }
    }
}

impl PickerStyle {
    /// Default style with the three commonly customized colors replaced.
    pub fn colored(background: Color32, tint: Color32, badge: Color32) -> Self {
        Self {
            background,
            tint,
            badge,
            ..Default::default()
        }
    }
}

/// Styling of the scroll container behind a tab bar.
///
/// This belongs to one tab bar instance; it never changes other scroll areas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportStyle {
    pub background: Color32,
    /// Overrides the overscroll implied by the tab sizing (`None` = derive it)
    pub overscroll: Option<Overscroll>,
}

impl Default for ViewportStyle {
    fn default() -> Self {
        Self {
            background: theme::SYSTEM_GRAY5,
            overscroll: None,
        }
    }
}

/// Style configuration for [`SegmentedTabBar`](crate::SegmentedTabBar).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabBarStyle {
    /// Accent bar and selected label color
    pub tint: Color32,
    pub badge: Color32,
    /// Label color of unselected tabs
    pub text: Color32,
    pub viewport: ViewportStyle,
    pub metrics: TabBarMetrics,
    /// Scroll-into-view animation
    pub transition: Transition,
}

impl Default for TabBarStyle {
    fn default() -> Self {
        Self {
            tint: theme::TINT,
            badge: theme::BADGE,
            text: theme::SYSTEM_GRAY,
            viewport: ViewportStyle::default(),
            metrics: TabBarMetrics::default(),
            transition: Transition::DEFAULT,
        }
    }
}

impl TabBarStyle {
    pub fn colored(background: Color32, tint: Color32, badge: Color32) -> Self {
        Self {
            tint,
            badge,
            viewport: ViewportStyle {
                background,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Same style with the accent bar on the given edge.
    pub fn with_border(mut self, border: BorderPlacement) -> Self {
        self.metrics.border = border;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles_share_palette() {
        let picker = PickerStyle::default();
        let tabs = TabBarStyle::default();
        assert_eq!(picker.tint, tabs.tint);
        assert_eq!(picker.text, tabs.text);
        assert_eq!(picker.background, tabs.viewport.background);
        assert_ne!(picker.text, picker.selected_text);
    }

    #[test]
    fn test_colored_keeps_metrics() {
        let style = TabBarStyle::colored(Color32::WHITE, theme::CYAN, Color32::RED)
            .with_border(BorderPlacement::Top);
        assert_eq!(style.viewport.background, Color32::WHITE);
        assert_eq!(style.tint, theme::CYAN);
        assert_eq!(style.metrics.border, BorderPlacement::Top);
        assert_eq!(style.metrics.height, TabBarMetrics::default().height);
    }
}
