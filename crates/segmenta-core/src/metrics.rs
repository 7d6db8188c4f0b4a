//! Size metrics for the segmented controls.
//!
//! Missing fields deserialize to their defaults, so hosts can override a
//! single value from JSON without restating the rest.

use serde::{Deserialize, Serialize};

use crate::layout::BorderPlacement;

/// Sizes of the fixed segmented picker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerMetrics {
    /// Height of the segment row.
    pub height: f64,
    /// Gap between the track edge and the segments.
    pub track_padding: f64,
    pub track_corner_radius: f64,
    pub highlight_corner_radius: f64,
    pub label_padding_x: f64,
    pub label_padding_y: f64,
    pub font_size: f64,
    pub badge_diameter: f64,
}

impl Default for PickerMetrics {
    fn default() -> Self {
        Self {
            height: 32.0,
            track_padding: 2.0,
            track_corner_radius: 8.0,
            highlight_corner_radius: 6.0,
            label_padding_x: 14.0,
            label_padding_y: 6.0,
            font_size: 12.0,
            badge_diameter: 10.0,
        }
    }
}

impl PickerMetrics {
    /// Outer height including the track padding.
    pub fn outer_height(&self) -> f64 {
        self.height + 2.0 * self.track_padding
    }
}

/// Sizes of the scrollable tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabBarMetrics {
    /// Height of a segment's content area (without the accent bar).
    pub height: f64,
    pub bar_thickness: f64,
    pub border: BorderPlacement,
    pub label_padding_x: f64,
    pub label_padding_y: f64,
    pub font_size: f64,
    pub badge_diameter: f64,
}

impl Default for TabBarMetrics {
    fn default() -> Self {
        Self {
            height: 40.0,
            bar_thickness: 3.0,
            border: BorderPlacement::Bottom,
            label_padding_x: 12.0,
            label_padding_y: 4.0,
            font_size: 18.0,
            badge_diameter: 10.0,
        }
    }
}

impl TabBarMetrics {
    /// Full segment height: content plus accent bar.
    pub fn segment_height(&self) -> f64 {
        self.height + self.bar_thickness
    }

    /// Natural width of a segment whose label is `label_width` wide.
    pub fn natural_width(&self, label_width: f64) -> f64 {
        label_width + 2.0 * self.label_padding_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_defaults() {
        let metrics = PickerMetrics::default();
        assert_eq!(metrics.outer_height(), 36.0);
        assert_eq!(metrics.badge_diameter, 10.0);
    }

    #[test]
    fn test_tab_bar_sizes() {
        let metrics = TabBarMetrics::default();
        assert_eq!(metrics.segment_height(), 43.0);
        assert_eq!(metrics.natural_width(50.0), 74.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let metrics: TabBarMetrics =
            serde_json::from_str(r#"{"border":"Top","bar_thickness":4.0}"#).unwrap();
        assert_eq!(metrics.border, BorderPlacement::Top);
        assert_eq!(metrics.bar_thickness, 4.0);
        assert_eq!(metrics.height, 40.0);
        assert_eq!(metrics.font_size, 18.0);
    }

    #[test]
    fn test_picker_metrics_from_empty_object() {
        let metrics: PickerMetrics = serde_json::from_str("{}").unwrap();
        assert_eq!(metrics, PickerMetrics::default());
    }
}
