//! Segment geometry.
//!
//! All rectangles are in the host's logical coordinates, y pointing down.

use kurbo::{Circle, Point, Rect};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Which edge of a tab carries its accent bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderPlacement {
    Top,
    #[default]
    Bottom,
}

/// How a tab bar sizes its segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum TabSizing {
    /// Equal division of a reference width; the viewport never over-scrolls.
    Fixed { reference_width: f64 },
    /// Each segment takes its content's natural width; the viewport is elastic.
    #[default]
    Intrinsic,
}

impl TabSizing {
    pub fn is_fixed(&self) -> bool {
        matches!(self, TabSizing::Fixed { .. })
    }
}

fn check_width(width: f64) -> ConfigResult<f64> {
    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(ConfigError::InvalidWidth(width))
    }
}

/// Split a track of `track_width` into `count` equal, contiguous segments.
///
/// Segment edges are computed from the track origin rather than accumulated,
/// so the last segment always ends at `origin.x + track_width`.
pub fn fixed_row(origin: Point, track_width: f64, height: f64, count: usize) -> ConfigResult<Vec<Rect>> {
    if count == 0 {
        return Err(ConfigError::NoOptions);
    }
    let track_width = check_width(track_width)?;

    let edge = |i: usize| origin.x + track_width * i as f64 / count as f64;
    Ok((0..count)
        .map(|i| Rect::new(edge(i), origin.y, edge(i + 1), origin.y + height))
        .collect())
}

/// Lay out segments of the given widths side by side.
pub fn natural_row(origin: Point, widths: &[f64], height: f64) -> Vec<Rect> {
    let mut x = origin.x;
    widths
        .iter()
        .map(|&width| {
            let rect = Rect::new(x, origin.y, x + width.max(0.0), origin.y + height);
            x = rect.x1;
            rect
        })
        .collect()
}

/// Segment widths for a tab bar.
pub fn tab_widths(sizing: TabSizing, natural: &[f64]) -> ConfigResult<Vec<f64>> {
    if natural.is_empty() {
        return Err(ConfigError::NoOptions);
    }
    match sizing {
        TabSizing::Fixed { reference_width } => {
            let width = check_width(reference_width)? / natural.len() as f64;
            Ok(vec![width; natural.len()])
        }
        TabSizing::Intrinsic => Ok(natural.to_vec()),
    }
}

/// Total width of a row of segments.
pub fn row_width(segments: &[Rect]) -> f64 {
    match (segments.first(), segments.last()) {
        (Some(first), Some(last)) => last.x1 - first.x0,
        _ => 0.0,
    }
}

/// The accent bar strip along the top or bottom edge of a segment.
pub fn accent_bar(segment: Rect, placement: BorderPlacement, thickness: f64) -> Rect {
    let thickness = thickness.min(segment.height());
    match placement {
        BorderPlacement::Top => Rect::new(segment.x0, segment.y0, segment.x1, segment.y0 + thickness),
        BorderPlacement::Bottom => Rect::new(segment.x0, segment.y1 - thickness, segment.x1, segment.y1),
    }
}

/// The part of a segment not covered by its accent bar.
pub fn content_area(segment: Rect, placement: BorderPlacement, thickness: f64) -> Rect {
    let thickness = thickness.min(segment.height());
    match placement {
        BorderPlacement::Top => Rect::new(segment.x0, segment.y0 + thickness, segment.x1, segment.y1),
        BorderPlacement::Bottom => Rect::new(segment.x0, segment.y0, segment.x1, segment.y1 - thickness),
    }
}

/// Badge dot tucked into the top-trailing corner of `content`.
pub fn badge_circle(content: Rect, diameter: f64) -> Circle {
    let radius = diameter / 2.0;
    Circle::new(Point::new(content.x1 - radius, content.y0 + radius), radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_row_widths_sum_to_track() {
        for count in 1..=9 {
            let track = 371.3;
            let row = fixed_row(Point::new(12.0, 4.0), track, 32.0, count).unwrap();
            assert_eq!(row.len(), count);
            let sum: f64 = row.iter().map(|r| r.width()).sum();
            assert!((sum - track).abs() < 1e-9);
            assert!((row_width(&row) - track).abs() < 1e-9);
            assert!((row.last().unwrap().x1 - (12.0 + track)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_fixed_row_segments_are_equal_and_contiguous() {
        let row = fixed_row(Point::ZERO, 300.0, 32.0, 3).unwrap();
        for pair in row.windows(2) {
            assert_eq!(pair[0].x1, pair[1].x0);
        }
        for rect in &row {
            assert!((rect.width() - 100.0).abs() < 1e-9);
            assert!((rect.height() - 32.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_single_segment_spans_track() {
        let row = fixed_row(Point::new(5.0, 0.0), 250.0, 32.0, 1).unwrap();
        assert_eq!(row, vec![Rect::new(5.0, 0.0, 255.0, 32.0)]);
    }

    #[test]
    fn test_fixed_row_rejects_bad_input() {
        assert_eq!(fixed_row(Point::ZERO, 100.0, 32.0, 0), Err(ConfigError::NoOptions));
        assert_eq!(
            fixed_row(Point::ZERO, 0.0, 32.0, 2),
            Err(ConfigError::InvalidWidth(0.0))
        );
        assert!(fixed_row(Point::ZERO, f64::NAN, 32.0, 2).is_err());
    }

    #[test]
    fn test_natural_row() {
        let row = natural_row(Point::new(10.0, 0.0), &[40.0, 60.0, 20.0], 43.0);
        assert_eq!(row[0], Rect::new(10.0, 0.0, 50.0, 43.0));
        assert_eq!(row[1], Rect::new(50.0, 0.0, 110.0, 43.0));
        assert_eq!(row[2], Rect::new(110.0, 0.0, 130.0, 43.0));
    }

    #[test]
    fn test_tab_widths() {
        let natural = [40.0, 60.0, 20.0, 80.0];
        let fixed = tab_widths(TabSizing::Fixed { reference_width: 400.0 }, &natural).unwrap();
        assert_eq!(fixed, vec![100.0; 4]);
        let intrinsic = tab_widths(TabSizing::Intrinsic, &natural).unwrap();
        assert_eq!(intrinsic, natural.to_vec());
        assert!(tab_widths(TabSizing::Intrinsic, &[]).is_err());
        assert!(tab_widths(TabSizing::Fixed { reference_width: -1.0 }, &natural).is_err());
    }

    #[test]
    fn test_accent_bar_placement() {
        let segment = Rect::new(0.0, 0.0, 100.0, 43.0);
        assert_eq!(
            accent_bar(segment, BorderPlacement::Top, 3.0),
            Rect::new(0.0, 0.0, 100.0, 3.0)
        );
        assert_eq!(
            accent_bar(segment, BorderPlacement::Bottom, 3.0),
            Rect::new(0.0, 40.0, 100.0, 43.0)
        );
        assert_eq!(
            content_area(segment, BorderPlacement::Top, 3.0),
            Rect::new(0.0, 3.0, 100.0, 43.0)
        );
        assert_eq!(
            content_area(segment, BorderPlacement::Bottom, 3.0),
            Rect::new(0.0, 0.0, 100.0, 40.0)
        );
    }

    #[test]
    fn test_badge_sits_top_trailing() {
        let circle = badge_circle(Rect::new(0.0, 0.0, 100.0, 32.0), 10.0);
        assert_eq!(circle.center, Point::new(95.0, 5.0));
        assert!((circle.radius - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sizing_deserializes() {
        let fixed: TabSizing = serde_json::from_str(r#"{"Fixed":{"reference_width":390.0}}"#).unwrap();
        assert!(fixed.is_fixed());
        let placement: BorderPlacement = serde_json::from_str(r#""Top""#).unwrap();
        assert_eq!(placement, BorderPlacement::Top);
    }
}
