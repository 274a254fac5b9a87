use serde::{Deserialize, Serialize};

use crate::core::axis::Axis;
use crate::core::polar::{polar_to_x, polar_to_y};

/// Captions sit slightly inside the chart rim.
const CAPTION_RADIUS_FACTOR: f64 = 0.95;

/// Anchor position and rotation for one axis label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptionAnchor {
    pub x: f64,
    pub y: f64,
    /// Rotation about the anchor, in degrees, so text reads tangentially
    /// around the ring.
    pub rotation_deg: f64,
}

/// Lays out the label anchor for the `axis_index`-th of `axis_count` axes.
///
/// The anchor radius derives from the overall `size` (not the zoomed chart
/// size), keeping labels at the rim independent of data scaling.
#[must_use]
pub fn caption_anchor(axis: &Axis, axis_index: usize, axis_count: usize, size: f64) -> CaptionAnchor {
    let radius = size / 2.0 * CAPTION_RADIUS_FACTOR;
    CaptionAnchor {
        x: polar_to_x(axis.angle, radius),
        y: polar_to_y(axis.angle, radius),
        rotation_deg: 360.0 / axis_count as f64 * axis_index as f64 + 90.0,
    }
}
