use serde::{Deserialize, Serialize};

use crate::core::axis::Axis;
use crate::core::polar::{polar_to_x, polar_to_y};
use crate::core::series::DataSeries;
use crate::error::RadarResult;

/// Inward bias, in data units, applied when projecting curve control points.
///
/// The fixed offset pulls control points toward the center by the same
/// fraction of the radial scale regardless of data magnitude, giving the
/// smoothing function a consistent hint.
const CONTROL_PULL_IN: f64 = 0.3;

/// Per-axis geometry handed to the smoothing strategy: the shape vertex and
/// its inward-offset control point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeTuple {
    pub x: f64,
    pub y: f64,
    pub ctrl_x: f64,
    pub ctrl_y: f64,
}

/// Opaque path description returned by a smoothing strategy.
///
/// The core never parses this; it flows through to the rendering backend
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathData(String);

impl PathData {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Projects one series onto the axes as vertex/control tuples, in axis order.
///
/// Fails with `InvalidSeries` at the first axis whose key the series does not
/// map to a finite number; nothing partial is returned.
pub fn shape_tuples(
    axes: &[Axis],
    series: &DataSeries,
    series_index: usize,
    chart_size: f64,
) -> RadarResult<Vec<ShapeTuple>> {
    let mut tuples = Vec::with_capacity(axes.len());
    for axis in axes {
        let value = series.axis_value(&axis.key, series_index)?;
        tuples.push(ShapeTuple {
            x: polar_to_x(axis.angle, value * chart_size / 2.0),
            y: polar_to_y(axis.angle, value * chart_size / 2.0),
            ctrl_x: polar_to_x(axis.angle, (value - CONTROL_PULL_IN) * chart_size / 2.0),
            ctrl_y: polar_to_y(axis.angle, (value - CONTROL_PULL_IN) * chart_size / 2.0),
        });
    }
    Ok(tuples)
}

/// Default path strategy: closed straight-line polygon through the vertices,
/// ignoring control points.
#[must_use]
pub fn no_smoothing(tuples: &[ShapeTuple]) -> PathData {
    let mut path = String::new();
    for (i, tuple) in tuples.iter().enumerate() {
        let op = if i == 0 { 'M' } else { 'L' };
        path.push_str(&format!("{op}{:.4},{:.4}", tuple.x, tuple.y));
    }
    path.push('z');
    PathData::new(path)
}
