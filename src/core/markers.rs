use serde::{Deserialize, Serialize};

use crate::core::axis::Axis;
use crate::core::polar::{polar_to_x, polar_to_y};
use crate::core::series::DataSeries;
use crate::error::RadarResult;

/// One per-vertex marker for a (series, axis) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerPoint {
    pub key: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// Positions one marker per axis at the series' shape vertex.
///
/// Shares the shape builder's validity contract: a missing or non-finite
/// value fails the whole series with `InvalidSeries`.
pub fn marker_points(
    axes: &[Axis],
    series: &DataSeries,
    series_index: usize,
    chart_size: f64,
) -> RadarResult<Vec<MarkerPoint>> {
    let mut points = Vec::with_capacity(axes.len());
    for axis in axes {
        let value = series.axis_value(&axis.key, series_index)?;
        points.push(MarkerPoint {
            key: axis.key.clone(),
            value,
            x: polar_to_x(axis.angle, value * chart_size / 2.0),
            y: polar_to_y(axis.angle, value * chart_size / 2.0),
        });
    }
    Ok(points)
}
