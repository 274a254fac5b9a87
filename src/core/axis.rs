use std::f64::consts::TAU;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::polar::{polar_to_x, polar_to_y};
use crate::error::{RadarError, RadarResult};

/// Axis key to display label, in angular order. Insertion order matters.
pub type AxisCaptionMap = IndexMap<String, String>;

/// One spoke of the radar chart, derived from the caption map.
///
/// Axes are recomputed from the caption map on every render and never
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub key: String,
    pub caption: String,
    /// Angular position in radians; 0 points to chart north.
    pub angle: f64,
}

impl Axis {
    /// Endpoint of this axis' spoke at the given radius, relative to the
    /// chart origin.
    #[must_use]
    pub fn spoke_end(&self, radius: f64) -> (f64, f64) {
        (
            polar_to_x(self.angle, radius),
            polar_to_y(self.angle, radius),
        )
    }
}

/// Derives the ordered axis list from a caption map.
///
/// The i-th of N keys gets angle `2π·i/N`, so the axes evenly divide the
/// full circle in key-insertion order. Deterministic for a given map.
pub fn derive_axes(captions: &AxisCaptionMap) -> RadarResult<Vec<Axis>> {
    if captions.is_empty() {
        return Err(RadarError::InvalidInput(
            "caption map must contain at least one axis".to_owned(),
        ));
    }

    let count = captions.len();
    Ok(captions
        .iter()
        .enumerate()
        .map(|(i, (key, caption))| Axis {
            key: key.clone(),
            caption: caption.clone(),
            angle: TAU * i as f64 / count as f64,
        })
        .collect())
}
