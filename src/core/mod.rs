pub mod axis;
pub mod captions;
pub mod config;
pub mod markers;
pub mod polar;
pub mod rings;
pub mod series;
pub mod shape;

pub use axis::{Axis, AxisCaptionMap, derive_axes};
pub use captions::{CaptionAnchor, caption_anchor};
pub use config::{AttrBag, PropsFn, RadarConfig, SmoothingFn};
pub use markers::{MarkerPoint, marker_points};
pub use polar::{polar_to_x, polar_to_y};
pub use rings::{RingStep, ring_steps};
pub use series::{DataSeries, SeriesMeta};
pub use shape::{PathData, ShapeTuple, no_smoothing, shape_tuples};
