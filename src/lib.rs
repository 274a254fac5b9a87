//! radar-rs: layout and scene-composition core for radar (spider) charts.
//!
//! The crate turns a caption map, a list of data series, and a configuration
//! into a deterministic, ordered tree of drawable primitives centered on the
//! chart origin. Rendering backends, curve smoothing, and style construction
//! are injected by the caller and stay outside the core.

pub mod core;
pub mod error;
pub mod interaction;
pub mod scene;
pub mod telemetry;

pub use crate::core::{Axis, AxisCaptionMap, DataSeries, RadarConfig, SeriesMeta};
pub use crate::error::{RadarError, RadarResult};
pub use crate::scene::{DrawableTree, render};
