use std::fmt;

use indexmap::IndexMap;

use crate::core::axis::Axis;
use crate::core::series::SeriesMeta;
use crate::core::shape::{PathData, ShapeTuple, no_smoothing};
use crate::error::{RadarError, RadarResult};
use crate::interaction::{CaptionHover, HoverHandlers, MarkerHover};

/// Attribute bag produced by the injected `*_props` strategies and forwarded
/// verbatim to the corresponding primitive. Insertion order is preserved.
pub type AttrBag = IndexMap<String, serde_json::Value>;

/// Injected style strategy: context in, attribute bag out.
pub type PropsFn<C> = Box<dyn Fn(&C) -> AttrBag>;

/// Injected curve-smoothing strategy. Receives the ordered per-axis
/// vertex/control tuples and returns an opaque path description; the core
/// never interprets or validates the output.
pub type SmoothingFn = Box<dyn Fn(&[ShapeTuple]) -> PathData>;

/// Chart configuration, including the injected strategy seams.
///
/// `size` is the overall chart diameter; it drives caption and ring radii,
/// image-overlay extent, and the centering translation. Data-value magnitudes
/// are scaled by `chart_size() = size / zoom_distance` instead.
pub struct RadarConfig {
    pub size: f64,
    pub zoom_distance: f64,
    pub axes: bool,
    pub dots: bool,
    pub captions: bool,
    /// Number of concentric calibration rings; 0 disables the layer.
    pub scales: u32,
    /// Horizontal nudge applied to caption text away from its anchor.
    pub caption_offset: f64,
    pub smoothing: SmoothingFn,
    pub axis_props: PropsFn<Axis>,
    pub dot_props: PropsFn<SeriesMeta>,
    pub shape_props: PropsFn<SeriesMeta>,
    pub scale_props: Box<dyn Fn(f64) -> AttrBag>,
    pub caption_props: PropsFn<Axis>,
    pub dot_hover: HoverHandlers<MarkerHover>,
    pub caption_hover: HoverHandlers<CaptionHover>,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            size: 300.0,
            zoom_distance: 1.2,
            axes: true,
            dots: false,
            captions: true,
            scales: 3,
            caption_offset: 20.0,
            smoothing: Box::new(no_smoothing),
            axis_props: Box::new(|_| AttrBag::new()),
            dot_props: Box::new(|_| AttrBag::new()),
            shape_props: Box::new(|_| AttrBag::new()),
            scale_props: Box::new(|_| AttrBag::new()),
            caption_props: Box::new(|_| AttrBag::new()),
            dot_hover: HoverHandlers::default(),
            caption_hover: HoverHandlers::default(),
        }
    }
}

impl RadarConfig {
    /// Radial scale applied to normalized data values.
    #[must_use]
    pub fn chart_size(&self) -> f64 {
        self.size / self.zoom_distance
    }

    pub fn validate(&self) -> RadarResult<()> {
        for (name, value) in [("size", self.size), ("zoom_distance", self.zoom_distance)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RadarError::InvalidInput(format!(
                    "config `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_zoom_distance(mut self, zoom_distance: f64) -> Self {
        self.zoom_distance = zoom_distance;
        self
    }

    #[must_use]
    pub fn with_axes(mut self, enabled: bool) -> Self {
        self.axes = enabled;
        self
    }

    #[must_use]
    pub fn with_dots(mut self, enabled: bool) -> Self {
        self.dots = enabled;
        self
    }

    #[must_use]
    pub fn with_captions(mut self, enabled: bool) -> Self {
        self.captions = enabled;
        self
    }

    #[must_use]
    pub fn with_scales(mut self, scales: u32) -> Self {
        self.scales = scales;
        self
    }

    #[must_use]
    pub fn with_caption_offset(mut self, offset: f64) -> Self {
        self.caption_offset = offset;
        self
    }

    #[must_use]
    pub fn with_smoothing(mut self, smoothing: impl Fn(&[ShapeTuple]) -> PathData + 'static) -> Self {
        self.smoothing = Box::new(smoothing);
        self
    }

    #[must_use]
    pub fn with_axis_props(mut self, props: impl Fn(&Axis) -> AttrBag + 'static) -> Self {
        self.axis_props = Box::new(props);
        self
    }

    #[must_use]
    pub fn with_dot_props(mut self, props: impl Fn(&SeriesMeta) -> AttrBag + 'static) -> Self {
        self.dot_props = Box::new(props);
        self
    }

    #[must_use]
    pub fn with_shape_props(mut self, props: impl Fn(&SeriesMeta) -> AttrBag + 'static) -> Self {
        self.shape_props = Box::new(props);
        self
    }

    #[must_use]
    pub fn with_scale_props(mut self, props: impl Fn(f64) -> AttrBag + 'static) -> Self {
        self.scale_props = Box::new(props);
        self
    }

    #[must_use]
    pub fn with_caption_props(mut self, props: impl Fn(&Axis) -> AttrBag + 'static) -> Self {
        self.caption_props = Box::new(props);
        self
    }

    #[must_use]
    pub fn with_dot_hover(mut self, handlers: HoverHandlers<MarkerHover>) -> Self {
        self.dot_hover = handlers;
        self
    }

    #[must_use]
    pub fn with_caption_hover(mut self, handlers: HoverHandlers<CaptionHover>) -> Self {
        self.caption_hover = handlers;
        self
    }
}

impl fmt::Debug for RadarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadarConfig")
            .field("size", &self.size)
            .field("zoom_distance", &self.zoom_distance)
            .field("axes", &self.axes)
            .field("dots", &self.dots)
            .field("captions", &self.captions)
            .field("scales", &self.scales)
            .field("caption_offset", &self.caption_offset)
            .finish_non_exhaustive()
    }
}
