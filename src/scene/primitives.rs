use serde::{Deserialize, Serialize};

use crate::core::config::AttrBag;
use crate::core::shape::{PathData, ShapeTuple};
use crate::interaction::{CaptionHover, HoverHandlers, MarkerHover};

/// One axis spoke: a polyline from the chart origin to the rim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpokePrimitive {
    pub key: String,
    /// Rim endpoint; the other endpoint is always the origin.
    pub x2: f64,
    pub y2: f64,
    pub attrs: AttrBag,
}

/// One concentric calibration ring, centered on the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingPrimitive {
    /// Fractional position of the ring in `(0, 1]`.
    pub value: f64,
    pub radius: f64,
    pub attrs: AttrBag,
}

/// Image clipped by a series' shape path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageOverlay {
    pub href: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Set when this series' index equals the active index; a presentation
    /// flag only.
    pub active: bool,
}

/// One series plotted as a closed shape.
///
/// When `image` is present the path acts as a clip mask for it; `color`
/// still applies to the mask path's stroke and fill for border rendering or
/// image-less series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapePrimitive {
    pub series_index: usize,
    /// Per-axis vertex/control geometry the path was built from.
    pub tuples: Vec<ShapeTuple>,
    pub path: PathData,
    pub color: Option<String>,
    pub class: Option<String>,
    pub attrs: AttrBag,
    pub image: Option<ImageOverlay>,
}

/// One axis label, rotated about its anchor to read tangentially.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub rotation_deg: f64,
    /// Horizontal nudge away from the anchor.
    pub dx: f64,
    pub attrs: AttrBag,
    pub hover: CaptionHover,
}

impl CaptionPrimitive {
    /// Routes a pointer-enter intent for this caption to the caller.
    pub fn pointer_enter(&self, handlers: &HoverHandlers<CaptionHover>) {
        handlers.enter(&self.hover);
    }

    pub fn pointer_leave(&self, handlers: &HoverHandlers<CaptionHover>) {
        handlers.leave();
    }
}

/// One per-vertex marker for a (series, axis) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerPrimitive {
    pub cx: f64,
    pub cy: f64,
    pub class: Option<String>,
    pub attrs: AttrBag,
    pub hover: MarkerHover,
}

impl MarkerPrimitive {
    /// Routes a pointer-enter intent for this marker to the caller.
    pub fn pointer_enter(&self, handlers: &HoverHandlers<MarkerHover>) {
        handlers.enter(&self.hover);
    }

    pub fn pointer_leave(&self, handlers: &HoverHandlers<MarkerHover>) {
        handlers.leave();
    }
}
