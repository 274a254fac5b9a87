use serde::{Deserialize, Serialize};

use super::primitives::{
    CaptionPrimitive, MarkerPrimitive, RingPrimitive, ShapePrimitive, SpokePrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    AxisSpokes,
    ScaleRings,
    Shapes,
    Captions,
    Markers,
}

impl LayerKind {
    /// Fixed draw order of the composed scene, first drawn to last.
    ///
    /// Occlusion between layers depends on this sequence, so it is a
    /// contract, not an implementation detail. Rings come first so axis
    /// spokes draw above them.
    pub const CANONICAL_ORDER: [LayerKind; 5] = [
        LayerKind::ScaleRings,
        LayerKind::AxisSpokes,
        LayerKind::Shapes,
        LayerKind::Captions,
        LayerKind::Markers,
    ];

    fn rank(self) -> usize {
        Self::CANONICAL_ORDER
            .iter()
            .position(|kind| *kind == self)
            .unwrap_or(usize::MAX)
    }
}

/// One homogeneous group of primitives in the composed scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneLayer {
    AxisSpokes(Vec<SpokePrimitive>),
    ScaleRings(Vec<RingPrimitive>),
    Shapes(Vec<ShapePrimitive>),
    Captions(Vec<CaptionPrimitive>),
    Markers(Vec<MarkerPrimitive>),
}

impl SceneLayer {
    #[must_use]
    pub fn kind(&self) -> LayerKind {
        match self {
            SceneLayer::AxisSpokes(_) => LayerKind::AxisSpokes,
            SceneLayer::ScaleRings(_) => LayerKind::ScaleRings,
            SceneLayer::Shapes(_) => LayerKind::Shapes,
            SceneLayer::Captions(_) => LayerKind::Captions,
            SceneLayer::Markers(_) => LayerKind::Markers,
        }
    }
}

/// The fully composed, ordered scene for one render call.
///
/// All primitive coordinates are relative to the chart origin; the tree
/// carries one translation placing that origin at the visual center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawableTree {
    pub translate_x: f64,
    pub translate_y: f64,
    pub layers: Vec<SceneLayer>,
}

impl DrawableTree {
    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> Option<&SceneLayer> {
        self.layers.iter().find(|layer| layer.kind() == kind)
    }

    /// Kinds of the enabled layers, in draw order.
    #[must_use]
    pub fn layer_kinds(&self) -> Vec<LayerKind> {
        self.layers.iter().map(SceneLayer::kind).collect()
    }

    #[must_use]
    pub fn shapes(&self) -> &[ShapePrimitive] {
        match self.layer(LayerKind::Shapes) {
            Some(SceneLayer::Shapes(shapes)) => shapes,
            _ => &[],
        }
    }

    #[must_use]
    pub fn markers(&self) -> &[MarkerPrimitive] {
        match self.layer(LayerKind::Markers) {
            Some(SceneLayer::Markers(markers)) => markers,
            _ => &[],
        }
    }

    #[must_use]
    pub fn captions(&self) -> &[CaptionPrimitive] {
        match self.layer(LayerKind::Captions) {
            Some(SceneLayer::Captions(captions)) => captions,
            _ => &[],
        }
    }
}

/// Appends layer groups in the canonical sequence.
///
/// Replaces the insertion-order juggling of ad-hoc list building with a
/// named, checkable order: each appended layer must rank strictly after the
/// previous one.
#[derive(Debug, Default)]
pub(crate) struct LayerOrderBuilder {
    layers: Vec<SceneLayer>,
}

impl LayerOrderBuilder {
    pub(crate) fn append(&mut self, layer: SceneLayer) {
        if let Some(last) = self.layers.last() {
            debug_assert!(
                last.kind().rank() < layer.kind().rank(),
                "layer {:?} appended after {:?} breaks canonical order",
                layer.kind(),
                last.kind()
            );
        }
        self.layers.push(layer);
    }

    pub(crate) fn build(self, translate_x: f64, translate_y: f64) -> DrawableTree {
        DrawableTree {
            translate_x,
            translate_y,
            layers: self.layers,
        }
    }
}
