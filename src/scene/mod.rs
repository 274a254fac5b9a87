mod compose;
mod primitives;
mod tree;

pub use compose::render;
pub use primitives::{
    CaptionPrimitive, ImageOverlay, MarkerPrimitive, RingPrimitive, ShapePrimitive, SpokePrimitive,
};
pub use tree::{DrawableTree, LayerKind, SceneLayer};
