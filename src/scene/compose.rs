use tracing::{debug, trace};

use crate::core::axis::{Axis, AxisCaptionMap, derive_axes};
use crate::core::captions::caption_anchor;
use crate::core::config::RadarConfig;
use crate::core::markers::marker_points;
use crate::core::rings::ring_steps;
use crate::core::series::DataSeries;
use crate::core::shape::shape_tuples;
use crate::error::RadarResult;

use super::primitives::{
    CaptionPrimitive, ImageOverlay, MarkerPrimitive, RingPrimitive, ShapePrimitive, SpokePrimitive,
};
use super::tree::{DrawableTree, LayerOrderBuilder, SceneLayer};
use crate::interaction::{CaptionHover, MarkerHover};

/// Composes the full radar scene for one render call.
///
/// Stateless and idempotent: the returned tree is derived from the inputs
/// alone, so identical calls produce structurally identical trees. Enabled
/// layers are assembled in the canonical order (scale rings, axis spokes,
/// shapes, captions, markers) and the whole tree is wrapped in one
/// translation of `(size/2, size/2)` placing the origin at the visual
/// center.
pub fn render(
    captions: &AxisCaptionMap,
    series: &[DataSeries],
    config: &RadarConfig,
    active: Option<usize>,
) -> RadarResult<DrawableTree> {
    config.validate()?;
    let axes = derive_axes(captions)?;
    let chart_size = config.chart_size();

    let mut builder = LayerOrderBuilder::default();

    if config.scales > 0 {
        builder.append(SceneLayer::ScaleRings(build_rings(config, chart_size)));
    }

    if config.axes {
        builder.append(SceneLayer::AxisSpokes(build_spokes(&axes, config, chart_size)));
    }

    // The shape group is always present, even for an empty series list.
    builder.append(SceneLayer::Shapes(build_shapes(
        &axes, series, config, chart_size, active,
    )?));

    if config.captions {
        builder.append(SceneLayer::Captions(build_captions(&axes, config)));
    }

    if config.dots {
        builder.append(SceneLayer::Markers(build_markers(
            &axes, series, config, chart_size,
        )?));
    }

    let delta = config.size / 2.0;
    let tree = builder.build(delta, delta);
    debug!(
        axes = axes.len(),
        series = series.len(),
        layers = tree.layers.len(),
        "composed radar scene"
    );
    Ok(tree)
}

fn build_spokes(axes: &[Axis], config: &RadarConfig, chart_size: f64) -> Vec<SpokePrimitive> {
    axes.iter()
        .map(|axis| {
            let (x2, y2) = axis.spoke_end(chart_size / 2.0);
            SpokePrimitive {
                key: axis.key.clone(),
                x2,
                y2,
                attrs: (config.axis_props)(axis),
            }
        })
        .collect()
}

fn build_rings(config: &RadarConfig, chart_size: f64) -> Vec<RingPrimitive> {
    ring_steps(config.scales, chart_size)
        .into_iter()
        .map(|ring| RingPrimitive {
            value: ring.value,
            radius: ring.radius,
            attrs: (config.scale_props)(ring.value),
        })
        .collect()
}

fn build_shapes(
    axes: &[Axis],
    series: &[DataSeries],
    config: &RadarConfig,
    chart_size: f64,
    active: Option<usize>,
) -> RadarResult<Vec<ShapePrimitive>> {
    let mut shapes = Vec::with_capacity(series.len());
    for (i, entry) in series.iter().enumerate() {
        let tuples = shape_tuples(axes, entry, i, chart_size)?;
        let path = (config.smoothing)(&tuples);
        let attrs = (config.shape_props)(&entry.meta);
        trace!(series = i, ?attrs, "shape attributes");

        let image = entry.meta.image.as_ref().map(|href| ImageOverlay {
            href: href.clone(),
            x: -(config.size / 2.0),
            y: -(config.size / 2.0),
            width: config.size,
            height: config.size,
            active: active == Some(i),
        });

        shapes.push(ShapePrimitive {
            series_index: i,
            tuples,
            path,
            color: entry.meta.color.clone(),
            class: entry.meta.class.clone(),
            attrs,
            image,
        });
    }
    Ok(shapes)
}

fn build_captions(axes: &[Axis], config: &RadarConfig) -> Vec<CaptionPrimitive> {
    axes.iter()
        .enumerate()
        .map(|(i, axis)| {
            let anchor = caption_anchor(axis, i, axes.len(), config.size);
            CaptionPrimitive {
                text: axis.caption.clone(),
                x: anchor.x,
                y: anchor.y,
                rotation_deg: anchor.rotation_deg,
                dx: config.caption_offset,
                attrs: (config.caption_props)(axis),
                hover: CaptionHover {
                    key: axis.key.clone(),
                    idx: i,
                },
            }
        })
        .collect()
}

fn build_markers(
    axes: &[Axis],
    series: &[DataSeries],
    config: &RadarConfig,
    chart_size: f64,
) -> RadarResult<Vec<MarkerPrimitive>> {
    let mut markers = Vec::with_capacity(series.len() * axes.len());
    for (i, entry) in series.iter().enumerate() {
        let attrs = (config.dot_props)(&entry.meta);
        for point in marker_points(axes, entry, i, chart_size)? {
            markers.push(MarkerPrimitive {
                cx: point.x,
                cy: point.y,
                class: entry.meta.class.clone(),
                attrs: attrs.clone(),
                hover: MarkerHover {
                    key: point.key,
                    value: point.value,
                    idx: i,
                },
            });
        }
    }
    Ok(markers)
}
