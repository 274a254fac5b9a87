use approx::assert_relative_eq;
use indexmap::IndexMap;
use radar_rs::core::{DataSeries, RadarConfig};
use radar_rs::error::RadarError;
use radar_rs::interaction::{HoverHandlers, MarkerHover};
use radar_rs::scene::render;
use std::cell::RefCell;
use std::rc::Rc;

fn captions() -> IndexMap<String, String> {
    [("a", "A"), ("b", "B"), ("c", "C")]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
}

fn series() -> DataSeries {
    DataSeries::new(IndexMap::from([
        ("a".to_owned(), 1.0),
        ("b".to_owned(), 0.5),
        ("c".to_owned(), 0.0),
    ]))
}

#[test]
fn one_marker_per_series_axis_pair() {
    let config = RadarConfig::default().with_dots(true);
    let data = [series(), series()];

    let tree = render(&captions(), &data, &config, None).expect("tree");
    assert_eq!(tree.markers().len(), 6);
}

#[test]
fn markers_land_on_shape_vertices() {
    let config = RadarConfig::default()
        .with_size(200.0)
        .with_zoom_distance(2.0)
        .with_dots(true);

    let tree = render(&captions(), &[series()], &config, None).expect("tree");
    let markers = tree.markers();
    assert_relative_eq!(markers[0].cx, 0.0, epsilon = 1e-9);
    assert_relative_eq!(markers[0].cy, -50.0, epsilon = 1e-9);
    // Zero value collapses onto the origin.
    assert_relative_eq!(markers[2].cx, 0.0, epsilon = 1e-9);
    assert_relative_eq!(markers[2].cy, 0.0, epsilon = 1e-9);
}

#[test]
fn pointer_enter_delivers_key_value_and_series_index_once() {
    let seen: Rc<RefCell<Vec<MarkerHover>>> = Rc::default();
    let sink = Rc::clone(&seen);
    let handlers = HoverHandlers::default()
        .with_enter(move |ctx: &MarkerHover| sink.borrow_mut().push(ctx.clone()));
    let config = RadarConfig::default().with_dots(true).with_dot_hover(handlers);

    let tree = render(&captions(), &[series()], &config, None).expect("tree");
    let marker_b = tree
        .markers()
        .iter()
        .find(|marker| marker.hover.key == "b")
        .expect("marker for axis b");

    marker_b.pointer_enter(&config.dot_hover);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].key, "b");
    assert_eq!(seen[0].value, 0.5);
    assert_eq!(seen[0].idx, 0);
}

#[test]
fn pointer_leave_fires_without_context() {
    let left: Rc<RefCell<u32>> = Rc::default();
    let sink = Rc::clone(&left);
    let handlers =
        HoverHandlers::<MarkerHover>::default().with_leave(move || *sink.borrow_mut() += 1);
    let config = RadarConfig::default().with_dots(true).with_dot_hover(handlers);

    let tree = render(&captions(), &[series()], &config, None).expect("tree");
    tree.markers()[0].pointer_leave(&config.dot_hover);
    assert_eq!(*left.borrow(), 1);
}

#[test]
fn invalid_series_aborts_the_whole_render() {
    let config = RadarConfig::default().with_dots(true);
    let incomplete = DataSeries::new(IndexMap::from([("a".to_owned(), 1.0)]));

    let err = render(&captions(), &[series(), incomplete], &config, None).expect_err("must fail");
    assert!(matches!(err, RadarError::InvalidSeries { index: 1 }));
}

#[test]
fn dot_props_flow_through_to_marker_attrs() {
    let config = RadarConfig::default().with_dots(true).with_dot_props(|meta| {
        let mut attrs = radar_rs::core::AttrBag::new();
        attrs.insert(
            "fill".to_owned(),
            serde_json::json!(meta.color.clone().unwrap_or_else(|| "#000".to_owned())),
        );
        attrs
    });

    let data = [series().with_color("#c0ffee").with_class("crew")];
    let tree = render(&captions(), &data, &config, None).expect("tree");
    let marker = &tree.markers()[0];
    assert_eq!(marker.attrs["fill"], serde_json::json!("#c0ffee"));
    assert_eq!(marker.class.as_deref(), Some("crew"));
}
