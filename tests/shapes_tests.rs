use polyscan::geometry::*;
use polyscan::render::*;
use polyscan::scene::*;
use polyscan::shapes::*;
use polyscan::RenderError;

#[test]
fn polygon_attribute_arrays_must_match_the_vertex_count() {
    let mut polygon = Polygon::from_points(vec![
        Point::new(0.0, 0.0, 0.5),
        Point::new(10.0, 0.0, 0.5),
        Point::new(0.0, 10.0, 0.5),
    ]);

    let mismatched = polygon.set_colors(vec![Color::white(); 2]);
    assert!(mismatched == Err(RenderError::AttributeMismatch(3, 2)), "A short color array should be refused, got {:?}", mismatched);
    assert!(polygon.colors().is_empty(), "A refused set_colors should leave the polygon unchanged");

    polygon.set_colors(vec![Color::white(); 3]).expect("matching array");
    polygon.set_colors(vec![]).expect("clearing is always allowed");

    let mismatched = polygon.set_normals(vec![Vector::zero(); 5]);
    assert!(mismatched == Err(RenderError::AttributeMismatch(3, 5)), "A long normal array should be refused, got {:?}", mismatched);
}

#[test]
fn polygon_face_normal_follows_winding() {
    let polygon = Polygon::from_points(vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    ]);

    assert!(polygon.face_normal() == Some(Vector::new(0.0, 0.0, 1.0)));

    let too_small = Polygon::from_points(vec![Point::origin()]);
    assert!(too_small.face_normal() == None);
}

#[test]
fn transform_carries_normals_as_vectors() {
    let mut polygon = Polygon::from_points(vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    ]);
    polygon.set_normals(vec![Vector::new(0.0, 0.0, 1.0); 3]).unwrap();

    polygon.transform(&Matrix::translate(5.0, 5.0, 5.0));

    assert!(polygon.vertices()[0] == Point::new(5.0, 5.0, 5.0), "Vertices should translate");
    assert!(polygon.normals()[0] == Vector::new(0.0, 0.0, 1.0), "Normals must not translate");
}

#[test]
fn bezier_flattening_preserves_the_endpoints() {
    let curve = BezierCurve::new([
        Point::new(10.0, 10.0, 0.5),
        Point::new(30.0, 80.0, 0.5),
        Point::new(60.0, -20.0, 0.5),
        Point::new(90.0, 50.0, 0.5),
    ]);

    let chain = curve.flatten();

    assert!(chain.len() >= 2, "Flattening should produce at least the two endpoints");
    assert!(chain[0] == Point::new(10.0, 10.0, 0.5), "Chain should start at the first control point");
    assert!(*chain.last().unwrap() == Point::new(90.0, 50.0, 0.5), "Chain should end at the last control point");
}

#[test]
fn flat_bezier_needs_no_subdivision() {
    // Control points all inside one pixel: the curve is already flat
    let curve = BezierCurve::new([
        Point::new(10.0, 10.0, 0.5),
        Point::new(10.2, 10.2, 0.5),
        Point::new(10.4, 10.4, 0.5),
        Point::new(10.5, 10.5, 0.5),
    ]);

    assert!(curve.flatten().len() == 2, "A sub-pixel curve should flatten to a single segment");
}

#[test]
fn bezier_flattening_stays_near_the_control_hull() {
    let curve = BezierCurve::new([
        Point::new(0.0, 0.0, 0.5),
        Point::new(25.0, 40.0, 0.5),
        Point::new(75.0, 40.0, 0.5),
        Point::new(100.0, 0.0, 0.5),
    ]);

    for point in curve.flatten().iter() {
        assert!(point.x >= -0.5 && point.x <= 100.5, "Flattened point escaped the hull in x: {:?}", point);
        assert!(point.y >= -0.5 && point.y <= 40.5, "Flattened point escaped the hull in y: {:?}", point);
    }
}

#[test]
fn polyline_draws_an_open_chain() {
    let polyline = Polyline::from_points(vec![
        Point::new(10.0, 10.0, 0.5),
        Point::new(30.0, 10.0, 0.5),
        Point::new(30.0, 30.0, 0.5),
    ]);

    let state       = DrawState { z_buffer: false, ..DrawState::new() };
    let mut image   = Image::new(50, 50);
    polyline.draw(&state, &mut image).unwrap();

    assert!(image.pixel(20, 10) == Color::white(), "First segment should draw");
    assert!(image.pixel(30, 20) == Color::white(), "Second segment should draw");
    assert!(image.pixel(20, 20) == Color::black(), "No implicit closing segment for a polyline");
}

#[test]
fn wireframe_polygon_closes_the_ring() {
    let polygon = Polygon::from_points(vec![
        Point::new(10.0, 10.0, 0.5),
        Point::new(30.0, 10.0, 0.5),
        Point::new(30.0, 30.0, 0.5),
    ]);

    let state       = DrawState { shade: ShadeMode::Wireframe, z_buffer: false, ..DrawState::new() };
    let mut image   = Image::new(50, 50);
    polygon.draw(&state, &mut image).unwrap();

    // The closing edge from the last vertex back to the first is drawn too
    assert!(image.pixel(20, 20) == Color::white(), "Wireframe should close the ring");
    assert!(image.pixel(15, 25) == Color::black(), "Interior should stay unfilled");
}

#[test]
fn line_transforms_and_normalizes_in_place() {
    let mut line = Line::new(Point::new(1.0, 2.0, 2.0), Point::new(3.0, 4.0, 4.0));

    line.transform(&Matrix::scale(2.0, 2.0, 1.0));
    assert!(line.start == Point::new(2.0, 4.0, 2.0) && line.end == Point::new(6.0, 8.0, 4.0));

    // The perspective weight divides x and y back out when the line normalizes
    line.transform(&Matrix::perspective(1.0));
    line.normalize();
    assert!(line.start.h == 1.0 && line.end.h == 1.0, "Normalize should restore unit weights");
    assert!((line.start.x - 1.0).abs() < 1e-9, "Perspective divide should shrink x by depth, got {}", line.start.x);
    assert!((line.end.x - 1.5).abs() < 1e-9, "Perspective divide should shrink x by depth, got {}", line.end.x);
}
