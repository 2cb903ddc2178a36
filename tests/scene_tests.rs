use polyscan::geometry::*;
use polyscan::lighting::*;
use polyscan::render::*;
use polyscan::scene::*;
use polyscan::shapes::*;

use std::sync::Arc;

fn unit_square(z: f64) -> Polygon {
    Polygon::from_points(vec![
        Point::new(0.0, 0.0, z),
        Point::new(5.0, 0.0, z),
        Point::new(5.0, 5.0, z),
        Point::new(0.0, 5.0, z),
    ])
}

#[test]
fn sub_module_state_changes_do_not_leak_to_the_parent() {
    // Child module: switch to blue, draw a point, and move its own transform around
    let mut child = Module::new();
    child.color(Color::new(0.0, 0.0, 1.0));
    child.point(Point::new(10.0, 10.0, 0.5));
    child.translate(50.0, 50.0, 0.0);
    child.point(Point::new(10.0, 10.0, 0.5));

    // Parent: switch to red, draw the child, then draw another point
    let mut parent = Module::new();
    parent.color(Color::new(1.0, 0.0, 0.0));
    parent.module(Arc::new(child));
    parent.point(Point::new(20.0, 20.0, 0.5));

    let identity    = Matrix::identity();
    let lights      = LightingSet::new();
    let mut image   = Image::new(100, 100);
    parent.draw(&identity, &identity, &DrawState::new(), &lights, &mut image).unwrap();

    // The child's points draw in blue, one moved by the child's own transform
    assert!(image.pixel(10, 10) == Color::new(0.0, 0.0, 1.0), "Child point should be blue: {:?}", image.pixel(10, 10));
    assert!(image.pixel(60, 60) == Color::new(0.0, 0.0, 1.0), "Child's transformed point should be blue: {:?}", image.pixel(60, 60));

    // The parent's later point is untouched by the child's color and transform
    assert!(image.pixel(20, 20) == Color::new(1.0, 0.0, 0.0), "Parent point after the sub-module should still be red: {:?}", image.pixel(20, 20));
}

#[test]
fn one_module_instances_under_many_transforms() {
    let mut shape = Module::new();
    shape.polygon(unit_square(0.5));
    let shape = Arc::new(shape);

    let mut scene = Module::new();
    scene.translate(10.0, 10.0, 0.0);
    scene.module(Arc::clone(&shape));
    scene.identity();
    scene.translate(40.0, 40.0, 0.0);
    scene.module(Arc::clone(&shape));

    let identity    = Matrix::identity();
    let lights      = LightingSet::new();
    let mut image   = Image::new(100, 100);
    scene.draw(&identity, &identity, &DrawState::new(), &lights, &mut image).unwrap();

    assert!(image.pixel(12, 12) == Color::white(), "First instance should fill near (12, 12)");
    assert!(image.pixel(42, 42) == Color::white(), "Second instance should fill near (42, 42)");
    assert!(image.pixel(30, 30) == Color::black(), "Space between instances should stay empty");
}

#[test]
fn transforms_compose_closest_to_the_object() {
    // Appending translate then scale runs the translate first on the geometry
    let mut module = Module::new();
    module.translate(10.0, 0.0, 0.0);
    module.scale(2.0, 1.0, 1.0);
    module.point(Point::new(1.0, 5.0, 0.5));

    let identity    = Matrix::identity();
    let lights      = LightingSet::new();
    let mut image   = Image::new(100, 100);
    module.draw(&identity, &identity, &DrawState::new(), &lights, &mut image).unwrap();

    // (1, 5) -> translate -> (11, 5) -> scale -> (22, 5)
    assert!(image.pixel(22, 5) == Color::white(), "Point should land at (22, 5)");
}

#[test]
fn identity_reset_clears_the_local_transform() {
    let mut module = Module::new();
    module.translate(30.0, 30.0, 0.0);
    module.identity();
    module.point(Point::new(5.0, 5.0, 0.5));

    let identity    = Matrix::identity();
    let lights      = LightingSet::new();
    let mut image   = Image::new(100, 100);
    module.draw(&identity, &identity, &DrawState::new(), &lights, &mut image).unwrap();

    assert!(image.pixel(5, 5) == Color::white(), "Point should draw untransformed after an identity reset");
    assert!(image.pixel(35, 35) == Color::black(), "The cleared translation should not apply");
}

#[test]
fn global_transform_nests_sub_modules() {
    // The caller's global transform and the parent's local transform both reach the child
    let mut child = Module::new();
    child.point(Point::new(0.0, 0.0, 0.5));

    let mut parent = Module::new();
    parent.translate(10.0, 0.0, 0.0);
    parent.module(Arc::new(child));

    let identity    = Matrix::identity();
    let global      = Matrix::translate(0.0, 20.0, 0.0);
    let lights      = LightingSet::new();
    let mut image   = Image::new(100, 100);
    parent.draw(&identity, &global, &DrawState::new(), &lights, &mut image).unwrap();

    assert!(image.pixel(10, 20) == Color::white(), "Child should see global * parent LTM");
}

#[test]
fn gouraud_scene_lights_polygons_per_vertex() {
    // A square on the z = 0 plane lit by a directional light from above (+z)
    let mut square = unit_square(0.0);
    square.set_normals(vec![Vector::new(0.0, 0.0, 1.0); 4]).unwrap();

    let mut module = Module::new();
    module.scale(4.0, 4.0, 1.0);
    module.translate(40.0, 40.0, 0.5);
    module.polygon(square);

    let mut lights = LightingSet::new();
    lights.add(Light::directional(Color::white(), Vector::new(0.0, 0.0, -1.0))).unwrap();

    let state = DrawState {
        shade:          ShadeMode::Gouraud,
        body_color:     Color::new(0.0, 0.8, 0.0),
        surface_color:  Color::black(),
        viewer:         Point::new(40.0, 40.0, 100.0),
        ..DrawState::new()
    };

    let identity    = Matrix::identity();
    let mut image   = Image::new(100, 100);
    module.draw(&identity, &identity, &state, &lights, &mut image).unwrap();

    let pixel = image.pixel(50, 50);
    assert!((pixel.g() - 0.8).abs() < 1e-3, "Head-on directional light should give the full body color, got {:?}", pixel);
    assert!(pixel.r() < 1e-3 && pixel.b() < 1e-3, "Only the green body channel should be lit, got {:?}", pixel);
}

#[test]
fn flat_shading_replicates_one_evaluation() {
    let mut square = unit_square(0.0);
    square.set_normals(vec![Vector::new(0.0, 0.0, 1.0); 4]).unwrap();

    let mut module = Module::new();
    module.translate(40.0, 40.0, 0.5);
    module.polygon(square);

    let mut lights = LightingSet::new();
    lights.add(Light::ambient(Color::new(0.25, 0.25, 0.25))).unwrap();

    let state = DrawState {
        shade:      ShadeMode::FlatShaded,
        body_color: Color::white(),
        viewer:     Point::new(0.0, 0.0, 100.0),
        ..DrawState::new()
    };

    let identity    = Matrix::identity();
    let mut image   = Image::new(100, 100);
    module.draw(&identity, &identity, &state, &lights, &mut image).unwrap();

    let pixel = image.pixel(42, 42);
    assert!((pixel.r() - 0.25).abs() < 1e-3, "Flat shading should carry the ambient evaluation to every pixel, got {:?}", pixel);
}

#[test]
fn drawing_is_read_only_for_the_module() {
    let mut module = Module::new();
    module.color(Color::new(1.0, 0.0, 0.0));
    module.point(Point::new(10.0, 10.0, 0.5));

    let before      = module.len();
    let identity    = Matrix::identity();
    let lights      = LightingSet::new();
    let mut image   = Image::new(50, 50);

    module.draw(&identity, &identity, &DrawState::new(), &lights, &mut image).unwrap();
    module.draw(&identity, &identity, &DrawState::new(), &lights, &mut image).unwrap();

    assert!(module.len() == before, "Drawing must not change the module's program");
}
