use polyscan::geometry::*;
use polyscan::lighting::*;
use polyscan::render::*;
use polyscan::scene::*;
use polyscan::shapes::*;
use polyscan::view::*;

use std::error::Error;
use std::fs::File;
use std::sync::Arc;

///
/// Builds a unit cube centered on the origin, one one-sided quad per face with outward normals
///
fn unit_cube() -> Module {
    let corners = |indices: [usize; 4]| -> Vec<Point> {
        let vertex = |index: usize| Point::new(
            if index & 1 != 0 { 0.5 } else { -0.5 },
            if index & 2 != 0 { 0.5 } else { -0.5 },
            if index & 4 != 0 { 0.5 } else { -0.5 },
        );

        indices.iter().map(|&index| vertex(index)).collect()
    };

    // Each face winds counter-clockwise seen from outside
    let faces = [
        (corners([1, 3, 7, 5]), Vector::new(1.0, 0.0, 0.0)),
        (corners([0, 4, 6, 2]), Vector::new(-1.0, 0.0, 0.0)),
        (corners([2, 6, 7, 3]), Vector::new(0.0, 1.0, 0.0)),
        (corners([0, 1, 5, 4]), Vector::new(0.0, -1.0, 0.0)),
        (corners([4, 5, 7, 6]), Vector::new(0.0, 0.0, 1.0)),
        (corners([0, 2, 3, 1]), Vector::new(0.0, 0.0, -1.0)),
    ];

    let mut cube = Module::new();

    for (vertices, normal) in faces.iter() {
        let mut face = Polygon::from_points(vertices.clone());
        face.set_normals(vec![*normal; 4]).unwrap();
        face.set_one_sided(true);
        cube.polygon(face);
    }

    cube
}

///
/// Renders three instanced, rotated cubes under a perspective view to cube_scene.png
///
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cube = Arc::new(unit_cube());

    let mut scene = Module::new();
    scene.body_color(Color::new(0.9, 0.3, 0.2));
    scene.rotate_y(0.6);
    scene.module(Arc::clone(&cube));

    scene.identity();
    scene.body_color(Color::new(0.2, 0.5, 0.9));
    scene.rotate_x(0.4);
    scene.rotate_y(-0.3);
    scene.scale(0.6, 0.6, 0.6);
    scene.translate(-1.2, 0.4, 0.5);
    scene.module(Arc::clone(&cube));

    scene.identity();
    scene.body_color(Color::new(0.3, 0.8, 0.3));
    scene.rotate_z(0.8);
    scene.scale(0.5, 0.5, 0.5);
    scene.translate(1.1, -0.5, -0.3);
    scene.module(Arc::clone(&cube));

    let view = View3D {
        vrp:            Point::new(0.0, 0.0, -2.5),
        vpn:            Vector::new(0.0, 0.0, 1.0),
        vup:            Vector::new(0.0, 1.0, 0.0),
        d:              1.5,
        du:             1.2,
        dv:             1.2,
        b:              8.0,
        screen_width:   512,
        screen_height:  512,
    };
    let vtm = view.matrix()?;

    // The viewer sits at the center of projection, d behind the view plane
    let viewer = Point::new(
        view.vrp.x - view.vpn.x * view.d,
        view.vrp.y - view.vpn.y * view.d,
        view.vrp.z - view.vpn.z * view.d,
    );

    let mut lights = LightingSet::new();
    lights.add(Light::ambient(Color::new(0.15, 0.15, 0.15)))?;
    lights.add(Light::point(Color::new(0.8, 0.8, 0.8), Point::new(3.0, 4.0, -5.0)))?;
    lights.add(Light::spot(Color::new(0.4, 0.4, 0.3), Point::new(-2.0, 3.0, -3.0), Vector::new(0.5, -0.8, 0.8), 0.85, 2.0))?;

    let state = DrawState {
        shade:                  ShadeMode::Gouraud,
        surface_color:          Color::new(0.6, 0.6, 0.6),
        surface_coefficient:    24.0,
        viewer:                 viewer,
        ..DrawState::new()
    };

    let mut image = Image::new(view.screen_width, view.screen_height);
    scene.draw(&vtm, &Matrix::identity(), &state, &lights, &mut image)?;

    image.write_png(File::create("cube_scene.png")?)?;
    println!("Wrote cube_scene.png");

    Ok(())
}
