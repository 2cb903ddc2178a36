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
/// Renders a flat 2D scene - polygons, polylines and a bezier curve - to wireframe_2d.png
///
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // A spiky star outline, reused as a stamp
    let mut star = Module::new();
    let mut outline = Polyline::new();
    for step in 0..=10 {
        let angle   = step as f64 * std::f64::consts::PI / 5.0;
        let radius  = if step % 2 == 0 { 1.0 } else { 0.4 };
        outline.push(Point::new_2d(radius * angle.cos(), radius * angle.sin()));
    }
    star.polyline(outline);

    let mut scene = Module::new();

    // A filled backdrop square
    scene.color(Color::new(0.15, 0.15, 0.3));
    scene.polygon(Polygon::from_points(vec![
        Point::new_2d(-4.0, -3.0),
        Point::new_2d(4.0, -3.0),
        Point::new_2d(4.0, 3.0),
        Point::new_2d(-4.0, 3.0),
    ]));

    // Star instances at a few positions and sizes
    let star = Arc::new(star);
    scene.color(Color::new(1.0, 0.9, 0.2));
    for &(x, y, size) in [(-2.0, 1.0, 1.0), (0.5, -1.0, 0.6), (2.5, 1.5, 0.8)].iter() {
        scene.identity();
        scene.scale_2d(size, size);
        scene.translate_2d(x, y);
        scene.module(Arc::clone(&star));
    }

    // A bezier curve swooping across the scene
    scene.identity();
    scene.color(Color::new(0.4, 1.0, 0.6));
    scene.bezier(BezierCurve::new([
        Point::new_2d(-3.5, -2.5),
        Point::new_2d(-1.0, 2.5),
        Point::new_2d(1.0, -2.5),
        Point::new_2d(3.5, 2.5),
    ]));

    let view = View2D {
        center:         Point::origin(),
        x_axis:         Vector::new(1.0, 0.0, 0.0),
        du:             8.0,
        screen_width:   800,
        screen_height:  600,
    };
    let vtm = view.matrix()?;

    // Everything sits on the z = 0 plane, so depth testing is off
    let state   = DrawState { z_buffer: false, ..DrawState::new() };
    let lights  = LightingSet::new();

    let mut image = Image::new(view.screen_width, view.screen_height);
    scene.draw(&vtm, &Matrix::identity(), &state, &lights, &mut image)?;

    image.write_png(File::create("wireframe_2d.png")?)?;
    println!("Wrote wireframe_2d.png");

    Ok(())
}
