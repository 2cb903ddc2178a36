use polyscan::geometry::*;
use polyscan::lighting::*;
use polyscan::render::*;
use polyscan::scene::*;
use polyscan::shapes::*;
use polyscan::view::*;

use rayon::prelude::*;

use std::error::Error;
use std::fs::File;
use std::sync::Arc;

const FRAMES: usize = 8;

///
/// Builds a square pyramid with one-sided faces and outward normals
///
fn pyramid() -> Module {
    let apex = Point::new(0.0, 0.8, 0.0);
    let base = [
        Point::new(-0.7, -0.4, -0.7),
        Point::new(0.7, -0.4, -0.7),
        Point::new(0.7, -0.4, 0.7),
        Point::new(-0.7, -0.4, 0.7),
    ];

    let mut module = Module::new();

    for side in 0..4 {
        let a = base[side];
        let b = base[(side + 1) % 4];

        let mut face    = Polygon::from_points(vec![a, b, apex]);
        let normal      = Vector::surface_normal(&a, &b, &apex);
        face.set_normals(vec![normal; 3]).unwrap();
        face.set_one_sided(true);
        module.polygon(face);
    }

    let mut bottom = Polygon::from_points(vec![base[3], base[2], base[1], base[0]]);
    bottom.set_normals(vec![Vector::new(0.0, -1.0, 0.0); 4]).unwrap();
    bottom.set_one_sided(true);
    module.polygon(bottom);

    module
}

///
/// Renders a turntable of FRAMES views of the same scene, one image per thread
///
/// Modules are read-only while drawing and every frame owns its image, so the frames need no
/// synchronization beyond the shared scene handle.
///
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut scene = Module::new();
    scene.body_color(Color::new(0.8, 0.6, 0.2));
    scene.module(Arc::new(pyramid()));
    let scene = Arc::new(scene);

    let mut lights = LightingSet::new();
    lights.add(Light::ambient(Color::new(0.2, 0.2, 0.2)))?;
    lights.add(Light::directional(Color::new(0.8, 0.8, 0.8), Vector::new(-0.5, -1.0, 0.3)))?;

    (0..FRAMES).into_par_iter()
        .map(|frame| -> Result<(), Box<dyn Error + Send + Sync>> {
            // Orbit the camera around the pyramid, always looking at the origin
            let angle   = frame as f64 * std::f64::consts::TAU / FRAMES as f64;
            let eye     = Point::new(3.0 * angle.sin(), 1.5, -3.0 * angle.cos());
            let vpn     = Vector::between(&eye, &Point::origin());

            let view = View3D {
                vrp:            eye,
                vpn:            vpn,
                vup:            Vector::new(0.0, 1.0, 0.0),
                d:              1.0,
                du:             0.8,
                dv:             0.8,
                b:              10.0,
                screen_width:   320,
                screen_height:  320,
            };
            let vtm = view.matrix()?;

            let state = DrawState {
                shade:                  ShadeMode::Gouraud,
                surface_color:          Color::new(0.5, 0.5, 0.5),
                surface_coefficient:    16.0,
                viewer:                 eye,
                ..DrawState::new()
            };

            let mut image = Image::new(view.screen_width, view.screen_height);
            scene.draw(&vtm, &Matrix::identity(), &state, &lights, &mut image)?;

            let filename = format!("frame_{:02}.png", frame);
            image.write_png(File::create(&filename)?)?;
            println!("Wrote {}", filename);

            Ok(())
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| -> Box<dyn Error> { err })?;

    Ok(())
}
