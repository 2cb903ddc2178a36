use crate::geometry::*;
use crate::render::*;

///
/// Plots a single screen-space point into an image
///
/// The point is rounded to the nearest pixel; anything outside the image is dropped. With depth
/// testing on, the pixel is only written when the point is nearer than what the depth buffer
/// already holds, and points at or behind z = 0 (no meaningful depth) are dropped entirely.
///
pub fn draw_point(point: &Point, color: Color, depth_test: bool, image: &mut Image) {
    let x = point.x.round() as i64;
    let y = point.y.round() as i64;

    if x < 0 || y < 0 || x >= image.width() as i64 || y >= image.height() as i64 {
        return;
    }

    let (x, y) = (x as usize, y as usize);

    if depth_test {
        if point.z <= 0.0 {
            return;
        }

        let inv_z = 1.0 / point.z;
        if inv_z > image.depth(x, y) as f64 {
            image.set_pixel(x, y, color);
            image.set_depth(x, y, inv_z as f32);
        }
    } else {
        image.set_pixel(x, y, color);
    }
}

///
/// Plots a screen-space line segment into an image
///
/// Walks one pixel step at a time along the major axis, interpolating the minor axis and `1/z`
/// linearly. Each step applies the same depth rule as the polygon filler (larger `1/z` wins), so
/// wireframes and filled surfaces occlude each other consistently. A line with an endpoint at or
/// behind z = 0 has no usable depth and is drawn without testing.
///
pub fn draw_line(start: &Point, end: &Point, color: Color, depth_test: bool, image: &mut Image) {
    let dx      = end.x - start.x;
    let dy      = end.y - start.y;
    let steps   = dx.abs().max(dy.abs()).round() as i64;

    if steps <= 0 {
        draw_point(start, color, depth_test, image);
        return;
    }

    let depth_test = depth_test && start.z > 0.0 && end.z > 0.0;

    let (inv_z0, inv_z1) = if depth_test {
        (1.0 / start.z, 1.0 / end.z)
    } else {
        (1.0, 1.0)
    };

    let x_step      = dx / steps as f64;
    let y_step      = dy / steps as f64;
    let inv_z_step  = (inv_z1 - inv_z0) / steps as f64;

    let mut x       = start.x;
    let mut y       = start.y;
    let mut inv_z   = inv_z0;

    for _ in 0..=steps {
        let col = x.round() as i64;
        let row = y.round() as i64;

        if col >= 0 && row >= 0 && col < image.width() as i64 && row < image.height() as i64 {
            let (col, row) = (col as usize, row as usize);

            if depth_test {
                if inv_z > image.depth(col, row) as f64 {
                    image.set_pixel(col, row, color);
                    image.set_depth(col, row, inv_z as f32);
                }
            } else {
                image.set_pixel(col, row, color);
            }
        }

        x       += x_step;
        y       += y_step;
        inv_z   += inv_z_step;
    }
}
