use super::edge_table::*;
use crate::error::*;
use crate::geometry::*;
use crate::render::*;
use crate::scene::*;
use crate::shapes::*;

use itertools::Itertools;
use smallvec::SmallVec;

///
/// How the span filler picks the color for each covered pixel
///
enum SpanShading {
    /// Every pixel takes the same color
    Uniform(Color),

    /// The uniform color, scaled down with distance from the viewer
    DepthTint(Color),

    /// The perspective-correct recovery of the interpolated per-vertex colors
    Interpolated,
}

///
/// Rasterizes a screen-space polygon into an image
///
/// The polygon must already be in screen space: x and y in pixels with row 0 at the top, z
/// holding the view depth in `(0, 1]`. The fill sweeps an active edge list from the polygon's
/// top scanline to its bottom one, pairing edges into spans and interpolating `1/z` and
/// `color/z` across them so color and depth recover perspective-correct values at each pixel.
///
/// Depth testing needs a meaningful z at every vertex; a polygon with any vertex at or behind
/// z = 0 (typically a 2D scene on the z = 0 plane) is filled with plain screen-linear
/// interpolation and neither tests nor writes the depth buffer.
///
/// A scanline where the active edges fail to pair up indicates inconsistent topology (the
/// polygon self-intersects, or rounding has collapsed an edge); the scanline is skipped with a
/// warning and the rest of the polygon still renders.
///
pub fn fill_polygon(polygon: &Polygon, state: &DrawState, image: &mut Image) -> Result<(), RenderError> {
    let vertices = polygon.vertices();

    if vertices.len() < 3 {
        return Err(RenderError::InvalidPolygon(vertices.len()));
    }

    // A polygon that reaches here with mismatched attributes is skipped, not fatal
    if !polygon.colors.is_empty() && polygon.colors.len() != vertices.len() {
        log::warn!("Skipping a polygon whose color array does not match its vertex count ({} vertices, {} colors)", vertices.len(), polygon.colors.len());
        return Ok(());
    }

    let corrected   = vertices.iter().all(|vertex| vertex.z > 0.0);
    let depth_test  = polygon.z_buffer && state.z_buffer && corrected;

    // Flat shading stores its one evaluated color per vertex; everything else that is uniform
    // draws with the state's current color
    let uniform = match state.shade {
        ShadeMode::FlatShaded   => polygon.colors.first().copied().unwrap_or(state.color),
        _                       => state.color,
    };

    let per_vertex = matches!(state.shade, ShadeMode::Gouraud | ShadeMode::Phong)
        && polygon.colors.len() == vertices.len();

    let shading = match state.shade {
        ShadeMode::DepthTint                    => SpanShading::DepthTint(uniform),
        _ if per_vertex                         => SpanShading::Interpolated,
        _                                       => SpanShading::Uniform(uniform),
    };

    // Edge table, ordered by first covered scanline
    let mut edges: SmallVec<[ScanEdge; 8]> = SmallVec::new();

    for index in 0..vertices.len() {
        let next    = (index + 1) % vertices.len();
        let color0  = if per_vertex { polygon.colors[index] } else { uniform };
        let color1  = if per_vertex { polygon.colors[next] } else { uniform };

        if let Some(edge) = ScanEdge::new(&vertices[index], &color0, &vertices[next], &color1, corrected, image.height()) {
            edges.push(edge);
        }
    }

    if edges.is_empty() {
        return Ok(());
    }

    edges.sort_by_key(|edge| edge.start_scanline);

    let first_row   = edges[0].start_scanline;
    let last_row    = edges.iter().map(|edge| edge.end_scanline).max().unwrap_or(first_row);

    // Sweep top to bottom, maintaining the active edge list
    let mut active: SmallVec<[ScanEdge; 8]> = SmallVec::new();
    let mut pending = 0;
    let mut warned  = false;

    for y in first_row..=last_row {
        while pending < edges.len() && edges[pending].start_scanline == y {
            active.push(edges[pending]);
            pending += 1;
        }

        active.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));

        if active.len() % 2 == 1 {
            if !warned {
                log::warn!("Skipping scanline {} of a polygon with an odd number of active edges", y);
                warned = true;
            }
        } else {
            for (left, right) in active.iter().tuples() {
                fill_span(left, right, y as usize, &shading, depth_test, image);
            }
        }

        active.retain(|edge| edge.end_scanline > y);

        for edge in active.iter_mut() {
            edge.advance();
        }
    }

    Ok(())
}

///
/// Fills the pixel columns between a pair of edge intersections on one scanline
///
fn fill_span(left: &ScanEdge, right: &ScanEdge, y: usize, shading: &SpanShading, depth_test: bool, image: &mut Image) {
    let x_start = (left.x.round() as i64).max(0);
    let x_end   = (right.x.round() as i64).min(image.width() as i64);

    if x_end <= x_start {
        return;
    }

    let span = right.x - left.x;
    let (inv_z_step, color_step) = if span > 0.0 {
        (
            (right.inv_z - left.inv_z) / span,
            [
                (right.color[0] - left.color[0]) / span,
                (right.color[1] - left.color[1]) / span,
                (right.color[2] - left.color[2]) / span,
            ],
        )
    } else {
        (0.0, [0.0; 3])
    };

    // Entering from the left of the image advances the values analytically, like a clipped edge
    let advance     = x_start as f64 - left.x;
    let mut inv_z   = left.inv_z + inv_z_step * advance;
    let mut color   = [
        left.color[0] + color_step[0] * advance,
        left.color[1] + color_step[1] * advance,
        left.color[2] + color_step[2] * advance,
    ];

    for x in x_start..x_end {
        let x = x as usize;

        if !depth_test || inv_z > image.depth(x, y) as f64 {
            let pixel = match shading {
                SpanShading::Uniform(uniform)       => *uniform,

                SpanShading::DepthTint(uniform)     => {
                    // Nearer surfaces keep more of the color; the back clip plane fades to black
                    let z = if inv_z > 0.0 { 1.0 / inv_z } else { 1.0 };
                    uniform.scaled((1.0 - z) as f32)
                }

                SpanShading::Interpolated           => {
                    Color::new(
                        (color[0] / inv_z) as f32,
                        (color[1] / inv_z) as f32,
                        (color[2] / inv_z) as f32,
                    )
                }
            };

            image.set_pixel(x, y, pixel);

            if depth_test {
                image.set_depth(x, y, inv_z as f32);
            }
        }

        inv_z += inv_z_step;
        for channel in 0..3 {
            color[channel] += color_step[channel];
        }
    }
}
