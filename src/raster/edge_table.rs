use crate::geometry::*;

///
/// One polygon edge prepared for the scanline sweep
///
/// An edge records the scanlines it covers, its current intersection values (x, 1/z, and the
/// color attribute), the per-scanline increments that advance those values, and the values at
/// its bottom endpoint so an advance that overshoots can be clamped back.
///
/// When the polygon is perspective-corrected, the depth field holds `1/z` and the color field
/// holds `color/z`: both are linear across the screen-space edge, and dividing the interpolated
/// color by the interpolated `1/z` recovers the true perspective-correct attribute. When the
/// polygon carries no usable depth (a 2D scene on the z = 0 plane), the depth field is pinned at
/// 1 and the color field holds the plain color, which makes the same recovery arithmetic degrade
/// to ordinary screen-linear interpolation.
///
#[derive(Clone, Copy, Debug)]
pub (crate) struct ScanEdge {
    /// First scanline this edge covers (already clipped to the image)
    pub start_scanline: i64,

    /// Last scanline this edge covers (already clipped to the image)
    pub end_scanline: i64,

    /// Current x intersection
    pub x: f64,

    /// Current depth value (1/z, or 1 when uncorrected)
    pub inv_z: f64,

    /// Current color value (color/z, or the plain color when uncorrected)
    pub color: [f64; 3],

    x_step:     f64,
    inv_z_step: f64,
    color_step: [f64; 3],

    x_end:      f64,
    inv_z_end:  f64,
    color_end:  [f64; 3],
}

impl ScanEdge {
    ///
    /// Prepares one edge of a polygon for the sweep, or `None` if it covers no scanline
    ///
    /// Exactly horizontal edges contribute nothing (the test is on the unrounded y values). The
    /// endpoints are oriented so the edge runs downward; its scanline range is
    /// `round(y0) ..= round(y1) - 1`, clipped to the image rows. An edge whose top vertex lies
    /// above the image has its starting intersection values advanced to scanline 0 analytically,
    /// which the fractional offset from `y0` to the first covered scanline handles as the same
    /// computation.
    ///
    pub fn new(v0: &Point, c0: &Color, v1: &Point, c1: &Color, corrected: bool, rows: usize) -> Option<ScanEdge> {
        if v0.y == v1.y {
            return None;
        }

        let (v0, c0, v1, c1) = if v0.y <= v1.y { (v0, c0, v1, c1) } else { (v1, c1, v0, c0) };

        let start   = v0.y.round() as i64;
        let end     = (v1.y.round() as i64) - 1;

        if end < start || end < 0 || start >= rows as i64 {
            return None;
        }
        let end = end.min(rows as i64 - 1);

        let (inv_z0, inv_z1) = if corrected {
            (1.0 / v0.z, 1.0 / v1.z)
        } else {
            (1.0, 1.0)
        };

        let color0 = scaled_components(c0, inv_z0);
        let color1 = scaled_components(c1, inv_z1);

        let dy          = v1.y - v0.y;
        let x_step      = (v1.x - v0.x) / dy;
        let inv_z_step  = (inv_z1 - inv_z0) / dy;
        let color_step  = [
            (color1[0] - color0[0]) / dy,
            (color1[1] - color0[1]) / dy,
            (color1[2] - color0[2]) / dy,
        ];

        // Intersection values at the first covered scanline
        let first   = start.max(0);
        let advance = first as f64 - v0.y;

        Some(ScanEdge {
            start_scanline: first,
            end_scanline:   end,
            x:              v0.x + x_step * advance,
            inv_z:          inv_z0 + inv_z_step * advance,
            color:          [
                color0[0] + color_step[0] * advance,
                color0[1] + color_step[1] * advance,
                color0[2] + color_step[2] * advance,
            ],
            x_step:         x_step,
            inv_z_step:     inv_z_step,
            color_step:     color_step,
            x_end:          v1.x,
            inv_z_end:      inv_z1,
            color_end:      color1,
        })
    }

    ///
    /// Moves the intersection values down by one scanline
    ///
    /// A value that steps past its own endpoint is clamped to the endpoint, so rounding drift
    /// over a long edge never carries an intersection outside the edge.
    ///
    pub fn advance(&mut self) {
        self.x      = stepped(self.x, self.x_step, self.x_end);
        self.inv_z  = stepped(self.inv_z, self.inv_z_step, self.inv_z_end);

        for channel in 0..3 {
            self.color[channel] = stepped(self.color[channel], self.color_step[channel], self.color_end[channel]);
        }
    }
}

///
/// Advances a value by one step, clamping at the endpoint in the direction of travel
///
#[inline]
fn stepped(value: f64, step: f64, end: f64) -> f64 {
    let value = value + step;

    if (step > 0.0 && value > end) || (step < 0.0 && value < end) {
        end
    } else {
        value
    }
}

#[inline]
fn scaled_components(color: &Color, factor: f64) -> [f64; 3] {
    let components = color.to_components();

    [
        components[0] as f64 * factor,
        components[1] as f64 * factor,
        components[2] as f64 * factor,
    ]
}
