use std::ops::{Add, Mul};

///
/// An RGB color sample with each channel clamped to the range [0, 1]
///
/// Clamping happens on every write: the constructor and the channel setters all clamp, so a
/// stored color is always displayable. Lighting works on unclamped accumulators and only clamps
/// when the result is stored back into a `Color` (see `LightingSet::shade`). There is no alpha
/// channel; the pipeline renders opaque surfaces only.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
}

impl Color {
    ///
    /// Creates a color from red, green and blue components (clamped to [0, 1])
    ///
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Color {
        Color {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    ///
    /// A color with all channels at 0
    ///
    #[inline]
    pub fn black() -> Color {
        Color { r: 0.0, g: 0.0, b: 0.0 }
    }

    ///
    /// A color with all channels at 1
    ///
    #[inline]
    pub fn white() -> Color {
        Color { r: 1.0, g: 1.0, b: 1.0 }
    }

    /// The red channel
    #[inline]
    pub fn r(&self) -> f32 { self.r }

    /// The green channel
    #[inline]
    pub fn g(&self) -> f32 { self.g }

    /// The blue channel
    #[inline]
    pub fn b(&self) -> f32 { self.b }

    ///
    /// Replaces all three channels (clamped to [0, 1])
    ///
    #[inline]
    pub fn set(&mut self, r: f32, g: f32, b: f32) {
        self.r = r.clamp(0.0, 1.0);
        self.g = g.clamp(0.0, 1.0);
        self.b = b.clamp(0.0, 1.0);
    }

    ///
    /// The channels as an array, in RGB order
    ///
    #[inline]
    pub fn to_components(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    ///
    /// Creates a color from an unclamped accumulator (each channel is clamped on the way in)
    ///
    #[inline]
    pub fn from_components(components: [f32; 3]) -> Color {
        Color::new(components[0], components[1], components[2])
    }

    ///
    /// The channels quantized to 8 bits, for frame output
    ///
    #[inline]
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        ]
    }

    ///
    /// Multiplies each channel by a scale factor, clamping the result
    ///
    #[inline]
    pub fn scaled(&self, factor: f32) -> Color {
        Color::new(self.r * factor, self.g * factor, self.b * factor)
    }
}

impl Default for Color {
    #[inline]
    fn default() -> Color {
        Color::black()
    }
}

impl Add for Color {
    type Output = Color;

    #[inline]
    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Mul for Color {
    type Output = Color;

    ///
    /// Channel-wise product (filtering one color by another)
    ///
    #[inline]
    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    #[inline]
    fn mul(self, rhs: f32) -> Color {
        self.scaled(rhs)
    }
}
