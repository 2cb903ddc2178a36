use crate::geometry::*;

///
/// The kinds of light source the illumination model understands
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightKind {
    /// A disabled light: contributes nothing and is skipped during shading
    None,

    /// Illuminates every surface equally, with no geometry test at all
    Ambient,

    /// Parallel rays arriving from a single direction, as if from infinitely far away
    Directional,

    /// Radiates in all directions from a position in the world
    Point,

    /// Radiates from a position, but only within a cone around its direction
    Spot,
}

///
/// A single light source
///
/// Not every field is meaningful for every kind: an ambient light only has a color, a directional
/// light ignores its position, and only spot lights read the cutoff and sharpness. The
/// constructors fill in the unused fields with inert defaults.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    /// What kind of light this is
    pub kind: LightKind,

    /// The color (and, by magnitude, the intensity) of the light
    pub color: Color,

    /// The direction the light shines along (directional and spot lights)
    pub direction: Vector,

    /// Where the light sits in the world (point and spot lights)
    pub position: Point,

    /// Cosine of the half-angle of a spot light's cone
    pub cutoff: f64,

    /// Falloff exponent applied to the cutoff when testing the cone boundary
    pub sharpness: f64,
}

impl Light {
    ///
    /// A disabled light
    ///
    pub fn none() -> Light {
        Light {
            kind:       LightKind::None,
            color:      Color::black(),
            direction:  Vector::zero(),
            position:   Point::origin(),
            cutoff:     0.0,
            sharpness:  1.0,
        }
    }

    ///
    /// An ambient light of the given color
    ///
    pub fn ambient(color: Color) -> Light {
        Light {
            kind: LightKind::Ambient,
            color: color,
            ..Light::none()
        }
    }

    ///
    /// A directional light shining along `direction`
    ///
    pub fn directional(color: Color, direction: Vector) -> Light {
        Light {
            kind:       LightKind::Directional,
            color:      color,
            direction:  direction,
            ..Light::none()
        }
    }

    ///
    /// A point light radiating from `position`
    ///
    pub fn point(color: Color, position: Point) -> Light {
        Light {
            kind:       LightKind::Point,
            color:      color,
            position:   position,
            ..Light::none()
        }
    }

    ///
    /// A spot light at `position` shining a cone along `direction`
    ///
    /// `cutoff` is the cosine of the cone's half-angle (so 1 is an infinitely narrow beam and 0 a
    /// full hemisphere); `sharpness` raises the cutoff when testing the cone boundary, tightening
    /// the effective cone as it grows.
    ///
    pub fn spot(color: Color, position: Point, direction: Vector, cutoff: f64, sharpness: f64) -> Light {
        Light {
            kind:       LightKind::Spot,
            color:      color,
            position:   position,
            direction:  direction,
            cutoff:     cutoff,
            sharpness:  sharpness,
        }
    }
}
