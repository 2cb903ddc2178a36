use super::light::*;
use crate::error::*;
use crate::geometry::*;

/// The most lights a `LightingSet` will hold
pub const MAX_LIGHTS: usize = 64;

///
/// An ordered collection of light sources, evaluated together by the illumination formula
///
/// The set is bounded at `MAX_LIGHTS`: adding a light to a full set leaves the set unchanged and
/// reports the failure, it never crashes or silently grows.
///
#[derive(Clone, Debug, PartialEq)]
pub struct LightingSet {
    lights: Vec<Light>,
}

impl LightingSet {
    ///
    /// Creates an empty lighting set
    ///
    pub fn new() -> LightingSet {
        LightingSet { lights: vec![] }
    }

    ///
    /// Adds a light to the set
    ///
    /// Fails with `TooManyLights` if the set is already at capacity, in which case the set is
    /// left exactly as it was.
    ///
    pub fn add(&mut self, light: Light) -> Result<(), RenderError> {
        if self.lights.len() >= MAX_LIGHTS {
            return Err(RenderError::TooManyLights(MAX_LIGHTS));
        }

        self.lights.push(light);
        Ok(())
    }

    ///
    /// Removes every light from the set
    ///
    pub fn clear(&mut self) {
        self.lights.clear();
    }

    /// The lights in this set, in the order they were added
    #[inline]
    pub fn lights(&self) -> &[Light] { &self.lights }

    /// The number of lights in the set
    #[inline]
    pub fn len(&self) -> usize { self.lights.len() }

    /// True if the set contains no lights
    #[inline]
    pub fn is_empty(&self) -> bool { self.lights.is_empty() }

    ///
    /// Evaluates the illumination formula for one surface point
    ///
    /// `normal` and `view` must be unit vectors in the same coordinate frame as `point` and the
    /// light positions (the pipeline shades in world space, before the view transform). `body` is
    /// the diffuse reflectance of the surface, `surface` the specular reflectance, and
    /// `coefficient` the specular exponent.
    ///
    /// Each light contributes `body * light * θ + light * surface * β^coefficient`, with θ the
    /// cosine between the light and the normal and β the cosine between the half-vector and the
    /// normal. One-sided surfaces ignore lights behind them; two-sided surfaces flip θ and β so
    /// the back face is lit consistently. A light on the opposite side of the surface from the
    /// viewer contributes nothing. Lights that sit exactly on the surface point, or that shine
    /// exactly opposite the view direction, have no usable geometry and are skipped rather than
    /// treated as an error.
    ///
    /// The channels accumulate unclamped and only clamp when stored into the returned `Color`.
    ///
    pub fn shade(&self, normal: &Vector, view: &Vector, point: &Point, body: &Color, surface: &Color, coefficient: f32, one_sided: bool) -> Color {
        let body        = body.to_components();
        let surface     = surface.to_components();
        let mut total   = [0.0f32; 3];

        for light in self.lights.iter() {
            let light_color = light.color.to_components();

            // Ambient lights skip the geometry entirely
            match light.kind {
                LightKind::None => {
                    continue;
                }

                LightKind::Ambient => {
                    for channel in 0..3 {
                        total[channel] += light_color[channel] * body[channel];
                    }
                    continue;
                }

                _ => { }
            }

            // Direction from the surface point toward the light
            let to_light = match light.kind {
                LightKind::Directional  => -light.direction,
                _                       => Vector::between(point, &light.position),
            };

            let to_light = match to_light.normalized() {
                Ok(to_light)    => to_light,
                Err(_)          => { continue; }    // light coincides with the surface point
            };

            // Spot lights cull anything outside their cone
            if light.kind == LightKind::Spot {
                let spot_direction = match light.direction.normalized() {
                    Ok(direction)   => direction,
                    Err(_)          => { continue; }
                };

                let alignment = (-to_light).dot(&spot_direction);
                if alignment < light.cutoff.powf(light.sharpness) {
                    continue;
                }
            }

            let mut theta = to_light.dot(normal);

            // A one-sided surface takes no light from behind
            if one_sided && theta < 0.0 {
                continue;
            }

            // Light and viewer on opposite sides of the surface: the lit side is not the visible one
            let sigma = view.dot(normal);
            if theta * sigma < 0.0 {
                continue;
            }

            let half = match (to_light + *view).normalized() {
                Ok(half)    => half,
                Err(_)      => { continue; }    // light exactly opposite the view direction
            };
            let mut beta = half.dot(normal);

            // Two-sided surfaces illuminate their back face as if it were the front
            if !one_sided && theta < 0.0 {
                theta   = -theta;
                beta    = -beta;
            }

            let specular = if beta > 0.0 { beta.powf(coefficient as f64) } else { 0.0 };

            for channel in 0..3 {
                total[channel] += body[channel] * light_color[channel] * (theta as f32)
                    + light_color[channel] * surface[channel] * (specular as f32);
            }
        }

        Color::from_components(total)
    }
}

impl Default for LightingSet {
    fn default() -> LightingSet {
        LightingSet::new()
    }
}
