use std::error::Error;
use std::fmt;

///
/// Possible errors from building or rendering a scene
///
/// Errors here are the fatal kind: the operation that produced them has been abandoned with no
/// partial effect (an image may be left partially rendered up to the failing primitive, but is
/// never corrupted past it). Recoverable conditions - a scanline with mismatched edge pairs, a
/// polygon whose attributes have gone inconsistent - are reported through `log::warn!` and the
/// offending unit of work is skipped instead.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderError {
    /// A zero-length vector was normalized, or used where a direction was required
    DegenerateVector,

    /// The view parameters do not describe a usable projection (the reason names the parameter)
    InvalidView(&'static str),

    /// A polygon was drawn with fewer than three vertices (the actual count is attached)
    InvalidPolygon(usize),

    /// A per-vertex attribute array does not match the vertex count (vertex count, attribute count)
    AttributeMismatch(usize, usize),

    /// The lighting set is full and the light was not added (the capacity is attached)
    TooManyLights(usize),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::DegenerateVector           => write!(f, "cannot normalize a zero-length vector"),
            RenderError::InvalidView(reason)        => write!(f, "invalid view parameters: {}", reason),
            RenderError::InvalidPolygon(count)      => write!(f, "polygon needs at least 3 vertices (found {})", count),
            RenderError::AttributeMismatch(nv, na)  => write!(f, "per-vertex attributes do not match vertex count ({} vertices, {} attributes)", nv, na),
            RenderError::TooManyLights(capacity)    => write!(f, "lighting set is full (capacity {})", capacity),
        }
    }
}

impl Error for RenderError {}
