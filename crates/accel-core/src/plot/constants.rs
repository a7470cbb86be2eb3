//! Constants for plot projection
//!
//! Normalized device space is the square [-1, +1] x [-1, +1]; these values
//! describe it and the stroke used to draw the projected stems.

/// Width of normalized device space on either axis
pub const NORMALIZED_SPAN: f32 = 2.0;

/// Normalized X of the newest visible sample (right edge)
pub const NORMALIZED_RIGHT_EDGE: f32 = 1.0;

/// Normalized offset applied after scaling a sample into the span
pub const NORMALIZED_OFFSET: f32 = -1.0;

/// Fewest visible samples that get evenly spaced horizontally
///
/// Smaller windows use a full-span step instead of `2 / (n - 1)`.
pub const MIN_SPACED_SAMPLES: usize = 3;

/// Stroke width of a projected stem in pixels
pub const STEM_LINE_WIDTH_PX: u32 = 1;
