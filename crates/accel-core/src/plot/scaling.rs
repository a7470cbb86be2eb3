//! Auto-scaling and coordinate transformation
//!
//! Handles transformation from sample space (raw axis readings) into
//! normalized device space, and from normalized device space into pixel
//! coordinates of the plot region.

use embedded_graphics::prelude::*;

use super::constants::{
    MIN_SPACED_SAMPLES, NORMALIZED_OFFSET, NORMALIZED_RIGHT_EDGE, NORMALIZED_SPAN,
};

/// Observed extremes of the visible window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRange {
    /// Smallest visible sample
    pub min: i16,
    /// Largest visible sample
    pub max: i16,
}

impl SampleRange {
    /// Create a range from known extremes
    pub const fn new(min: i16, max: i16) -> Self {
        Self { min, max }
    }

    /// Scan samples for their extremes, `None` if there are none
    pub fn scan<I: IntoIterator<Item = i16>>(samples: I) -> Option<Self> {
        let mut samples = samples.into_iter();
        let first = samples.next()?;

        Some(samples.fold(Self::new(first, first), |range, sample| Self {
            min: range.min.min(sample),
            max: range.max.max(sample),
        }))
    }

    /// Check if every visible sample has the same value
    pub fn is_flat(&self) -> bool {
        self.min == self.max
    }

    /// Check if the range has samples on both sides of zero
    pub fn straddles_zero(&self) -> bool {
        i32::from(self.min) * i32::from(self.max) < 0
    }

    /// Distance between the extremes
    pub fn span(&self) -> i32 {
        i32::from(self.max) - i32::from(self.min)
    }
}

/// Linear map from sample values into normalized device space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
    /// Normalized units per sample unit
    pub scale: f32,
    /// Normalized offset added after scaling
    pub offset: f32,
    /// Sample value the stems grow out of
    pub baseline: i16,
    /// Sample value mapped onto the bottom edge
    min: i16,
}

impl Scaling {
    /// Derive the auto-scale for a window's range.
    ///
    /// A flat range has zero scale and offset so every sample, and the
    /// baseline, lands on the vertical centre. Otherwise the range fills
    /// [-1, +1]; the baseline sits at zero when the range crosses it, and
    /// at the extreme nearest zero when it does not.
    pub fn from_range(range: SampleRange) -> Self {
        if range.is_flat() {
            return Self {
                scale: 0.0,
                offset: 0.0,
                baseline: 0,
                min: range.min,
            };
        }

        let baseline = if range.straddles_zero() {
            0
        } else if range.max < 0 {
            range.max
        } else {
            range.min
        };

        Self {
            scale: NORMALIZED_SPAN / range.span() as f32,
            offset: NORMALIZED_OFFSET,
            baseline,
            min: range.min,
        }
    }

    /// Normalized Y of a sample value
    pub fn normalize(&self, sample: i16) -> f32 {
        self.scale * (i32::from(sample) - i32::from(self.min)) as f32 + self.offset
    }

    /// Normalized Y of the baseline
    pub fn normalized_baseline(&self) -> f32 {
        self.normalize(self.baseline)
    }
}

/// Normalized X distance between neighbouring visible samples
pub fn horizontal_step(visible: usize) -> f32 {
    if visible < MIN_SPACED_SAMPLES {
        NORMALIZED_SPAN
    } else {
        NORMALIZED_SPAN / (visible - 1) as f32
    }
}

/// Normalized X of the `index`-th visible sample, counting from the newest
pub fn normalized_x(index: usize, step: f32) -> f32 {
    NORMALIZED_RIGHT_EDGE - index as f32 * step
}

/// Map from normalized device space onto a region's pixels
///
/// Y is flipped so that larger samples are drawn higher on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    kx: f32,
    ky: f32,
    cy: f32,
}

impl ScreenTransform {
    /// Build the transform for a region of the given size
    pub fn new(size: Size) -> Self {
        let last_x = size.width.saturating_sub(1) as f32;
        let last_y = size.height.saturating_sub(1) as f32;

        Self {
            kx: last_x / 2.0,
            ky: -last_y / 2.0,
            cy: last_y,
        }
    }

    /// Pixel column of a normalized X (truncated toward zero)
    pub fn x(&self, x_norm: f32) -> i32 {
        (self.kx * (x_norm + 1.0)) as i32
    }

    /// Pixel row of a normalized Y (truncated toward zero)
    pub fn y(&self, y_norm: f32) -> i32 {
        (self.ky * (y_norm + 1.0) + self.cy) as i32
    }

    /// Pixel position of a normalized point
    pub fn to_screen(&self, x_norm: f32, y_norm: f32) -> Point {
        Point::new(self.x(x_norm), self.y(y_norm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_empty_has_no_range() {
        assert_eq!(SampleRange::scan(core::iter::empty::<i16>()), None);
    }

    #[test]
    fn test_scan_finds_extremes() {
        let range = SampleRange::scan([3, -7, 12, 0]).unwrap();

        assert_eq!(range, SampleRange::new(-7, 12));
        assert_eq!(range.span(), 19);
    }

    #[test]
    fn test_scan_extreme_values_do_not_overflow() {
        let range = SampleRange::scan([i16::MIN, i16::MAX]).unwrap();

        assert_eq!(range.span(), 65535);
        assert!(range.straddles_zero());
    }

    #[test]
    fn test_flat_range_has_zero_scale() {
        let scaling = Scaling::from_range(SampleRange::new(5, 5));

        assert_eq!(scaling.scale, 0.0);
        assert_eq!(scaling.offset, 0.0);
        assert_eq!(scaling.baseline, 0);
        assert_eq!(scaling.normalize(5), 0.0);
        assert_eq!(scaling.normalized_baseline(), 0.0);
    }

    #[test]
    fn test_symmetric_range_scale() {
        let scaling = Scaling::from_range(SampleRange::new(-10, 10));

        assert!((scaling.scale - 0.1).abs() < 1e-6);
        assert_eq!(scaling.offset, -1.0);
        assert_eq!(scaling.baseline, 0);
        assert!(scaling.normalize(0).abs() < 1e-6);
        assert!((scaling.normalize(-10) + 1.0).abs() < 1e-6);
        assert!((scaling.normalize(10) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_positive_range_baseline_at_min() {
        let scaling = Scaling::from_range(SampleRange::new(5, 20));

        assert_eq!(scaling.baseline, 5);
        assert_eq!(scaling.normalized_baseline(), -1.0);
    }

    #[test]
    fn test_negative_range_baseline_at_max() {
        let scaling = Scaling::from_range(SampleRange::new(-20, -5));

        assert_eq!(scaling.baseline, -5);
        assert!((scaling.normalized_baseline() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_range_touching_zero_is_not_straddling() {
        // Zero product: the min extreme is used, even when max is zero.
        assert_eq!(Scaling::from_range(SampleRange::new(0, 10)).baseline, 0);
        assert_eq!(Scaling::from_range(SampleRange::new(-10, 0)).baseline, -10);
    }

    #[test]
    fn test_horizontal_step_fallback_for_small_windows() {
        assert_eq!(horizontal_step(1), 2.0);
        assert_eq!(horizontal_step(2), 2.0);
        assert_eq!(horizontal_step(3), 1.0);
        assert_eq!(horizontal_step(5), 0.5);
    }

    #[test]
    fn test_screen_transform_corners() {
        let screen = ScreenTransform::new(Size::new(145, 101));

        assert_eq!(screen.to_screen(-1.0, -1.0), Point::new(0, 100));
        assert_eq!(screen.to_screen(1.0, 1.0), Point::new(144, 0));
        assert_eq!(screen.to_screen(0.0, 0.0), Point::new(72, 50));
    }
}
