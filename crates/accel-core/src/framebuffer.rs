//! RAM framebuffer for the watch display with per-row change tracking.
//!
//! The plotter repaints the whole screen on every frame, but from one frame
//! to the next only a few stems and label glyphs move. Every row remembers
//! the span of columns that changed, and [`FrameBuffer::flush`] sends one
//! short run per touched row, the way line-addressed watch panels are
//! refreshed. Hosts and tests can also read pixels back.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PointsIter, Rectangle};
use log::debug;

use crate::ui::{COLOR_BACKGROUND, DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};

const WIDTH: usize = DISPLAY_WIDTH_PX as usize;
const HEIGHT: usize = DISPLAY_HEIGHT_PX as usize;

/// Inclusive column range changed in one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowSpan {
    first: usize,
    last: usize,
}

impl RowSpan {
    /// Grow `span` (or start one) so it covers column `x`
    fn covering(span: Option<Self>, x: usize) -> Self {
        match span {
            Some(span) => Self {
                first: span.first.min(x),
                last: span.last.max(x),
            },
            None => Self { first: x, last: x },
        }
    }

    fn width(self) -> usize {
        self.last - self.first + 1
    }
}

/// Full-screen `DrawTarget<Color = Rgb565>` kept in RAM.
///
/// 144 x 168 x 2 bytes = 48,384 bytes of pixels plus one span slot per row.
pub struct FrameBuffer {
    pixels: Vec<Rgb565>,
    /// One slot per row, `None` while the row matches the panel
    changed: Vec<Option<RowSpan>>,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Allocate a clean buffer filled with the background color
    pub fn new() -> Self {
        Self {
            pixels: vec![COLOR_BACKGROUND; WIDTH * HEIGHT],
            changed: vec![None; HEIGHT],
        }
    }

    #[inline]
    fn write(&mut self, x: usize, y: usize, color: Rgb565) {
        let pixel = &mut self.pixels[y * WIDTH + x];
        if *pixel == color {
            return;
        }

        *pixel = color;
        let span = &mut self.changed[y];
        *span = Some(RowSpan::covering(*span, x));
    }

    /// Color at `point`, `None` outside the screen
    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        let (x, y) = (usize::try_from(point.x).ok()?, usize::try_from(point.y).ok()?);
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }
        Some(self.pixels[y * WIDTH + x])
    }

    /// Count pixels of `color` inside `area`
    pub fn count_color(&self, area: Rectangle, color: Rgb565) -> usize {
        area.points()
            .filter(|&point| self.pixel(point) == Some(color))
            .count()
    }

    /// Rows with changes waiting to be flushed
    pub fn dirty_rows(&self) -> usize {
        self.changed.iter().flatten().count()
    }

    /// Bounding box of every pending change, if any
    pub fn dirty_area(&self) -> Option<Rectangle> {
        let mut rows = self
            .changed
            .iter()
            .enumerate()
            .filter_map(|(y, span)| span.map(|span| (y, span)));

        let (top, first) = rows.next()?;
        let (left, right, bottom) = rows.fold(
            (first.first, first.last, top),
            |(left, right, _), (y, span)| (left.min(span.first), right.max(span.last), y),
        );

        Some(Rectangle::with_corners(
            Point::new(left as i32, top as i32),
            Point::new(right as i32, bottom as i32),
        ))
    }

    /// Send every changed run to `display` and mark the buffer clean.
    ///
    /// Writes one `fill_contiguous` per changed row; columns outside a row's
    /// span are never sent. On error the rows not yet sent stay pending.
    pub fn flush<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut rows = 0;
        for y in 0..HEIGHT {
            let Some(span) = self.changed[y] else {
                continue;
            };

            let start = y * WIDTH + span.first;
            let run = &self.pixels[start..start + span.width()];
            let area = Rectangle::new(
                Point::new(span.first as i32, y as i32),
                Size::new(span.width() as u32, 1),
            );
            display.fill_contiguous(&area, run.iter().copied())?;

            self.changed[y] = None;
            rows += 1;
        }

        if rows > 0 {
            debug!("Flushed {} changed rows", rows);
        }
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y))
                && x < WIDTH
                && y < HEIGHT
            {
                self.write(x, y, color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        // Clipped to the screen, so every point is non-negative and in range.
        let area = area.intersection(&self.bounding_box());
        for point in area.points() {
            self.write(point.x as usize, point.y as usize, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_solid(&self.bounding_box(), color)
    }
}
