//! Auto-scaling stem plot of a sampler's recent history
//!
//! [`project`] turns a [`Sampler`] and a [`PlotRequest`] into a
//! [`Projection`]: one vertical stem per visible sample, already in pixel
//! coordinates of the caller's plot region, plus the observed range for the
//! status label. It holds no state between renders.
//!
//! # Algorithm
//!
//! 1. Clamp the request into a [`PlotWindow`] (effective lag, visible count).
//! 2. Walk the window newest to oldest to find its [`SampleRange`].
//! 3. Derive a [`Scaling`] that maps the range onto [-1, +1], and the
//!    baseline the stems grow from.
//! 4. Walk the window again; the newest sample lands on the right edge, each
//!    older one a fixed step to the left. Every sample yields a segment from
//!    the baseline to the sample, mapped through a [`ScreenTransform`].
//!
//! # Examples
//!
//! ```ignore
//! let projection = project(Some(&sampler), Size::new(144, 144), PlotRequest::new(0, 145, 10));
//! projection.draw(Point::new(0, 24), Rgb565::YELLOW, &mut display)?;
//! ```

extern crate alloc;
use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use log::debug;

use crate::sampler::Sampler;

pub mod constants;
mod scaling;
mod window;

pub use scaling::{SampleRange, Scaling, ScreenTransform, horizontal_step, normalized_x};
pub use window::{PlotRequest, PlotWindow};

use constants::STEM_LINE_WIDTH_PX;

/// Result of projecting one window of samples onto a plot region
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// Stems in region-local pixel coordinates, newest first
    segments: Vec<Line>,
    /// Observed extremes, `None` when nothing was visible
    range: Option<SampleRange>,
    /// Auto-scale used, `None` when nothing was visible
    scaling: Option<Scaling>,
    /// Window that was plotted
    window: PlotWindow,
}

impl Projection {
    /// A projection with nothing to draw
    pub fn empty() -> Self {
        Self {
            segments: Vec::new(),
            range: None,
            scaling: None,
            window: PlotWindow::default(),
        }
    }

    /// Stems to stroke, newest (rightmost) first
    pub fn segments(&self) -> &[Line] {
        &self.segments
    }

    /// Observed extremes of the visible window
    pub fn range(&self) -> Option<SampleRange> {
        self.range
    }

    /// Auto-scale applied to the window
    pub fn scaling(&self) -> Option<Scaling> {
        self.scaling
    }

    /// Window that was plotted
    pub fn window(&self) -> PlotWindow {
        self.window
    }

    /// Check if there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Stroke every stem onto `display`, offset by the region's origin
    pub fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        origin: Point,
        color: Rgb565,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let style = PrimitiveStyle::with_stroke(color, STEM_LINE_WIDTH_PX);

        for segment in &self.segments {
            segment.translate(origin).into_styled(style).draw(display)?;
        }

        Ok(())
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::empty()
    }
}

/// Project a sampler's visible window onto a region of `size` pixels.
///
/// An absent sampler or an empty window yields [`Projection::empty`].
pub fn project(sampler: Option<&Sampler>, size: Size, request: PlotRequest) -> Projection {
    let Some(sampler) = sampler else {
        return Projection::empty();
    };

    let window = PlotWindow::clamp(sampler.len(), request);
    let visible = || sampler.iter_from_lag(window.lag).take(window.len);

    let Some(range) = SampleRange::scan(visible()) else {
        return Projection {
            window,
            ..Projection::empty()
        };
    };

    let scaling = Scaling::from_range(range);
    let screen = ScreenTransform::new(size);
    let step = horizontal_step(window.len);
    let baseline_y = screen.y(scaling.normalized_baseline());

    let segments: Vec<Line> = visible()
        .enumerate()
        .map(|(index, sample)| {
            let x = screen.x(normalized_x(index, step));
            let tip = Point::new(x, screen.y(scaling.normalize(sample)));
            Line::new(Point::new(x, baseline_y), tip)
        })
        .collect();

    debug!(
        "Projected {} samples (lag {}, range {}..={}) into {}x{}",
        window.len, window.lag, range.min, range.max, size.width, size.height
    );

    Projection {
        segments,
        range: Some(range),
        scaling: Some(scaling),
        window,
    }
}
