//! Visible window selection
//!
//! Decides how far back from the newest sample the plot starts and how many
//! samples it shows, given the caller's scroll lag and window bounds.

/// Window parameters requested by the caller for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotRequest {
    /// Samples back from the newest at which the window starts
    pub lag: usize,
    /// Upper bound on visible samples
    pub show_max: usize,
    /// Samples that must stay visible at maximum scroll-back
    pub show_min: usize,
}

impl PlotRequest {
    /// Create a new request
    pub const fn new(lag: usize, show_max: usize, show_min: usize) -> Self {
        Self {
            lag,
            show_max,
            show_min,
        }
    }
}

/// Clamped window actually plotted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlotWindow {
    /// Effective lag after clamping
    pub lag: usize,
    /// Number of visible samples
    pub len: usize,
}

impl PlotWindow {
    /// Clamp a request against a sampler holding `count` readings.
    ///
    /// The lag never pushes fewer than `show_min` samples out of view, and
    /// the window never reaches past the oldest held reading. When fewer than
    /// `show_min` readings are held the lag clamps to zero.
    pub fn clamp(count: usize, request: PlotRequest) -> Self {
        let lag = request.lag.min(count.saturating_sub(request.show_min));
        let len = request.show_max.min(count).min(count - lag);

        Self { lag, len }
    }

    /// Check if there is nothing to plot
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
