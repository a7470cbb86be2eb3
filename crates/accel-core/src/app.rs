//! Plotter context
//!
//! [`AccelPlotter`] is the one object the host shell owns. It holds the three
//! axis samplers, which axis is selected, how far the user has scrolled back,
//! the sampling rate and whether the config screen is open. The host feeds it
//! accelerometer batches, button commands, and redraw requests:
//!
//! ```rust,ignore
//! let mut plotter = AccelPlotter::new(PlotterConfig::default())?;
//!
//! // accelerometer callback
//! plotter.ingest(&batch);
//!
//! // button callback
//! if let Some(command) = command_for(plotter.is_config_mode(), button, click) {
//!     plotter.handle_command(command);
//! }
//!
//! // repaint
//! if plotter.is_dirty() {
//!     plotter.draw(&mut display)?;
//!     plotter.mark_clean();
//! }
//! ```
//!
//! ## Ingestion gate
//!
//! Scrolling back freezes the history: while the lag is non-zero the gate is
//! closed and [`AccelPlotter::ingest`] drops incoming batches, so the window
//! under the user's eyes does not move. Returning to the live edge reopens
//! it. The samplers themselves know nothing about scrolling.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use log::{debug, info};
use thiserror_no_std::Error;

use crate::axis::{AccelReading, AxisSamplers, PlotterMode};
use crate::config::{ConfigError, PlotterConfig};
use crate::input::Command;
use crate::label::{LabelText, StatusLabel};
use crate::plot::{Projection, SampleRange, project};
use crate::sampler::{Sampler, SamplerError};
use crate::sampling::SamplingRate;
use crate::ui::{COLOR_BACKGROUND, COLOR_LABEL_TEXT, LABEL_FONT, LABEL_TEXT_INSET_PX};

/// Error types for plotter construction
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlotterError {
    /// Invalid configuration
    #[error("Invalid config: {0}")]
    Config(ConfigError),

    /// Sampler storage could not be set up
    #[error("Sampler setup failed: {0}")]
    Sampler(SamplerError),
}

impl From<ConfigError> for PlotterError {
    fn from(error: ConfigError) -> Self {
        Self::Config(error)
    }
}

impl From<SamplerError> for PlotterError {
    fn from(error: SamplerError) -> Self {
        Self::Sampler(error)
    }
}

/// Result type for plotter operations
pub type PlotterResult<T> = Result<T, PlotterError>;

/// Side effect the host must carry out after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Reconfigure the accelerometer service for a new rate
    SetSamplingRate(SamplingRate),
    /// Buzz the vibration motor
    Vibrate,
    /// Unsubscribe from the accelerometer and close the app
    Exit,
}

/// Accelerometer plotter state owned by the host shell
pub struct AccelPlotter {
    config: PlotterConfig,
    samplers: AxisSamplers,
    mode: PlotterMode,
    rate: SamplingRate,
    /// Samples scrolled back from the newest reading
    lag: usize,
    /// Ingestion gate; closed while scrolled back
    ingest_enabled: bool,
    config_mode: bool,
    label: StatusLabel,
    /// Range of the last rendered window, shown in the label
    last_range: Option<SampleRange>,
    dirty: bool,
}

impl AccelPlotter {
    /// Validate the config and allocate the three axis samplers
    pub fn new(config: PlotterConfig) -> PlotterResult<Self> {
        config.validate()?;
        let samplers = AxisSamplers::new(usize::from(config.capacity))?;

        info!(
            "Plotter ready: {} samples per axis, window {}..={}, {} Hz",
            config.capacity,
            config.show_min,
            config.show_max,
            config.sampling_rate.hz()
        );

        Ok(Self {
            config,
            samplers,
            mode: config.default_mode,
            rate: config.sampling_rate,
            lag: 0,
            ingest_enabled: true,
            config_mode: false,
            label: StatusLabel::new(),
            last_range: None,
            dirty: true,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &PlotterConfig {
        &self.config
    }

    /// Per-axis samplers
    pub fn samplers(&self) -> &AxisSamplers {
        &self.samplers
    }

    /// Sampler of the selected axis, `None` when no axis is selected
    pub fn selected_sampler(&self) -> Option<&Sampler> {
        self.samplers.get(self.mode)
    }

    // -----------------------------------------------------------------------
    // Ingestion
    // -----------------------------------------------------------------------

    /// Feed one batch of accelerometer readings.
    ///
    /// Returns `true` if the readings were stored and a redraw is due, and
    /// `false` if the ingestion gate is closed or the batch was empty.
    pub fn ingest(&mut self, batch: &[AccelReading]) -> bool {
        if !self.ingest_enabled || batch.is_empty() {
            return false;
        }

        for reading in batch {
            self.samplers.push(*reading);
        }

        self.dirty = true;
        true
    }

    /// Whether [`Self::ingest`] currently stores readings
    pub fn is_ingest_enabled(&self) -> bool {
        self.ingest_enabled
    }

    /// Discard all history and return to the live edge
    pub fn clear_history(&mut self) {
        self.samplers.reset();
        self.last_range = None;
        self.set_lag(0);
        self.dirty = true;
    }

    // -----------------------------------------------------------------------
    // Axis selection
    // -----------------------------------------------------------------------

    /// Selected axis
    pub fn mode(&self) -> PlotterMode {
        self.mode
    }

    /// Select an axis; no-op if it is already selected
    pub fn set_mode(&mut self, mode: PlotterMode) {
        if self.mode == mode {
            return;
        }

        debug!("Plotter mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.dirty = true;
    }

    /// Select the next axis in X -> Y -> Z order
    pub fn cycle_mode(&mut self) {
        self.set_mode(self.mode.next());
    }

    // -----------------------------------------------------------------------
    // Scrolling
    // -----------------------------------------------------------------------

    /// Samples scrolled back from the newest reading
    pub fn lag(&self) -> usize {
        self.lag
    }

    fn selected_len(&self) -> usize {
        self.selected_sampler().map_or(0, Sampler::len)
    }

    fn set_lag(&mut self, lag: usize) {
        self.lag = lag;
        self.ingest_enabled = lag == 0;
        self.dirty = true;
    }

    /// Scroll one sample towards older history, keeping `show_min` visible
    pub fn step_left(&mut self) {
        let limit = self
            .selected_len()
            .saturating_sub(usize::from(self.config.show_min));

        if self.lag < limit {
            self.set_lag(self.lag + 1);
        }
    }

    /// Scroll one sample towards the newest reading
    pub fn step_right(&mut self) {
        if self.lag > 0 {
            self.set_lag(self.lag - 1);
        }
    }

    /// Jump to the oldest history that still fills the window
    pub fn full_left(&mut self) {
        let len = self.selected_len();
        let show_max = usize::from(self.config.show_max);

        let lag = if len > show_max {
            len - show_max
        } else {
            len.saturating_sub(usize::from(self.config.show_min))
        };
        self.set_lag(lag);
    }

    /// Jump back to the live edge and resume ingestion
    pub fn full_right(&mut self) {
        self.set_lag(0);
    }

    // -----------------------------------------------------------------------
    // Sampling rate & config mode
    // -----------------------------------------------------------------------

    /// Current sampling rate
    pub fn sampling_rate(&self) -> SamplingRate {
        self.rate
    }

    fn set_rate(&mut self, rate: SamplingRate) -> Option<Action> {
        self.dirty = true;
        if rate == self.rate {
            return None;
        }

        debug!("Sampling rate {} Hz -> {} Hz", self.rate.hz(), rate.hz());
        self.rate = rate;
        Some(Action::SetSamplingRate(rate))
    }

    /// Whether the config screen is open
    pub fn is_config_mode(&self) -> bool {
        self.config_mode
    }

    fn set_config_mode(&mut self, on: bool) {
        debug!("Config mode {}", if on { "on" } else { "off" });
        self.config_mode = on;
        self.dirty = true;
    }

    /// Apply a button command; returns a side effect for the host, if any
    pub fn handle_command(&mut self, command: Command) -> Option<Action> {
        match command {
            Command::StepLeft => self.step_left(),
            Command::StepRight => self.step_right(),
            Command::FullLeft => self.full_left(),
            Command::FullRight => self.full_right(),
            Command::CycleMode => self.cycle_mode(),
            Command::EnterConfig => self.set_config_mode(true),
            Command::ExitConfig => self.set_config_mode(false),
            Command::IncreaseRate => return self.set_rate(self.rate.increment()),
            Command::DecreaseRate => return self.set_rate(self.rate.decrement()),
            Command::Vibrate => return Some(Action::Vibrate),
            Command::Exit => return Some(Action::Exit),
        }
        None
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Project the selected axis onto a plot region of `size` pixels
    pub fn project(&self, size: Size) -> Projection {
        project(
            self.selected_sampler(),
            size,
            self.config.plot_request(self.lag),
        )
    }

    /// Range of the last drawn window
    pub fn last_range(&self) -> Option<SampleRange> {
        self.last_range
    }

    /// Format the status label; advances the config-mode blink
    pub fn label_text(&mut self) -> LabelText {
        self.label
            .format(self.mode, self.rate, self.config_mode, self.last_range)
    }

    /// Split the screen into the label strip and the plot region
    pub fn layout(&self, screen: Rectangle) -> (Rectangle, Rectangle) {
        let label_height = self.config.label_height_px.min(screen.size.height);
        let label = Rectangle::new(
            screen.top_left,
            Size::new(screen.size.width, label_height),
        );
        let plot = Rectangle::new(
            screen.top_left + Point::new(0, label_height as i32),
            Size::new(screen.size.width, screen.size.height - label_height),
        );

        (label, plot)
    }

    /// Render the label and plot onto the whole of `display`
    pub fn draw<D: DrawTarget<Color = Rgb565>>(&mut self, display: &mut D) -> Result<(), D::Error> {
        let screen = display.bounding_box();
        let (label_area, plot_area) = self.layout(screen);

        screen
            .into_styled(PrimitiveStyle::with_fill(COLOR_BACKGROUND))
            .draw(display)?;

        let projection = self.project(plot_area.size);
        // Keep the previous extremes when nothing is selected.
        if self.selected_sampler().is_some() {
            self.last_range = projection.range();
        }
        projection.draw(plot_area.top_left, self.mode.color(), display)?;

        let text = self.label_text();
        Text::with_baseline(
            &text,
            label_area.top_left + Point::new(LABEL_TEXT_INSET_PX, LABEL_TEXT_INSET_PX),
            MonoTextStyle::new(LABEL_FONT, COLOR_LABEL_TEXT),
            Baseline::Top,
        )
        .draw(display)?;

        Ok(())
    }

    /// Whether something changed since the last draw
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag after a successful draw
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}
