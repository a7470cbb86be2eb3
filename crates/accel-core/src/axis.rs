//! Accelerometer axes and their per-axis samplers

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;
use serde::{Deserialize, Serialize};

use crate::sampler::{Sampler, SamplerResult};

/// One accelerometer reading, in milli-g
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccelReading {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl AccelReading {
    /// Create a new reading
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }
}

/// Which axis the plotter is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlotterMode {
    /// No axis selected; nothing is plotted
    Undefined,
    /// X axis
    X,
    /// Y axis
    #[default]
    Y,
    /// Z axis
    Z,
}

impl PlotterMode {
    /// Mode selected by the next press of the select button
    ///
    /// Cycles X -> Y -> Z -> X. `Undefined` stays undefined.
    pub const fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::Z,
            Self::Z => Self::X,
            Self::Undefined => Self::Undefined,
        }
    }

    /// Short name shown at the start of the status label
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::Undefined => "?",
        }
    }

    /// Stroke color for this axis' stems
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::X => Rgb565::RED,
            Self::Y => Rgb565::YELLOW,
            Self::Z => Rgb565::GREEN,
            Self::Undefined => Rgb565::WHITE,
        }
    }
}

/// Three independent samplers, one per axis
pub struct AxisSamplers {
    x: Sampler,
    y: Sampler,
    z: Sampler,
}

impl AxisSamplers {
    /// Allocate three samplers of the same capacity
    pub fn new(capacity: usize) -> SamplerResult<Self> {
        Ok(Self {
            x: Sampler::new(capacity)?,
            y: Sampler::new(capacity)?,
            z: Sampler::new(capacity)?,
        })
    }

    /// Push each axis of a reading into its sampler
    pub fn push(&mut self, reading: AccelReading) {
        self.x.push(reading.x);
        self.y.push(reading.y);
        self.z.push(reading.z);
    }

    /// Empty all three samplers
    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
        self.z.reset();
    }

    /// Sampler for a mode, `None` when no axis is selected
    pub fn get(&self, mode: PlotterMode) -> Option<&Sampler> {
        match mode {
            PlotterMode::X => Some(&self.x),
            PlotterMode::Y => Some(&self.y),
            PlotterMode::Z => Some(&self.z),
            PlotterMode::Undefined => None,
        }
    }

    /// Mutable sampler for a mode, `None` when no axis is selected
    pub fn get_mut(&mut self, mode: PlotterMode) -> Option<&mut Sampler> {
        match mode {
            PlotterMode::X => Some(&mut self.x),
            PlotterMode::Y => Some(&mut self.y),
            PlotterMode::Z => Some(&mut self.z),
            PlotterMode::Undefined => None,
        }
    }
}
