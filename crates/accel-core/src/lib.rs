//! Hardware-independent core for the accelerometer plotter watch app
//!
//! This crate owns everything that is not host glue: the per-axis FIFO
//! samplers, the auto-scaling stem-plot projection, the plotter context
//! (selected axis, scroll lag, sampling rate, config mode) and the drawing
//! of the plot and status label onto any `embedded-graphics` target.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on watch
//! targets and on desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod app;
pub mod axis;
pub mod config;
pub mod framebuffer;
pub mod input;
pub mod label;
pub mod plot;
pub mod sampler;
pub mod sampling;
pub mod ui;

pub use app::{AccelPlotter, Action, PlotterError, PlotterResult};
pub use axis::{AccelReading, AxisSamplers, PlotterMode};
pub use config::{ConfigError, PlotterConfig};
pub use plot::{PlotRequest, Projection, SampleRange, project};
pub use sampler::{Sampler, SamplerError};
pub use sampling::SamplingRate;
