//! Plotter configuration
//!
//! Buffer sizes and window bounds are fixed at startup. A host may bake a
//! `postcard`-encoded [`PlotterConfig`] into flash and load it with
//! [`PlotterConfig::from_bytes`]; otherwise [`PlotterConfig::default`] holds
//! the stock values.

extern crate alloc;
use alloc::vec::Vec;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

use crate::axis::PlotterMode;
use crate::plot::PlotRequest;
use crate::sampling::SamplingRate;
use crate::ui::LABEL_HEIGHT_PX;

/// Readings kept per axis (100 s at 25 Hz)
pub const DEFAULT_CAPACITY: u16 = 2500;

/// Most samples visible at once (one per pixel column plus one)
pub const DEFAULT_SHOW_MAX: u16 = 145;

/// Fewest samples visible at maximum scroll-back
pub const DEFAULT_SHOW_MIN: u16 = 10;

/// Error types for configuration
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Sampler capacity of zero
    #[error("Capacity must be non-zero")]
    ZeroCapacity,

    /// Window that can never show a sample
    #[error("show_max must be non-zero")]
    ZeroShowMax,

    /// Minimum window larger than the maximum
    #[error("show_min ({show_min}) exceeds show_max ({show_max})")]
    InvertedWindow {
        /// Requested minimum
        show_min: u16,
        /// Requested maximum
        show_max: u16,
    },

    /// Sampling rate the sensor cannot sustain
    #[error("Sampling rate {hz} Hz is not supported")]
    UnsupportedRate {
        /// Rate in Hz
        hz: u32,
    },

    /// Bytes are not a valid encoded config
    #[error("Failed to decode config")]
    Decode,

    /// Config could not be encoded
    #[error("Failed to encode config")]
    Encode,
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Startup configuration for the plotter
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PlotterConfig {
    /// Readings kept per axis
    pub capacity: u16,
    /// Most samples visible at once
    pub show_max: u16,
    /// Fewest samples visible at maximum scroll-back
    pub show_min: u16,
    /// Axis shown at startup
    pub default_mode: PlotterMode,
    /// Sampling rate at startup
    pub sampling_rate: SamplingRate,
    /// Height of the status label strip in pixels
    pub label_height_px: u32,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            show_max: DEFAULT_SHOW_MAX,
            show_min: DEFAULT_SHOW_MIN,
            default_mode: PlotterMode::default(),
            sampling_rate: SamplingRate::default(),
            label_height_px: LABEL_HEIGHT_PX,
        }
    }
}

impl PlotterConfig {
    /// Check the config is usable
    pub fn validate(&self) -> ConfigResult<()> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.show_max == 0 {
            return Err(ConfigError::ZeroShowMax);
        }
        if self.show_min > self.show_max {
            return Err(ConfigError::InvertedWindow {
                show_min: self.show_min,
                show_max: self.show_max,
            });
        }
        if !self.sampling_rate.is_supported() {
            return Err(ConfigError::UnsupportedRate {
                hz: self.sampling_rate.hz(),
            });
        }
        Ok(())
    }

    /// Decode and validate a `postcard` config blob
    pub fn from_bytes(bytes: &[u8]) -> ConfigResult<Self> {
        let config: Self = postcard::from_bytes(bytes).map_err(|e| {
            warn!("Rejected config blob: {:?}", e);
            ConfigError::Decode
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Encode as a `postcard` blob
    pub fn to_bytes(&self) -> ConfigResult<Vec<u8>> {
        postcard::to_allocvec(self).map_err(|e| {
            warn!("Failed to encode config: {:?}", e);
            ConfigError::Encode
        })
    }

    /// Window bounds at the given scroll lag
    pub fn plot_request(&self, lag: usize) -> PlotRequest {
        PlotRequest::new(lag, usize::from(self.show_max), usize::from(self.show_min))
    }
}
