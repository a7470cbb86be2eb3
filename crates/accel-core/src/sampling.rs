//! Accelerometer sampling rates
//!
//! The host's accelerometer service delivers readings in batches. Each rate
//! pairs with a batch size that keeps redraws at roughly 10-25 per second.

use core::time::Duration;

use serde::{Deserialize, Serialize};

/// Accelerometer sampling rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SamplingRate {
    /// 10 Hz
    Hz10,
    /// 25 Hz
    #[default]
    Hz25,
    /// 50 Hz
    Hz50,
    /// 100 Hz (the sensor misbehaves here; never stepped into)
    Hz100,
}

impl SamplingRate {
    /// Next faster supported rate
    ///
    /// 50 Hz is the ceiling; 100 Hz is left as is.
    pub const fn increment(self) -> Self {
        match self {
            Self::Hz10 => Self::Hz25,
            Self::Hz25 => Self::Hz50,
            Self::Hz50 | Self::Hz100 => self,
        }
    }

    /// Next slower supported rate
    ///
    /// 10 Hz is the floor; 100 Hz is left as is.
    pub const fn decrement(self) -> Self {
        match self {
            Self::Hz50 => Self::Hz25,
            Self::Hz25 => Self::Hz10,
            Self::Hz10 | Self::Hz100 => self,
        }
    }

    /// Whether the rate can be selected from the config screen
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Hz100)
    }

    /// Samples per second
    pub const fn hz(self) -> u32 {
        match self {
            Self::Hz10 => 10,
            Self::Hz25 => 25,
            Self::Hz50 => 50,
            Self::Hz100 => 100,
        }
    }

    /// Readings the accelerometer service batches into one update
    pub const fn samples_per_update(self) -> usize {
        match self {
            Self::Hz10 | Self::Hz25 => 1,
            Self::Hz50 => 2,
            Self::Hz100 => 4,
        }
    }

    /// Time between two readings
    pub const fn sample_interval(self) -> Duration {
        Duration::from_millis(1000 / self.hz() as u64)
    }

    /// Time between two batched updates
    pub const fn update_interval(self) -> Duration {
        Duration::from_millis(1000 * self.samples_per_update() as u64 / self.hz() as u64)
    }

    /// Rate text shown in the status label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hz10 => "10",
            Self::Hz25 => "25",
            Self::Hz50 => "50",
            Self::Hz100 => "100",
        }
    }
}
