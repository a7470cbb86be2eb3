//! Status label text
//!
//! The label reads e.g. `Y25 min:-512  max:+1024`: axis name, sampling
//! rate, then the extremes of the visible window. While the config screen is
//! open the rate field blinks between the rate and `+-`.

use core::fmt::Write;

use heapless::String;

use crate::axis::PlotterMode;
use crate::plot::SampleRange;
use crate::sampling::SamplingRate;

/// Maximum length of the formatted label in bytes
pub const MAX_LABEL_LENGTH: usize = 50;

/// Text shown in place of the rate during the blink's off phase
const RATE_BLINK_TEXT: &str = "+-";

/// Counter bit that selects the blink phase (on for 4 updates, off for 4)
const BLINK_PHASE_MASK: u32 = 0b100;

/// Formatted label text
pub type LabelText = String<MAX_LABEL_LENGTH>;

/// Formats the status label and drives the config-mode blink
#[derive(Debug, Clone, Default)]
pub struct StatusLabel {
    /// Label updates seen while in config mode
    blink_counter: u32,
}

impl StatusLabel {
    /// Label with the blink at its first phase
    pub const fn new() -> Self {
        Self { blink_counter: 0 }
    }

    /// Format the label for one redraw.
    ///
    /// Each call in config mode advances the blink. Without a range (nothing
    /// plotted yet) both extremes read zero.
    pub fn format(
        &mut self,
        mode: PlotterMode,
        rate: SamplingRate,
        config_mode: bool,
        range: Option<SampleRange>,
    ) -> LabelText {
        let rate_text = if config_mode {
            self.blink_counter = self.blink_counter.wrapping_add(1);
            if self.blink_counter & BLINK_PHASE_MASK != 0 {
                rate.label()
            } else {
                RATE_BLINK_TEXT
            }
        } else {
            rate.label()
        };

        let range = range.unwrap_or(SampleRange::new(0, 0));
        let mut text = LabelText::new();
        // Worst case is well under MAX_LABEL_LENGTH.
        write!(
            text,
            "{}{:<2} min:{:<+5} max:{:<+5}",
            mode.name(),
            rate_text,
            range.min,
            range.max
        )
        .ok();

        text
    }
}
