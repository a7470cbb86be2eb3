//! Display geometry and styling shared by the plotter screen.

use embedded_graphics::mono_font::{MonoFont, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Watch display width in pixels
pub const DISPLAY_WIDTH_PX: u16 = 144;

/// Watch display height in pixels
pub const DISPLAY_HEIGHT_PX: u16 = 168;

/// Height of the status label strip at the top of the screen in pixels
pub const LABEL_HEIGHT_PX: u32 = 24;

/// Inset of the label text from the strip's top-left corner in pixels
pub const LABEL_TEXT_INSET_PX: i32 = 2;

/// Font used for the status label (24 columns fit the display width)
pub const LABEL_FONT: &MonoFont<'static> = &FONT_6X10;

/// Screen background
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::BLACK;

/// Label text color
pub const COLOR_LABEL_TEXT: Rgb565 = Rgb565::WHITE;
