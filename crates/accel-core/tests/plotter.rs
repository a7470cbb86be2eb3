//! End-to-end rendering of the plotter into the in-memory framebuffer.

use accel_core::framebuffer::FrameBuffer;
use accel_core::input::{Button, Click, command_for};
use accel_core::ui::{COLOR_LABEL_TEXT, DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX, LABEL_HEIGHT_PX};
use accel_core::{AccelPlotter, AccelReading, PlotterConfig, PlotterMode, SampleRange};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

fn label_area() -> Rectangle {
    Rectangle::new(
        Point::zero(),
        Size::new(u32::from(DISPLAY_WIDTH_PX), LABEL_HEIGHT_PX),
    )
}

fn plot_area() -> Rectangle {
    Rectangle::new(
        Point::new(0, LABEL_HEIGHT_PX as i32),
        Size::new(
            u32::from(DISPLAY_WIDTH_PX),
            u32::from(DISPLAY_HEIGHT_PX) - LABEL_HEIGHT_PX,
        ),
    )
}

/// Triangle wave on Y between -500 and +490, constant gravity on Z.
fn wave(i: usize) -> AccelReading {
    let phase = (i % 100) as i16;
    let y = if phase < 50 { phase * 20 - 500 } else { 1490 - phase * 20 };
    AccelReading::new(phase, y, -1000)
}

fn press(plotter: &mut AccelPlotter, button: Button, click: Click) {
    if let Some(command) = command_for(plotter.is_config_mode(), button, click) {
        plotter.handle_command(command);
    }
}

#[test]
fn test_renders_selected_axis_below_label() {
    let mut plotter = AccelPlotter::new(PlotterConfig::default()).unwrap();
    for i in 0..300 {
        plotter.ingest(&[wave(i)]);
    }

    let mut fb = FrameBuffer::new();
    plotter.draw(&mut fb).unwrap();
    plotter.mark_clean();

    assert!(fb.count_color(plot_area(), Rgb565::YELLOW) > 0);
    assert_eq!(fb.count_color(label_area(), Rgb565::YELLOW), 0);
    assert!(fb.count_color(label_area(), COLOR_LABEL_TEXT) > 0);
    assert_eq!(plotter.last_range(), Some(SampleRange::new(-500, 490)));
    assert!(!plotter.is_dirty());
}

#[test]
fn test_select_switches_axis_color() {
    let mut plotter = AccelPlotter::new(PlotterConfig::default()).unwrap();
    for i in 0..200 {
        plotter.ingest(&[wave(i)]);
    }

    press(&mut plotter, Button::Select, Click::Single);
    assert_eq!(plotter.mode(), PlotterMode::Z);

    let mut fb = FrameBuffer::new();
    plotter.draw(&mut fb).unwrap();

    assert!(fb.count_color(plot_area(), Rgb565::GREEN) > 0);
    assert_eq!(fb.count_color(plot_area(), Rgb565::YELLOW), 0);
    assert_eq!(plotter.last_range(), Some(SampleRange::new(-1000, -1000)));
    assert!(plotter.label_text().starts_with("Z25 min:-1000 max:-1000"));
}

#[test]
fn test_flat_signal_draws_centre_line() {
    let mut plotter = AccelPlotter::new(PlotterConfig::default()).unwrap();
    for _ in 0..30 {
        plotter.ingest(&[AccelReading::new(5, 5, 5)]);
    }

    let mut fb = FrameBuffer::new();
    plotter.draw(&mut fb).unwrap();

    // 144 px plot: Ky = -71.5, Cy = 143, so the centre row is 71.
    let centre_row = Rectangle::new(
        Point::new(0, LABEL_HEIGHT_PX as i32 + 71),
        Size::new(u32::from(DISPLAY_WIDTH_PX), 1),
    );
    let on_row = fb.count_color(centre_row, Rgb565::YELLOW);
    assert!(on_row > 0);
    assert_eq!(fb.count_color(plot_area(), Rgb565::YELLOW), on_row);
    assert_eq!(plotter.last_range(), Some(SampleRange::new(5, 5)));
}

#[test]
fn test_scrolling_back_freezes_history_until_live() {
    let mut plotter = AccelPlotter::new(PlotterConfig::default()).unwrap();
    for i in 0..50 {
        plotter.ingest(&[AccelReading::new(0, i, 0)]);
    }

    // Double click up: jump to the oldest full window.
    press(&mut plotter, Button::Up, Click::Double);
    assert_eq!(plotter.lag(), 40);
    assert!(!plotter.ingest(&[AccelReading::new(0, 999, 0)]));

    let mut fb = FrameBuffer::new();
    plotter.draw(&mut fb).unwrap();
    assert_eq!(plotter.last_range(), Some(SampleRange::new(0, 9)));

    press(&mut plotter, Button::Down, Click::Double);
    assert_eq!(plotter.lag(), 0);
    assert!(plotter.ingest(&[AccelReading::new(0, 999, 0)]));

    plotter.draw(&mut fb).unwrap();
    assert_eq!(plotter.last_range(), Some(SampleRange::new(0, 999)));
}

#[test]
fn test_config_mode_changes_rate_not_lag() {
    let mut plotter = AccelPlotter::new(PlotterConfig::default()).unwrap();
    for i in 0..50 {
        plotter.ingest(&[wave(i)]);
    }

    press(&mut plotter, Button::Select, Click::Long);
    assert!(plotter.is_config_mode());

    press(&mut plotter, Button::Up, Click::Single);
    press(&mut plotter, Button::Up, Click::Single);
    assert_eq!(plotter.lag(), 0);
    assert_eq!(plotter.sampling_rate().hz(), 50);

    press(&mut plotter, Button::Down, Click::Single);
    press(&mut plotter, Button::Down, Click::Single);
    press(&mut plotter, Button::Down, Click::Single);
    assert_eq!(plotter.sampling_rate().hz(), 10);

    press(&mut plotter, Button::Select, Click::Long);
    assert!(!plotter.is_config_mode());

    press(&mut plotter, Button::Up, Click::Single);
    assert_eq!(plotter.lag(), 1);
}

#[test]
fn test_undefined_mode_draws_no_stems() {
    let mut plotter = AccelPlotter::new(PlotterConfig {
        default_mode: PlotterMode::Undefined,
        ..PlotterConfig::default()
    })
    .unwrap();
    plotter.ingest(&[wave(3), wave(4)]);

    let mut fb = FrameBuffer::new();
    plotter.draw(&mut fb).unwrap();

    // Only the white label text changes pixels.
    assert_eq!(
        fb.count_color(plot_area(), Rgb565::WHITE),
        0,
        "no stems expected without a selected axis"
    );
    assert!(plotter.label_text().starts_with("?25 min:+0"));
}

#[test]
fn test_flush_mirrors_frame_onto_panel() {
    let mut plotter = AccelPlotter::new(PlotterConfig::default()).unwrap();
    for i in 0..120 {
        plotter.ingest(&[wave(i)]);
    }

    let mut fb = FrameBuffer::new();
    plotter.draw(&mut fb).unwrap();
    assert!(fb.dirty_rows() > 0);

    // A second framebuffer stands in for the panel.
    let mut panel = FrameBuffer::new();
    fb.flush(&mut panel).unwrap();

    assert_eq!(fb.dirty_area(), None);
    assert_eq!(
        panel.count_color(plot_area(), Rgb565::YELLOW),
        fb.count_color(plot_area(), Rgb565::YELLOW)
    );
    assert_eq!(
        panel.count_color(label_area(), COLOR_LABEL_TEXT),
        fb.count_color(label_area(), COLOR_LABEL_TEXT)
    );

    // Nothing new to send until the frame changes again.
    let mut idle = FrameBuffer::new();
    fb.flush(&mut idle).unwrap();
    assert_eq!(idle.dirty_area(), None);
}
