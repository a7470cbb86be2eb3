//! Desktop simulator for the accelerometer plotter.
//!
//! Renders the accel-core plotter in an SDL2 window via
//! `embedded-graphics-simulator`, feeding it a synthetic accelerometer so the
//! screen can be exercised without a watch. Frames are drawn into a
//! [`FrameBuffer`] and only the changed rows are flushed to the window, as on
//! the watch panel.
//!
//! # Key bindings
//!
//! | Key        | Watch button            |
//! |------------|-------------------------|
//! | Up         | Up (single)             |
//! | Page Up    | Up (double)             |
//! | Down       | Down (single)           |
//! | Page Down  | Down (double)           |
//! | Space      | Select (single)         |
//! | V          | Select (double)         |
//! | L          | Select (long)           |
//! | Backspace  | Back                    |
//! | Q / Esc    | Quit                    |

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{error, info};

use accel_core::framebuffer::FrameBuffer;
use accel_core::input::{Button, Click, command_for};
use accel_core::ui::{COLOR_BACKGROUND, DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};
use accel_core::{AccelPlotter, AccelReading, Action, PlotterConfig, SamplingRate};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 3;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

// ---------------------------------------------------------------------------
// Mock data generation
// ---------------------------------------------------------------------------

/// Generates a wrist-like motion: a slow swing on X, a faster bounce on Y
/// and gravity with a little wobble on Z. Values are in milli-g.
struct MockAccelerometer {
    elapsed_secs: f64,
}

impl MockAccelerometer {
    fn new() -> Self {
        Self { elapsed_secs: 0.0 }
    }

    /// Advance the internal clock and return one reading.
    fn next_reading(&mut self, dt_secs: f64) -> AccelReading {
        self.elapsed_secs += dt_secs;
        let t = self.elapsed_secs;

        let x = 400.0 * (t / 3.0).sin() + 60.0 * (t * 2.3).cos();
        let y = 250.0 * (t * 1.7).sin() + 120.0 * (t * 5.1).sin();
        let z = -1000.0 + 80.0 * (t * 0.9).cos();

        AccelReading::new(x as i16, y as i16, z as i16)
    }

    /// One service update's worth of readings at `rate`.
    fn next_batch(&mut self, rate: SamplingRate) -> Vec<AccelReading> {
        let dt = rate.sample_interval().as_secs_f64();
        (0..rate.samples_per_update())
            .map(|_| self.next_reading(dt))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Map an SDL keycode to a watch button press.
fn keycode_to_press(keycode: Keycode) -> Option<(Button, Click)> {
    match keycode {
        Keycode::Up => Some((Button::Up, Click::Single)),
        Keycode::PageUp => Some((Button::Up, Click::Double)),
        Keycode::Down => Some((Button::Down, Click::Single)),
        Keycode::PageDown => Some((Button::Down, Click::Double)),
        Keycode::Space | Keycode::Return => Some((Button::Select, Click::Single)),
        Keycode::V => Some((Button::Select, Click::Double)),
        Keycode::L => Some((Button::Select, Click::Long)),
        Keycode::Backspace => Some((Button::Back, Click::Single)),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting accelerometer plotter simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: ↑/↓ scroll  PgUp/PgDn jump  Space=axis  L=config  V=vibrate  Q=Quit");

    let mut plotter = match AccelPlotter::new(PlotterConfig::default()) {
        Ok(plotter) => plotter,
        Err(e) => {
            error!("Failed to start plotter: {}", e);
            return;
        }
    };

    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(
        u32::from(DISPLAY_WIDTH_PX),
        u32::from(DISPLAY_HEIGHT_PX),
    ));

    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Accelerometer", &output_settings);

    let mut frame = FrameBuffer::new();
    let mut accelerometer = MockAccelerometer::new();
    let mut last_update = Instant::now();

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let Ok(()) = display.clear(COLOR_BACKGROUND);
    let Ok(()) = plotter.draw(&mut frame);
    let Ok(()) = frame.flush(&mut display);
    plotter.mark_clean();
    window.update(&display);

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => {
                    if keycode == Keycode::Q || keycode == Keycode::Escape {
                        break 'running;
                    }

                    let Some((button, click)) = keycode_to_press(keycode) else {
                        continue;
                    };
                    let Some(command) = command_for(plotter.is_config_mode(), button, click)
                    else {
                        continue;
                    };

                    match plotter.handle_command(command) {
                        Some(Action::Exit) => break 'running,
                        Some(Action::Vibrate) => info!("Bzzz"),
                        Some(Action::SetSamplingRate(rate)) => {
                            info!(
                                "Accelerometer now {} Hz, {} per update",
                                rate.hz(),
                                rate.samples_per_update()
                            );
                        }
                        None => {}
                    }
                }

                _ => {}
            }
        }

        // --- Mock accelerometer ------------------------------------------
        let rate = plotter.sampling_rate();
        while last_update.elapsed() >= rate.update_interval() {
            let batch = accelerometer.next_batch(rate);
            plotter.ingest(&batch);
            last_update += rate.update_interval();
        }

        // --- Render -------------------------------------------------------
        if plotter.is_dirty() {
            let Ok(()) = plotter.draw(&mut frame);
            let Ok(()) = frame.flush(&mut display);
            plotter.mark_clean();
        }

        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
