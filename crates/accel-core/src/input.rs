//! Button input mapping
//!
//! The watch has four buttons. What a press does depends on whether the
//! plotter is in config mode:
//!
//! | Button | Click  | Normal mode         | Config mode      |
//! |--------|--------|---------------------|------------------|
//! | Up     | single | scroll one back     | faster rate      |
//! | Up     | double | scroll to oldest    |                  |
//! | Down   | single | scroll one forward  | slower rate      |
//! | Down   | double | back to live        |                  |
//! | Select | single | next axis           |                  |
//! | Select | double | vibrate             |                  |
//! | Select | long   | enter config mode   | leave config mode|
//! | Back   | single | exit                | exit             |

/// Physical watch button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Up,
    Down,
    Select,
    Back,
}

/// How a button was pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    /// Single (or auto-repeating) click
    Single,
    /// Two clicks in quick succession
    Double,
    /// Held past the long-press threshold
    Long,
}

/// Plotter command produced by a button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Scroll one sample towards older history
    StepLeft,
    /// Scroll one sample towards the newest reading
    StepRight,
    /// Scroll to the oldest history that still fills the window
    FullLeft,
    /// Return to the live edge and resume ingestion
    FullRight,
    /// Select the next axis
    CycleMode,
    /// Buzz the motor
    Vibrate,
    /// Enter config mode
    EnterConfig,
    /// Leave config mode
    ExitConfig,
    /// Step the sampling rate up
    IncreaseRate,
    /// Step the sampling rate down
    DecreaseRate,
    /// Stop sampling and close the app
    Exit,
}

/// Map a button press to a command for the current mode
pub fn command_for(config_mode: bool, button: Button, click: Click) -> Option<Command> {
    use Button::*;
    use Click::*;

    if config_mode {
        match (button, click) {
            (Up, Single) => Some(Command::IncreaseRate),
            (Down, Single) => Some(Command::DecreaseRate),
            (Select, Long) => Some(Command::ExitConfig),
            (Back, Single) => Some(Command::Exit),
            _ => None,
        }
    } else {
        match (button, click) {
            (Up, Single) => Some(Command::StepLeft),
            (Up, Double) => Some(Command::FullLeft),
            (Down, Single) => Some(Command::StepRight),
            (Down, Double) => Some(Command::FullRight),
            (Select, Single) => Some(Command::CycleMode),
            (Select, Double) => Some(Command::Vibrate),
            (Select, Long) => Some(Command::EnterConfig),
            (Back, Single) => Some(Command::Exit),
            _ => None,
        }
    }
}
