//! Collaborators the engine drives but does not implement: the LED matrix,
//! the text display, the buzzer, the joystick, the buttons and the clock.
//! A board implements all of them and gets [`Board`] for free.

use crate::snake::Grid;

pub trait LedMatrix {
    fn render(&mut self, grid: &Grid);
}

pub trait TextDisplay {
    /// Replaces the displayed text. An empty slice clears the display.
    fn show_lines(&mut self, lines: &[String]);
}

pub trait Buzzer {
    /// Blocks for `duration_ms`.
    fn play_tone(&mut self, frequency_hz: u32, duration_ms: u32);
}

/// One raw ADC sample per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JoystickSample {
    pub x_raw: u16,
    pub y_raw: u16,
}

impl JoystickSample {
    pub fn centered(max: u16) -> Self {
        Self {
            x_raw: max / 2,
            y_raw: max / 2,
        }
    }
}

pub trait Joystick {
    fn read_raw(&mut self) -> JoystickSample;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    A,
    B,
}

pub trait Buttons {
    /// Instantaneous level, no debounce.
    fn is_pressed(&mut self, button: Button) -> bool;
}

pub trait Clock {
    fn sleep_ms(&mut self, ms: u32);
}

pub trait Board: LedMatrix + TextDisplay + Buzzer + Joystick + Buttons + Clock {}

impl<T> Board for T where T: LedMatrix + TextDisplay + Buzzer + Joystick + Buttons + Clock {}
