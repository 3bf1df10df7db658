//! Turns raw joystick and button levels into discrete game signals.
//!
//! Polling is cooperative: every wait is a loop of short `Clock::sleep_ms`
//! slices, and each slice first checks whether something happened that should
//! end the wait early.

use crate::peripherals::{Button, Buttons, Clock, Joystick, JoystickSample};
use crate::settings::GameSettings;
use crate::snake::Direction;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JoystickReading {
    pub x_raw: u16,
    pub y_raw: u16,
    pub normalized_distance: f32,
    pub direction: Direction,
}

impl JoystickReading {
    /// Derives the stick direction from a raw sample. The stick is idle until
    /// its distance from center passes `threshold` (a fraction of the radius);
    /// past that the dominant axis wins.
    pub fn from_sample(sample: JoystickSample, max: u16, threshold: f32) -> Self {
        let center = (max / 2) as f32;
        let x_distance = (sample.x_raw as f32 - center).abs();
        let y_distance = (sample.y_raw as f32 - center).abs();
        let normalized_distance = x_distance.hypot(y_distance) / center;

        let direction = if normalized_distance <= threshold {
            Direction::None
        } else if x_distance > y_distance {
            if (sample.x_raw as f32) < center {
                Direction::West
            } else {
                Direction::East
            }
        } else if sample.y_raw as f32 > center {
            // Stick y grows upwards, rows grow downwards.
            Direction::North
        } else {
            Direction::South
        };

        Self {
            x_raw: sample.x_raw,
            y_raw: sample.y_raw,
            normalized_distance,
            direction,
        }
    }
}

/// Outcome of one move window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowInput {
    /// Heading for the coming move; differs from the current one only after an
    /// accepted turn.
    pub direction: Direction,
    pub button: Option<Button>,
    /// True when the window ended before its full budget.
    pub cut_short: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuSignal {
    Up,
    Down,
    Confirm,
    Idle,
}

pub struct InputSampler {
    allow_speeding: bool,
    joystick_threshold: f32,
    joystick_max: u16,
    poll_interval_ms: u32,
    move_interval_ms: u32,
    menu_poll_interval_ms: u32,
}

impl InputSampler {
    pub fn new(settings: &GameSettings) -> Self {
        Self {
            allow_speeding: settings.input.allow_speeding,
            joystick_threshold: settings.input.joystick_threshold,
            joystick_max: settings.input.joystick_max,
            poll_interval_ms: settings.timing.poll_interval_ms,
            move_interval_ms: settings.timing.move_interval_ms,
            menu_poll_interval_ms: settings.timing.menu_poll_interval_ms,
        }
    }

    pub fn menu_poll_interval_ms(&self) -> u32 {
        self.menu_poll_interval_ms
    }

    pub fn read_joystick<J: Joystick + ?Sized>(&self, joystick: &mut J) -> JoystickReading {
        JoystickReading::from_sample(joystick.read_raw(), self.joystick_max, self.joystick_threshold)
    }

    /// First button reading active, A before B.
    pub fn pressed_button<B: Buttons + ?Sized>(&self, buttons: &mut B) -> Option<Button> {
        [Button::A, Button::B]
            .into_iter()
            .find(|button| buttons.is_pressed(*button))
    }

    /// Polls until `button` reads inactive, so one physical press is one action.
    pub fn wait_release<T: Buttons + Clock + ?Sized>(&self, io: &mut T, button: Button, poll_ms: u32) {
        while io.is_pressed(button) {
            io.sleep_ms(poll_ms);
        }
    }

    /// Samples input for up to one move interval. The window ends early on a
    /// button press, an accepted turn, or (with speeding allowed) the stick
    /// held along the current heading.
    pub fn sample_move_window<T>(&self, io: &mut T, current: Direction) -> WindowInput
    where
        T: Joystick + Buttons + Clock + ?Sized,
    {
        let steps = self.move_interval_ms / self.poll_interval_ms;

        for _ in 0..steps {
            let mut next = current;
            let mut cut_short = false;

            let stick = self.read_joystick(io).direction;
            if stick != Direction::None {
                if self.allow_speeding && stick == current {
                    cut_short = true;
                } else if current.accepts_turn(stick) {
                    next = stick;
                }
            }

            let button = self.pressed_button(io);
            if let Some(button) = button {
                cut_short = true;
                self.wait_release(io, button, self.poll_interval_ms);
            }

            if next != current {
                cut_short = true;
            }

            if cut_short {
                return WindowInput {
                    direction: next,
                    button,
                    cut_short,
                };
            }

            io.sleep_ms(self.poll_interval_ms);
        }

        WindowInput {
            direction: current,
            button: None,
            cut_short: false,
        }
    }

    /// One menu poll. Selection moves fire once per deflection: the stick has
    /// to pass through center (tracked in `last_stick`) before it moves again.
    /// Button A confirms once released.
    pub fn poll_menu<T>(&self, io: &mut T, last_stick: &mut Direction) -> MenuSignal
    where
        T: Joystick + Buttons + Clock + ?Sized,
    {
        if io.is_pressed(Button::A) {
            self.wait_release(io, Button::A, self.menu_poll_interval_ms);
            return MenuSignal::Confirm;
        }

        let stick = self.read_joystick(io).direction;
        let previous = std::mem::replace(last_stick, stick);
        if stick == previous {
            return MenuSignal::Idle;
        }
        match stick {
            Direction::North => MenuSignal::Up,
            Direction::South => MenuSignal::Down,
            _ => MenuSignal::Idle,
        }
    }
}
