//! Scripted peripherals for driving the engine in tests. Inputs are laid out
//! on a timeline in milliseconds; the fake clock only moves when the engine
//! sleeps or plays a tone.

use crate::peripherals::{
    Button, Buttons, Buzzer, Clock, Joystick, JoystickSample, LedMatrix, TextDisplay,
};
use crate::snake::{Cell, Direction, Grid};

const MAX: u16 = 4095;
const DEADLINE_MS: u64 = 10 * 60 * 1000;

struct Span<T> {
    from_ms: u64,
    until_ms: u64,
    value: T,
}

impl<T> Span<T> {
    fn active(&self, now_ms: u64) -> bool {
        self.from_ms <= now_ms && now_ms < self.until_ms
    }
}

pub(crate) struct ScriptedBoard {
    pub now_ms: u64,
    stick: Vec<Span<JoystickSample>>,
    buttons: Vec<Span<Button>>,
    pub frames: Vec<Vec<Cell>>,
    pub texts: Vec<Vec<String>>,
    pub tones: Vec<(u32, u32)>,
}

impl ScriptedBoard {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            stick: Vec::new(),
            buttons: Vec::new(),
            frames: Vec::new(),
            texts: Vec::new(),
            tones: Vec::new(),
        }
    }

    pub fn hold_stick(&mut self, direction: Direction, from_ms: u64, until_ms: u64) {
        let center = MAX / 2;
        let value = match direction {
            Direction::North => JoystickSample { x_raw: center, y_raw: MAX },
            Direction::South => JoystickSample { x_raw: center, y_raw: 0 },
            Direction::East => JoystickSample { x_raw: MAX, y_raw: center },
            Direction::West => JoystickSample { x_raw: 0, y_raw: center },
            Direction::None => JoystickSample::centered(MAX),
        };
        self.stick.push(Span { from_ms, until_ms, value });
    }

    pub fn press(&mut self, button: Button, from_ms: u64, until_ms: u64) {
        self.buttons.push(Span { from_ms, until_ms, value: button });
    }

    pub fn last_text(&self) -> &[String] {
        self.texts.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn last_frame(&self) -> &[Cell] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }

    fn advance(&mut self, ms: u32) {
        self.now_ms += ms as u64;
        assert!(self.now_ms < DEADLINE_MS, "scripted board ran past its deadline");
    }
}

impl LedMatrix for ScriptedBoard {
    fn render(&mut self, grid: &Grid) {
        self.frames.push(grid.rows_iter().flatten().copied().collect());
    }
}

impl TextDisplay for ScriptedBoard {
    fn show_lines(&mut self, lines: &[String]) {
        self.texts.push(lines.to_vec());
    }
}

impl Buzzer for ScriptedBoard {
    fn play_tone(&mut self, frequency_hz: u32, duration_ms: u32) {
        self.tones.push((frequency_hz, duration_ms));
        self.advance(duration_ms);
    }
}

impl Joystick for ScriptedBoard {
    fn read_raw(&mut self) -> JoystickSample {
        self.stick
            .iter()
            .rev()
            .find(|span| span.active(self.now_ms))
            .map(|span| span.value)
            .unwrap_or(JoystickSample::centered(MAX))
    }
}

impl Buttons for ScriptedBoard {
    fn is_pressed(&mut self, button: Button) -> bool {
        self.buttons
            .iter()
            .any(|span| span.value == button && span.active(self.now_ms))
    }
}

impl Clock for ScriptedBoard {
    fn sleep_ms(&mut self, ms: u32) {
        self.advance(ms);
    }
}
