//! A board made of the terminal: the LED matrix and the text display are
//! drawn side by side with crossterm, arrow keys stand in for the joystick and
//! `a`/`b` for the buttons.
//!
//! Terminals report key presses but rarely releases, so a key counts as held
//! for a short while after its last press or repeat event.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use snake_engine::log;
use snake_engine::peripherals::{
    Button, Buttons, Buzzer, Clock, Joystick, JoystickSample, LedMatrix, TextDisplay,
};
use snake_engine::snake::{Cell, Direction, Grid};
use snake_engine::GameSettings;

const PANEL_WIDTH: usize = 16;
const PANEL_LINES: usize = 8;
const PANEL_GAP: u16 = 4;
const KEY_HOLD: Duration = Duration::from_millis(150);
const LEGEND: &str = "arrows: joystick  a: button A  b: button B";

struct Held<T> {
    value: T,
    since: Instant,
}

impl<T: Copy> Held<T> {
    fn active(&self) -> Option<T> {
        (self.since.elapsed() < KEY_HOLD).then_some(self.value)
    }
}

/// Which keys currently count as held.
#[derive(Default)]
struct KeyState {
    stick: Option<Held<Direction>>,
    button_a: Option<Held<()>>,
    button_b: Option<Held<()>>,
}

impl KeyState {
    fn on_key(&mut self, key: KeyEvent) {
        let released = key.kind == KeyEventKind::Release;

        let stick = match key.code {
            KeyCode::Up => Some(Direction::North),
            KeyCode::Down => Some(Direction::South),
            KeyCode::Left => Some(Direction::West),
            KeyCode::Right => Some(Direction::East),
            _ => None,
        };
        if let Some(direction) = stick {
            if !released {
                self.stick = Some(Held { value: direction, since: Instant::now() });
            } else if self.stick.as_ref().is_some_and(|held| held.value == direction) {
                self.stick = None;
            }
            return;
        }

        let slot = match key.code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Enter => &mut self.button_a,
            KeyCode::Char('b') | KeyCode::Char('B') => &mut self.button_b,
            _ => return,
        };
        *slot = (!released).then(|| Held { value: (), since: Instant::now() });
    }

    fn stick(&self) -> Direction {
        self.stick
            .as_ref()
            .and_then(Held::active)
            .unwrap_or(Direction::None)
    }

    fn is_pressed(&self, button: Button) -> bool {
        let slot = match button {
            Button::A => &self.button_a,
            Button::B => &self.button_b,
        };
        slot.as_ref().and_then(Held::active).is_some()
    }
}

/// Full deflection towards `direction`, as an analog stick would report it.
fn stick_sample(direction: Direction, max: u16) -> JoystickSample {
    let center = max / 2;
    match direction {
        Direction::North => JoystickSample { x_raw: center, y_raw: max },
        Direction::South => JoystickSample { x_raw: center, y_raw: 0 },
        Direction::East => JoystickSample { x_raw: max, y_raw: center },
        Direction::West => JoystickSample { x_raw: 0, y_raw: center },
        Direction::None => JoystickSample::centered(max),
    }
}

pub struct TerminalBoard {
    out: Stdout,
    joystick_max: u16,
    panel_column: u16,
    keys: KeyState,
}

impl TerminalBoard {
    /// Switches the terminal to raw mode on the alternate screen. The terminal
    /// is restored when the board is dropped.
    pub fn open(settings: &GameSettings) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        undo_on_error(
            execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All)),
            terminal::disable_raw_mode,
        )?;

        let matrix_width = (settings.grid.cols * 2) as u16;
        let mut board = Self {
            out,
            joystick_max: settings.input.joystick_max,
            panel_column: matrix_width + PANEL_GAP,
            keys: KeyState::default(),
        };

        let legend_row = settings.grid.rows.max(PANEL_LINES) as u16 + 1;
        execute!(board.out, MoveTo(0, legend_row), Print(LEGEND))?;
        board.draw_panel(&[])?;
        Ok(board)
    }

    fn restore(&mut self) -> io::Result<()> {
        execute!(self.out, ResetColor, Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    fn draw_matrix(&mut self, grid: &Grid) -> io::Result<()> {
        for (row, cells) in grid.rows_iter().enumerate() {
            queue!(self.out, MoveTo(0, row as u16))?;
            for cell in cells {
                queue!(self.out, SetForegroundColor(cell_color(*cell)), Print("██"))?;
            }
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    fn draw_panel(&mut self, lines: &[String]) -> io::Result<()> {
        for index in 0..PANEL_LINES {
            let text: String = lines
                .get(index)
                .map(|line| line.chars().take(PANEL_WIDTH).collect())
                .unwrap_or_default();
            queue!(
                self.out,
                MoveTo(self.panel_column, index as u16),
                Print(format!("|{:^width$}|", text, width = PANEL_WIDTH))
            )?;
        }
        self.out.flush()
    }

    fn pump_events(&mut self) {
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => {
                    log!("Input poll failed: {}", err);
                    break;
                }
            }
            match event::read() {
                Ok(Event::Key(key)) => self.keys.on_key(key),
                Ok(_) => {}
                Err(err) => {
                    log!("Input read failed: {}", err);
                    break;
                }
            }
        }
    }
}

impl Drop for TerminalBoard {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            log!("Failed to restore terminal: {}", err);
        }
    }
}

/// Runs `undo` if `result` failed, then hands `result` back.
fn undo_on_error<T>(result: io::Result<T>, undo: impl FnOnce() -> io::Result<()>) -> io::Result<T> {
    if result.is_err()
        && let Err(err) = undo()
    {
        log!("Failed to undo terminal setup: {}", err);
    }
    result
}

fn cell_color(cell: Cell) -> Color {
    match cell {
        Cell::Empty => Color::DarkGrey,
        Cell::SnakeHead => Color::White,
        Cell::SnakeBody => Color::Blue,
        Cell::Food => Color::Red,
    }
}

impl LedMatrix for TerminalBoard {
    fn render(&mut self, grid: &Grid) {
        if let Err(err) = self.draw_matrix(grid) {
            log!("Matrix render failed: {}", err);
        }
    }
}

impl TextDisplay for TerminalBoard {
    fn show_lines(&mut self, lines: &[String]) {
        if let Err(err) = self.draw_panel(lines) {
            log!("Text display failed: {}", err);
        }
    }
}

impl Buzzer for TerminalBoard {
    fn play_tone(&mut self, frequency_hz: u32, duration_ms: u32) {
        log!("Tone {} Hz for {} ms", frequency_hz, duration_ms);
        self.sleep_ms(duration_ms);
    }
}

impl Joystick for TerminalBoard {
    fn read_raw(&mut self) -> JoystickSample {
        self.pump_events();
        stick_sample(self.keys.stick(), self.joystick_max)
    }
}

impl Buttons for TerminalBoard {
    fn is_pressed(&mut self, button: Button) -> bool {
        self.pump_events();
        self.keys.is_pressed(button)
    }
}

impl Clock for TerminalBoard {
    fn sleep_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(ms as u64));
    }
}
