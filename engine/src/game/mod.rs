//! The match lifecycle: start menu, rounds, round-end menus and shutdown,
//! written as a state machine where every state handler returns the next
//! state.

mod round;

pub use round::{MoveReport, Round, RoundOutcome};

use crate::error::EngineError;
use crate::input::InputSampler;
use crate::log;
use crate::melody::{self, BITE, GAME_OVER, GAME_WON};
use crate::menu::{self, MenuAction, MenuOption, MenuText};
use crate::peripherals::{Board, Button};
use crate::rng::GameRng;
use crate::settings::GameSettings;
use crate::snake::Grid;

const IN_GAME_CONTROLS: [&str; 5] = ["Controls", "", "Joystick move", "A Quit", "B Restart"];
const MENU_FOOTER: [&str; 2] = ["", "A select"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    RoundEnd(RoundOutcome),
    Exited,
}

pub fn start_menu() -> MenuText {
    MenuText::new(
        &["Snake", ""],
        vec![
            MenuOption::new("Start", MenuAction::Start),
            MenuOption::new("Quit", MenuAction::Quit),
        ],
        &MENU_FOOTER,
    )
}

pub fn round_end_menu(outcome: RoundOutcome) -> MenuText {
    let (title, again) = match outcome {
        RoundOutcome::Won => ("You win", "Play again"),
        RoundOutcome::Lost => ("You lose", "Try again"),
    };
    MenuText::new(
        &[title, ""],
        vec![
            MenuOption::new(again, MenuAction::Restart),
            MenuOption::new("Quit", MenuAction::Quit),
        ],
        &MENU_FOOTER,
    )
}

pub struct Game<'a, B: Board + ?Sized> {
    board: &'a mut B,
    settings: &'a GameSettings,
    sampler: InputSampler,
    rng: GameRng,
    state: GameState,
    round: Option<Round>,
}

impl<'a, B: Board + ?Sized> Game<'a, B> {
    pub fn new(board: &'a mut B, settings: &'a GameSettings, rng: GameRng) -> Self {
        Self {
            board,
            settings,
            sampler: InputSampler::new(settings),
            rng,
            state: GameState::Menu,
            round: None,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Runs until the player quits, then blanks both displays.
    pub fn run(&mut self) -> Result<(), EngineError> {
        log!("Game started with seed {}", self.rng.seed());
        while self.state != GameState::Exited {
            self.step_state()?;
        }
        self.clear_matrix();
        self.board.show_lines(&[]);
        log!("Game exited");
        Ok(())
    }

    /// Runs the handler of the current state and moves to the state it returns.
    pub fn step_state(&mut self) -> Result<GameState, EngineError> {
        let next = match self.state {
            GameState::Menu => self.show_start_menu()?,
            GameState::Playing => self.play_round()?,
            GameState::RoundEnd(outcome) => self.show_round_end(outcome)?,
            GameState::Exited => GameState::Exited,
        };
        if next != self.state {
            log!("State {:?} -> {:?}", self.state, next);
        }
        self.state = next;
        Ok(next)
    }

    fn show_start_menu(&mut self) -> Result<GameState, EngineError> {
        let mut menu = start_menu();
        match menu::choose(&mut menu, &mut *self.board, &self.sampler)? {
            MenuAction::Start | MenuAction::Restart => {
                self.board.sleep_ms(self.settings.timing.start_delay_ms);
                Ok(GameState::Playing)
            }
            MenuAction::Quit => Ok(GameState::Exited),
        }
    }

    fn play_round(&mut self) -> Result<GameState, EngineError> {
        let round = self.round.insert(Round::new(self.settings, &mut self.rng)?);
        self.board.render(&round.grid);
        self.board.show_lines(&to_lines(&IN_GAME_CONTROLS));

        let next = loop {
            let input = self
                .sampler
                .sample_move_window(&mut *self.board, round.snake.direction);

            match input.button {
                Some(Button::A) => {
                    log!("Quit during round");
                    break GameState::Exited;
                }
                Some(Button::B) => {
                    log!("Restart during round");
                    break GameState::Playing;
                }
                None => {}
            }

            if round.snake.steer(input.direction) {
                log!("Heading {:?}", input.direction);
            }

            let report = round.advance(&mut self.rng)?;
            if report.ate_food {
                melody::play_effect(&mut *self.board, &self.settings.sound, BITE);
            }
            self.board.render(&round.grid);

            if let Some(outcome) = report.outcome {
                log!("Round over: {:?} with length {}", outcome, round.snake.len());
                return Ok(GameState::RoundEnd(outcome));
            }
        };

        self.clear_matrix();
        Ok(next)
    }

    fn show_round_end(&mut self, outcome: RoundOutcome) -> Result<GameState, EngineError> {
        let jingle = match outcome {
            RoundOutcome::Won => GAME_WON,
            RoundOutcome::Lost => GAME_OVER,
        };
        melody::play_music(&mut *self.board, &self.settings.sound, jingle);

        let mut menu = round_end_menu(outcome);
        let action = menu::choose(&mut menu, &mut *self.board, &self.sampler)?;
        self.clear_matrix();
        match action {
            MenuAction::Start | MenuAction::Restart => Ok(GameState::Playing),
            MenuAction::Quit => Ok(GameState::Exited),
        }
    }

    /// Blanks the last round's grid and shows it. Before any round the matrix
    /// gets an empty grid of the configured size.
    fn clear_matrix(&mut self) {
        match self.round.as_mut() {
            Some(round) => {
                round.grid.clear();
                self.board.render(&round.grid);
            }
            None => {
                let blank = Grid::new(self.settings.grid.rows, self.settings.grid.cols);
                self.board.render(&blank);
            }
        }
    }

    #[cfg(test)]
    fn with_state(mut self, state: GameState) -> Self {
        self.state = state;
        self
    }
}

fn to_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}
