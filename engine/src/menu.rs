use crate::error::EngineError;
use crate::input::{InputSampler, MenuSignal};
use crate::log;
use crate::peripherals::{Buttons, Clock, Joystick, TextDisplay};
use crate::snake::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    Restart,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub action: MenuAction,
    pub selected: bool,
}

impl MenuOption {
    pub fn new(label: &str, action: MenuAction) -> Self {
        Self {
            label: label.to_string(),
            action,
            selected: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionMove {
    Up,
    Down,
}

/// Header lines, selectable options and footer lines of one screen. Exactly
/// one option is selected at any time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuText {
    pub header: Vec<String>,
    options: Vec<MenuOption>,
    pub footer: Vec<String>,
}

impl MenuText {
    /// Builds a menu with the first option selected.
    pub fn new(header: &[&str], options: Vec<MenuOption>, footer: &[&str]) -> Self {
        let mut options = options;
        for (index, option) in options.iter_mut().enumerate() {
            option.selected = index == 0;
        }
        Self::with_options(header, options, footer)
    }

    /// Takes the `selected` flags as given.
    pub fn with_options(header: &[&str], options: Vec<MenuOption>, footer: &[&str]) -> Self {
        Self {
            header: header.iter().map(|line| line.to_string()).collect(),
            options,
            footer: footer.iter().map(|line| line.to_string()).collect(),
        }
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    fn selected_index(&self) -> Option<usize> {
        self.options.iter().position(|option| option.selected)
    }

    pub fn selected_option(&self) -> Result<&MenuOption, EngineError> {
        self.selected_index()
            .map(|index| &self.options[index])
            .ok_or(EngineError::NoSelectedOption {
                operation: "read the selected option",
            })
    }

    pub fn move_selection(&mut self, direction: SelectionMove) -> Result<(), EngineError> {
        let current = self.selected_index().ok_or(EngineError::NoSelectedOption {
            operation: match direction {
                SelectionMove::Up => "move selection up",
                SelectionMove::Down => "move selection down",
            },
        })?;

        let count = self.options.len();
        let next = match direction {
            SelectionMove::Up => (current + count - 1) % count,
            SelectionMove::Down => (current + 1) % count,
        };

        self.options[current].selected = false;
        self.options[next].selected = true;
        Ok(())
    }

    /// Flat line sequence for the text display: header, options (selected one
    /// marked), footer.
    pub fn lines(&self) -> Vec<String> {
        let mut lines =
            Vec::with_capacity(self.header.len() + self.options.len() + self.footer.len());
        lines.extend(self.header.iter().cloned());
        lines.extend(self.options.iter().map(|option| {
            if option.selected {
                format!("> {} <", option.label)
            } else {
                option.label.clone()
            }
        }));
        lines.extend(self.footer.iter().cloned());
        lines
    }
}

/// Shows `menu` and lets the player pick an option with the stick and
/// button A.
pub fn choose<T>(menu: &mut MenuText, io: &mut T, sampler: &InputSampler) -> Result<MenuAction, EngineError>
where
    T: TextDisplay + Joystick + Buttons + Clock + ?Sized,
{
    io.show_lines(&menu.lines());
    // A stick still held from before the menu opened is not a new deflection.
    let mut last_stick = sampler.read_joystick(io).direction;

    loop {
        match sampler.poll_menu(io, &mut last_stick) {
            MenuSignal::Confirm => {
                let option = menu.selected_option()?;
                log!("Menu choice: {}", option.label);
                return Ok(option.action);
            }
            MenuSignal::Up => {
                menu.move_selection(SelectionMove::Up)?;
                io.show_lines(&menu.lines());
            }
            MenuSignal::Down => {
                menu.move_selection(SelectionMove::Down)?;
                io.show_lines(&menu.lines());
            }
            MenuSignal::Idle => {}
        }
        io.sleep_ms(sampler.menu_poll_interval_ms());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peripherals::Button;
    use crate::settings::GameSettings;
    use crate::testing::ScriptedBoard;

    fn three_option_menu() -> MenuText {
        MenuText::new(
            &["Title", ""],
            vec![
                MenuOption::new("One", MenuAction::Start),
                MenuOption::new("Two", MenuAction::Restart),
                MenuOption::new("Three", MenuAction::Quit),
            ],
            &["", "A select"],
        )
    }

    fn selected_count(menu: &MenuText) -> usize {
        menu.options().iter().filter(|option| option.selected).count()
    }

    #[test]
    fn test_new_selects_first_option() {
        let menu = three_option_menu();
        assert_eq!(menu.selected_option().unwrap().label, "One");
        assert_eq!(selected_count(&menu), 1);
    }

    #[test]
    fn test_move_up_from_first_wraps_to_last() {
        let mut menu = three_option_menu();
        menu.move_selection(SelectionMove::Up).unwrap();
        assert_eq!(menu.selected_option().unwrap().label, "Three");
        assert_eq!(selected_count(&menu), 1);
    }

    #[test]
    fn test_move_down_from_last_wraps_to_first() {
        let mut menu = three_option_menu();
        menu.move_selection(SelectionMove::Down).unwrap();
        menu.move_selection(SelectionMove::Down).unwrap();
        assert_eq!(menu.selected_option().unwrap().label, "Three");
        menu.move_selection(SelectionMove::Down).unwrap();
        assert_eq!(menu.selected_option().unwrap().label, "One");
    }

    #[test]
    fn test_any_move_sequence_keeps_exactly_one_selected() {
        let mut menu = three_option_menu();
        let moves = [
            SelectionMove::Up,
            SelectionMove::Up,
            SelectionMove::Down,
            SelectionMove::Up,
            SelectionMove::Down,
            SelectionMove::Down,
            SelectionMove::Down,
        ];
        for m in moves {
            menu.move_selection(m).unwrap();
            assert_eq!(selected_count(&menu), 1);
        }
    }

    #[test]
    fn test_single_option_stays_selected() {
        let mut menu = MenuText::new(&[], vec![MenuOption::new("Only", MenuAction::Quit)], &[]);
        menu.move_selection(SelectionMove::Down).unwrap();
        menu.move_selection(SelectionMove::Up).unwrap();
        assert_eq!(menu.selected_option().unwrap().action, MenuAction::Quit);
    }

    #[test]
    fn test_no_selection_is_an_error() {
        let mut menu = MenuText::with_options(
            &[],
            vec![
                MenuOption::new("One", MenuAction::Start),
                MenuOption::new("Two", MenuAction::Quit),
            ],
            &[],
        );
        assert_eq!(
            menu.selected_option().unwrap_err(),
            EngineError::NoSelectedOption {
                operation: "read the selected option"
            }
        );
        assert_eq!(
            menu.move_selection(SelectionMove::Up).unwrap_err(),
            EngineError::NoSelectedOption {
                operation: "move selection up"
            }
        );
        assert!(menu.move_selection(SelectionMove::Down).is_err());
    }

    #[test]
    fn test_empty_menu_has_no_selection() {
        let mut menu = MenuText::new(&["Header"], Vec::new(), &[]);
        assert!(menu.selected_option().is_err());
        assert!(menu.move_selection(SelectionMove::Down).is_err());
    }

    #[test]
    fn test_lines_order_and_markers() {
        let mut menu = three_option_menu();
        menu.move_selection(SelectionMove::Down).unwrap();
        assert_eq!(
            menu.lines(),
            vec!["Title", "", "One", "> Two <", "Three", "", "A select"]
        );
    }

    #[test]
    fn test_choose_navigates_and_confirms() {
        let settings = GameSettings::default();
        let sampler = InputSampler::new(&settings);
        let mut board = ScriptedBoard::new();
        board.hold_stick(Direction::South, 100, 200);
        board.hold_stick(Direction::South, 300, 400);
        board.hold_stick(Direction::North, 500, 600);
        board.press(Button::A, 700, 760);

        let mut menu = three_option_menu();
        let action = choose(&mut menu, &mut board, &sampler).unwrap();

        assert_eq!(action, MenuAction::Restart);
        assert_eq!(board.texts.len(), 4);
        assert_eq!(board.last_text()[3], "> Two <");
    }

    #[test]
    fn test_choose_ignores_stick_held_when_menu_opens() {
        let settings = GameSettings::default();
        let sampler = InputSampler::new(&settings);
        let mut board = ScriptedBoard::new();
        board.hold_stick(Direction::South, 0, 300);
        board.hold_stick(Direction::South, 400, 500);
        board.press(Button::A, 600, 650);

        let mut menu = three_option_menu();
        let action = choose(&mut menu, &mut board, &sampler).unwrap();

        assert_eq!(action, MenuAction::Restart);
        assert_eq!(board.texts.len(), 2);
    }

    #[test]
    fn test_choose_ignores_button_b() {
        let settings = GameSettings::default();
        let sampler = InputSampler::new(&settings);
        let mut board = ScriptedBoard::new();
        board.press(Button::B, 0, 300);
        board.press(Button::A, 400, 450);

        let mut menu = three_option_menu();
        let action = choose(&mut menu, &mut board, &sampler).unwrap();
        assert_eq!(action, MenuAction::Start);
        assert!(board.now_ms >= 450);
    }
}
