use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;
use crate::session::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Session(Command),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => steer(Direction::Up),
            KeyCode::Down => steer(Direction::Down),
            KeyCode::Left => steer(Direction::Left),
            KeyCode::Right => steer(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => steer(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => steer(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => steer(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => steer(Direction::Right),

            // Session controls
            KeyCode::Enter => KeyAction::Session(Command::Start),
            KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
                KeyAction::Session(Command::TogglePause)
            }
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Session(Command::Restart),
            KeyCode::Char('x') | KeyCode::Char('X') => KeyAction::Session(Command::End),

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

fn steer(direction: Direction) -> KeyAction {
    KeyAction::Session(direction.into())
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
