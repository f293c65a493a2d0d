use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::GameError;
use crate::player::Direction;

pub type DirectionHandler = Box<dyn FnMut(Direction)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputStatus {
    Open,
    /// The player asked to quit.
    Closed,
}

/// A joystick-like source of directional presses.
pub trait Input {
    /// Registers the handler for every press, replacing any previous one.
    fn on_direction(&mut self, handler: DirectionHandler);

    /// Waits at most `timeout` for presses and runs the handler for each one
    /// before returning.
    fn dispatch(&mut self, timeout: Duration) -> Result<InputStatus, GameError>;
}

enum Key {
    Press(Direction),
    Quit,
    Ignored,
}

fn classify(key: KeyEvent) -> Key {
    if key.kind != KeyEventKind::Press {
        return Key::Ignored;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Key::Press(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') => Key::Press(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') => Key::Press(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') => Key::Press(Direction::Right),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Key::Quit,
        _ => Key::Ignored,
    }
}

/// Arrow keys / WASD from the terminal. Needs raw mode to see single presses.
#[derive(Default)]
pub struct TerminalInput {
    handler: Option<DirectionHandler>,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self, ev: Event) -> InputStatus {
        if let Event::Key(key) = ev {
            match classify(key) {
                Key::Press(direction) => {
                    if let Some(handler) = self.handler.as_mut() {
                        handler(direction);
                    }
                }
                Key::Quit => return InputStatus::Closed,
                Key::Ignored => {}
            }
        }
        InputStatus::Open
    }
}

impl Input for TerminalInput {
    fn on_direction(&mut self, handler: DirectionHandler) {
        self.handler = Some(handler);
    }

    fn dispatch(&mut self, timeout: Duration) -> Result<InputStatus, GameError> {
        if !event::poll(timeout)? {
            return Ok(InputStatus::Open);
        }
        if self.handle(event::read()?) == InputStatus::Closed {
            return Ok(InputStatus::Closed);
        }
        // Drain whatever else is already queued.
        while event::poll(Duration::ZERO)? {
            if self.handle(event::read()?) == InputStatus::Closed {
                return Ok(InputStatus::Closed);
            }
        }
        Ok(InputStatus::Open)
    }
}
