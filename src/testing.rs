//! Fakes for the clock, input and display collaborators.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::board::{Frame, HEIGHT, Rgb, WIDTH};
use crate::clock::Clock;
use crate::display::Display;
use crate::error::GameError;
use crate::input::{DirectionHandler, Input, InputStatus};
use crate::player::Direction;

/// A clock that only moves when slept on. Clones share the same time.
#[derive(Clone, Default)]
pub struct FakeClock {
    now: Rc<Cell<Duration>>,
}

impl FakeClock {
    pub fn starting_at(now: Duration) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    fn advance_to(&self, t: Duration) {
        if t > self.now.get() {
            self.now.set(t);
        }
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn sleep(&mut self, duration: Duration) {
        self.now.set(self.now.get() + duration);
    }
}

/// Replays timed presses against a [`FakeClock`], advancing it while waiting.
pub struct ScriptedInput {
    clock: FakeClock,
    presses: VecDeque<(Duration, Direction)>,
    close_at: Option<Duration>,
    handler: Option<DirectionHandler>,
}

impl ScriptedInput {
    pub fn new(clock: FakeClock) -> Self {
        Self {
            clock,
            presses: VecDeque::new(),
            close_at: None,
            handler: None,
        }
    }

    /// Presses must be scripted in time order.
    pub fn press_at(&mut self, at: Duration, direction: Direction) {
        self.presses.push_back((at, direction));
    }

    pub fn close_at(&mut self, at: Duration) {
        self.close_at = Some(at);
    }
}

impl Input for ScriptedInput {
    fn on_direction(&mut self, handler: DirectionHandler) {
        self.handler = Some(handler);
    }

    fn dispatch(&mut self, timeout: Duration) -> Result<InputStatus, GameError> {
        let deadline = self.clock.now() + timeout;
        let next_press = self.presses.front().map(|&(at, _)| at).filter(|&at| at <= deadline);

        if let Some(close) = self.close_at.filter(|&at| at <= deadline) {
            if next_press.is_none_or(|at| close < at) {
                self.clock.advance_to(close);
                return Ok(InputStatus::Closed);
            }
        }

        let Some(at) = next_press else {
            self.clock.advance_to(deadline);
            return Ok(InputStatus::Open);
        };
        self.clock.advance_to(at);
        while let Some(&(t, direction)) = self.presses.front() {
            if t > at {
                break;
            }
            self.presses.pop_front();
            if let Some(handler) = self.handler.as_mut() {
                handler(direction);
            }
        }
        Ok(InputStatus::Open)
    }
}

/// Remembers everything it was asked to show.
#[derive(Default)]
pub struct RecordingDisplay {
    pub frames: Vec<Frame>,
    pub pixels: Vec<(usize, usize, Rgb)>,
    pub texts: Vec<(String, Rgb, Duration)>,
    pub clears: Vec<Rgb>,
}

impl Display for RecordingDisplay {
    fn show_frame(&mut self, frame: &Frame) -> Result<(), GameError> {
        self.frames.push(*frame);
        Ok(())
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) -> Result<(), GameError> {
        assert!(x < WIDTH && y < HEIGHT, "pixel ({x}, {y}) is off the matrix");
        self.pixels.push((x, y, color));
        Ok(())
    }

    fn show_text(&mut self, message: &str, color: Rgb, scroll_speed: Duration) -> Result<(), GameError> {
        self.texts.push((message.to_string(), color, scroll_speed));
        Ok(())
    }

    fn clear(&mut self, color: Rgb) -> Result<(), GameError> {
        self.clears.push(color);
        Ok(())
    }
}
