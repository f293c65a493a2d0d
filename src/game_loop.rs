use std::rc::Rc;
use std::time::Duration;

use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::display::Display;
use crate::error::GameError;
use crate::input::{Input, InputStatus};
use crate::judge::Judgement;
use crate::pipes;
use crate::score;
use crate::session::SessionHandle;

/// Scroll steps between pipe waves. Speed-ups shorten the steps, never the
/// spacing between pipes.
pub const SCROLL_SUBSTEPS: usize = 3;

pub const BASE_INTERVAL: Duration = Duration::from_millis(500);
pub const MIN_INTERVAL: Duration = Duration::from_millis(100);
/// Shaved off the interval for every whole second survived.
pub const DECAY_PER_SECOND: Duration = Duration::from_millis(10);

/// Delay between scroll steps after surviving `elapsed`.
pub fn tick_interval(elapsed: Duration) -> Duration {
    let secs = u32::try_from(elapsed.as_secs()).unwrap_or(u32::MAX);
    let decay = DECAY_PER_SECOND.checked_mul(secs).unwrap_or(BASE_INTERVAL);
    BASE_INTERVAL.saturating_sub(decay).max(MIN_INTERVAL)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The astronaut crashed; carries the final score.
    Finished(u64),
    /// The player quit before crashing.
    Quit,
}

/// Drives waves, scrolling, rendering and collision checks until the
/// astronaut dies. Input is handled while the loop waits between steps.
pub struct GameLoop<'a, D, I, C> {
    session: SessionHandle,
    display: &'a mut D,
    input: &'a mut I,
    clock: &'a mut C,
    rng: StdRng,
}

impl<'a, D: Display, I: Input, C: Clock> GameLoop<'a, D, I, C> {
    /// Subscribes the session to `input` for the lifetime of the game.
    pub fn new(session: SessionHandle, display: &'a mut D, input: &'a mut I, clock: &'a mut C, rng: StdRng) -> Self {
        let handle = Rc::clone(&session);
        input.on_direction(Box::new(move |direction| handle.borrow_mut().on_input(direction)));
        Self {
            session,
            display,
            input,
            clock,
            rng,
        }
    }

    pub fn run(mut self) -> Result<Outcome, GameError> {
        let start = self.clock.now();
        info!("game started");

        while self.session.borrow().is_alive() {
            let elapsed = self.clock.now().saturating_sub(start);
            let interval = tick_interval(elapsed);
            debug!(elapsed_secs = elapsed.as_secs(), interval_ms = interval.as_millis() as u64, "wave");

            {
                let mut session = self.session.borrow_mut();
                pipes::generate(session.board_mut(), &mut self.rng);
                if session.check() == Judgement::Collision {
                    break;
                }
            }

            for _ in 0..SCROLL_SUBSTEPS {
                let frame = {
                    let mut session = self.session.borrow_mut();
                    pipes::scroll(session.board_mut());
                    session.frame()
                };
                self.display.show_frame(&frame)?;
                if self.session.borrow_mut().check() == Judgement::Collision {
                    break;
                }
                if self.wait(interval)? == InputStatus::Closed {
                    info!("player quit");
                    return Ok(Outcome::Quit);
                }
                if !self.session.borrow().is_alive() {
                    break;
                }
            }
        }

        let (bonus, pos) = {
            let session = self.session.borrow();
            (session.bonus_score(), session.position())
        };
        let total = score::finalize(start, self.clock.now(), bonus);
        info!(bonus, total, col = pos.col, row = pos.row, "game over");
        Ok(Outcome::Finished(total))
    }

    /// Hands control to the input source until `interval` has passed,
    /// redrawing whenever a move asked for it.
    fn wait(&mut self, interval: Duration) -> Result<InputStatus, GameError> {
        let deadline = self.clock.now() + interval;
        loop {
            let now = self.clock.now();
            if now >= deadline {
                return Ok(InputStatus::Open);
            }
            if self.input.dispatch(deadline - now)? == InputStatus::Closed {
                return Ok(InputStatus::Closed);
            }
            let redraw = {
                let mut session = self.session.borrow_mut();
                session.take_redraw().then(|| session.frame())
            };
            if let Some(frame) = redraw {
                self.display.show_frame(&frame)?;
            }
            if !self.session.borrow().is_alive() {
                return Ok(InputStatus::Open);
            }
        }
    }
}
