use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

use crate::board::{Board, Frame, Position, YELLOW};
use crate::judge::Judgement;
use crate::player::{Direction, Player};

/// Points for each bonus picked up, however many a wave spawned.
pub const BONUS_REWARD: u32 = 5;

/// Shared between the game loop and the input handler. Both run on one
/// thread and neither holds a borrow while the other runs.
pub type SessionHandle = Rc<RefCell<GameSession>>;

/// Everything one game mutates: the board, the astronaut and the bonus tally.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    player: Player,
    bonus_score: u32,
    redraw_requested: bool,
}

impl GameSession {
    pub fn new(board: Board, start: Position) -> Self {
        Self {
            board,
            player: Player::new(start),
            bonus_score: 0,
            redraw_requested: false,
        }
    }

    pub fn into_handle(self) -> SessionHandle {
        Rc::new(RefCell::new(self))
    }

    #[cfg(test)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn position(&self) -> Position {
        self.player.position()
    }

    #[cfg(test)]
    pub fn state(&self) -> crate::player::PlayerState {
        self.player.state()
    }

    pub fn is_alive(&self) -> bool {
        self.player.is_alive()
    }

    pub fn bonus_score(&self) -> u32 {
        self.bonus_score
    }

    /// Input handler entry point. Moves, resolves, and asks for a redraw.
    pub fn on_input(&mut self, direction: Direction) {
        let Some(verdict) = self.player.on_input(direction, &mut self.board) else {
            return;
        };
        self.record(verdict);
        self.redraw_requested = true;
    }

    /// The loop's check of the current position after the board moved.
    pub fn check(&mut self) -> Judgement {
        let verdict = self.player.settle(&mut self.board);
        self.record(verdict);
        verdict
    }

    fn record(&mut self, verdict: Judgement) {
        let pos = self.player.position();
        match verdict {
            Judgement::Collision => {
                info!(col = pos.col, row = pos.row, "astronaut hit a pipe");
            }
            Judgement::Bonus => {
                self.bonus_score += BONUS_REWARD;
                info!(col = pos.col, row = pos.row, bonus_score = self.bonus_score, "bonus collected");
            }
            Judgement::Clear => {}
        }
    }

    /// Returns and clears the redraw request left by input moves.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// The board with the astronaut painted on top. The board is not touched.
    pub fn frame(&self) -> Frame {
        let mut frame = self.board.to_frame();
        frame[self.player.position().index()] = YELLOW;
        frame
    }
}
