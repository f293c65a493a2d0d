use crate::board::{Board, CellKind, HEIGHT, Position, WIDTH};
use crate::judge::{Judgement, judge};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Position {
    /// One cell towards `direction`. Walls clamp instead of rejecting.
    pub fn step(self, direction: Direction) -> Position {
        match direction {
            Direction::Up => Position::new(self.col, self.row.saturating_sub(1)),
            Direction::Down => Position::new(self.col, (self.row + 1).min(HEIGHT - 1)),
            Direction::Left => Position::new(self.col.saturating_sub(1), self.row),
            Direction::Right => Position::new((self.col + 1).min(WIDTH - 1), self.row),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Alive,
    Dead,
}

/// The astronaut: a position and a one-way Alive -> Dead state machine.
#[derive(Debug)]
pub struct Player {
    position: Position,
    state: PlayerState,
}

impl Player {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            state: PlayerState::Alive,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    #[cfg(test)]
    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state == PlayerState::Alive
    }

    /// Moves one cell and resolves whatever is under the new position.
    ///
    /// Returns `None` once dead; input after death changes nothing.
    pub fn on_input(&mut self, direction: Direction, board: &mut Board) -> Option<Judgement> {
        if !self.is_alive() {
            return None;
        }
        self.position = self.position.step(direction);
        Some(self.settle(board))
    }

    /// Judges the current cell. A pipe kills, a bonus is consumed.
    ///
    /// Safe to call repeatedly: dying twice is the same as dying once.
    pub fn settle(&mut self, board: &mut Board) -> Judgement {
        let verdict = judge(board, self.position);
        match verdict {
            Judgement::Collision => self.state = PlayerState::Dead,
            Judgement::Bonus => board.set_cell(self.position, CellKind::Empty),
            Judgement::Clear => {}
        }
        verdict
    }
}
