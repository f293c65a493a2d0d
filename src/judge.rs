use crate::board::{Board, CellKind, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Judgement {
    Clear,
    Collision,
    Bonus,
}

/// What the astronaut would hit at `pos`. Pure; panics off the grid.
pub fn judge(board: &Board, pos: Position) -> Judgement {
    match board.get_cell(pos) {
        CellKind::Obstacle => Judgement::Collision,
        CellKind::Bonus => Judgement::Bonus,
        CellKind::Empty => Judgement::Clear,
    }
}
