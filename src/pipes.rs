use rand::Rng;
use tracing::debug;

use crate::board::{Board, CellKind, HEIGHT, Position, WIDTH};

/// Pipes are generated in the last column and scroll towards column 0.
pub const SPAWN_COL: usize = WIDTH - 1;

/// Cells cleared around the gap center. Three rows is always passable.
pub const GAP_HEIGHT: usize = 3;

pub const MAX_BONUSES_PER_WAVE: usize = 2;

/// Columns that may receive a bonus: the trailing half of the grid, minus the
/// freshly spawned pipe column so its gap stays clear.
pub const BONUS_COLS: std::ops::Range<usize> = (WIDTH / 2)..SPAWN_COL;

// ── Generation ──────────────────────────────────────────────────────────────

/// Spawns a new pipe wave at the far edge and sprinkles up to two bonuses.
pub fn generate(board: &mut Board, rng: &mut impl Rng) {
    for row in 0..HEIGHT {
        board.set_cell(Position::new(SPAWN_COL, row), CellKind::Obstacle);
    }

    let gap_center = rng.gen_range(1..=HEIGHT - 2);
    for row in gap_center - 1..gap_center - 1 + GAP_HEIGHT {
        board.set_cell(Position::new(SPAWN_COL, row), CellKind::Empty);
    }

    let attempts = rng.gen_range(0..=MAX_BONUSES_PER_WAVE);
    let mut placed = 0;
    for _ in 0..attempts {
        let pos = Position::new(rng.gen_range(BONUS_COLS), rng.gen_range(0..HEIGHT));
        // Never overwrite a pipe.
        if board.get_cell(pos) == CellKind::Empty {
            board.set_cell(pos, CellKind::Bonus);
            placed += 1;
        }
    }

    debug!(gap_center, bonuses = placed, "pipe wave generated");
}

// ── Scrolling ───────────────────────────────────────────────────────────────

/// Shifts every row one cell towards column 0. Column 0 falls off the board
/// and the spawn column comes back empty.
pub fn scroll(board: &mut Board) {
    for row in board.rows_mut() {
        row.copy_within(1.., 0);
        row[SPAWN_COL] = CellKind::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn longest_empty_run(cells: &[CellKind]) -> usize {
        let mut best = 0;
        let mut run = 0;
        for &cell in cells {
            if cell == CellKind::Empty {
                run += 1;
                best = best.max(run);
            } else {
                run = 0;
            }
        }
        best
    }

    #[test]
    fn spawned_column_always_has_a_passable_gap() {
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut board = Board::new();
            generate(&mut board, &mut rng);

            let column = board.column(SPAWN_COL);
            assert!(longest_empty_run(&column) >= GAP_HEIGHT, "seed {seed}: {column:?}");
            let obstacles = column.iter().filter(|&&c| c == CellKind::Obstacle).count();
            assert_eq!(obstacles, HEIGHT - GAP_HEIGHT, "seed {seed}");
        }
    }

    #[test]
    fn bonuses_only_land_on_empty_cells() {
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut board = Board::new();
            for row in 0..HEIGHT {
                for col in BONUS_COLS {
                    if (row + col) % 2 == 0 {
                        board.set_cell(Position::new(col, row), CellKind::Obstacle);
                    }
                }
            }
            let before = board.clone();

            generate(&mut board, &mut rng);

            for row in 0..HEIGHT {
                for col in BONUS_COLS {
                    let pos = Position::new(col, row);
                    if board.get_cell(pos) == CellKind::Bonus {
                        assert_eq!(before.get_cell(pos), CellKind::Empty, "seed {seed} at {pos:?}");
                    }
                    if before.get_cell(pos) == CellKind::Obstacle {
                        assert_eq!(board.get_cell(pos), CellKind::Obstacle);
                    }
                }
            }
        }
    }

    #[test]
    fn bonuses_stay_in_the_trailing_columns() {
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut board = Board::new();
            generate(&mut board, &mut rng);

            let mut count = 0;
            for row in 0..HEIGHT {
                for col in 0..WIDTH {
                    if board.get_cell(Position::new(col, row)) == CellKind::Bonus {
                        assert!(BONUS_COLS.contains(&col), "seed {seed}: bonus at column {col}");
                        count += 1;
                    }
                }
            }
            assert!(count <= MAX_BONUSES_PER_WAVE);
        }
    }

    #[test]
    fn scroll_shifts_columns_towards_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new();
        generate(&mut board, &mut rng);
        scroll(&mut board);
        generate(&mut board, &mut rng);
        board.set_cell(Position::new(0, 2), CellKind::Bonus);
        let before = board.clone();

        scroll(&mut board);

        for col in 0..WIDTH - 1 {
            assert_eq!(board.column(col), before.column(col + 1), "column {col}");
        }
        assert_eq!(board.column(SPAWN_COL), [CellKind::Empty; HEIGHT]);
    }

    #[test]
    fn a_pipe_leaves_the_board_after_a_full_sweep() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = Board::new();
        generate(&mut board, &mut rng);
        for _ in 0..WIDTH {
            scroll(&mut board);
        }
        assert_eq!(board, Board::new());
    }
}
