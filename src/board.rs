// ── Colors ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn lerp(a: Rgb, b: Rgb, t_256: u16) -> Rgb {
        let t = t_256 as i32;
        Rgb(
            (a.0 as i32 + (b.0 as i32 - a.0 as i32) * t / 256) as u8,
            (a.1 as i32 + (b.1 as i32 - a.1 as i32) * t / 256) as u8,
            (a.2 as i32 + (b.2 as i32 - a.2 as i32) * t / 256) as u8,
        )
    }
}

pub const BLUE: Rgb = Rgb(0, 0, 255);
pub const RED: Rgb = Rgb(255, 0, 0);
pub const GREEN: Rgb = Rgb(0, 255, 0);
pub const YELLOW: Rgb = Rgb(255, 255, 0);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const BLACK: Rgb = Rgb(0, 0, 0);

// ── Grid ────────────────────────────────────────────────────────────────────

pub const WIDTH: usize = 8;
pub const HEIGHT: usize = 8;

/// One full matrix worth of colors, row-major.
pub type Frame = [Rgb; WIDTH * HEIGHT];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellKind {
    #[default]
    Empty,
    Obstacle,
    Bonus,
}

impl CellKind {
    pub const fn color(self) -> Rgb {
        match self {
            CellKind::Empty => BLUE,
            CellKind::Obstacle => RED,
            CellKind::Bonus => GREEN,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    pub const fn index(self) -> usize {
        self.row * WIDTH + self.col
    }
}

/// The playfield. Created once per session and only ever mutated in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[CellKind; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Panics when `pos` is off the grid.
    pub fn get_cell(&self, pos: Position) -> CellKind {
        self.cells[pos.row][pos.col]
    }

    /// Panics when `pos` is off the grid.
    pub fn set_cell(&mut self, pos: Position, kind: CellKind) {
        self.cells[pos.row][pos.col] = kind;
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [CellKind; WIDTH]> {
        self.cells.iter_mut()
    }

    #[cfg(test)]
    pub fn column(&self, col: usize) -> [CellKind; HEIGHT] {
        let mut out = [CellKind::Empty; HEIGHT];
        for (row, cell) in out.iter_mut().enumerate() {
            *cell = self.cells[row][col];
        }
        out
    }

    pub fn to_frame(&self) -> Frame {
        let mut frame = [BLUE; WIDTH * HEIGHT];
        for (px, cell) in frame.iter_mut().zip(self.cells.iter().flatten()) {
            *px = cell.color();
        }
        frame
    }
}
