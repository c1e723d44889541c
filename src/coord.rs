use std::fmt;

/// The dimension of the board: N x N squares
pub const N: usize = 15;

/// The centre square. The first word of a game must cover it.
pub const CENTER: Coord = Coord::new(7, 7);

/// A (row, column) position on the board.
///
/// Positions off the board are representable: stepping past an edge gives a coordinate that
/// is simply not [`in_bounds`](Coord::in_bounds), so scans along a line stop without special
/// casing the edges.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

/// Direction of a word on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Left to right, along a row
    Across,
    /// Top to bottom, along a column
    Down,
}

impl Direction {
    /// Both directions, across first.
    pub const ALL: [Direction; 2] = [Direction::Across, Direction::Down];

    /// The perpendicular direction
    pub fn cross(self) -> Direction {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    fn delta(self) -> (i8, i8) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

impl Coord {
    pub const fn new(row: i8, col: i8) -> Coord {
        Coord { row, col }
    }

    /// Check if the coordinate is on the board.
    pub fn in_bounds(self) -> bool {
        let n = N as i8;
        (0..n).contains(&self.row) && (0..n).contains(&self.col)
    }

    /// Row-major index in 0..N*N.
    /// ## Panics
    /// If the coordinate is not on the board.
    pub fn index(self) -> usize {
        assert!(self.in_bounds(), "coordinate {} is not on the board", self);
        self.row as usize * N + self.col as usize
    }

    fn offset(self, row_delta: i8, col_delta: i8) -> Coord {
        Coord::new(
            self.row.saturating_add(row_delta),
            self.col.saturating_add(col_delta),
        )
    }

    /// The previous square in direction `dir`.
    pub fn before(self, dir: Direction) -> Coord {
        let (dr, dc) = dir.delta();
        self.offset(-dr, -dc)
    }

    /// The next square in direction `dir`.
    pub fn after(self, dir: Direction) -> Coord {
        let (dr, dc) = dir.delta();
        self.offset(dr, dc)
    }

    /// The previous square perpendicular to `dir`.
    pub fn before_cross(self, dir: Direction) -> Coord {
        self.before(dir.cross())
    }

    /// The next square perpendicular to `dir`.
    pub fn after_cross(self, dir: Direction) -> Coord {
        self.after(dir.cross())
    }

    /// The four orthogonal neighbours, possibly off the board.
    pub fn neighbours(self) -> [Coord; 4] {
        [
            self.offset(-1, 0),
            self.offset(1, 0),
            self.offset(0, -1),
            self.offset(0, 1),
        ]
    }

    /// The position of the coordinate along `dir`: the column for across, the row for down.
    pub fn along(self, dir: Direction) -> i8 {
        match dir {
            Direction::Across => self.col,
            Direction::Down => self.row,
        }
    }

    /// Iterate over all squares of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..N * N).map(|i| Coord::new((i / N) as i8, (i % N) as i8))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
