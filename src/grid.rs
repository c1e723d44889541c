//! The premium squares of the board.
use crate::coord::{Coord, N};
use crate::Error;
use std::fmt;
use std::str::FromStr;

const Q: usize = 1 + N / 2;

/// A premium (or plain) square.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cell {
    NoBonus,
    /// The centre square, a double word square.
    Start,
    LetterBonus(u8),
    WordBonus(u8),
}

use Cell::{LetterBonus, NoBonus, Start, WordBonus};

const __: Cell = NoBonus;
const DL: Cell = LetterBonus(2);
const TL: Cell = LetterBonus(3);
const DW: Cell = WordBonus(2);
const TW: Cell = WordBonus(3);
const SS: Cell = Start;

/// Top left quarter of the standard Scrabble board, including the middle row and column.
const STANDARD_QUARTER_BOARD: [[Cell; Q]; Q] = [
    [TW, __, __, DL, __, __, __, TW],
    [__, DW, __, __, __, TL, __, __],
    [__, __, DW, __, __, __, DL, __],
    [DL, __, __, DW, __, __, __, DL],
    [__, __, __, __, DW, __, __, __],
    [__, TL, __, __, __, TL, __, __],
    [__, __, DL, __, __, __, DL, __],
    [TW, __, __, DL, __, __, __, SS],
];

impl Cell {
    pub fn word_multiplier(self) -> u32 {
        match self {
            Start => 2,
            WordBonus(n) => n as u32,
            _ => 1,
        }
    }

    pub fn letter_multiplier(self) -> u32 {
        match self {
            LetterBonus(n) => n as u32,
            _ => 1,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NoBonus => write!(f, "--"),
            Start => write!(f, "ss"),
            LetterBonus(n) => write!(f, "{}l", n),
            WordBonus(n) => write!(f, "{}w", n),
        }
    }
}

impl FromStr for Cell {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--" => Ok(NoBonus),
            "ss" => Ok(Start),
            "2l" => Ok(LetterBonus(2)),
            "3l" => Ok(LetterBonus(3)),
            "2w" => Ok(WordBonus(2)),
            "3w" => Ok(WordBonus(3)),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

/// The premium layout of an N x N board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid([[Cell; N]; N]);

impl Default for Grid {
    /// The standard Scrabble layout
    fn default() -> Self {
        Grid::expand_quarter_board(&STANDARD_QUARTER_BOARD)
    }
}

impl Grid {
    /// Create a symmetrical board by mirroring a quarter board
    /// horizontally and vertically
    fn expand_quarter_board(qb: &[[Cell; Q]; Q]) -> Grid {
        let mut cells = [[NoBonus; N]; N];
        for (i, row) in qb.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                cells[i][j] = cell;
                cells[N - i - 1][j] = cell;
                cells[i][N - j - 1] = cell;
                cells[N - i - 1][N - j - 1] = cell;
            }
        }
        Grid(cells)
    }

    /// Parse a grid from N rows of N space separated cells: `--`, `2l`, `3l`, `2w`, `3w`, `ss`.
    /// ## Errors
    /// If the number of rows or cells is wrong, or a cell can not be parsed.
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Grid, Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut cells = [[NoBonus; N]; N];
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let items: Vec<&str> = row.split_whitespace().collect();
            if items.len() != N {
                return Err(Error::InvalidRowLength(row.to_string(), items.len()));
            }
            for (j, item) in items.into_iter().enumerate() {
                cells[i][j] = item.parse()?;
            }
        }
        Ok(Grid(cells))
    }

    /// The cell at `coord`, or None if it is not on the board.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        if coord.in_bounds() {
            Some(self.0[coord.row as usize][coord.col as usize])
        } else {
            None
        }
    }

    /// Get string representation of the rows
    pub fn to_strings(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|row| {
                row.iter()
                    .map(Cell::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::CENTER;

    #[test]
    fn test_standard_grid() {
        let grid = Grid::default();
        assert_eq!(grid.cell(CENTER), Some(Start));
        assert_eq!(grid.cell(Coord::new(0, 0)), Some(TW));
        assert_eq!(grid.cell(Coord::new(14, 14)), Some(TW));
        assert_eq!(grid.cell(Coord::new(0, 11)), Some(DL));
        assert_eq!(grid.cell(Coord::new(13, 9)), Some(TL));
        assert_eq!(grid.cell(Coord::new(7, 15)), None);
        assert_eq!(Start.word_multiplier(), 2);
        assert_eq!(Start.letter_multiplier(), 1);
        assert_eq!(TL.letter_multiplier(), 3);
    }

    #[test]
    fn test_premium_counts() {
        let grid = Grid::default();
        let count = |cell: Cell| {
            Coord::all()
                .filter(|&c| grid.cell(c) == Some(cell))
                .count()
        };
        assert_eq!(count(TW), 8);
        assert_eq!(count(DW), 16);
        assert_eq!(count(TL), 12);
        assert_eq!(count(DL), 24);
        assert_eq!(count(SS), 1);
    }

    #[test]
    fn test_grid_from_strings() -> Result<(), Error> {
        let grid = Grid::default();
        let rows = grid.to_strings();
        assert_eq!(Grid::from_strings(&rows)?, grid);
        Ok(())
    }

    #[test]
    fn test_grid_errors() {
        let rows = Grid::default().to_strings();
        assert!(matches!(
            Grid::from_strings(&rows[1..]),
            Err(Error::InvalidRowCount(14))
        ));
        let mut bad = rows.clone();
        bad[3] = bad[3].replace("2w", "4w");
        assert!(matches!(
            Grid::from_strings(&bad),
            Err(Error::GridParseError(_))
        ));
        bad[3] = String::from("-- --");
        assert!(matches!(
            Grid::from_strings(&bad),
            Err(Error::InvalidRowLength(_, 2))
        ));
    }
}
