use crate::coord::{Coord, N};
use crate::grid::Grid;
use crate::solver::MoveSolution;
use crate::tiles::{codec, Label, Square, BLANK, EMPTY, IS_WILDCARD, LETTER_MASK};
use crate::tileset;
use crate::Error;
use std::fmt;

type Squares = [[Square; N]; N];

/// Display the board state as 15 lines of 15 squares.
/// Empty squares show as ".", blanks as uppercase letters.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .squares
            .iter()
            .map(|row| row.iter().map(|sq| codec::decode_code(sq.code)).collect())
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// The state of a scrabble board:
/// * A grid of 15x15 squares with possible letter/word bonus,
/// * The tile on each square, and whether it was committed in a previous turn.
///
/// Coordinates off the board are neither filled nor empty, and have multipliers of 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    squares: Squares,
    has_committed: bool,
}

impl Board {
    /// Create a new empty board with the standard premium squares.
    ///
    /// Builder functions can be used to set the grid and state of the board.
    /// See also:
    /// - [`with_grid_from_strings`](Board::with_grid_from_strings)
    /// - [`with_state_from_strings`](Board::with_state_from_strings)
    pub fn new() -> Board {
        Board {
            grid: Grid::default(),
            squares: [[Square::EMPTY; N]; N],
            has_committed: false,
        }
    }

    /// Parse committed tiles from a list of strings, and return the modified board.
    /// The list must contain 15 rows of 15 characters: `.` or ` ` for an empty square, a
    /// lowercase letter for a tile, an uppercase letter for a blank.
    /// ## Errors
    /// If the list of strings has wrong dimensions or cannot be parsed as rows.
    ///
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Board, Coord, Error};
    /// let state = &[
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     ".......caT.....",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    /// ];
    /// let board = Board::default().with_state_from_strings(state)?;
    /// assert!(board.is_committed(Coord::new(7, 9)));
    /// assert_eq!(board.value(Coord::new(7, 7)), 3);
    /// assert_eq!(board.value(Coord::new(7, 9)), 0);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_state_from_strings(mut self, rows: &[&str]) -> Result<Board, Error> {
        self.set_state_from_strings(rows)?;
        Ok(self)
    }

    /// Replace all squares with the tiles parsed from `rows`, see
    /// [`with_state_from_strings`](Board::with_state_from_strings).
    /// ## Errors
    /// If the list of strings has wrong dimensions or cannot be parsed as rows.
    pub fn set_state_from_strings(&mut self, rows: &[&str]) -> Result<(), Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut squares: Squares = [[Square::EMPTY; N]; N];
        for (i, &row) in rows.iter().enumerate() {
            let codes = row
                .chars()
                .map(codec::encode_code)
                .collect::<Result<Vec<_>, Error>>()?;
            if codes.len() != N {
                return Err(Error::InvalidRowLength(String::from(row), codes.len()));
            }
            for (j, code) in codes.into_iter().enumerate() {
                squares[i][j] = match code {
                    EMPTY => Square::EMPTY,
                    BLANK => return Err(Error::EncodeInvalidToken(codec::decode_code(BLANK))),
                    _ => {
                        let label = code & LETTER_MASK;
                        Square::tile(label, tileset::points(label), code & IS_WILDCARD != 0, true)
                    }
                };
            }
        }
        self.squares = squares;
        self.has_committed = squares.iter().flatten().any(|sq| !sq.is_empty());
        Ok(())
    }

    /// Set the premium squares from string representation, and return the modified board.
    /// ## Errors
    /// If the grid has wrong dimensions or cannot be parsed as valid board cells.
    pub fn with_grid_from_strings<S: AsRef<str>>(mut self, grid: &[S]) -> Result<Board, Error> {
        self.set_grid_from_strings(grid)?;
        Ok(self)
    }

    /// Set the premium squares from string representation
    /// ## Errors
    /// If the grid has wrong dimensions or cannot be parsed as valid board cells.
    pub fn set_grid_from_strings<S: AsRef<str>>(&mut self, grid: &[S]) -> Result<(), Error> {
        self.grid = Grid::from_strings(grid)?;
        Ok(())
    }

    /// Return the grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The square at `c`, or None if it is not on the board.
    pub fn square(&self, c: Coord) -> Option<Square> {
        if c.in_bounds() {
            Some(self.squares[c.row as usize][c.col as usize])
        } else {
            None
        }
    }

    fn square_mut(&mut self, c: Coord) -> Option<&mut Square> {
        if c.in_bounds() {
            Some(&mut self.squares[c.row as usize][c.col as usize])
        } else {
            None
        }
    }

    /// The letter at `c` (without the blank flag), 0 if there is none.
    pub fn letter(&self, c: Coord) -> Label {
        self.square(c).map_or(EMPTY, |sq| sq.label())
    }

    /// The point value of the tile at `c`, 0 for blanks and empty squares.
    pub fn value(&self, c: Coord) -> u8 {
        self.square(c).map_or(0, |sq| sq.value)
    }

    /// Check if `c` is on the board and has no tile.
    pub fn is_empty(&self, c: Coord) -> bool {
        self.square(c).map_or(false, |sq| sq.is_empty())
    }

    /// Check if `c` is on the board and has a tile.
    ///
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Board, Coord, Error};
    /// let mut board = Board::default();
    /// board.place_tile(Coord::new(7, 7), 1, 1, false)?;
    /// assert!(board.is_filled(Coord::new(7, 7)));
    /// assert!(!board.is_filled(Coord::new(7, 8)));
    /// assert!(!board.is_filled(Coord::new(7, 15)));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn is_filled(&self, c: Coord) -> bool {
        self.square(c).map_or(false, |sq| !sq.is_empty())
    }

    /// Check if the tile at `c` was committed in a previous turn.
    pub fn is_committed(&self, c: Coord) -> bool {
        self.square(c).map_or(false, |sq| sq.committed)
    }

    /// Check if any of the 4 neighbours of `c` holds a committed tile.
    pub fn has_adjacent_committed(&self, c: Coord) -> bool {
        c.neighbours().iter().any(|&n| self.is_committed(n))
    }

    /// The word multiplier at `c`: 1 when the square is committed or not on the board.
    pub fn word_multiplier(&self, c: Coord) -> u32 {
        match self.grid.cell(c) {
            Some(cell) if !self.is_committed(c) => cell.word_multiplier(),
            _ => 1,
        }
    }

    /// The letter multiplier at `c`: 1 when the square is committed or not on the board.
    pub fn letter_multiplier(&self, c: Coord) -> u32 {
        match self.grid.cell(c) {
            Some(cell) if !self.is_committed(c) => cell.letter_multiplier(),
            _ => 1,
        }
    }

    /// Check if a tile was ever committed, i.e. this is not the first move.
    pub fn has_committed_tiles(&self) -> bool {
        self.has_committed
    }

    /// Place a tile for this turn.
    /// ## Errors
    /// - If `c` is not on the board.
    /// - If the square already holds a tile.
    /// - If `label` is not a letter.
    pub fn place_tile(
        &mut self,
        c: Coord,
        label: Label,
        value: u8,
        is_blank: bool,
    ) -> Result<(), Error> {
        if !(1..=26).contains(&label) {
            return Err(Error::InvalidLabel(label));
        }
        let square = self.square_mut(c).ok_or(Error::TilePlacementError {
            row: c.row,
            col: c.col,
        })?;
        if !square.is_empty() {
            return Err(Error::TileReplaceError {
                row: c.row,
                col: c.col,
            });
        }
        *square = Square::tile(label, value, is_blank, false);
        Ok(())
    }

    /// Remove the tile at `c`, and return it.
    pub fn clear_square(&mut self, c: Coord) -> Option<Square> {
        let square = self.square_mut(c)?;
        if square.is_empty() {
            return None;
        }
        Some(std::mem::replace(square, Square::EMPTY))
    }

    /// Commit the tile at `c`. Returns false if there is no tile.
    pub fn commit(&mut self, c: Coord) -> bool {
        match self.square_mut(c) {
            Some(square) if !square.is_empty() => {
                square.committed = true;
                self.has_committed = true;
                true
            }
            _ => false,
        }
    }

    /// Commit all tiles placed this turn, and return how many there were.
    pub fn commit_placed(&mut self) -> usize {
        let placed = self.placed_positions();
        for &c in &placed {
            self.commit(c);
        }
        placed.len()
    }

    /// Place the tiles of a solution for this turn. Tiles are valued with the letter
    /// points, blanks with 0.
    /// ## Errors
    /// If a tile is not on the board or its square is occupied. The board is unchanged then.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Board, Error, Rack, Solver, WordIndex};
    /// let index = WordIndex::from_words(&["cat"])?;
    /// let mut board = Board::default();
    /// let rack: Rack = "tac".parse()?;
    /// let best = Solver::new(&board, &index).find_best_move(&rack);
    /// board.apply(&best)?;
    /// assert_eq!(board.placed_positions().len(), 3);
    /// assert_eq!(board.commit_placed(), 3);
    /// assert!(board.has_committed_tiles());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn apply(&mut self, solution: &MoveSolution) -> Result<(), Error> {
        let mut board = self.clone();
        for tile in &solution.tiles {
            let value = if tile.is_blank {
                0
            } else {
                tileset::points(tile.label)
            };
            board.place_tile(tile.pos, tile.label, value, tile.is_blank)?;
        }
        *self = board;
        Ok(())
    }

    /// The squares filled this turn, in row major order.
    pub fn placed_positions(&self) -> Vec<Coord> {
        Coord::all()
            .filter(|&c| self.is_filled(c) && !self.is_committed(c))
            .collect()
    }

    /// Remove all tiles. The premium squares are kept.
    pub fn reset(&mut self) {
        self.squares = [[Square::EMPTY; N]; N];
        self.has_committed = false;
    }
}
