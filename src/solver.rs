//! Move generation and move validation.
//!
//! The search follows Appel and Jacobson, "The World's Fastest Scrabble Program" (1988):
//! words are grown from anchor squares, first leftwards (the part before the anchor) and then
//! rightwards, walking the [`WordIndex`] in step. Letters placed on a square must agree with
//! the word crossing it, which is precomputed per direction in a [`CrossChecks`] table.
mod crosscheck;
mod search;
mod validate;

pub use self::crosscheck::{CrossCheck, CrossChecks};
use self::search::Search;
use crate::board::Board;
use crate::coord::{Coord, Direction};
use crate::tiles::{codec, Label, Rack};
use crate::wordindex::WordIndex;
#[cfg(feature = "flame_it")]
use flamer::flame;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::Serialize;
use tracing::{debug, instrument};

/// Bonus for placing all 7 tiles of the rack in one move
pub const BINGO_BONUS: u32 = 50;

/// The evaluation of a word on the board.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MoveResult {
    /// The main word and all crossing words are in the index
    pub is_valid: bool,
    pub score: u32,
    /// First square of the word, including tiles already on the board
    pub begin: Coord,
    /// Last square of the word
    pub end: Coord,
}

/// A tile placed by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PlacedTile {
    pub pos: Coord,
    pub label: Label,
    pub is_blank: bool,
}

impl PlacedTile {
    /// The letter, uppercase for a blank.
    pub fn letter(&self) -> char {
        let ch = codec::decode([self.label]).chars().next().unwrap_or('?');
        if self.is_blank {
            ch.to_ascii_uppercase()
        } else {
            ch
        }
    }
}

/// The tiles of a move, in word order, and its evaluation.
///
/// Squares of the word that were already filled are not in `tiles`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MoveSolution {
    pub tiles: Vec<PlacedTile>,
    pub info: MoveResult,
}

impl MoveSolution {
    /// The placed letters, uppercase for blanks.
    pub fn letters(&self) -> String {
        self.tiles.iter().map(PlacedTile::letter).collect()
    }
}

/// Finds and scores moves on a board, with the words in an index.
///
/// The solver only reads the board and the index; each call keeps its own search state, so a
/// solver can be shared between threads.
///
/// ## Examples
/// ```
/// use scrabble_solver::{Board, Coord, Error, Rack, Solver, WordIndex};
///
/// let index = WordIndex::from_words(&["at", "cat", "cow"])?;
/// let board = Board::default();
/// let rack: Rack = "woc".parse()?;
/// let best = Solver::new(&board, &index).find_best_move(&rack);
/// assert_eq!(best.letters(), "cow");
/// assert_eq!(best.info.score, 16);
/// assert_eq!(best.info.begin, Coord::new(7, 7));
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    board: &'a Board,
    index: &'a WordIndex,
}

impl<'a> Solver<'a> {
    pub fn new(board: &'a Board, index: &'a WordIndex) -> Solver<'a> {
        Solver { board, index }
    }

    pub fn board(&self) -> &'a Board {
        self.board
    }

    pub fn index(&self) -> &'a WordIndex {
        self.index
    }

    /// Find the highest scoring move with the tiles on `rack`.
    ///
    /// Returns a solution with score 0, no tiles and `is_valid == false` if there is no legal
    /// move. Of several moves with the same score the first one found is returned.
    #[instrument(level = "debug", skip(self, rack), fields(rack = %rack))]
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn find_best_move(&self, rack: &Rack) -> MoveSolution {
        let mut search = Search::new(self.board, self.index, rack.clone());
        search.run();
        let best = search.into_best().unwrap_or_default();
        debug!(score = best.info.score, letters = %best.letters(), "best move");
        best
    }

    /// Find the best move for each of `racks`.
    #[cfg(feature = "rayon")]
    pub fn find_best_moves(&self, racks: &[Rack]) -> Vec<MoveSolution> {
        racks
            .par_iter()
            .map(|rack| self.find_best_move(rack))
            .collect()
    }

    /// Find the best move for each of `racks`.
    #[cfg(not(feature = "rayon"))]
    pub fn find_best_moves(&self, racks: &[Rack]) -> Vec<MoveSolution> {
        racks
            .iter()
            .map(|rack| self.find_best_move(rack))
            .collect()
    }

    /// The letters that can be placed on each empty square, and the points of the crossing
    /// words, for words in direction `dir`.
    pub fn cross_checks(&self, dir: Direction) -> CrossChecks {
        CrossChecks::compute(self.board, self.index, dir)
    }
}

/// The first and last square of the run of filled squares through `pos` along `dir`.
/// `pos` itself is included whether it is filled or not.
fn run_bounds(board: &Board, pos: Coord, dir: Direction) -> (Coord, Coord) {
    let mut begin = pos;
    while board.is_filled(begin.before(dir)) {
        begin = begin.before(dir);
    }
    let mut end = pos;
    while board.is_filled(end.after(dir)) {
        end = end.after(dir);
    }
    (begin, end)
}

/// The squares from `begin` to `end` along `dir`.
fn squares_between(begin: Coord, end: Coord, dir: Direction) -> impl Iterator<Item = Coord> {
    let len = (end.along(dir) - begin.along(dir) + 1).max(0) as usize;
    std::iter::successors(Some(begin), move |c| Some(c.after(dir))).take(len)
}
