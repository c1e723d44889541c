//! A scrabble move generator for Rust.
//! <br>
//! This crate finds the highest scoring move for a rack of tiles on a scrabble board, and
//! validates and scores the tiles a player placed.
//! The words are held in a minimal acyclic automaton (a DAWG), built once from a sorted word
//! list, and optionally stored in a compact binary file for fast startup.
//! It can use the `rayon` crate to search for several racks in parallel.
//!
//! # How to use `scrabble_solver`
//! Build a [`WordIndex`] from a word list, set up a [`Board`], and ask a [`Solver`] for the
//! best move. The word list must be sorted, in utf-8, and contain one lowercase word per line.
//! The caller owns the board: apply a move with [`Board::apply`] and commit it with
//! [`Board::commit_placed`] at the end of the turn.
//!
//! # Basic usage
//!  ```
//! # use scrabble_solver::{Board, Coord, Error, Rack, Solver, WordIndex};
//! let index = WordIndex::from_words(&["rest", "rust", "rusts"])?;
//! let mut board = Board::default();
//! let rack: Rack = "tsura".parse()?;
//! let best = Solver::new(&board, &index).find_best_move(&rack);
//! assert_eq!(best.letters(), "rust");
//! assert_eq!(best.info.score, 8);
//!
//! board.apply(&best)?;
//! let placed = board.placed_positions();
//! let result = Solver::new(&board, &index).validate_and_score(&placed);
//! assert_eq!(result, Some(best.info));
//! board.commit_placed();
//! println!("{}", board);
//! # Ok::<(), Error>(())
//! ```
mod board;
mod coord;
mod error;
mod grid;
mod labelset;
mod solver;
mod tiles;
pub mod tileset;
mod wordindex;

pub use crate::board::Board;
pub use crate::coord::{Coord, Direction, CENTER, N};
pub use crate::error::Error;
pub use crate::grid::{Cell, Grid};
pub use crate::labelset::LabelSet;
pub use crate::solver::{
    CrossCheck, CrossChecks, MoveResult, MoveSolution, PlacedTile, Solver, BINGO_BONUS,
};
pub use crate::tiles::{
    codec, Code, Label, Letter, Rack, RackTile, Square, BLANK, EMPTY, RACK_SIZE,
};
pub use crate::wordindex::{Edges, NodeId, WordIndex};
