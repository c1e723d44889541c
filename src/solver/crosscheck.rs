use super::{run_bounds, squares_between};
use crate::board::Board;
use crate::coord::{Coord, Direction, N};
use crate::labelset::LabelSet;
use crate::wordindex::WordIndex;
#[cfg(feature = "flame_it")]
use flamer::flame;

/// What may be placed on an empty square, given the word crossing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossCheck {
    /// Letters that form a valid crossing word
    pub legal: LabelSet,
    /// Face value of the crossing tiles, without the square itself
    pub score: u32,
    /// There are tiles next to the square in the crossing direction
    pub has_cross: bool,
}

impl CrossCheck {
    /// An empty square without crossing tiles: any letter fits.
    pub const OPEN: CrossCheck = CrossCheck {
        legal: LabelSet::all(),
        score: 0,
        has_cross: false,
    };

    /// A filled square: nothing can be placed.
    pub const FILLED: CrossCheck = CrossCheck {
        legal: LabelSet::new(),
        score: 0,
        has_cross: false,
    };
}

impl Default for CrossCheck {
    fn default() -> Self {
        CrossCheck::OPEN
    }
}

/// The [`CrossCheck`] of every square, for words placed in one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossChecks {
    dir: Direction,
    checks: [[CrossCheck; N]; N],
}

impl CrossChecks {
    /// Compute the cross checks for words in direction `dir`; the crossing words run in
    /// `dir.cross()`.
    #[cfg_attr(feature = "flame_it", flame)]
    pub(crate) fn compute(board: &Board, index: &WordIndex, dir: Direction) -> CrossChecks {
        let mut checks = [[CrossCheck::FILLED; N]; N];
        for pos in Coord::all().filter(|&c| board.is_empty(c)) {
            checks[pos.row as usize][pos.col as usize] = cross_check(board, index, pos, dir);
        }
        CrossChecks { dir, checks }
    }

    /// The direction of the words these checks apply to.
    pub fn direction(&self) -> Direction {
        self.dir
    }

    /// The check for `pos`. Squares off the board are [`FILLED`](CrossCheck::FILLED).
    pub fn get(&self, pos: Coord) -> CrossCheck {
        if pos.in_bounds() {
            self.checks[pos.row as usize][pos.col as usize]
        } else {
            CrossCheck::FILLED
        }
    }
}

fn cross_check(board: &Board, index: &WordIndex, pos: Coord, dir: Direction) -> CrossCheck {
    let cross = dir.cross();
    let (begin, end) = run_bounds(board, pos, cross);
    if begin == end {
        return CrossCheck::OPEN;
    }
    let before: Vec<_> = squares_between(begin, pos.before_cross(dir), cross).collect();
    let after: Vec<_> = squares_between(pos.after_cross(dir), end, cross).collect();
    let score = before
        .iter()
        .chain(&after)
        .map(|&c| board.value(c) as u32)
        .sum();
    let suffix: Vec<_> = after.iter().map(|&c| board.letter(c)).collect();
    let prefix: Vec<_> = before.iter().map(|&c| board.letter(c)).collect();
    let legal = match index.lookup_prefix(&prefix) {
        Some(node) => index
            .edges(node)
            .filter(|&(_, next)| {
                suffix
                    .iter()
                    .try_fold(next, |n, &label| index.child(n, label))
                    .map_or(false, |n| index.is_accepting(n))
            })
            .map(|(label, _)| label)
            .collect(),
        None => LabelSet::new(),
    };
    CrossCheck {
        legal,
        score,
        has_cross: true,
    }
}
