use super::{run_bounds, squares_between, MoveResult, Solver, BINGO_BONUS};
use crate::coord::{Coord, Direction, CENTER};
use crate::tiles::{Label, RACK_SIZE};
use tracing::{debug, instrument};

impl<'a> Solver<'a> {
    /// Validate and score the tiles placed this turn at `placed`.
    ///
    /// Returns None if the placement is malformed: no tiles, off the board, an empty centre,
    /// not in one line, with gaps, or not connected to the committed tiles. Otherwise the
    /// result is returned, with `is_valid == false` if one of the words is not in the index.
    ///
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Board, Coord, Error, Solver, WordIndex};
    /// let index = WordIndex::from_words(&["cat"])?;
    /// let mut board = Board::default();
    /// let placed = [Coord::new(7, 7), Coord::new(7, 8), Coord::new(7, 9)];
    /// for (&c, &(label, value)) in placed.iter().zip(&[(3, 3), (1, 1), (20, 1)]) {
    ///     board.place_tile(c, label, value, false)?;
    /// }
    /// let result = Solver::new(&board, &index).validate_and_score(&placed).unwrap();
    /// assert!(result.is_valid);
    /// assert_eq!(result.score, 10);
    /// # Ok::<(), Error>(())
    /// ```
    #[instrument(level = "debug", skip(self))]
    pub fn validate_and_score(&self, placed: &[Coord]) -> Option<MoveResult> {
        let board = self.board;
        if placed.is_empty() {
            debug!("no tiles placed");
            return None;
        }
        if let Some(c) = placed.iter().find(|c| !c.in_bounds()) {
            debug!(%c, "tile off the board");
            return None;
        }
        if !board.is_filled(CENTER) {
            debug!("centre square is empty");
            return None;
        }
        let dir = match self.direction_of(placed) {
            Some(dir) => dir,
            None => {
                debug!("tiles are not in one line");
                return None;
            }
        };
        let begin = *placed.iter().min_by_key(|c| c.along(dir))?;
        let end = *placed.iter().max_by_key(|c| c.along(dir))?;
        if !self.is_contiguous(begin, end, dir) {
            debug!("gap between the tiles");
            return None;
        }
        if board.has_committed_tiles() && !placed.iter().any(|&c| board.has_adjacent_committed(c))
        {
            debug!("tiles not connected to the board");
            return None;
        }
        let (begin, _) = run_bounds(board, begin, dir);
        let (_, end) = run_bounds(board, end, dir);
        let positions: Vec<Coord> = squares_between(begin, end, dir).collect();
        let result = MoveResult {
            is_valid: self.words_valid(&positions, dir),
            score: self.score_positions(&positions, dir),
            begin,
            end,
        };
        debug!(?result, "validated");
        Some(result)
    }

    fn direction_of(&self, placed: &[Coord]) -> Option<Direction> {
        let board = self.board;
        let first = placed[0];
        if placed.len() == 1 {
            return Direction::ALL.iter().copied().find(|&dir| {
                board.is_filled(first.before(dir)) || board.is_filled(first.after(dir))
            });
        }
        if placed.iter().all(|c| c.row == first.row) {
            Some(Direction::Across)
        } else if placed.iter().all(|c| c.col == first.col) {
            Some(Direction::Down)
        } else {
            None
        }
    }

    fn is_contiguous(&self, begin: Coord, end: Coord, dir: Direction) -> bool {
        squares_between(begin, end, dir).all(|c| self.board.is_filled(c))
    }

    fn letters(&self, begin: Coord, end: Coord, dir: Direction) -> Vec<Label> {
        squares_between(begin, end, dir)
            .map(|c| self.board.letter(c))
            .collect()
    }

    /// Check the main word, and the crossing word of every square placed this turn.
    fn words_valid(&self, positions: &[Coord], dir: Direction) -> bool {
        let (first, last) = match (positions.first(), positions.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return false,
        };
        if !self.index.word_exists(&self.letters(first, last, dir)) {
            return false;
        }
        let cross = dir.cross();
        positions
            .iter()
            .filter(|&&c| !self.board.is_committed(c))
            .all(|&c| {
                let (begin, end) = run_bounds(self.board, c, cross);
                begin == end || self.index.word_exists(&self.letters(begin, end, cross))
            })
    }

    fn score_positions(&self, positions: &[Coord], dir: Direction) -> u32 {
        let board = self.board;
        let word_score: u32 = positions
            .iter()
            .map(|&c| board.value(c) as u32 * board.letter_multiplier(c))
            .sum();
        let word_mult: u32 = positions.iter().map(|&c| board.word_multiplier(c)).product();
        let placed: Vec<Coord> = positions
            .iter()
            .copied()
            .filter(|&c| !board.is_committed(c))
            .collect();
        let cross_score: u32 = placed.iter().map(|&c| self.cross_score(c, dir)).sum();
        let bonus = if placed.len() == RACK_SIZE {
            BINGO_BONUS
        } else {
            0
        };
        word_score * word_mult + cross_score + bonus
    }

    /// Score of the word crossing `pos`, or 0 if there is none.
    fn cross_score(&self, pos: Coord, dir: Direction) -> u32 {
        let board = self.board;
        let cross = dir.cross();
        let (begin, end) = run_bounds(board, pos, cross);
        if begin == end {
            return 0;
        }
        let others: u32 = squares_between(begin, end, cross)
            .filter(|&c| c != pos)
            .map(|c| board.value(c) as u32)
            .sum();
        let own = board.value(pos) as u32 * board.letter_multiplier(pos);
        (others + own) * board.word_multiplier(pos)
    }
}
