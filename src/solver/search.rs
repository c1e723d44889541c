use super::{CrossChecks, MoveResult, MoveSolution, PlacedTile, BINGO_BONUS};
use crate::board::Board;
use crate::coord::{Coord, Direction, CENTER, N};
use crate::tiles::{Label, Rack, RackTile, RACK_SIZE};
use crate::wordindex::{NodeId, WordIndex};
use tinyvec::ArrayVec;

/// A letter of the word being built, either from the board or from the rack.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct TileData {
    label: Label,
    value: u8,
    is_blank: bool,
}

/// The state of one best-move search.
///
/// `word` and `rack` are changed in push/undo pairs around every recursive step, so after a
/// branch is explored both are exactly as before.
pub(super) struct Search<'a> {
    board: &'a Board,
    index: &'a WordIndex,
    dir: Direction,
    cross: CrossChecks,
    anchors: Vec<Coord>,
    is_anchor: [[bool; N]; N],
    rack: Rack,
    word: ArrayVec<[TileData; N]>,
    best: Option<MoveSolution>,
}

impl<'a> Search<'a> {
    pub(super) fn new(board: &'a Board, index: &'a WordIndex, rack: Rack) -> Search<'a> {
        let anchors: Vec<Coord> = if board.has_committed_tiles() {
            Coord::all()
                .filter(|&c| board.is_empty(c) && board.has_adjacent_committed(c))
                .collect()
        } else {
            vec![CENTER]
        };
        let mut is_anchor = [[false; N]; N];
        for c in &anchors {
            is_anchor[c.row as usize][c.col as usize] = true;
        }
        Search {
            board,
            index,
            dir: Direction::Across,
            cross: CrossChecks::compute(board, index, Direction::Across),
            anchors,
            is_anchor,
            rack,
            word: ArrayVec::new(),
            best: None,
        }
    }

    pub(super) fn into_best(self) -> Option<MoveSolution> {
        self.best
    }

    /// Search both directions, or only across for the first move.
    pub(super) fn run(&mut self) {
        let root = match self.index.root() {
            Some(root) => root,
            None => return,
        };
        let count = if self.board.has_committed_tiles() { 2 } else { 1 };
        for &dir in Direction::ALL.iter().take(count) {
            if dir != self.dir {
                self.dir = dir;
                self.cross = CrossChecks::compute(self.board, self.index, dir);
            }
            for i in 0..self.anchors.len() {
                let anchor = self.anchors[i];
                self.search_anchor(anchor, root);
            }
        }
    }

    fn is_anchor(&self, c: Coord) -> bool {
        c.in_bounds() && self.is_anchor[c.row as usize][c.col as usize]
    }

    fn search_anchor(&mut self, anchor: Coord, root: NodeId) {
        let (board, dir) = (self.board, self.dir);
        let mut start = anchor;
        while board.is_filled(start.before(dir)) {
            start = start.before(dir);
        }
        if start == anchor {
            // free part before the anchor, up to the previous anchor or tile
            let mut limit = 0;
            let mut scan = anchor.before(dir);
            while board.is_empty(scan) && !self.is_anchor(scan) {
                limit += 1;
                scan = scan.before(dir);
            }
            self.before_part(anchor, root, limit);
        } else if let Some(node) = self.fixed_part(start, anchor, root) {
            self.extend_after(anchor, node, false);
        }
        self.word.clear();
    }

    /// Push the tiles from `start` up to the anchor, and return the node they lead to.
    fn fixed_part(&mut self, start: Coord, anchor: Coord, root: NodeId) -> Option<NodeId> {
        let mut node = root;
        let mut pos = start;
        while pos != anchor {
            let square = self.board.square(pos)?;
            node = self.index.child(node, square.label())?;
            self.word.push(TileData {
                label: square.label(),
                value: square.value,
                is_blank: square.is_blank(),
            });
            pos = pos.after(self.dir);
        }
        Some(node)
    }

    /// Place up to `limit` tiles before the anchor, trying the rest of the word after each.
    fn before_part(&mut self, anchor: Coord, node: NodeId, limit: usize) {
        self.extend_after(anchor, node, false);
        if limit == 0 {
            return;
        }
        let index = self.index;
        for (label, next) in index.edges(node) {
            self.with_tiles(label, |search| search.before_part(anchor, next, limit - 1));
        }
    }

    /// Extend the word from `pos` onwards.
    fn extend_after(&mut self, pos: Coord, node: NodeId, anchor_filled: bool) {
        let (board, index) = (self.board, self.index);
        if !board.is_filled(pos) && anchor_filled && index.is_accepting(node) {
            self.handle_legal_move(pos.before(self.dir));
        }
        let square = match board.square(pos) {
            Some(square) => square,
            None => return,
        };
        let next_pos = pos.after(self.dir);
        if !square.is_empty() {
            if let Some(next) = index.child(node, square.label()) {
                self.word.push(TileData {
                    label: square.label(),
                    value: square.value,
                    is_blank: square.is_blank(),
                });
                self.extend_after(next_pos, next, true);
                self.word.pop();
            }
        } else {
            let legal = self.cross.get(pos).legal;
            for (label, next) in index.edges(node) {
                if legal.contains(label) {
                    self.with_tiles(label, |search| search.extend_after(next_pos, next, true));
                }
            }
        }
    }

    /// Call `f` with `label` played from the rack, once with a regular tile and once with a
    /// blank, whichever the rack holds.
    fn with_tiles<F: FnMut(&mut Self)>(&mut self, label: Label, mut f: F) {
        if let Some(i) = self.rack.position(label) {
            let tile = self.rack.remove(i);
            self.play(label, tile, i, &mut f);
        }
        if let Some(i) = self.rack.position_blank() {
            let tile = self.rack.remove(i);
            self.play(label, tile, i, &mut f);
        }
    }

    fn play<F: FnMut(&mut Self)>(&mut self, label: Label, tile: RackTile, i: usize, f: &mut F) {
        self.word.push(TileData {
            label,
            value: tile.value,
            is_blank: tile.is_blank(),
        });
        f(self);
        self.word.pop();
        self.rack.insert(i, tile);
    }

    /// Score the word ending at `last`.
    ///
    /// Only squares that are empty on the board count as placed: their premiums apply and
    /// their crossing words are added.
    fn score(&self, last: Coord) -> u32 {
        let board = self.board;
        let (mut word_score, mut word_mult, mut cross_score) = (0, 1, 0);
        let mut placed = 0;
        let mut pos = last;
        for tile in self.word.iter().rev() {
            let letter = tile.value as u32 * board.letter_multiplier(pos);
            let mult = board.word_multiplier(pos);
            word_score += letter;
            word_mult *= mult;
            if board.is_empty(pos) {
                placed += 1;
                let check = self.cross.get(pos);
                if check.has_cross {
                    cross_score += (check.score + letter) * mult;
                }
            }
            pos = pos.before(self.dir);
        }
        let bonus = if placed == RACK_SIZE { BINGO_BONUS } else { 0 };
        word_score * word_mult + cross_score + bonus
    }

    fn handle_legal_move(&mut self, last: Coord) {
        let score = self.score(last);
        if let Some(best) = &self.best {
            if score <= best.info.score {
                return;
            }
        }
        let mut tiles = Vec::with_capacity(RACK_SIZE);
        let mut pos = last;
        for tile in self.word.iter().rev() {
            if self.board.is_empty(pos) {
                tiles.push(PlacedTile {
                    pos,
                    label: tile.label,
                    is_blank: tile.is_blank,
                });
            }
            pos = pos.before(self.dir);
        }
        tiles.reverse();
        self.best = Some(MoveSolution {
            tiles,
            info: MoveResult {
                is_valid: true,
                score,
                begin: pos.after(self.dir),
                end: last,
            },
        });
    }
}
