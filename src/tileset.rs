//! Letter point values of the English Scrabble tile set.
use crate::tiles::Label;

/// (letter, points), indexed by label. Index 0 is the blank.
const TILESET: [(char, u8); 27] = [
    ('*', 0),
    ('a', 1),
    ('b', 3),
    ('c', 3),
    ('d', 2),
    ('e', 1),
    ('f', 4),
    ('g', 2),
    ('h', 4),
    ('i', 1),
    ('j', 8),
    ('k', 5),
    ('l', 1),
    ('m', 3),
    ('n', 1),
    ('o', 1),
    ('p', 3),
    ('q', 10),
    ('r', 1),
    ('s', 1),
    ('t', 1),
    ('u', 1),
    ('v', 4),
    ('w', 4),
    ('x', 8),
    ('y', 4),
    ('z', 10),
];

/// Return the points for the tile with `label`, or 0 if there is no such tile.
/// ```
/// use scrabble_solver::tileset;
/// assert_eq!(tileset::points(17), 10); // q
/// assert_eq!(tileset::points(0), 0); // blank
/// ```
pub fn points(label: Label) -> u8 {
    TILESET.get(label as usize).map_or(0, |tile| tile.1)
}
