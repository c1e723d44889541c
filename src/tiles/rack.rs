use super::codec;
use super::codes::{Label, BLANK};
use super::letter::Letter;
use crate::error::Error;
use crate::tileset;
use std::fmt;
use std::str::FromStr;
use tinyvec::ArrayVec;

/// The maximum number of tiles on a rack
pub const RACK_SIZE: usize = 7;

/// A tile on the rack with its point value. A blank is worth 0 points.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RackTile {
    pub letter: Letter,
    pub value: u8,
}

impl RackTile {
    /// A regular tile, valued with the English letter points.
    pub fn from_label(label: Label) -> Option<RackTile> {
        Letter::from_label(label).map(|letter| RackTile {
            letter,
            value: tileset::points(label),
        })
    }

    /// A blank tile
    pub fn blank() -> RackTile {
        RackTile {
            letter: Letter::blank(),
            value: 0,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.letter.is_blank()
    }
}

/// The tiles a player can place this turn.
///
/// The solver takes tiles out and puts them back at the same index while it searches, so the
/// order of the tiles is preserved across a search.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Rack(ArrayVec<[RackTile; RACK_SIZE]>);

impl Rack {
    pub fn new() -> Rack {
        Rack(ArrayVec::new())
    }

    /// Add a tile.
    /// ## Errors
    /// If the rack already holds [`RACK_SIZE`] tiles.
    pub fn push(&mut self, tile: RackTile) -> Result<(), Error> {
        if self.0.len() == RACK_SIZE {
            return Err(Error::RackTooLarge(format!("{}{}", self, tile_char(&tile))));
        }
        self.0.push(tile);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<RackTile> {
        self.0.iter()
    }

    /// Index of the first regular tile with `label`.
    pub fn position(&self, label: Label) -> Option<usize> {
        self.0
            .iter()
            .position(|tile| !tile.is_blank() && tile.letter.label() == label)
    }

    /// Index of the first blank.
    pub fn position_blank(&self) -> Option<usize> {
        self.0.iter().position(RackTile::is_blank)
    }

    /// Take out the tile at `index`.
    /// ## Panics
    /// If `index` is out of range.
    pub fn remove(&mut self, index: usize) -> RackTile {
        self.0.remove(index)
    }

    /// Put back a tile at `index`, the inverse of [`remove`](Rack::remove).
    /// ## Panics
    /// If `index > len` or the rack is full.
    pub fn insert(&mut self, index: usize, tile: RackTile) {
        self.0.insert(index, tile)
    }
}

fn tile_char(tile: &RackTile) -> char {
    if tile.is_blank() {
        codec::decode_code(BLANK)
    } else {
        codec::decode_code(tile.letter.label())
    }
}

/// Parse a rack: `a`..`z` for regular tiles, `*` or `?` for a blank.
/// ## Examples
/// ```
/// use scrabble_solver::{Error, Rack};
/// let rack: Rack = "ca*t".parse()?;
/// assert_eq!(rack.len(), 4);
/// assert_eq!(rack.position_blank(), Some(2));
/// assert_eq!(rack.to_string(), "ca*t");
/// assert!("abcdefgh".parse::<Rack>().is_err());
/// # Ok::<(), Error>(())
/// ```
impl FromStr for Rack {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() > RACK_SIZE {
            return Err(Error::RackTooLarge(s.to_string()));
        }
        let mut rack = Rack::new();
        for ch in s.chars() {
            let tile = match ch {
                '*' | '?' => RackTile::blank(),
                _ => codec::label_of(ch)
                    .and_then(RackTile::from_label)
                    .ok_or(Error::EncodeInvalidToken(ch))?,
            };
            rack.push(tile)?;
        }
        Ok(rack)
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.iter().map(tile_char).collect();
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let rack: Rack = "qu?".parse().unwrap();
        assert_eq!(rack.len(), 3);
        let values: Vec<u8> = rack.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![10, 1, 0]);
        assert_eq!(rack.to_string(), "qu*");
        assert!("ab1".parse::<Rack>().is_err());
        assert!("".parse::<Rack>().unwrap().is_empty());
    }

    #[test]
    fn test_remove_insert() {
        let mut rack: Rack = "cat".parse().unwrap();
        let before = rack.clone();
        let i = rack.position(1).unwrap();
        assert_eq!(i, 1);
        let tile = rack.remove(i);
        assert_eq!(rack.to_string(), "ct");
        assert_eq!(rack.position(1), None);
        rack.insert(i, tile);
        assert_eq!(rack, before);
    }

    #[test]
    fn test_push_full() {
        let mut rack: Rack = "abcdefg".parse().unwrap();
        assert!(matches!(
            rack.push(RackTile::blank()),
            Err(Error::RackTooLarge(_))
        ));
    }
}
