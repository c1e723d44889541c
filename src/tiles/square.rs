use super::codes::{Code, Label, EMPTY, IS_WILDCARD, LETTER_MASK};

/// The content of a square on the board.
///
/// `code` is a letter label, with the [`IS_WILDCARD`] bit set when a blank plays as that
/// letter, or [`EMPTY`]. `committed` marks tiles from a previous turn.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Square {
    pub code: Code,
    pub value: u8,
    pub committed: bool,
}

impl Square {
    /// An empty square
    pub const EMPTY: Square = Square {
        code: EMPTY,
        value: 0,
        committed: false,
    };

    /// A square holding a tile. Blanks always have value 0.
    pub fn tile(label: Label, value: u8, is_blank: bool, committed: bool) -> Square {
        let label = label & LETTER_MASK;
        if is_blank {
            Square {
                code: label | IS_WILDCARD,
                value: 0,
                committed,
            }
        } else {
            Square {
                code: label,
                value,
                committed,
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.code == EMPTY
    }

    /// The letter on the square, without the blank flag. 0 when empty.
    pub fn label(&self) -> Label {
        self.code & LETTER_MASK
    }

    pub fn is_blank(&self) -> bool {
        self.code & IS_WILDCARD != 0
    }
}
