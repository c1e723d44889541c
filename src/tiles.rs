//! Basic types for working with scrabble tiles.
pub mod codec;
mod codes;
mod letter;
mod rack;
mod square;

pub use codes::{Code, Label, ALPHABET_LEN, BLANK, EMPTY, IS_WILDCARD, LETTER_MASK};
pub use letter::Letter;
pub use rack::{Rack, RackTile, RACK_SIZE};
pub use square::Square;
