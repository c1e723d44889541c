/// Code 1..=26 for the letters `a`..`z`.
pub type Label = u8;

/// Code used to represent a square or a rack tile: a [`Label`], optionally combined with
/// the [`IS_WILDCARD`] flag. See [`codec`](crate::codec).
pub type Code = u8;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// code for EMPTY (no tile)
pub const EMPTY: Code = 0;

/// code for an unassigned BLANK tile
pub const BLANK: Code = 0x40;

/// Mask to get label value 0..31
pub const LETTER_MASK: u8 = 0b11111;

/// bitflag for a blank that has been assigned a letter
pub const IS_WILDCARD: Code = 0x40;

/// An uninitialized tile
pub(super) const UNINIT: Code = 0x7f;
