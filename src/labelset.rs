use crate::tiles::{codec, Label, ALPHABET_LEN};
#[cfg(feature = "bitintr")]
use bitintr::{Bzhi, Popcnt};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;

#[cfg(feature = "bitintr")]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.popcnt()
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.count_ones()
}

#[cfg(feature = "bitintr")]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n.bzhi(v)
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n & ((1 << v) - 1)
}

/// Bits 1..=26, one for each letter `a`..`z`.
const ALL_LETTERS: u32 = ((1 << (ALPHABET_LEN + 1)) - 1) & !1;

/// A bitset of letters.
///
/// Used for the outgoing edges of a word index node, and for the letters that may legally be
/// placed on a square given the crossing word.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelSet(u32);

impl LabelSet {
    /// The empty set
    pub const fn new() -> LabelSet {
        LabelSet(0)
    }

    /// The set of all 26 letters
    pub const fn all() -> LabelSet {
        LabelSet(ALL_LETTERS)
    }

    pub fn contains(&self, label: Label) -> bool {
        label < 32 && self.0 & (1 << label) != 0
    }

    /// Add `label`, returns true if it was already present.
    pub fn insert(&mut self, label: Label) -> bool {
        assert!(label < 32);
        let present = self.contains(label);
        self.0 |= 1 << label;
        present
    }

    pub fn len(&self) -> usize {
        count_ones(self.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Check that only the bits for `a`..`z` are set.
    pub fn is_letters_only(&self) -> bool {
        self.0 & !ALL_LETTERS == 0
    }

    /// Iterate the labels in ascending order.
    pub fn iter(&self) -> IteratorLabelSet {
        IteratorLabelSet { value: self.0 }
    }

    /// Return the rank of `label` in the set, i.e. the number of smaller labels present,
    /// or None if `label` is not present.
    pub fn index_of(&self, label: Label) -> Option<usize> {
        if !self.contains(label) {
            return None;
        }
        Some(count_ones(zero_highbits(self.0, label as u32)) as usize)
    }
}

impl fmt::Debug for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self)
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", codec::decode(self.iter()))
    }
}

pub struct IteratorLabelSet {
    value: u32,
}

impl Iterator for IteratorLabelSet {
    type Item = Label;
    fn next(&mut self) -> Option<Label> {
        if self.value == 0 {
            return None;
        }
        let label = self.value.trailing_zeros();
        self.value &= self.value - 1;
        Some(label as Label)
    }
}

impl FromIterator<Label> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut set = LabelSet::new();
        for label in iter {
            set.insert(label);
        }
        set
    }
}
