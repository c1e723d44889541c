use super::codes::{Code, Label, BLANK, LETTER_MASK, UNINIT};
use std::num::NonZeroU8;

const fn nonzero(code: Code) -> NonZeroU8 {
    match NonZeroU8::new(code) {
        Some(n) => n,
        None => panic!("letter code can't be 0"),
    }
}

/// A tile on a [`Rack`](crate::Rack): either a regular letter or a `blank` ("*") that can be
/// played as any letter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Letter(NonZeroU8);

impl Default for Letter {
    fn default() -> Self {
        Letter(nonzero(UNINIT))
    }
}

impl Letter {
    /// Return the letter for `label`, or None if the label is not `a`..`z`.
    pub fn from_label(label: Label) -> Option<Letter> {
        match label {
            1..=26 => Some(Letter(nonzero(label))),
            _ => None,
        }
    }

    /// Return new blank
    pub const fn blank() -> Letter {
        Letter(nonzero(BLANK))
    }

    /// Check if letter is `blank`
    pub fn is_blank(&self) -> bool {
        self.code() == BLANK
    }

    /// Get label for letter. A blank has label 0.
    pub fn label(&self) -> Label {
        self.code() & LETTER_MASK
    }

    pub fn code(&self) -> Code {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter() {
        let a = Letter::from_label(1).unwrap();
        assert_eq!(a.label(), 1);
        assert!(!a.is_blank());
        assert!(Letter::blank().is_blank());
        assert_eq!(Letter::blank().label(), 0);
        assert_eq!(Letter::from_label(0), None);
        assert_eq!(Letter::from_label(27), None);
    }
}
