//! Nucleotide alphabet

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Nitrogenous base of a DNA strand
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Nucleotide {
    /// The whole alphabet, in a fixed order
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    /// Parse a single base, case-insensitive
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'A' | 'a' => Some(Nucleotide::A),
            'C' | 'c' => Some(Nucleotide::C),
            'G' | 'g' => Some(Nucleotide::G),
            'T' | 't' => Some(Nucleotide::T),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }

    /// Index of this base inside [`Nucleotide::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_from_char_accepts_both_cases() {
        assert_eq!(Nucleotide::from_char('g'), Some(Nucleotide::G));
        assert_eq!(Nucleotide::from_char('T'), Some(Nucleotide::T));
        assert_eq!(Nucleotide::from_char('U'), None);
        assert_eq!(Nucleotide::try_from('x'), Err('x'));
    }

    #[test]
    fn test_all_matches_iteration_order() {
        let iterated: Vec<_> = Nucleotide::iter().collect();
        assert_eq!(iterated, Nucleotide::ALL.to_vec());
        for (i, base) in Nucleotide::ALL.iter().enumerate() {
            assert_eq!(base.index(), i);
        }
    }

    #[test]
    fn test_display_is_single_letter() {
        for base in Nucleotide::iter() {
            assert_eq!(base.to_string(), base.as_char().to_string());
        }
    }
}
