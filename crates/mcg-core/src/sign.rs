//! Affinity flags derived from the birth-sign roll.
//!
//! The index ranges cover 21 signs, but the sign table holds 13, so the
//! sneaky range can never be hit. That is kept as-is: `sneaky` is always
//! false after a roll.

use std::ops::RangeInclusive;

const MIGHTY_SIGNS: RangeInclusive<usize> = 0..=6;
const MAGICAL_SIGNS: RangeInclusive<usize> = 7..=13;
// Unreachable with the current table.
const SNEAKY_SIGNS: RangeInclusive<usize> = 14..=20;

/// Which third of the sign table a roll landed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignAffinity {
    /// Sign index in `0..=6`.
    pub mighty: bool,
    /// Sign index in `7..=13`.
    pub magical: bool,
    /// Sign index in `14..=20`.
    pub sneaky: bool,
}

impl SignAffinity {
    /// Derive the flags for a birth-sign index.
    pub fn from_index(index: usize) -> Self {
        Self {
            mighty: MIGHTY_SIGNS.contains(&index),
            magical: MAGICAL_SIGNS.contains(&index),
            sneaky: SNEAKY_SIGNS.contains(&index),
        }
    }

    /// True if no flag is set.
    pub fn is_none(&self) -> bool {
        !(self.mighty || self.magical || self.sneaky)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::BIRTH_SIGNS;
    use proptest::prelude::*;

    #[test]
    fn default_is_all_false() {
        let a = SignAffinity::default();
        assert!(a.is_none());
    }

    #[test]
    fn range_boundaries() {
        assert!(SignAffinity::from_index(0).mighty);
        assert!(SignAffinity::from_index(6).mighty);
        assert!(SignAffinity::from_index(7).magical);
        assert!(SignAffinity::from_index(12).magical);
        assert!(SignAffinity::from_index(14).sneaky);
        assert!(SignAffinity::from_index(21).is_none());
    }

    proptest! {
        #[test]
        fn table_indices_set_exactly_one_flag(index in 0..BIRTH_SIGNS.len()) {
            let a = SignAffinity::from_index(index);
            prop_assert!(!a.sneaky);
            prop_assert_eq!(a.mighty, index <= 6);
            prop_assert_eq!(a.magical, index >= 7);
        }
    }
}
