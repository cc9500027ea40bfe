//! Morag Tong membership roll.

use crate::tables::ASSASSIN_TEXTS;

/// Rolls divisible by this belong to the Morag Tong.
pub const MORAG_TONG_DIVISOR: u32 = 13;

/// Whether the character is a sanctioned assassin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssassinTrait {
    /// An assassin for the Morag Tong (roughly 7.7% of rolls).
    MoragTong,
    /// Everyone else.
    Eschews,
}

impl AssassinTrait {
    /// Resolve a roll in `[0, 1000)`.
    pub fn from_roll(roll: u32) -> Self {
        if roll % MORAG_TONG_DIVISOR == 0 {
            Self::MoragTong
        } else {
            Self::Eschews
        }
    }

    /// Prose following "And you ".
    pub fn text(self) -> &'static str {
        match self {
            Self::MoragTong => ASSASSIN_TEXTS[0],
            Self::Eschews => ASSASSIN_TEXTS[1],
        }
    }
}
