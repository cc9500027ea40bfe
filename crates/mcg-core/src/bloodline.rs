//! Vampirism roll.
//!
//! About 2.7% of characters are vampires: a roll in `[0, 1000)` that is a
//! multiple of 37 (27 of the 1000 values). The clan follows the birth-sign
//! affinity.

use crate::sign::SignAffinity;
use crate::tables::BLOODLINES;

/// Rolls divisible by this are vampires.
pub const VAMPIRE_DIVISOR: u32 = 37;

/// A vampire clan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clan {
    /// Clan for magical signs.
    Aundae,
    /// Clan for sneaky signs.
    Berne,
    /// Clan for mighty signs.
    Quarra,
}

impl Clan {
    /// Prose for this clan, e.g. "of the Aundae Clan,".
    pub fn text(self) -> &'static str {
        match self {
            Self::Aundae => BLOODLINES[0],
            Self::Berne => BLOODLINES[1],
            Self::Quarra => BLOODLINES[2],
        }
    }
}

/// Outcome of the vampirism roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bloodline {
    /// Not a vampire.
    Clean,
    /// A vampire of the given clan.
    Vampire(Clan),
    /// A vampire whose affinity names no clan. Renders no blood line.
    Unclaimed,
}

impl Bloodline {
    /// Resolve a roll in `[0, 1000)` against the sign affinity.
    ///
    /// When several flags are set, magical beats sneaky beats mighty.
    pub fn from_roll(roll: u32, affinity: SignAffinity) -> Self {
        if roll % VAMPIRE_DIVISOR != 0 {
            return Self::Clean;
        }
        if affinity.is_none() {
            Self::Unclaimed
        } else if affinity.magical {
            Self::Vampire(Clan::Aundae)
        } else if affinity.sneaky {
            Self::Vampire(Clan::Berne)
        } else {
            Self::Vampire(Clan::Quarra)
        }
    }

    /// True for any vampire outcome.
    pub fn is_vampire(self) -> bool {
        !matches!(self, Self::Clean)
    }

    /// Prose following "Your blood is ", or `None` when nothing is shown.
    pub fn text(self) -> Option<&'static str> {
        match self {
            Self::Clean => Some(BLOODLINES[3]),
            Self::Vampire(clan) => Some(clan.text()),
            Self::Unclaimed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::RARE_ROLL_RANGE;
    use proptest::prelude::*;

    fn mighty() -> SignAffinity {
        SignAffinity::from_index(0)
    }

    #[test]
    fn vampire_count_over_full_range() {
        let vampires = (0..RARE_ROLL_RANGE)
            .filter(|n| Bloodline::from_roll(*n, mighty()).is_vampire())
            .count();
        // 0, 37, ..., 999
        assert_eq!(vampires, 28);
    }

    #[test]
    fn clan_follows_affinity() {
        assert_eq!(
            Bloodline::from_roll(37, SignAffinity::from_index(3)),
            Bloodline::Vampire(Clan::Quarra)
        );
        assert_eq!(
            Bloodline::from_roll(74, SignAffinity::from_index(9)),
            Bloodline::Vampire(Clan::Aundae)
        );
        assert_eq!(
            Bloodline::from_roll(0, SignAffinity::from_index(15)),
            Bloodline::Vampire(Clan::Berne)
        );
    }

    #[test]
    fn magical_overrides_other_flags() {
        let all = SignAffinity {
            mighty: true,
            magical: true,
            sneaky: true,
        };
        assert_eq!(
            Bloodline::from_roll(0, all),
            Bloodline::Vampire(Clan::Aundae)
        );
        let mighty_sneaky = SignAffinity {
            mighty: true,
            sneaky: true,
            ..SignAffinity::default()
        };
        assert_eq!(
            Bloodline::from_roll(0, mighty_sneaky),
            Bloodline::Vampire(Clan::Berne)
        );
    }

    #[test]
    fn vampire_without_affinity_is_unclaimed() {
        let b = Bloodline::from_roll(111, SignAffinity::default());
        assert_eq!(b, Bloodline::Unclaimed);
        assert!(b.is_vampire());
        assert_eq!(b.text(), None);
    }

    #[test]
    fn texts() {
        assert_eq!(Bloodline::Clean.text(), Some("clean,"));
        assert_eq!(
            Bloodline::Vampire(Clan::Berne).text(),
            Some("of the Berne Clan,")
        );
        assert_eq!(Clan::Quarra.text(), "of the Quarra Clan,");
    }

    proptest! {
        #[test]
        fn vampire_iff_multiple_of_37(roll in 0..RARE_ROLL_RANGE, sign in 0usize..13) {
            let b = Bloodline::from_roll(roll, SignAffinity::from_index(sign));
            prop_assert_eq!(b.is_vampire(), roll % 37 == 0);
            prop_assert_ne!(b, Bloodline::Unclaimed);
        }
    }
}
