//! Lookup tables sampled by each roll.
//!
//! Strings are stored exactly as they appear in the rendered prose,
//! including the articles and trailing punctuation.

use rand::Rng;
use rand::rngs::StdRng;

/// Playable races (10 entries).
pub const RACES: &[&str] = &[
    "an Altmer",
    "an Argonian",
    "a Dunmer",
    "an Imperial",
    "an Orc",
    "a Bosmer",
    "a Breton",
    "a Khajiit",
    "a Nord",
    "a Redguard",
];

/// Starting classes (21 entries).
pub const CLASSES: &[&str] = &[
    "An Archer",
    "A Barbarian",
    "A Crusader",
    "A Knight",
    "A Rogue",
    "A Scout",
    "A Warrior",
    "A Battlemage",
    "A Healer",
    "A Mage",
    "A Knightblade",
    "A Sorcerer",
    "A Spellsword",
    "A Witchhunter",
    "An Acrobat",
    "An Agent",
    "A Monk",
    "A Thief",
    "An Assassin",
    "A Bard",
    "A Pilgrim",
];

/// Birth signs (13 entries).
pub const BIRTH_SIGNS: &[&str] = &[
    "The Mage",
    "The Warrior",
    "The Thief",
    "The Serpent",
    "The Lady",
    "The Steed",
    "The Tower",
    "The Lord",
    "The Apprentice",
    "The Atronach",
    "The Ritual",
    "The Lover",
    "The Shadow",
];

/// Great houses a character may be hired by (3 entries).
pub const HOUSES: &[&str] = &["Hlaalu", "Redoran", "Telvanni"];

/// Bloodline texts: three vampire clans followed by the clean entry.
pub const BLOODLINES: &[&str] = &[
    "of the Aundae Clan,",
    "of the Berne Clan,",
    "of the Quarra Clan,",
    "clean,",
];

/// Faiths (4 entries).
pub const FAITHS: &[&str] = &[
    "The Tribunal Temple,",
    "The Imperial Cult,",
    "Nothing,",
    "The Powerful Daedra,",
];

/// Allegiances (2 entries).
pub const ALLEGIANCES: &[&str] = &["The Imperial Legion.", "Fortune."];

/// Assassin trait texts: Morag Tong first, then the common outcome.
pub const ASSASSIN_TEXTS: &[&str] = &[
    "are an Assassin for The Morag Tong.",
    "generally eschew needless murder.",
];

/// Exclusive upper bound of the percentile-style rolls used for rare traits.
pub const RARE_ROLL_RANGE: u32 = 1000;

/// Pick a uniformly random entry, returning its index and text.
///
/// Tables must be non-empty; every table in this module is.
pub fn pick(rng: &mut StdRng, table: &'static [&'static str]) -> (usize, &'static str) {
    let index = rng.random_range(0..table.len());
    (index, table[index])
}

/// Roll a uniform integer in `[0, RARE_ROLL_RANGE)`.
pub fn rare_roll(rng: &mut StdRng) -> u32 {
    rng.random_range(0..RARE_ROLL_RANGE)
}
