//! The character roller.
//!
//! Each roll is independent: the sign affinity is a local value handed from
//! the sign step to the bloodline step and dropped with the roll.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::assassin::AssassinTrait;
use crate::bloodline::Bloodline;
use crate::character::Character;
use crate::config::RollerConfig;
use crate::sign::SignAffinity;
use crate::tables::{self, ALLEGIANCES, BIRTH_SIGNS, CLASSES, FAITHS, HOUSES, RACES};

/// Rolls character concepts from the lookup tables.
pub struct CharacterRoller {
    rng: StdRng,
}

impl CharacterRoller {
    /// Create a roller, seeded from the config or from OS entropy.
    pub fn new(config: &RollerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    /// Create a roller with a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(&RollerConfig::default().with_seed(seed))
    }

    /// Roll one character.
    pub fn roll(&mut self) -> Character {
        let (race_idx, race) = tables::pick(&mut self.rng, RACES);
        let (class_idx, class) = tables::pick(&mut self.rng, CLASSES);
        let (sign_idx, sign) = tables::pick(&mut self.rng, BIRTH_SIGNS);
        let affinity = SignAffinity::from_index(sign_idx);
        let (house_idx, house) = tables::pick(&mut self.rng, HOUSES);

        let blood_roll = tables::rare_roll(&mut self.rng);
        let bloodline = Bloodline::from_roll(blood_roll, affinity);

        let (faith_idx, faith) = tables::pick(&mut self.rng, FAITHS);
        let (allegiance_idx, allegiance) = tables::pick(&mut self.rng, ALLEGIANCES);

        let assassin_roll = tables::rare_roll(&mut self.rng);
        let assassin = AssassinTrait::from_roll(assassin_roll);

        debug!(
            race_idx,
            class_idx,
            sign_idx,
            house_idx,
            blood_roll,
            vampire = bloodline.is_vampire(),
            faith_idx,
            allegiance_idx,
            assassin_roll,
            "rolled character"
        );

        Character {
            race,
            class,
            sign,
            affinity,
            house,
            bloodline,
            faith,
            allegiance,
            assassin,
        }
    }
}
