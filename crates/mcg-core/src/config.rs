//! Configuration for a character roller.

/// Configuration for a [`CharacterRoller`](crate::CharacterRoller).
#[derive(Debug, Clone, Default)]
pub struct RollerConfig {
    /// RNG seed for reproducible rolls. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl RollerConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_unseeded() {
        let cfg = RollerConfig::default();
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn with_seed() {
        let cfg = RollerConfig::default().with_seed(123);
        assert_eq!(cfg.seed, Some(123));
    }
}
