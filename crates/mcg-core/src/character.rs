//! A rolled character concept and its prose rendering.

use crate::assassin::AssassinTrait;
use crate::bloodline::Bloodline;
use crate::sign::SignAffinity;

/// One rolled character concept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    /// Race, with article (e.g. "a Dunmer").
    pub race: &'static str,
    /// Class, with capitalized article (e.g. "A Spellsword").
    pub class: &'static str,
    /// Birth sign (e.g. "The Atronach").
    pub sign: &'static str,
    /// Flags derived from the birth-sign index.
    pub affinity: SignAffinity,
    /// Great house the character hires on with.
    pub house: &'static str,
    /// Vampirism outcome.
    pub bloodline: Bloodline,
    /// Faith, with trailing comma.
    pub faith: &'static str,
    /// Allegiance, with trailing period.
    pub allegiance: &'static str,
    /// Morag Tong outcome.
    pub assassin: AssassinTrait,
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "You will be {},", self.race)?;
        writeln!(f, "{} born under {} sign,", self.class, self.sign)?;
        writeln!(f, "Hireling of house {}.", self.house)?;
        if let Some(blood) = self.bloodline.text() {
            writeln!(f, "Your blood is {blood}")?;
        }
        writeln!(f, "You believe in {}", self.faith)?;
        writeln!(f, "You are a soldier of {}", self.allegiance)?;
        writeln!(f, "And you {}", self.assassin.text())
    }
}
