//! Random character concepts for The Elder Scrolls III: Morrowind.
//!
//! Each roll independently samples a race, class, birth sign, great house,
//! bloodline, faith, allegiance, and a rare Morag Tong trait, then renders
//! the result as a short block of prose. A two-option menu loop drives
//! repeated rolls over any reader/writer pair.

pub mod assassin;
pub mod bloodline;
pub mod character;
pub mod config;
pub mod error;
pub mod menu;
pub mod roller;
pub mod sign;
pub mod tables;

pub use assassin::AssassinTrait;
pub use bloodline::{Bloodline, Clan};
pub use character::Character;
pub use config::RollerConfig;
pub use error::{McgError, McgResult};
pub use menu::{MenuChoice, MenuExit, run_menu};
pub use roller::CharacterRoller;
pub use sign::SignAffinity;
