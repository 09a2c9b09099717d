//! Admin panel: moderation toggles and the translation dictionary tools.

pub mod moderation;
pub mod translations;

pub use moderation::{Moderation, Target};
pub use translations::Translations;
