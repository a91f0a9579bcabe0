//! Card model: categories, monster statistics, and the card aggregate.
//!
//! ## Key Types
//!
//! - `CardKind`: Closed catalogue of card categories, totally ordered
//! - `Race`, `Attribute`, `Level`, `Rank`, `PendulumScale`, `LinkMarkers`,
//!   `Attack`, `Defence`: Monster-only statistics
//! - `Card`: A card's identity, text, categories and statistics
//!
//! ## Field Rules
//!
//! Monster statistics may only be set on cards with at least one monster
//! category. Spells and traps carry none of them, and their JSON form has
//! no monster keys.

pub mod card;
pub mod kind;
pub mod monster;

pub use card::{Card, CardBuilder, CardKinds};
pub use kind::{CardKind, EXTRA_DECK_KINDS, MONSTER_KINDS, SPELL_KINDS, TRAP_KINDS};
pub use monster::{
    Attack, Attribute, Defence, Level, LinkMarker, LinkMarkers, PendulumScale, Race, Rank, Status,
    VARIABLE_TOKEN,
};
