//! Card categories.
//!
//! `CardKind` is the closed catalogue of every category a card can belong
//! to: 14 monster categories (4 of them drawn from the extra deck), 6 spell
//! categories and 3 trap categories.
//!
//! ## Ordering
//!
//! Categories are totally ordered by [`CardKind::rank`]: monsters first in
//! their canonical sequence, then spells, then traps. Ranks are spaced by 10
//! so a new category can be slotted in without renumbering. A new variant
//! must be added to `ALL`, `rank` and `label` together.
//!
//! ```
//! use yugioh_card_db::cards::CardKind;
//!
//! assert!(CardKind::EffectMonster < CardKind::FusionMonster);
//! assert!(CardKind::FusionMonster.is_extra());
//! assert_eq!(CardKind::EffectMonster.to_string(), "効果");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::CardError;

/// A card category. Serialized as its canonical Japanese label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    #[serde(rename = "通常")]
    NormalMonster,
    #[serde(rename = "効果")]
    EffectMonster,
    #[serde(rename = "デュアル")]
    DualMonster,
    #[serde(rename = "スピリット")]
    SpiritMonster,
    #[serde(rename = "チューナー")]
    TunerMonster,
    #[serde(rename = "リバース")]
    ReverseMonster,
    #[serde(rename = "トゥーン")]
    ToonMonster,
    #[serde(rename = "特殊召喚")]
    SpecialSummonMonster,
    #[serde(rename = "儀式")]
    RitualMonster,
    #[serde(rename = "融合")]
    FusionMonster,
    #[serde(rename = "シンクロ")]
    SynchroMonster,
    #[serde(rename = "エクシーズ")]
    XyzMonster,
    #[serde(rename = "ペンデュラム")]
    PendulumMonster,
    #[serde(rename = "リンク")]
    LinkMonster,
    #[serde(rename = "通常魔法")]
    NormalSpell,
    #[serde(rename = "儀式魔法")]
    RitualSpell,
    #[serde(rename = "装備魔法")]
    EquipSpell,
    #[serde(rename = "フィールド魔法")]
    FieldSpell,
    #[serde(rename = "永続魔法")]
    ContinuousSpell,
    #[serde(rename = "速攻魔法")]
    QuickSpell,
    #[serde(rename = "通常罠")]
    NormalTrap,
    #[serde(rename = "永続罠")]
    ContinuousTrap,
    #[serde(rename = "カウンター罠")]
    CounterTrap,
}

/// Monster categories, including the extra-deck ones.
pub const MONSTER_KINDS: [CardKind; 14] = [
    CardKind::NormalMonster,
    CardKind::EffectMonster,
    CardKind::DualMonster,
    CardKind::SpiritMonster,
    CardKind::TunerMonster,
    CardKind::ReverseMonster,
    CardKind::ToonMonster,
    CardKind::SpecialSummonMonster,
    CardKind::RitualMonster,
    CardKind::FusionMonster,
    CardKind::SynchroMonster,
    CardKind::XyzMonster,
    CardKind::PendulumMonster,
    CardKind::LinkMonster,
];

/// Monster categories summoned from the extra deck.
pub const EXTRA_DECK_KINDS: [CardKind; 4] = [
    CardKind::FusionMonster,
    CardKind::SynchroMonster,
    CardKind::XyzMonster,
    CardKind::LinkMonster,
];

/// Spell categories.
pub const SPELL_KINDS: [CardKind; 6] = [
    CardKind::NormalSpell,
    CardKind::RitualSpell,
    CardKind::EquipSpell,
    CardKind::FieldSpell,
    CardKind::ContinuousSpell,
    CardKind::QuickSpell,
];

/// Trap categories.
pub const TRAP_KINDS: [CardKind; 3] = [
    CardKind::NormalTrap,
    CardKind::ContinuousTrap,
    CardKind::CounterTrap,
];

impl CardKind {
    /// Every category, in rank order.
    pub const ALL: [CardKind; 23] = [
        CardKind::NormalMonster,
        CardKind::EffectMonster,
        CardKind::DualMonster,
        CardKind::SpiritMonster,
        CardKind::TunerMonster,
        CardKind::ReverseMonster,
        CardKind::ToonMonster,
        CardKind::SpecialSummonMonster,
        CardKind::RitualMonster,
        CardKind::FusionMonster,
        CardKind::SynchroMonster,
        CardKind::XyzMonster,
        CardKind::PendulumMonster,
        CardKind::LinkMonster,
        CardKind::NormalSpell,
        CardKind::RitualSpell,
        CardKind::EquipSpell,
        CardKind::FieldSpell,
        CardKind::ContinuousSpell,
        CardKind::QuickSpell,
        CardKind::NormalTrap,
        CardKind::ContinuousTrap,
        CardKind::CounterTrap,
    ];

    /// Position in the sort order.
    #[must_use]
    pub const fn rank(self) -> u16 {
        match self {
            CardKind::NormalMonster => 10,
            CardKind::EffectMonster => 20,
            CardKind::DualMonster => 30,
            CardKind::SpiritMonster => 40,
            CardKind::TunerMonster => 50,
            CardKind::ReverseMonster => 60,
            CardKind::ToonMonster => 70,
            CardKind::SpecialSummonMonster => 80,
            CardKind::RitualMonster => 90,
            CardKind::FusionMonster => 100,
            CardKind::SynchroMonster => 110,
            CardKind::XyzMonster => 120,
            CardKind::PendulumMonster => 130,
            CardKind::LinkMonster => 140,
            CardKind::NormalSpell => 150,
            CardKind::RitualSpell => 160,
            CardKind::EquipSpell => 170,
            CardKind::FieldSpell => 180,
            CardKind::ContinuousSpell => 190,
            CardKind::QuickSpell => 200,
            CardKind::NormalTrap => 210,
            CardKind::ContinuousTrap => 220,
            CardKind::CounterTrap => 230,
        }
    }

    /// Canonical label, as printed on the card and stored in JSON.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CardKind::NormalMonster => "通常",
            CardKind::EffectMonster => "効果",
            CardKind::DualMonster => "デュアル",
            CardKind::SpiritMonster => "スピリット",
            CardKind::TunerMonster => "チューナー",
            CardKind::ReverseMonster => "リバース",
            CardKind::ToonMonster => "トゥーン",
            CardKind::SpecialSummonMonster => "特殊召喚",
            CardKind::RitualMonster => "儀式",
            CardKind::FusionMonster => "融合",
            CardKind::SynchroMonster => "シンクロ",
            CardKind::XyzMonster => "エクシーズ",
            CardKind::PendulumMonster => "ペンデュラム",
            CardKind::LinkMonster => "リンク",
            CardKind::NormalSpell => "通常魔法",
            CardKind::RitualSpell => "儀式魔法",
            CardKind::EquipSpell => "装備魔法",
            CardKind::FieldSpell => "フィールド魔法",
            CardKind::ContinuousSpell => "永続魔法",
            CardKind::QuickSpell => "速攻魔法",
            CardKind::NormalTrap => "通常罠",
            CardKind::ContinuousTrap => "永続罠",
            CardKind::CounterTrap => "カウンター罠",
        }
    }

    /// Is this a monster category?
    #[must_use]
    pub fn is_monster(self) -> bool {
        MONSTER_KINDS.contains(&self)
    }

    /// Is this a monster category kept in the extra deck?
    #[must_use]
    pub fn is_extra(self) -> bool {
        EXTRA_DECK_KINDS.contains(&self)
    }

    /// Is this a monster category kept in the main deck?
    #[must_use]
    pub fn is_main_deck_monster(self) -> bool {
        self.is_monster() && !self.is_extra()
    }

    /// Is this a spell category?
    #[must_use]
    pub fn is_spell(self) -> bool {
        SPELL_KINDS.contains(&self)
    }

    /// Is this a trap category?
    #[must_use]
    pub fn is_trap(self) -> bool {
        TRAP_KINDS.contains(&self)
    }
}

impl Ord for CardKind {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for CardKind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CardKind {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| CardError::invalid_argument(format!("unknown card kind: {s}")))
    }
}
