//! The card aggregate.
//!
//! A `Card` bundles a card's identity name, display metadata, effect text,
//! its categories, and whichever monster statistics apply to it. Cards are
//! immutable once built.
//!
//! ## Identity
//!
//! The name is the only identity key: two cards with the same name are
//! equal and hash the same regardless of their other fields.
//!
//! ## Ordering
//!
//! Cards sort by their highest-ranked category first, then by name. A card
//! that is both Effect and Fusion sorts with the Fusion cards.
//!
//! ## Example
//!
//! ```
//! use yugioh_card_db::cards::{Attack, Attribute, Card, CardKind, Defence, Level, Race};
//!
//! let card = Card::builder(
//!     "ブラック・マジシャン",
//!     "ぶらっくまじしゃん",
//!     "魔法使いとしては、攻撃力・守備力ともに最高クラス。",
//!     [CardKind::NormalMonster],
//! )
//! .attribute(Attribute::new("闇").unwrap())
//! .race(Race::new("魔法使い族").unwrap())
//! .level(Level::new(7))
//! .attack(Attack::fixed(2500))
//! .defence(Defence::fixed(2100))
//! .build()
//! .unwrap();
//!
//! assert_eq!(card.attack().and_then(|a| a.status()), Some(2500));
//! let decoded = Card::from_json(&card.to_json().unwrap()).unwrap();
//! assert_eq!(decoded, card);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::kind::CardKind;
use super::monster::{Attack, Attribute, Defence, Level, LinkMarkers, PendulumScale, Race, Rank};
use crate::core::{CardError, Optional, Result, SummaryConfig};

/// Category list storage. Most cards have at most four categories.
pub type CardKinds = SmallVec<[CardKind; 4]>;

/// A card and its printed attributes.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CardRecord")]
pub struct Card {
    name: String,
    pronunciation: String,
    description: String,
    kinds: CardKinds,
    #[serde(skip_serializing_if = "Option::is_none")]
    race: Option<Race>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute: Option<Attribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rank: Option<Rank>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pendulum_scale: Option<PendulumScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<LinkMarkers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attack: Option<Attack>,
    #[serde(skip_serializing_if = "Option::is_none")]
    defence: Option<Defence>,
}

impl Card {
    /// Start building a card. `kinds` must not be empty.
    pub fn builder(
        name: impl Into<String>,
        pronunciation: impl Into<String>,
        description: impl Into<String>,
        kinds: impl IntoIterator<Item = CardKind>,
    ) -> CardBuilder {
        CardBuilder {
            card: Card {
                name: name.into(),
                pronunciation: pronunciation.into(),
                description: description.into(),
                kinds: kinds.into_iter().collect(),
                race: None,
                attribute: None,
                level: None,
                rank: None,
                pendulum_scale: None,
                link: None,
                attack: None,
                defence: None,
            },
        }
    }

    /// Unique card name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reading of the name.
    #[must_use]
    pub fn pronunciation(&self) -> &str {
        &self.pronunciation
    }

    /// Effect or flavour text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Categories in the order they were given.
    #[must_use]
    pub fn kinds(&self) -> &[CardKind] {
        &self.kinds
    }

    /// Highest-ranked category.
    #[must_use]
    pub fn max_kind(&self) -> Option<CardKind> {
        self.kinds.iter().copied().max()
    }

    #[must_use]
    pub fn race(&self) -> Option<&Race> {
        self.race.as_ref()
    }

    #[must_use]
    pub fn attribute(&self) -> Option<&Attribute> {
        self.attribute.as_ref()
    }

    #[must_use]
    pub fn level(&self) -> Option<Level> {
        self.level
    }

    #[must_use]
    pub fn rank(&self) -> Option<Rank> {
        self.rank
    }

    #[must_use]
    pub fn pendulum_scale(&self) -> Option<PendulumScale> {
        self.pendulum_scale
    }

    #[must_use]
    pub fn link(&self) -> Option<LinkMarkers> {
        self.link
    }

    #[must_use]
    pub fn attack(&self) -> Option<Attack> {
        self.attack
    }

    #[must_use]
    pub fn defence(&self) -> Option<Defence> {
        self.defence
    }

    /// Does any category make this a monster?
    #[must_use]
    pub fn is_monster(&self) -> bool {
        self.kinds.iter().any(|k| k.is_monster())
    }

    /// Does this card go in the extra deck?
    #[must_use]
    pub fn is_extra(&self) -> bool {
        self.kinds.iter().any(|k| k.is_extra())
    }

    #[must_use]
    pub fn is_spell(&self) -> bool {
        self.kinds.iter().any(|k| k.is_spell())
    }

    #[must_use]
    pub fn is_trap(&self) -> bool {
        self.kinds.iter().any(|k| k.is_trap())
    }

    fn has_monster_attributes(&self) -> bool {
        self.race.is_some()
            || self.attribute.is_some()
            || self.level.is_some()
            || self.rank.is_some()
            || self.pendulum_scale.is_some()
            || self.link.is_some()
            || self.attack.is_some()
            || self.defence.is_some()
    }

    fn validate(self) -> Result<Self> {
        if self.kinds.is_empty() {
            return Err(CardError::invalid_argument(format!(
                "card {} has no categories",
                self.name
            )));
        }
        if !self.is_monster() && self.has_monster_attributes() {
            return Err(CardError::invalid_argument(format!(
                "card {} is not a monster but carries monster attributes",
                self.name
            )));
        }
        Ok(self)
    }

    /// One-line summary using the default [`SummaryConfig`].
    #[must_use]
    pub fn format_summary(&self) -> String {
        self.format_summary_with(&SummaryConfig::default())
    }

    /// One-line summary: name, pronunciation, categories, then each present
    /// monster attribute in a fixed order.
    #[must_use]
    pub fn format_summary_with(&self, config: &SummaryConfig) -> String {
        let mut parts: Vec<String> = self.kinds.iter().map(ToString::to_string).collect();

        self.attribute.as_ref().for_each(|a| parts.push(a.to_string()));
        self.race.as_ref().for_each(|r| parts.push(r.to_string()));
        self.level.for_each(|l| parts.push(l.to_string()));
        self.rank.for_each(|r| parts.push(r.to_string()));
        self.pendulum_scale.for_each(|s| parts.push(s.to_string()));
        self.link.for_each(|l| parts.push(l.to_string()));
        self.attack.for_each(|a| {
            parts.push(if config.show_status_labels {
                a.to_string()
            } else {
                a.token()
            });
        });
        self.defence.for_each(|d| {
            parts.push(if config.show_status_labels {
                d.to_string()
            } else {
                d.token()
            });
        });

        let mut summary = self.name.clone();
        if config.show_pronunciation {
            summary.push('(');
            summary.push_str(&self.pronunciation);
            summary.push(')');
        }
        summary.push(' ');
        summary.push_str(&parts.join(&config.separator));
        summary
    }

    /// Encode as JSON. Absent monster attributes are omitted.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(CardError::Encode)
    }

    /// Encode as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(CardError::Encode)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let card: Card = serde_json::from_str(json).map_err(|e| {
            tracing::warn!(error = %e, "rejected card document");
            CardError::Decode(e)
        })?;
        tracing::debug!(name = %card.name, "decoded card");
        Ok(card)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.max_kind()
            .cmp(&other.max_kind())
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Builder for [`Card`]. Only set what the card's categories warrant.
#[derive(Clone, Debug)]
pub struct CardBuilder {
    card: Card,
}

impl CardBuilder {
    #[must_use]
    pub fn race(mut self, race: Race) -> Self {
        self.card.race = Some(race);
        self
    }

    #[must_use]
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.card.attribute = Some(attribute);
        self
    }

    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.card.level = Some(level);
        self
    }

    #[must_use]
    pub fn rank(mut self, rank: Rank) -> Self {
        self.card.rank = Some(rank);
        self
    }

    #[must_use]
    pub fn pendulum_scale(mut self, scale: PendulumScale) -> Self {
        self.card.pendulum_scale = Some(scale);
        self
    }

    #[must_use]
    pub fn link(mut self, link: LinkMarkers) -> Self {
        self.card.link = Some(link);
        self
    }

    #[must_use]
    pub fn attack(mut self, attack: Attack) -> Self {
        self.card.attack = Some(attack);
        self
    }

    #[must_use]
    pub fn defence(mut self, defence: Defence) -> Self {
        self.card.defence = Some(defence);
        self
    }

    /// Finish the card.
    ///
    /// Fails with `InvalidArgument` if there are no categories, or if a
    /// card without any monster category carries monster attributes.
    pub fn build(self) -> Result<Card> {
        self.card.validate()
    }
}

/// Wire form of a card, validated into [`Card`] on decode.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardRecord {
    name: String,
    pronunciation: String,
    description: String,
    kinds: CardKinds,
    #[serde(default)]
    race: Option<Race>,
    #[serde(default)]
    attribute: Option<Attribute>,
    #[serde(default)]
    level: Option<Level>,
    #[serde(default)]
    rank: Option<Rank>,
    #[serde(default)]
    pendulum_scale: Option<PendulumScale>,
    #[serde(default)]
    link: Option<LinkMarkers>,
    #[serde(default)]
    attack: Option<Attack>,
    #[serde(default)]
    defence: Option<Defence>,
}

impl TryFrom<CardRecord> for Card {
    type Error = CardError;

    fn try_from(r: CardRecord) -> Result<Self> {
        Card {
            name: r.name,
            pronunciation: r.pronunciation,
            description: r.description,
            kinds: r.kinds,
            race: r.race,
            attribute: r.attribute,
            level: r.level,
            rank: r.rank,
            pendulum_scale: r.pendulum_scale,
            link: r.link,
            attack: r.attack,
            defence: r.defence,
        }
        .validate()
    }
}
