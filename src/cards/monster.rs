//! Monster-only card statistics.
//!
//! Small immutable value types: race, attribute, level, rank, pendulum
//! scale, link markers, attack and defence. Race and attribute labels are
//! stored without their suffix (`族`, `属性`) and get it back on display.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{CardError, Result};

/// Monster race (種族), e.g. `魔法使い` for `魔法使い族`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Race(String);

impl Race {
    /// Create a race from a label, with or without the trailing `族`.
    pub fn new(label: impl AsRef<str>) -> Result<Self> {
        let name = label.as_ref().trim_end_matches('族');
        if name.is_empty() {
            return Err(CardError::invalid_argument("race label is empty"));
        }
        Ok(Self(name.to_string()))
    }

    /// Label without the suffix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Race {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Race> for String {
    fn from(race: Race) -> Self {
        race.0
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}族", self.0)
    }
}

/// Monster attribute (属性), e.g. `光` for `光属性`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Attribute(String);

impl Attribute {
    /// Create an attribute from a label. Accepts `光`, `光属` and `光属性`.
    pub fn new(label: impl AsRef<str>) -> Result<Self> {
        let name = label.as_ref().replace("属性", "");
        let name = name.trim_end_matches('属');
        if name.is_empty() {
            return Err(CardError::invalid_argument("attribute label is empty"));
        }
        Ok(Self(name.to_string()))
    }

    /// Label without the suffix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Attribute {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Attribute> for String {
    fn from(attribute: Attribute) -> Self {
        attribute.0
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}属性", self.0)
    }
}

/// Monster level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(pub u8);

impl Level {
    #[must_use]
    pub const fn new(level: u8) -> Self {
        Self(level)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "★{}", self.0)
    }
}

/// Xyz monster rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rank(pub u8);

impl Rank {
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        Self(rank)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "★{}", self.0)
    }
}

/// Pendulum scale. The two sides are independent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendulumScale {
    pub red: u8,
    pub blue: u8,
}

impl PendulumScale {
    #[must_use]
    pub const fn new(red: u8, blue: u8) -> Self {
        Self { red, blue }
    }
}

impl fmt::Display for PendulumScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ペンデュラムスケール: 赤{}/青{}", self.red, self.blue)
    }
}

/// One of the eight link arrow directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkMarker {
    Up,
    UpperRight,
    Right,
    LowerRight,
    Down,
    LowerLeft,
    Left,
    UpperLeft,
}

impl LinkMarker {
    /// All directions, clockwise from `Up`. This is the display order.
    pub const ALL: [LinkMarker; 8] = [
        LinkMarker::Up,
        LinkMarker::UpperRight,
        LinkMarker::Right,
        LinkMarker::LowerRight,
        LinkMarker::Down,
        LinkMarker::LowerLeft,
        LinkMarker::Left,
        LinkMarker::UpperLeft,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            LinkMarker::Up => "上",
            LinkMarker::UpperRight => "右上",
            LinkMarker::Right => "右",
            LinkMarker::LowerRight => "右下",
            LinkMarker::Down => "下",
            LinkMarker::LowerLeft => "左下",
            LinkMarker::Left => "左",
            LinkMarker::UpperLeft => "左上",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for LinkMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of active link markers. The link rating is the number of markers.
///
/// ```
/// use yugioh_card_db::cards::{LinkMarker, LinkMarkers};
///
/// let link = LinkMarkers::new(true, false, true, false, false, false, false, false);
/// assert_eq!(link.link_count(), 2);
/// assert!(link.contains(LinkMarker::Right));
/// assert_eq!(link.to_string(), "リンク:2/上/右");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "LinkFlags", into = "LinkFlags")]
pub struct LinkMarkers(u8);

impl LinkMarkers {
    /// Build from one flag per direction, clockwise from up.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        up: bool,
        upper_right: bool,
        right: bool,
        lower_right: bool,
        down: bool,
        lower_left: bool,
        left: bool,
        upper_left: bool,
    ) -> Self {
        let flags = [up, upper_right, right, lower_right, down, lower_left, left, upper_left];
        Self::from_markers(
            LinkMarker::ALL
                .into_iter()
                .zip(flags)
                .filter_map(|(marker, on)| on.then_some(marker)),
        )
    }

    /// Build from the active directions.
    pub fn from_markers(markers: impl IntoIterator<Item = LinkMarker>) -> Self {
        Self(markers.into_iter().fold(0, |bits, m| bits | m.bit()))
    }

    #[must_use]
    pub const fn contains(self, marker: LinkMarker) -> bool {
        self.0 & marker.bit() != 0
    }

    /// Active directions in display order.
    pub fn iter(self) -> impl Iterator<Item = LinkMarker> {
        LinkMarker::ALL.into_iter().filter(move |m| self.contains(*m))
    }

    /// Link rating.
    #[must_use]
    pub const fn link_count(self) -> u32 {
        self.0.count_ones()
    }
}

impl fmt::Display for LinkMarkers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "リンク:{}", self.link_count())?;
        for marker in self.iter() {
            write!(f, "/{marker}")?;
        }
        Ok(())
    }
}

/// Persisted form of [`LinkMarkers`]: one flag per direction.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LinkFlags {
    up: bool,
    upper_right: bool,
    right: bool,
    lower_right: bool,
    down: bool,
    lower_left: bool,
    left: bool,
    upper_left: bool,
}

impl From<LinkFlags> for LinkMarkers {
    fn from(f: LinkFlags) -> Self {
        LinkMarkers::new(
            f.up,
            f.upper_right,
            f.right,
            f.lower_right,
            f.down,
            f.lower_left,
            f.left,
            f.upper_left,
        )
    }
}

impl From<LinkMarkers> for LinkFlags {
    fn from(m: LinkMarkers) -> Self {
        LinkFlags {
            up: m.contains(LinkMarker::Up),
            upper_right: m.contains(LinkMarker::UpperRight),
            right: m.contains(LinkMarker::Right),
            lower_right: m.contains(LinkMarker::LowerRight),
            down: m.contains(LinkMarker::Down),
            lower_left: m.contains(LinkMarker::LowerLeft),
            left: m.contains(LinkMarker::Left),
            upper_left: m.contains(LinkMarker::UpperLeft),
        }
    }
}

/// Token printed on cards whose attack or defence is not fixed.
pub const VARIABLE_TOKEN: &str = "?";

/// Attack or defence value: a fixed number, or `?` on the card.
///
/// JSON form is an integer for fixed values and `"?"` otherwise. Numeric
/// strings such as `"2500"` are accepted when decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Fixed(u32),
    Variable,
}

impl Status {
    /// The fixed value, if any.
    #[must_use]
    pub const fn value(self) -> Option<u32> {
        match self {
            Status::Fixed(n) => Some(n),
            Status::Variable => None,
        }
    }

    /// Parse a textual token: a numeral or `?`.
    pub fn parse(token: &str) -> Result<Self> {
        if token == VARIABLE_TOKEN {
            return Ok(Status::Variable);
        }
        token
            .parse::<u32>()
            .map(Status::Fixed)
            .map_err(|_| CardError::invalid_argument(format!("invalid status token: {token}")))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Fixed(n) => write!(f, "{n}"),
            Status::Variable => f.write_str(VARIABLE_TOKEN),
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Status::Fixed(n) => serializer.serialize_u32(*n),
            Status::Variable => serializer.serialize_str(VARIABLE_TOKEN),
        }
    }
}

struct StatusVisitor;

impl Visitor<'_> for StatusVisitor {
    type Value = Status;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a non-negative integer or \"{VARIABLE_TOKEN}\"")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Status, E> {
        u32::try_from(v)
            .map(Status::Fixed)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Status, E> {
        u32::try_from(v)
            .map(Status::Fixed)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Status, E> {
        Status::parse(v).map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(StatusVisitor)
    }
}

/// Monster attack (攻撃力).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attack(Status);

impl Attack {
    /// Attack printed as `?`.
    pub const VARIABLE: Attack = Attack(Status::Variable);

    #[must_use]
    pub const fn fixed(value: u32) -> Self {
        Self(Status::Fixed(value))
    }

    #[must_use]
    pub const fn status(self) -> Option<u32> {
        self.0.value()
    }

    #[must_use]
    pub const fn is_fixed_status(self) -> bool {
        matches!(self.0, Status::Fixed(_))
    }

    /// Raw token without the label: a numeral or `?`.
    #[must_use]
    pub fn token(self) -> String {
        self.0.to_string()
    }
}

impl From<Status> for Attack {
    fn from(status: Status) -> Self {
        Self(status)
    }
}

impl fmt::Display for Attack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ATK {}", self.0)
    }
}

/// Monster defence (守備力).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Defence(Status);

impl Defence {
    /// Defence printed as `?`.
    pub const VARIABLE: Defence = Defence(Status::Variable);

    #[must_use]
    pub const fn fixed(value: u32) -> Self {
        Self(Status::Fixed(value))
    }

    #[must_use]
    pub const fn status(self) -> Option<u32> {
        self.0.value()
    }

    #[must_use]
    pub const fn is_fixed_status(self) -> bool {
        matches!(self.0, Status::Fixed(_))
    }

    /// Raw token without the label: a numeral or `?`.
    #[must_use]
    pub fn token(self) -> String {
        self.0.to_string()
    }
}

impl From<Status> for Defence {
    fn from(status: Status) -> Self {
        Self(status)
    }
}

impl fmt::Display for Defence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DEF {}", self.0)
    }
}
