//! Per-card deck quota.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::CardError;

/// Maximum number of copies of a card allowed in a deck.
///
/// Serialized as the copy count (`0`..=`3`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LimitRegulation {
    /// 禁止: may not be used.
    Prohibited = 0,
    /// 制限: one copy.
    Limited = 1,
    /// 準制限: two copies.
    SemiLimited = 2,
    /// 無制限: three copies.
    #[default]
    Unlimited = 3,
}

impl LimitRegulation {
    pub const ALL: [LimitRegulation; 4] = [
        LimitRegulation::Prohibited,
        LimitRegulation::Limited,
        LimitRegulation::SemiLimited,
        LimitRegulation::Unlimited,
    ];

    /// Copies allowed in a deck.
    #[must_use]
    pub const fn max_adoptable_count(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            LimitRegulation::Prohibited => "禁止",
            LimitRegulation::Limited => "制限",
            LimitRegulation::SemiLimited => "準制限",
            LimitRegulation::Unlimited => "無制限",
        }
    }
}

impl TryFrom<u8> for LimitRegulation {
    type Error = CardError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        match count {
            0 => Ok(LimitRegulation::Prohibited),
            1 => Ok(LimitRegulation::Limited),
            2 => Ok(LimitRegulation::SemiLimited),
            3 => Ok(LimitRegulation::Unlimited),
            _ => Err(CardError::invalid_argument(format!(
                "limit regulation must be 0..=3, got {count}"
            ))),
        }
    }
}

impl From<LimitRegulation> for u8 {
    fn from(regulation: LimitRegulation) -> Self {
        regulation.max_adoptable_count()
    }
}

impl fmt::Display for LimitRegulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(LimitRegulation::Prohibited.max_adoptable_count(), 0);
        assert_eq!(LimitRegulation::Limited.max_adoptable_count(), 1);
        assert_eq!(LimitRegulation::SemiLimited.max_adoptable_count(), 2);
        assert_eq!(LimitRegulation::Unlimited.max_adoptable_count(), 3);
        assert_eq!(LimitRegulation::default(), LimitRegulation::Unlimited);
    }

    #[test]
    fn test_try_from() {
        for regulation in LimitRegulation::ALL {
            let count = regulation.max_adoptable_count();
            assert_eq!(LimitRegulation::try_from(count).unwrap(), regulation);
        }
        assert!(LimitRegulation::try_from(4).is_err());
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&LimitRegulation::Limited).unwrap(), "1");
        let decoded: LimitRegulation = serde_json::from_str("2").unwrap();
        assert_eq!(decoded, LimitRegulation::SemiLimited);
        assert!(serde_json::from_str::<LimitRegulation>("5").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(LimitRegulation::SemiLimited.to_string(), "準制限");
    }
}
