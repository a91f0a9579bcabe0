//! Limit regulation table: card name to deck quota.
//!
//! The table is stored grouped by quota, which is also its persisted form:
//!
//! ```json
//! { "0": ["強欲な壺"], "1": ["サンダー・ボルト"], "2": [] }
//! ```
//!
//! Lookups go through a reverse index from name to quota. The index is
//! built at most once, on the first lookup or insertion, and is safe to
//! build from several threads at the same time. Names that appear in no
//! group are unlimited.
//!
//! ```
//! use yugioh_card_db::regulation::{LimitRegulation, RegulationTable};
//!
//! let mut table = RegulationTable::new();
//! table.add("強欲な壺", LimitRegulation::Prohibited);
//!
//! assert_eq!(table.get("強欲な壺"), LimitRegulation::Prohibited);
//! assert_eq!(table.get("青眼の白龍"), LimitRegulation::Unlimited);
//! ```

use std::collections::BTreeMap;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::limit::LimitRegulation;
use crate::core::{CardError, Result};

/// Mapping from card name to [`LimitRegulation`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "RegulationRecord", into = "RegulationRecord")]
pub struct RegulationTable {
    groups: BTreeMap<LimitRegulation, Vec<String>>,
    index: OnceLock<FxHashMap<String, LimitRegulation>>,
}

impl RegulationTable {
    /// Create an empty table. Every card is unlimited.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` under `regulation`, replacing any earlier quota.
    ///
    /// A name is listed in at most one group. `Unlimited` is the default,
    /// so recording it only removes the name from its listed group.
    pub fn add(&mut self, name: impl Into<String>, regulation: LimitRegulation) {
        let name = name.into();
        tracing::trace!(%name, %regulation, "adding limit regulation");

        let mut index = self
            .index
            .take()
            .unwrap_or_else(|| build_index(&self.groups));
        let previous = if regulation == LimitRegulation::Unlimited {
            index.remove(&name)
        } else {
            index.insert(name.clone(), regulation)
        };
        self.index = OnceLock::from(index);

        if previous.is_some() {
            for names in self.groups.values_mut() {
                names.retain(|n| *n != name);
            }
            self.groups.retain(|_, names| !names.is_empty());
        }
        if regulation != LimitRegulation::Unlimited {
            self.groups.entry(regulation).or_default().push(name);
        }
    }

    /// Quota for `name`, or `Unlimited` if it is not listed.
    #[must_use]
    pub fn get(&self, name: &str) -> LimitRegulation {
        self.index()
            .get(name)
            .copied()
            .unwrap_or(LimitRegulation::Unlimited)
    }

    /// Names listed under `regulation`, in insertion order.
    #[must_use]
    pub fn names(&self, regulation: LimitRegulation) -> &[String] {
        self.groups
            .get(&regulation)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct listed names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }

    /// Iterate over every (quota, name) entry, grouped by quota.
    pub fn iter(&self) -> impl Iterator<Item = (LimitRegulation, &str)> {
        self.groups
            .iter()
            .flat_map(|(reg, names)| names.iter().map(move |n| (*reg, n.as_str())))
    }

    /// Decode from the persisted form.
    pub fn from_json(json: &str) -> Result<Self> {
        let table: RegulationTable = serde_json::from_str(json)?;
        tracing::debug!(groups = table.groups.len(), "decoded limit regulation table");
        Ok(table)
    }

    /// Encode to the persisted form.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(CardError::Encode)
    }

    fn index(&self) -> &FxHashMap<String, LimitRegulation> {
        self.index.get_or_init(|| build_index(&self.groups))
    }
}

fn build_index(
    groups: &BTreeMap<LimitRegulation, Vec<String>>,
) -> FxHashMap<String, LimitRegulation> {
    let mut index = FxHashMap::default();
    for (regulation, names) in groups {
        for name in names {
            index.insert(name.clone(), *regulation);
        }
    }
    tracing::debug!(entries = index.len(), "built limit regulation index");
    index
}

/// Persisted form: quota keys `"0"`, `"1"`, `"2"` mapping to name lists.
#[derive(Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegulationRecord {
    #[serde(rename = "0", default)]
    prohibited: Vec<String>,
    #[serde(rename = "1", default)]
    limited: Vec<String>,
    #[serde(rename = "2", default)]
    semi_limited: Vec<String>,
}

impl From<RegulationRecord> for RegulationTable {
    fn from(record: RegulationRecord) -> Self {
        let groups = [
            (LimitRegulation::Prohibited, record.prohibited),
            (LimitRegulation::Limited, record.limited),
            (LimitRegulation::SemiLimited, record.semi_limited),
        ]
        .into_iter()
        .filter(|(_, names)| !names.is_empty())
        .collect();

        Self {
            groups,
            index: OnceLock::new(),
        }
    }
}

impl From<RegulationTable> for RegulationRecord {
    fn from(mut table: RegulationTable) -> Self {
        let mut take = |reg: LimitRegulation| table.groups.remove(&reg).unwrap_or_default();
        RegulationRecord {
            prohibited: take(LimitRegulation::Prohibited),
            limited: take(LimitRegulation::Limited),
            semi_limited: take(LimitRegulation::SemiLimited),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_get() {
        let mut table = RegulationTable::new();
        table.add("Pot of Greed", LimitRegulation::Prohibited);

        assert_eq!(table.get("Pot of Greed"), LimitRegulation::Prohibited);
        assert_eq!(table.get("Blue-Eyes White Dragon"), LimitRegulation::Unlimited);
    }

    #[test]
    fn test_empty_table() {
        let table = RegulationTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.get("anything"), LimitRegulation::Unlimited);
    }

    #[test]
    fn test_add_after_lookup_keeps_index_current() {
        let mut table = RegulationTable::new();
        table.add("A", LimitRegulation::Limited);
        assert_eq!(table.get("B"), LimitRegulation::Unlimited);

        table.add("B", LimitRegulation::SemiLimited);
        assert_eq!(table.get("A"), LimitRegulation::Limited);
        assert_eq!(table.get("B"), LimitRegulation::SemiLimited);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_readd_moves_name_between_groups() {
        let mut table = RegulationTable::new();
        table.add("A", LimitRegulation::Prohibited);
        table.add("A", LimitRegulation::Limited);

        assert_eq!(table.get("A"), LimitRegulation::Limited);
        assert!(table.names(LimitRegulation::Prohibited).is_empty());
        assert_eq!(table.names(LimitRegulation::Limited), &["A".to_string()]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.iter().count(), 1);
    }

    #[test]
    fn test_readd_same_quota_lists_once() {
        let mut table = RegulationTable::new();
        table.add("A", LimitRegulation::Limited);
        table.add("A", LimitRegulation::Limited);

        assert_eq!(table.names(LimitRegulation::Limited), &["A".to_string()]);
    }

    #[test]
    fn test_unlimited_override_unlists_name() {
        let mut table = RegulationTable::new();
        table.add("B", LimitRegulation::Limited);
        table.add("B", LimitRegulation::Unlimited);

        assert_eq!(table.get("B"), LimitRegulation::Unlimited);
        assert_eq!(table.len(), 0);
        assert!(table.is_empty());
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn test_override_survives_json() {
        let mut table = RegulationTable::new();
        table.add("A", LimitRegulation::Limited);
        table.add("A", LimitRegulation::Prohibited);
        table.add("B", LimitRegulation::Limited);
        table.add("B", LimitRegulation::Unlimited);

        let reloaded = RegulationTable::from_json(&table.to_json().unwrap()).unwrap();
        assert_eq!(reloaded.get("A"), LimitRegulation::Prohibited);
        assert_eq!(reloaded.get("B"), LimitRegulation::Unlimited);
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn test_override_after_load() {
        let mut table = RegulationTable::from_json(r#"{"2": ["A", "C"]}"#).unwrap();
        table.add("A", LimitRegulation::Limited);

        assert_eq!(table.get("A"), LimitRegulation::Limited);
        assert_eq!(table.names(LimitRegulation::SemiLimited), &["C".to_string()]);
    }

    #[test]
    fn test_names_and_iter() {
        let mut table = RegulationTable::new();
        table.add("C", LimitRegulation::SemiLimited);
        table.add("A", LimitRegulation::Prohibited);
        table.add("B", LimitRegulation::Prohibited);

        assert_eq!(
            table.names(LimitRegulation::Prohibited),
            &["A".to_string(), "B".to_string()]
        );
        assert!(table.names(LimitRegulation::Limited).is_empty());

        let entries: Vec<_> = table.iter().collect();
        assert_eq!(
            entries,
            vec![
                (LimitRegulation::Prohibited, "A"),
                (LimitRegulation::Prohibited, "B"),
                (LimitRegulation::SemiLimited, "C"),
            ]
        );
    }

    #[test]
    fn test_from_json_lazy_index() {
        let table = RegulationTable::from_json(
            r#"{"0": ["強欲な壺", "天使の施し"], "1": ["サンダー・ボルト"]}"#,
        )
        .unwrap();

        assert!(table.index.get().is_none());
        assert_eq!(table.get("天使の施し"), LimitRegulation::Prohibited);
        assert!(table.index.get().is_some());
        assert_eq!(table.get("サンダー・ボルト"), LimitRegulation::Limited);
        assert_eq!(table.get("ハーピィの羽根帚"), LimitRegulation::Unlimited);
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(RegulationTable::from_json(r#"{"3": ["a"]}"#).unwrap_err().is_decode());
        assert!(RegulationTable::from_json(r#"{"0": "a"}"#).unwrap_err().is_decode());
        assert!(RegulationTable::from_json("[").unwrap_err().is_decode());
    }

    #[test]
    fn test_to_json_skips_unlimited() {
        let mut table = RegulationTable::new();
        table.add("A", LimitRegulation::Prohibited);
        table.add("B", LimitRegulation::Unlimited);

        let value: serde_json::Value = serde_json::from_str(&table.to_json().unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({"0": ["A"], "1": [], "2": []}));
    }

    #[test]
    fn test_concurrent_first_lookup() {
        let table = RegulationTable::from_json(r#"{"2": ["A", "B", "C"]}"#).unwrap();

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    assert_eq!(table.get("B"), LimitRegulation::SemiLimited);
                    assert_eq!(table.get("Z"), LimitRegulation::Unlimited);
                });
            }
        });
        assert_eq!(table.len(), 3);
    }
}
