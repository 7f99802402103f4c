//! The aggregated result table.
//!
//! Maps author → unit name → recorded outcomes. The table is owned and
//! mutated only by the runner's controlling context; readers get shared
//! references. When the same (author, unit) cell is targeted by more than
//! one spec, [`RecordPolicy`] decides whether earlier outcomes survive.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// What to do when a cell already holds an outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordPolicy {
    /// Keep only the latest outcome per cell (the original semantics).
    #[default]
    Overwrite,
    /// Keep every outcome in record order.
    Append,
}

type Cells = BTreeMap<String, Vec<Outcome>>;

/// Author-keyed table of invocation outcomes.
#[derive(Debug, Default)]
pub struct ResultTable {
    policy: RecordPolicy,
    rows: BTreeMap<String, Cells>,
}

impl ResultTable {
    #[must_use]
    pub fn new(policy: RecordPolicy) -> Self {
        Self {
            policy,
            rows: BTreeMap::new(),
        }
    }

    /// Record one outcome for `(author, unit)`.
    pub fn record(&mut self, author: &str, unit: &str, outcome: Outcome) {
        let cell = self
            .rows
            .entry(author.to_owned())
            .or_default()
            .entry(unit.to_owned())
            .or_default();
        if self.policy == RecordPolicy::Overwrite {
            cell.clear();
        }
        cell.push(outcome);
    }

    /// Latest outcome recorded for `(author, unit)`, if any.
    #[must_use]
    pub fn latest(&self, author: &str, unit: &str) -> Option<&Outcome> {
        self.rows.get(author)?.get(unit)?.last()
    }

    /// All outcomes recorded for `(author, unit)` in record order.
    #[must_use]
    pub fn history(&self, author: &str, unit: &str) -> &[Outcome] {
        self.rows
            .get(author)
            .and_then(|cells| cells.get(unit))
            .map_or(&[], Vec::as_slice)
    }

    /// Iterate rows as (author, unit → outcomes), in author order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cells)> {
        self.rows.iter().map(|(author, cells)| (author.as_str(), cells))
    }

    #[must_use]
    pub fn authors(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub const fn policy(&self) -> RecordPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::TestSpec;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeMap as Map;
    use std::time::Duration;

    fn outcome(result: i64) -> Outcome {
        let spec = TestSpec::expecting("f", vec![], Map::new(), json!(result));
        Outcome::completed(&spec, json!(result), Duration::from_millis(1))
    }

    #[test]
    fn overwrite_keeps_only_latest() {
        let mut table = ResultTable::new(RecordPolicy::Overwrite);
        table.record("alice", "f", outcome(1));
        table.record("alice", "f", outcome(2));
        assert_eq!(table.history("alice", "f").len(), 1);
        assert_eq!(table.latest("alice", "f").unwrap().result, Some(json!(2)));
    }

    #[test]
    fn append_keeps_every_outcome() {
        let mut table = ResultTable::new(RecordPolicy::Append);
        table.record("alice", "f", outcome(1));
        table.record("alice", "f", outcome(2));
        assert_eq!(table.history("alice", "f").len(), 2);
        assert_eq!(table.latest("alice", "f").unwrap().result, Some(json!(2)));
    }

    #[test]
    fn missing_cells_read_as_empty() {
        let table = ResultTable::default();
        assert!(table.latest("alice", "f").is_none());
        assert!(table.history("alice", "f").is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn rows_iterate_in_author_order() {
        let mut table = ResultTable::default();
        table.record("bob", "f", outcome(1));
        table.record("alice", "f", outcome(2));
        let authors: Vec<&str> = table.iter().map(|(author, _)| author).collect();
        assert_eq!(authors, vec!["alice", "bob"]);
    }
}
