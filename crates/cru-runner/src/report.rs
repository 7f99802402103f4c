//! JSON rendering of a result table.
//!
//! The rendered document is a plain mapping of mappings: author → unit name
//! → the latest outcome for that cell, with the error field as its textual
//! description. Key order is stable (authors and units are sorted).

use cru_core::ResultTable;
use serde_json::{Map, Value};

use crate::error::ReportError;

/// Render the latest outcome of every cell as pretty-printed JSON.
///
/// # Errors
///
/// [`ReportError::Serialize`] when an outcome value cannot serialize.
pub fn render_json(table: &ResultTable) -> Result<String, ReportError> {
    let mut root = Map::new();
    for (author, cells) in table.iter() {
        let mut row = Map::new();
        for (unit, outcomes) in cells {
            if let Some(latest) = outcomes.last() {
                row.insert(unit.clone(), serde_json::to_value(latest)?);
            }
        }
        root.insert(author.to_owned(), Value::Object(row));
    }
    Ok(serde_json::to_string_pretty(&Value::Object(root))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cru_core::{Outcome, RecordPolicy, TestSpec};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeMap;
    use std::time::Duration;

    #[test]
    fn renders_author_unit_outcome_nesting() {
        let spec = TestSpec::expecting(
            "sum3",
            vec![json!(1), json!(2), json!(3)],
            BTreeMap::new(),
            json!(6),
        );
        let mut table = ResultTable::new(RecordPolicy::Overwrite);
        table.record(
            "alice",
            "sum3",
            Outcome::completed(&spec, json!(6), Duration::from_millis(2)),
        );
        table.record("bob", "sum3", Outcome::not_found(&spec, "bob"));

        let rendered = render_json(&table).expect("table renders");
        let doc: Value = serde_json::from_str(&rendered).expect("valid JSON");

        assert_eq!(doc["alice"]["sum3"]["passed"], json!(true));
        assert_eq!(doc["alice"]["sum3"]["result"], json!(6));
        assert_eq!(doc["alice"]["sum3"]["args"], json!([1, 2, 3]));
        assert_eq!(doc["bob"]["sum3"]["passed"], json!(false));
        let error = doc["bob"]["sum3"]["error"]
            .as_str()
            .expect("error renders as text");
        assert!(error.contains("unit not found"));
    }

    #[test]
    fn empty_table_renders_an_empty_document() {
        let table = ResultTable::default();
        assert_eq!(render_json(&table).expect("renders"), "{}");
    }
}
