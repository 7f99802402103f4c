//! End-to-end pipeline: walk a submissions tree, discover units per author,
//! evaluate a spec list, and render the JSON report.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use cru_core::TestSpec;
use cru_discover::{collect_artifacts, DiscoveryStrategy, FunctionDiscovery};
use cru_runner::{render_json, Runner};
use serde_json::{json, Value};

fn write_artifact(root: &Path, name: &str, source: &str) {
    std::fs::write(root.join(name), source).expect("artifact should write");
}

fn strategies() -> Vec<Box<dyn DiscoveryStrategy>> {
    vec![Box::new(FunctionDiscovery::new())]
}

#[tokio::test]
async fn grades_a_mixed_submissions_tree() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_artifact(
        dir.path(),
        "alice.rhai",
        r#"
            const AUTHOR = "alice";
            fn sum3(a, b, c) { a + b + c }
            fn shout(s) { s.to_upper() }
        "#,
    );
    write_artifact(
        dir.path(),
        "bob.rhai",
        r#"
            const AUTHOR = "bob";
            fn shout(s) { s }
        "#,
    );
    // Ignored: wrong extension, reserved prefix, broken, authorless.
    write_artifact(dir.path(), "notes.txt", "not a submission");
    write_artifact(dir.path(), "__fixture__.rhai", "fn x() { 0 }");
    write_artifact(dir.path(), "broken.rhai", "fn broken( {");
    write_artifact(dir.path(), "anon.rhai", "fn f() { 1 }");

    let artifacts = collect_artifacts(dir.path());
    assert_eq!(artifacts.len(), 4, "txt and __-prefixed files are filtered");

    let mut runner = Runner::new().invoke_budget(Duration::from_secs(2));
    runner.discover_all(&artifacts, &strategies()).await;

    let specs = vec![
        TestSpec::expecting(
            "sum3",
            vec![json!(1), json!(2), json!(3)],
            BTreeMap::new(),
            json!(6),
        ),
        TestSpec::expecting("shout", vec![json!("hey")], BTreeMap::new(), json!("HEY")),
    ];
    let table = runner.run_all(&specs).await.expect("run succeeds");

    let report = render_json(&table).expect("report renders");
    let doc: Value = serde_json::from_str(&report).expect("valid JSON");

    // alice: both cases attempted, both pass.
    assert_eq!(doc["alice"]["sum3"]["passed"], json!(true));
    assert_eq!(doc["alice"]["shout"]["passed"], json!(true));

    // bob: no sum3 unit, and a shout that returns the wrong value.
    assert_eq!(doc["bob"]["sum3"]["passed"], json!(false));
    assert!(
        doc["bob"]["sum3"]["error"]
            .as_str()
            .expect("error is textual")
            .contains("unit not found")
    );
    assert_eq!(doc["bob"]["shout"]["passed"], json!(false));
    assert_eq!(doc["bob"]["shout"]["result"], json!("hey"));

    // Broken and authorless artifacts never became authors.
    assert!(doc.get("broken").is_none());
    assert_eq!(doc.as_object().expect("object").len(), 2);
}
