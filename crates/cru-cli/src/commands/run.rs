//! `cru run` — evaluate a suite against every discovered submission.

use anyhow::Context;
use cru_config::{CrucibleConfig, SuiteFile};
use cru_discover::{collect_artifacts, DiscoveryStrategy, FunctionDiscovery};
use cru_runner::{render_json, Runner};

use crate::cli::RunArgs;

pub async fn handle(args: &RunArgs, config: &CrucibleConfig) -> anyhow::Result<()> {
    let suite = SuiteFile::from_path(&args.suite)
        .with_context(|| format!("loading suite '{}'", args.suite.display()))?;
    let specs = suite.into_specs();
    if specs.is_empty() {
        anyhow::bail!("suite '{}' defines no cases", args.suite.display());
    }

    let root = args.dir.as_ref().unwrap_or(&config.submissions_dir);
    let artifacts = collect_artifacts(root);
    tracing::info!(
        root = %root.display(),
        artifacts = artifacts.len(),
        cases = specs.len(),
        "starting run"
    );

    let strategies: Vec<Box<dyn DiscoveryStrategy>> = vec![Box::new(
        FunctionDiscovery::with_budget(config.timeouts.load_budget()),
    )];

    let mut runner = Runner::new()
        .invoke_budget(config.timeouts.invoke_budget())
        .record_policy(config.record_policy);
    runner.discover_all(&artifacts, &strategies).await;

    let table = runner.run_all(&specs).await?;
    let report = render_json(&table)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &report)
                .with_context(|| format!("writing report to '{}'", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => println!("{report}"),
    }
    Ok(())
}
