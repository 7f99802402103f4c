//! `cru list` — discovery-only view of submissions.

use cru_config::CrucibleConfig;
use cru_discover::{collect_artifacts, DiscoveryStrategy, FunctionDiscovery};
use cru_runner::Runner;

use crate::cli::ListArgs;

pub async fn handle(args: &ListArgs, config: &CrucibleConfig) -> anyhow::Result<()> {
    let root = args.dir.as_ref().unwrap_or(&config.submissions_dir);
    let artifacts = collect_artifacts(root);

    let strategies: Vec<Box<dyn DiscoveryStrategy>> = vec![Box::new(
        FunctionDiscovery::with_budget(config.timeouts.load_budget()),
    )];

    let mut runner = Runner::new();
    runner.discover_all(&artifacts, &strategies).await;

    let Some(discovered) = runner.discovered() else {
        return Ok(());
    };
    for (author, units) in discovered {
        println!("{author}:");
        for (name, unit) in units {
            println!("  {name}/{}", unit.arity());
        }
    }
    Ok(())
}
