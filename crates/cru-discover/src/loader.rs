//! Bounded artifact loading.
//!
//! Each load runs in its own blocking worker, awaited with a timeout by the
//! controlling task. File reading, compilation, and the one-shot body
//! evaluation all count against the load budget. A load that exceeds the
//! budget is reported as failed and its worker is asked to stop through the
//! script interrupt flag; the controller does not wait for it further.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use cru_script::{source_id, InterruptFlag, LoadedScript};

use crate::error::LoadError;

/// Default wall-clock budget for loading one artifact.
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(15);

/// Load one artifact into a shareable [`LoadedScript`] within `budget`.
///
/// # Errors
///
/// See [`LoadError`]; every variant names the artifact, and none of them
/// should abort a multi-artifact run.
pub async fn load(path: &Path, budget: Duration) -> Result<Arc<LoadedScript>, LoadError> {
    let flag = InterruptFlag::new();
    let worker_flag = flag.clone();
    let worker_path = path.to_path_buf();

    let worker = tokio::task::spawn_blocking(move || {
        let source = std::fs::read_to_string(&worker_path).map_err(|source| LoadError::Io {
            path: worker_path.clone(),
            source,
        })?;
        let id = source_id(&worker_path);
        cru_script::load_source(&source, &id, &worker_flag).map_err(|source| {
            LoadError::Script {
                path: worker_path.clone(),
                source,
            }
        })
    });

    match tokio::time::timeout(budget, worker).await {
        Ok(Ok(Ok(script))) => {
            if script.author().is_none() {
                return Err(LoadError::NoAuthor {
                    path: path.to_path_buf(),
                });
            }
            tracing::debug!(
                path = %path.display(),
                author = script.author().unwrap_or_default(),
                functions = script.functions().len(),
                "artifact loaded"
            );
            Ok(Arc::new(script))
        }
        Ok(Ok(Err(error))) => Err(error),
        Ok(Err(join_error)) => Err(LoadError::Worker {
            path: path.to_path_buf(),
            message: join_error.to_string(),
        }),
        Err(_elapsed) => {
            flag.interrupt();
            Err(LoadError::Timeout {
                path: path.to_path_buf(),
                budget,
            })
        }
    }
}
