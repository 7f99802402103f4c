//! Submission walker.
//!
//! Recursively collects candidate artifact paths under a submissions root.
//! Submission trees are not git projects, so the standard gitignore-driven
//! filters are disabled; the only rules are the recognized extension and the
//! reserved `__` filename prefix.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Extension a submission file must carry.
pub const ARTIFACT_EXTENSION: &str = "rhai";

/// Filename prefix reserved for non-submission metadata files.
const RESERVED_PREFIX: &str = "__";

/// Collect every candidate artifact under `root`, one entry per file.
///
/// Walk errors (unreadable directories, broken links) are logged and
/// skipped; order is whatever the walker yields and is not relied upon.
#[must_use]
pub fn collect_artifacts(root: &Path) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(false)
        .build();

    let mut artifacts = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_some_and(|ft| ft.is_file())
                    && is_artifact(entry.path())
                {
                    artifacts.push(entry.into_path());
                }
            }
            Err(error) => {
                tracing::warn!(%error, "skipping unreadable walk entry");
            }
        }
    }
    artifacts
}

fn is_artifact(path: &Path) -> bool {
    let has_extension = path
        .extension()
        .is_some_and(|ext| ext == ARTIFACT_EXTENSION);
    let reserved = path
        .file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with(RESERVED_PREFIX));
    has_extension && !reserved
}
