use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Returns at most `limit` files matching `pattern`, newest first.
///
/// Journal files are named so that sorting their paths in reverse gives reverse
/// chronological order (`2022-03.md`, `2022-02.md`, ...). An invalid pattern is an error;
/// no match is just an empty list.
pub fn find_recent_files(pattern: &str, limit: usize) -> Result<Vec<PathBuf>> {
    let paths =
        glob::glob(pattern).with_context(|| format!("invalid source pattern `{pattern}`"))?;

    let mut files: Vec<PathBuf> = paths
        .filter_map(|path| match path {
            Ok(path) if path.is_file() => Some(path),
            Ok(path) => {
                debug!("ignoring {}, not a file", path.display());
                None
            }
            Err(e) => {
                warn!("skipping unreadable path: {e}");
                None
            }
        })
        .collect();

    files.sort_by(|a, b| b.as_os_str().cmp(a.as_os_str()));
    files.truncate(limit);
    debug!("selected {} file(s) for `{pattern}`", files.len());
    Ok(files)
}
