//! Remote Path Helpers
//!
//! Remote paths are plain slash-separated strings regardless of the local
//! platform's separator.

use std::path::{Component, Path};

/// Join a local relative path onto a remote base directory
pub fn join_remote(base: &str, relative: &Path) -> String {
    let mut out = String::from(base.trim_end_matches('/'));
    let mut first = out.is_empty() && !base.starts_with('/');

    for component in relative.components() {
        if let Component::Normal(part) = component {
            if !first {
                out.push('/');
            }
            first = false;
            out.push_str(&part.to_string_lossy());
        }
    }

    out
}

/// Parent directory of a remote file path, `None` for a bare file name
pub fn parent(path: &str) -> Option<&str> {
    path.rsplit_once('/').map(|(dir, _)| dir)
}

/// Every directory prefix of `dir`, from the root down to `dir` itself.
///
/// `/www/a/b` yields `/www`, `/www/a`, `/www/a/b`. A relative `www/a` stays
/// relative: `www`, `www/a`. Empty segments are skipped.
pub fn dir_prefixes(dir: &str) -> Vec<String> {
    let absolute = dir.starts_with('/');
    let mut current = String::new();
    let mut prefixes = Vec::new();

    for segment in dir.split('/').filter(|s| !s.is_empty()) {
        if absolute || !current.is_empty() {
            current.push('/');
        }
        current.push_str(segment);
        prefixes.push(current.clone());
    }

    prefixes
}
