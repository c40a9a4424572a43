//! Path utilities
//!
//! Wildcard detection, pattern splitting and lexical absolutisation.

use std::path::{Component, Path, PathBuf};

/// Check if a pattern contains a wildcard character (`*` or `?`)
pub fn has_wildcard(pattern: &str) -> bool {
    pattern.contains(['*', '?'])
}

/// Split a wildcard pattern into its directory part and file-name part.
///
/// The split happens at the last path separator. An empty directory part is
/// returned as `None` (meaning the current directory); an empty file-name part
/// becomes `*`.
pub fn split_pattern(pattern: &str) -> (Option<&str>, &str) {
    let (dir, name) = match pattern.rfind(std::path::is_separator) {
        // Keep the separator itself when the pattern is rooted, e.g. "/*.log"
        Some(0) => (Some(&pattern[..1]), &pattern[1..]),
        Some(idx) => (Some(&pattern[..idx]), &pattern[idx + 1..]),
        None => (None, pattern),
    };

    let name = if name.is_empty() { "*" } else { name };
    (dir.filter(|d| !d.is_empty()), name)
}

/// Make a path absolute against `base` and collapse `.`/`..` components
/// without touching the filesystem (symlinks are kept as-is).
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_lexically(path)
    } else {
        normalize_lexically(&base.join(path))
    }
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Popping past the root is a no-op, matching how OSes treat "/.."
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Base file name as a string (lossy), empty when the path has none
pub fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
