//! Pattern resolution
//!
//! Turns command-line patterns into an ordered, deduplicated list of absolute
//! file paths. A pattern that fails to resolve contributes no files; its error
//! is collected and resolution carries on with the next pattern.

use globset::{GlobBuilder, GlobMatcher};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::ResolveError;
use crate::core::paths::{absolutize, has_wildcard, split_pattern};

/// Outcome of resolving every pattern
#[derive(Debug, Default)]
pub struct Resolution {
    /// Absolute paths in resolution order, first occurrence wins
    pub files: Vec<PathBuf>,

    /// Per-pattern failures in the order they occurred
    pub errors: Vec<ResolveError>,
}

/// Resolve all patterns relative to `base`
pub fn resolve_patterns(base: &Path, patterns: &[String]) -> Resolution {
    let mut resolution = Resolution::default();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for pattern in patterns {
        match resolve_pattern(base, pattern) {
            Ok(paths) => {
                for path in paths {
                    if seen.insert(path.clone()) {
                        resolution.files.push(path);
                    }
                }
            }
            Err(e) => {
                tracing::debug!(pattern = %pattern, error = %e, "pattern contributed no files");
                resolution.errors.push(e);
            }
        }
    }

    resolution
}

/// Resolve one pattern, literal or wildcard
pub fn resolve_pattern(base: &Path, pattern: &str) -> Result<Vec<PathBuf>, ResolveError> {
    if has_wildcard(pattern) {
        return expand_wildcard(base, pattern);
    }

    let full_path = absolutize(base, Path::new(pattern));
    if full_path.is_file() {
        Ok(vec![full_path])
    } else {
        Err(ResolveError::FileMissing(full_path))
    }
}

/// List the files in the pattern's directory (non-recursively) whose names
/// match the pattern's file-name part
pub fn expand_wildcard(base: &Path, pattern: &str) -> Result<Vec<PathBuf>, ResolveError> {
    let (dir_part, name_part) = split_pattern(pattern);
    let dir = match dir_part {
        Some(d) => absolutize(base, Path::new(d)),
        None => base.to_path_buf(),
    };

    if !dir.is_dir() {
        return Err(ResolveError::DirectoryMissing(dir));
    }

    let matcher = compile_name_matcher(name_part).map_err(|e| ResolveError::Expand {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut matched = Vec::new();
    let walker = WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| ResolveError::Expand {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        // Symlinks to files count as files
        if !entry.path().is_file() {
            continue;
        }

        if matcher.is_match(entry.file_name()) {
            matched.push(entry.into_path());
        }
    }

    tracing::debug!(pattern = %pattern, dir = %dir.display(), count = matched.len(), "expanded wildcard");
    Ok(matched)
}

/// Compile a `*`/`?` file-name pattern. Other glob metacharacters, and `\`,
/// are matched literally.
fn compile_name_matcher(name_pattern: &str) -> Result<GlobMatcher, globset::Error> {
    let glob = GlobBuilder::new(&escape_glob_meta(name_pattern))
        .literal_separator(true)
        .backslash_escape(false)
        .case_insensitive(cfg!(windows))
        .build()?;
    Ok(glob.compile_matcher())
}

fn escape_glob_meta(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        match c {
            '[' | ']' | '{' | '}' => {
                escaped.push('[');
                escaped.push(c);
                escaped.push(']');
            }
            _ => escaped.push(c),
        }
    }
    escaped
}
