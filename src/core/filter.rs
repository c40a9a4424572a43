//! Exclusion filter

use std::path::{Path, PathBuf};

use crate::core::paths::file_name_lossy;

/// True when the base file name contains any of the exclude substrings.
/// Matching is literal and case-sensitive; directory components are ignored.
pub fn should_exclude(path: &Path, exclude_patterns: &[String]) -> bool {
    if exclude_patterns.is_empty() {
        return false;
    }
    let file_name = file_name_lossy(path);
    exclude_patterns
        .iter()
        .any(|pattern| file_name.contains(pattern.as_str()))
}

/// Split resolved files into (kept, excluded), preserving order
pub fn apply_exclusions(
    files: Vec<PathBuf>,
    exclude_patterns: &[String],
) -> (Vec<PathBuf>, Vec<PathBuf>) {
    files
        .into_iter()
        .partition(|path| !should_exclude(path, exclude_patterns))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_excludes_by_base_name_substring() {
        assert!(should_exclude(Path::new("a/b/log.txt"), &patterns(&["log"])));
        assert!(should_exclude(Path::new("a/b/catalog.txt"), &patterns(&["log"])));
    }

    #[test]
    fn test_directory_names_do_not_trigger() {
        assert!(!should_exclude(Path::new("/var/log/app.txt"), &patterns(&["log"])));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!should_exclude(Path::new("LOG.txt"), &patterns(&["log"])));
    }

    #[test]
    fn test_no_wildcard_semantics() {
        assert!(!should_exclude(Path::new("a.txt"), &patterns(&["*.txt"])));
        assert!(should_exclude(Path::new("x*.txt"), &patterns(&["*"])));
    }

    #[test]
    fn test_empty_patterns_keep_everything() {
        assert!(!should_exclude(Path::new("anything"), &[]));
    }

    #[test]
    fn test_apply_exclusions_preserves_order() {
        let files = vec![
            PathBuf::from("/p/c.txt"),
            PathBuf::from("/p/b.log"),
            PathBuf::from("/p/a.txt"),
            PathBuf::from("/p/tmp.txt"),
        ];
        let (kept, excluded) = apply_exclusions(files, &patterns(&["log", "tmp"]));
        assert_eq!(kept, vec![PathBuf::from("/p/c.txt"), PathBuf::from("/p/a.txt")]);
        assert_eq!(
            excluded,
            vec![PathBuf::from("/p/b.log"), PathBuf::from("/p/tmp.txt")]
        );
    }
}
