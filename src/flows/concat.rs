//! Concatenation flow - resolve, filter, read, write, launch
//!
//! Each phase runs once, in order. Per-pattern and per-file problems are
//! reported and skipped; only "nothing to do" and a failed write stop the
//! flow early.

use std::path::{Path, PathBuf};

use crate::core::error::ReadError;
use crate::core::file_reader::read_head_lines;
use crate::core::filter::apply_exclusions;
use crate::core::options::InvocationOptions;
use crate::core::render::Document;
use crate::core::resolve::resolve_patterns;
use crate::output::launcher::Opener;
use crate::output::writer::write_output;
use crate::report;

/// Everything a single run needs
#[derive(Debug, Clone)]
pub struct ConcatOptions {
    /// Raw file patterns in argument order
    pub patterns: Vec<String>,
    /// Parsed `-exclude=` / `-max=` options
    pub invocation: InvocationOptions,
    /// Directory relative patterns are resolved against
    pub base_dir: PathBuf,
    /// Where the document is written
    pub output_path: PathBuf,
    /// Viewer to launch, `None` to only print the output path
    pub opener: Option<Opener>,
    /// Suppress the summary line
    pub quiet: bool,
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConcatOutcome {
    /// No file survived resolution and exclusion
    NoFiles,
    /// The output file could not be written
    WriteFailed,
    /// The output file was written (and possibly launched)
    Written(ConcatStats),
}

/// Summary of a written document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatStats {
    pub output_path: PathBuf,
    pub files: usize,
    pub lines: usize,
    pub read_failures: usize,
    pub launched: bool,
}

/// Resolve patterns and drop excluded files, reporting resolution problems
pub fn collect_files(base_dir: &Path, patterns: &[String], exclude: &[String]) -> Vec<PathBuf> {
    let resolution = resolve_patterns(base_dir, patterns);
    for error in &resolution.errors {
        report::warn(error.code(), error);
    }

    let (kept, excluded) = apply_exclusions(resolution.files, exclude);
    for path in &excluded {
        tracing::debug!(path = %path.display(), "excluded");
    }
    kept
}

/// Read every file into one document. Unreadable files are skipped and
/// returned alongside the document.
pub fn build_document(files: &[PathBuf], max_lines: usize) -> (Document, Vec<ReadError>) {
    let mut document = Document::new();
    let mut failures = Vec::new();

    for path in files {
        match read_head_lines(path, max_lines) {
            Ok(head) => {
                if head.lossy {
                    report::warn(
                        "LOSSY_UTF8",
                        format!(
                            "File is not valid UTF-8, invalid bytes replaced: {}",
                            path.display()
                        ),
                    );
                }
                if head.truncated {
                    tracing::debug!(path = %path.display(), max_lines, "file truncated to line cap");
                }
                document.push_file(path, &head.lines);
            }
            Err(e) => failures.push(e),
        }
    }

    (document, failures)
}

/// Run the whole flow
pub fn run_concat(opts: &ConcatOptions) -> ConcatOutcome {
    let files = collect_files(
        &opts.base_dir,
        &opts.patterns,
        &opts.invocation.exclude_patterns,
    );
    if files.is_empty() {
        return ConcatOutcome::NoFiles;
    }
    tracing::debug!(count = files.len(), "resolved files");

    let (document, failures) = build_document(&files, opts.invocation.max_lines);
    for failure in &failures {
        report::warn(failure.code(), failure);
    }

    if let Err(e) = write_output(&opts.output_path, document.as_str()) {
        report::error(&e);
        return ConcatOutcome::WriteFailed;
    }

    if !opts.quiet {
        eprintln!(
            "Wrote {} file(s), {} line(s) to {}",
            document.file_count(),
            document.line_count(),
            opts.output_path.display()
        );
    }

    let launched = match &opts.opener {
        Some(opener) => match opener.open(&opts.output_path) {
            Ok(()) => true,
            Err(e) => {
                report::warn(e.code(), &e);
                false
            }
        },
        None => {
            println!("{}", opts.output_path.display());
            false
        }
    };

    ConcatOutcome::Written(ConcatStats {
        output_path: opts.output_path.clone(),
        files: document.file_count(),
        lines: document.line_count(),
        read_failures: failures.len(),
        launched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_lines(path: &Path, count: usize) {
        let content: String = (1..=count).map(|i| format!("line {}\n", i)).collect();
        fs::write(path, content).unwrap();
    }

    fn options(dir: &TempDir, patterns: &[&str], exclude: &[&str], max: usize) -> ConcatOptions {
        ConcatOptions {
            patterns: patterns.iter().map(|s| s.to_string()).collect(),
            invocation: InvocationOptions {
                exclude_patterns: exclude.iter().map(|s| s.to_string()).collect(),
                max_lines: max,
            },
            base_dir: dir.path().to_path_buf(),
            output_path: dir.path().join("out").join("output_utf8.txt"),
            opener: None,
            quiet: true,
        }
    }

    #[test]
    fn test_exclude_and_cap_scenario() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("out")).unwrap();
        write_lines(&dir.path().join("a.txt"), 3);
        write_lines(&dir.path().join("b.log"), 5);

        let opts = options(&dir, &["a.txt", "b.log"], &["log"], 2);
        let stats = match run_concat(&opts) {
            ConcatOutcome::Written(stats) => stats,
            other => panic!("expected a written document, got {:?}", other),
        };
        assert_eq!(stats.files, 1);
        assert_eq!(stats.lines, 2);
        assert!(!stats.launched);

        let a = dir.path().join("a.txt");
        let expected = format!(
            "===== File: {p} =====\nline 1\nline 2\n===== End of {p} =====\n\n",
            p = a.display()
        );
        assert_eq!(fs::read_to_string(&opts.output_path).unwrap(), expected);
    }

    #[test]
    fn test_everything_excluded_is_no_files() {
        let dir = TempDir::new().unwrap();
        write_lines(&dir.path().join("b.log"), 1);

        let opts = options(&dir, &["b.log"], &["log"], 10);
        assert_eq!(run_concat(&opts), ConcatOutcome::NoFiles);
        assert!(!opts.output_path.exists());
    }

    #[test]
    fn test_no_matches_is_no_files() {
        let dir = TempDir::new().unwrap();
        let opts = options(&dir, &["*.none", "missing.txt"], &[], 10);
        assert_eq!(run_concat(&opts), ConcatOutcome::NoFiles);
    }

    #[test]
    fn test_write_failure_stops_run() {
        let dir = TempDir::new().unwrap();
        write_lines(&dir.path().join("a.txt"), 1);

        // "out" directory is never created
        let opts = options(&dir, &["a.txt"], &[], 10);
        assert_eq!(run_concat(&opts), ConcatOutcome::WriteFailed);
    }

    #[test]
    fn test_build_document_skips_unreadable_files() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.txt");
        let gone = dir.path().join("gone.txt");
        write_lines(&good, 2);

        let (document, failures) = build_document(&[gone.clone(), good.clone()], 10);
        assert_eq!(document.file_count(), 1);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].code(), "FILE_NOT_FOUND");
        assert!(!document.as_str().contains("gone.txt"));
    }

    #[test]
    fn test_build_document_exact_line_counts() {
        let dir = TempDir::new().unwrap();
        let short = dir.path().join("short.txt");
        let long = dir.path().join("long.txt");
        write_lines(&short, 2);
        write_lines(&long, 50);

        let (document, _) = build_document(&[short, long], 10);
        assert_eq!(document.line_count(), 2 + 10);
    }

    #[test]
    fn test_collect_files_dedups_and_filters() {
        let dir = TempDir::new().unwrap();
        write_lines(&dir.path().join("a.txt"), 1);
        write_lines(&dir.path().join("a_tmp.txt"), 1);

        let patterns: Vec<String> = ["a.txt", "*.txt", "a.txt"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let files = collect_files(dir.path(), &patterns, &["tmp".to_string()]);
        assert_eq!(files, vec![dir.path().join("a.txt")]);
    }
}
