//! Invocation options
//!
//! Built once from the raw `-exclude=` / `-max=` values and never mutated.

use crate::core::error::OptionError;

/// Default cap on lines read from each file
pub const DEFAULT_MAX_LINES: usize = 10_000;

/// Options that shape a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationOptions {
    /// Substrings matched against base file names (insertion order, no duplicates)
    pub exclude_patterns: Vec<String>,

    /// Maximum number of lines taken from the start of each file
    pub max_lines: usize,
}

impl Default for InvocationOptions {
    fn default() -> Self {
        Self {
            exclude_patterns: Vec::new(),
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

impl InvocationOptions {
    /// Build options from raw option values.
    ///
    /// `exclude` holds every `-exclude=` value in argument order, `max` every
    /// `-max=` value; only the first `-max=` is honoured. An unusable `-max=`
    /// value falls back to [`DEFAULT_MAX_LINES`] and is returned as a warning.
    pub fn from_raw(exclude: &[String], max: &[String]) -> (Self, Option<OptionError>) {
        let exclude_patterns = parse_exclude_terms(exclude);

        let (max_lines, warning) = match max.first() {
            None => (DEFAULT_MAX_LINES, None),
            Some(raw) => match parse_max_lines(raw) {
                Ok(n) => (n, None),
                Err(e) => (DEFAULT_MAX_LINES, Some(e)),
            },
        };

        (
            Self {
                exclude_patterns,
                max_lines,
            },
            warning,
        )
    }
}

/// Split comma-separated exclude values into distinct, non-empty terms
pub fn parse_exclude_terms(values: &[String]) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for term in values.iter().flat_map(|v| v.split(',')) {
        if !term.is_empty() && !terms.iter().any(|t| t == term) {
            terms.push(term.to_string());
        }
    }
    terms
}

/// Parse a `-max=` value. Zero and non-numeric values are rejected.
pub fn parse_max_lines(raw: &str) -> Result<usize, OptionError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(OptionError::InvalidMax {
            value: raw.to_string(),
            default: DEFAULT_MAX_LINES,
        }),
    }
}
