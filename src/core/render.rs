//! Document rendering
//!
//! Accumulates one banner-wrapped block per file:
//!
//! ```text
//! ===== File: <path> =====
//! <line>
//! ===== End of <path> =====
//!
//! ```

use std::path::Path;

/// The combined text blob written to the output file
#[derive(Debug, Clone, Default)]
pub struct Document {
    buffer: String,
    files: usize,
    lines: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one file block
    pub fn push_file<I>(&mut self, path: &Path, lines: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.buffer.push_str(&start_banner(path));
        self.buffer.push('\n');
        for line in lines {
            self.buffer.push_str(line.as_ref());
            self.buffer.push('\n');
            self.lines += 1;
        }
        self.buffer.push_str(&end_banner(path));
        self.buffer.push_str("\n\n");

        self.files += 1;
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Number of file blocks appended
    pub fn file_count(&self) -> usize {
        self.files
    }

    /// Number of content lines appended across all blocks
    pub fn line_count(&self) -> usize {
        self.lines
    }
}

pub fn start_banner(path: &Path) -> String {
    format!("===== File: {} =====", path.display())
}

pub fn end_banner(path: &Path) -> String {
    format!("===== End of {} =====", path.display())
}
