//! Bounded line reading
//!
//! Reads at most N lines from the start of a file. A line ends at `\n`,
//! `\r\n` or a lone `\r`. A leading UTF-8 BOM is removed and invalid UTF-8
//! is replaced rather than rejected.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::core::error::ReadError;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Lines taken from the head of a file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadLines {
    /// Lines without their terminators
    pub lines: Vec<String>,

    /// The file had more lines than were read
    pub truncated: bool,

    /// At least one line needed lossy UTF-8 conversion
    pub lossy: bool,
}

impl HeadLines {
    /// Mark as truncated
    pub fn with_truncated(mut self) -> Self {
        self.truncated = true;
        self
    }

    /// Mark as lossy conversion
    pub fn with_lossy(mut self) -> Self {
        self.lossy = true;
        self
    }
}

/// Read up to `max_lines` lines from the start of `path`.
///
/// The whole head is read before returning, so an error part-way through
/// yields no lines at all.
pub fn read_head_lines(path: &Path, max_lines: usize) -> Result<HeadLines, ReadError> {
    let file = File::open(path).map_err(|e| ReadError::from_io(path, e))?;
    let reader = BufReader::new(file);
    read_head_from(reader, max_lines).map_err(|e| ReadError::from_io(path, e))
}

fn read_head_from<R: BufRead>(mut reader: R, max_lines: usize) -> io::Result<HeadLines> {
    let mut head = HeadLines::default();
    let mut buffer = Vec::new();

    while head.lines.len() < max_lines {
        buffer.clear();
        if !read_line_bytes(&mut reader, &mut buffer)? {
            return Ok(head);
        }

        let mut bytes = buffer.as_slice();
        if head.lines.is_empty() {
            bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        }

        match std::str::from_utf8(bytes) {
            Ok(line) => head.lines.push(line.to_string()),
            Err(_) => {
                head.lines.push(String::from_utf8_lossy(bytes).into_owned());
                head = head.with_lossy();
            }
        }
    }

    if !reader.fill_buf()?.is_empty() {
        head = head.with_truncated();
    }

    Ok(head)
}

/// Append the next line to `line` without its terminator. Returns `false` at
/// end of input.
fn read_line_bytes<R: BufRead>(reader: &mut R, line: &mut Vec<u8>) -> io::Result<bool> {
    let mut read_any = false;
    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            return Ok(read_any);
        }
        read_any = true;

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                let terminator = available[end];
                line.extend_from_slice(&available[..end]);
                reader.consume(end + 1);
                // \r\n may straddle two buffer fills
                if terminator == b'\r' && reader.fill_buf()?.first() == Some(&b'\n') {
                    reader.consume(1);
                }
                return Ok(true);
            }
            None => {
                let len = available.len();
                line.extend_from_slice(available);
                reader.consume(len);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn read(content: &[u8], max: usize) -> HeadLines {
        read_head_from(Cursor::new(content.to_vec()), max).unwrap()
    }

    #[test]
    fn test_reads_all_lines_under_cap() {
        let head = read(b"one\ntwo\nthree\n", 10);
        assert_eq!(head.lines, vec!["one", "two", "three"]);
        assert!(!head.truncated);
        assert!(!head.lossy);
    }

    #[test]
    fn test_cap_limits_lines() {
        let head = read(b"1\n2\n3\n4\n5\n", 2);
        assert_eq!(head.lines, vec!["1", "2"]);
        assert!(head.truncated);
    }

    #[test]
    fn test_cap_equal_to_line_count_is_not_truncated() {
        let head = read(b"1\n2\n3\n", 3);
        assert_eq!(head.lines.len(), 3);
        assert!(!head.truncated);
    }

    #[test]
    fn test_last_line_without_newline() {
        let head = read(b"a\nb", 10);
        assert_eq!(head.lines, vec!["a", "b"]);
    }

    #[test]
    fn test_crlf_stripped() {
        let head = read(b"a\r\nb\r\n", 10);
        assert_eq!(head.lines, vec!["a", "b"]);
    }

    #[test]
    fn test_lone_cr_ends_a_line() {
        let head = read(b"l1\rl2\rl3\r", 2);
        assert_eq!(head.lines, vec!["l1", "l2"]);
        assert!(head.truncated);
    }

    #[test]
    fn test_mixed_terminators() {
        let head = read(b"a\rb\r\nc\nd\r\re", 10);
        assert_eq!(head.lines, vec!["a", "b", "c", "d", "", "e"]);
        assert!(!head.truncated);
    }

    #[test]
    fn test_crlf_split_across_buffer_fills() {
        let reader = BufReader::with_capacity(2, Cursor::new(b"a\r\nb\r\n".to_vec()));
        let head = read_head_from(reader, 10).unwrap();
        assert_eq!(head.lines, vec!["a", "b"]);
    }

    #[test]
    fn test_trailing_crlf_is_not_truncation() {
        let head = read(b"a\r\n", 1);
        assert_eq!(head.lines, vec!["a"]);
        assert!(!head.truncated);
    }

    #[test]
    fn test_blank_lines_kept() {
        let head = read(b"a\n\n\nb\n", 10);
        assert_eq!(head.lines, vec!["a", "", "", "b"]);
    }

    #[test]
    fn test_empty_input() {
        let head = read(b"", 10);
        assert!(head.lines.is_empty());
        assert!(!head.truncated);
    }

    #[test]
    fn test_bom_removed_from_first_line_only() {
        let head = read(b"\xEF\xBB\xBFfirst\nsecond\n", 10);
        assert_eq!(head.lines, vec!["first", "second"]);
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let head = read(&[0xFF, 0xFE, b'h', b'i', b'\n'], 10);
        assert!(head.lossy);
        assert_eq!(head.lines.len(), 1);
        assert!(head.lines[0].ends_with("hi"));
    }

    #[test]
    fn test_read_file_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "x\ny\nz\n").unwrap();

        let head = read_head_lines(&path, 2).unwrap();
        assert_eq!(head.lines, vec!["x", "y"]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_head_lines(&dir.path().join("missing.txt"), 10).unwrap_err();
        assert_eq!(err.code(), "FILE_NOT_FOUND");
    }

    #[cfg(unix)]
    #[test]
    fn test_read_directory_fails_as_other() {
        let dir = TempDir::new().unwrap();
        let err = read_head_lines(dir.path(), 10).unwrap_err();
        assert_eq!(err.code(), "READ_FAILED");
    }
}
